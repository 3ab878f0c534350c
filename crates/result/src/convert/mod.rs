// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 ReifyDB

mod column;
mod row;

pub(crate) use column::convert_block;
pub(crate) use row::convert_rows;
use tessera_type::{PrimitiveType, StringRef};
use tessera_wire_format::RowEncoder;
use tracing::warn;

use crate::{Result, WriterError};

/// Writes a string value. A value without backing storage is the empty
/// string when its length is zero and NULL otherwise.
pub(crate) fn push_string_ref<E: RowEncoder>(encoder: &mut E, value: StringRef<'_>) -> Result<()> {
	match value.data() {
		Some(data) => encoder.push_string(data)?,
		None if value.is_empty() => encoder.push_string(&[])?,
		None => {
			warn!(len = value.len(), "string value without data, writing NULL");
			encoder.push_null()?
		}
	}
	Ok(())
}

pub(crate) fn unsupported(ty: PrimitiveType) -> WriterError {
	warn!(%ty, "output type has no wire representation");
	WriterError::UnsupportedType(ty)
}
