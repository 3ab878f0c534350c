// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 ReifyDB

use crate::{EncodeError, Result};

pub const NULL_MARKER: u8 = 0xFB;

const U16_PREFIX: u8 = 0xFC;
const U24_PREFIX: u8 = 0xFD;
const U64_PREFIX: u8 = 0xFE;

/// Bytes taken by the length prefix of a `len` byte value.
#[inline]
pub(crate) fn prefix_len(len: usize) -> usize {
	match len {
		0..=250 => 1,
		251..=0xFFFF => 3,
		0x1_0000..=0xFF_FFFF => 4,
		_ => 9,
	}
}

pub(crate) fn write_length(buf: &mut Vec<u8>, len: usize) {
	match len {
		0..=250 => buf.push(len as u8),
		251..=0xFFFF => {
			buf.push(U16_PREFIX);
			buf.extend_from_slice(&(len as u16).to_le_bytes());
		}
		0x1_0000..=0xFF_FFFF => {
			buf.push(U24_PREFIX);
			buf.extend_from_slice(&(len as u32).to_le_bytes()[..3]);
		}
		_ => {
			buf.push(U64_PREFIX);
			buf.extend_from_slice(&(len as u64).to_le_bytes());
		}
	}
}

/// Reads the header at `offset`. Returns `None` for a NULL marker, the
/// value length and header size otherwise.
pub(crate) fn read_length(buf: &[u8], offset: usize) -> Result<Option<(usize, usize)>> {
	let prefix = *buf.get(offset).ok_or(EncodeError::Truncated {
		offset,
	})?;

	let width = match prefix {
		0..=250 => return Ok(Some((prefix as usize, 1))),
		NULL_MARKER => return Ok(None),
		U16_PREFIX => 2,
		U24_PREFIX => 3,
		U64_PREFIX => 8,
		_ => {
			return Err(EncodeError::InvalidLength {
				prefix,
				offset,
			});
		}
	};

	let bytes = buf.get(offset + 1..offset + 1 + width).ok_or(EncodeError::Truncated {
		offset: buf.len(),
	})?;
	let mut le = [0u8; 8];
	le[..width].copy_from_slice(bytes);
	let len = usize::try_from(u64::from_le_bytes(le)).map_err(|_| EncodeError::InvalidLength {
		prefix,
		offset,
	})?;

	Ok(Some((len, 1 + width)))
}
