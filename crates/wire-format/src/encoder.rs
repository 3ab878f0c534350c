// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 ReifyDB

use crate::Result;

/// Serializes one result row, value by value, into a byte buffer.
///
/// Implementations receive one call per output column in column order. A
/// failed push leaves the buffer as it was before the call.
pub trait RowEncoder {
	/// Clears the buffer for the next row, keeping its allocation.
	fn reset(&mut self);

	fn push_null(&mut self) -> Result<()>;

	fn push_tinyint(&mut self, value: i8) -> Result<()>;

	fn push_smallint(&mut self, value: i16) -> Result<()>;

	fn push_int(&mut self, value: i32) -> Result<()>;

	fn push_bigint(&mut self, value: i64) -> Result<()>;

	fn push_float(&mut self, value: f32) -> Result<()>;

	fn push_double(&mut self, value: f64) -> Result<()>;

	/// Raw bytes, not required to be valid UTF-8.
	fn push_string(&mut self, value: &[u8]) -> Result<()>;

	/// The encoded row so far.
	fn buf(&self) -> &[u8];

	fn len(&self) -> usize {
		self.buf().len()
	}

	fn is_empty(&self) -> bool {
		self.buf().is_empty()
	}
}
