// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 ReifyDB

use std::fmt::{self, Write};

use tracing::trace;

use super::lenenc::{NULL_MARKER, prefix_len, write_length};
use crate::{EncodeError, Result, RowEncoder};

/// Default upper bound for one encoded row.
pub const DEFAULT_MAX_ROW_BYTES: usize = 16 * 1024 * 1024;

/// Row encoder for the MySQL text protocol.
#[derive(Debug, Clone)]
pub struct MysqlRowBuffer {
	buf: Vec<u8>,
	scratch: String,
	max_row_bytes: usize,
}

impl Default for MysqlRowBuffer {
	fn default() -> Self {
		Self::new()
	}
}

impl MysqlRowBuffer {
	pub fn new() -> Self {
		Self::with_max_row_bytes(DEFAULT_MAX_ROW_BYTES)
	}

	pub fn with_max_row_bytes(max_row_bytes: usize) -> Self {
		Self {
			buf: Vec::new(),
			scratch: String::new(),
			max_row_bytes,
		}
	}

	pub fn max_row_bytes(&self) -> usize {
		self.max_row_bytes
	}

	pub fn into_bytes(self) -> Vec<u8> {
		self.buf
	}

	fn ensure_room(&self, additional: usize) -> Result<()> {
		let size = self.buf.len().saturating_add(additional);
		if size > self.max_row_bytes {
			trace!(size, limit = self.max_row_bytes, "row exceeds limit");
			return Err(EncodeError::RowTooLarge {
				size,
				limit: self.max_row_bytes,
			});
		}
		Ok(())
	}

	fn push_bytes(&mut self, value: &[u8]) -> Result<()> {
		self.ensure_room(prefix_len(value.len()).saturating_add(value.len()))?;
		write_length(&mut self.buf, value.len());
		self.buf.extend_from_slice(value);
		Ok(())
	}

	fn push_display(&mut self, value: impl fmt::Display) -> Result<()> {
		let mut scratch = std::mem::take(&mut self.scratch);
		scratch.clear();
		let result = match write!(scratch, "{value}") {
			Ok(()) => self.push_bytes(scratch.as_bytes()),
			Err(_) => Err(EncodeError::Format),
		};
		self.scratch = scratch;
		result
	}
}

/// Shortest round-trip text, switching to exponent notation for very large
/// or very small magnitudes.
struct FloatText<F>(F);

macro_rules! float_text {
	($t:ty, $large:expr, $small:expr) => {
		impl fmt::Display for FloatText<$t> {
			fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
				let abs = self.0.abs();
				if abs.is_finite() && (abs >= $large || (abs != 0.0 && abs < $small)) {
					write!(f, "{:e}", self.0)
				} else {
					write!(f, "{}", self.0)
				}
			}
		}
	};
}

float_text!(f32, 1e16, 1e-5);
float_text!(f64, 1e16, 1e-5);

impl RowEncoder for MysqlRowBuffer {
	fn reset(&mut self) {
		self.buf.clear();
	}

	fn push_null(&mut self) -> Result<()> {
		self.ensure_room(1)?;
		self.buf.push(NULL_MARKER);
		Ok(())
	}

	fn push_tinyint(&mut self, value: i8) -> Result<()> {
		self.push_display(value)
	}

	fn push_smallint(&mut self, value: i16) -> Result<()> {
		self.push_display(value)
	}

	fn push_int(&mut self, value: i32) -> Result<()> {
		self.push_display(value)
	}

	fn push_bigint(&mut self, value: i64) -> Result<()> {
		self.push_display(value)
	}

	fn push_float(&mut self, value: f32) -> Result<()> {
		self.push_display(FloatText(value))
	}

	fn push_double(&mut self, value: f64) -> Result<()> {
		self.push_display(FloatText(value))
	}

	fn push_string(&mut self, value: &[u8]) -> Result<()> {
		self.push_bytes(value)
	}

	fn buf(&self) -> &[u8] {
		&self.buf
	}
}

#[cfg(test)]
pub mod tests {
	use super::*;

	#[test]
	fn test_null_and_integers() {
		let mut row = MysqlRowBuffer::new();
		row.push_null().unwrap();
		row.push_tinyint(-8).unwrap();
		row.push_int(42).unwrap();
		assert_eq!(row.buf(), b"\xFB\x02-8\x0242");
	}

	#[test]
	fn test_string_is_length_prefixed() {
		let mut row = MysqlRowBuffer::new();
		row.push_string(b"").unwrap();
		row.push_string(b"abc").unwrap();
		assert_eq!(row.buf(), b"\x00\x03abc");
	}

	#[test]
	fn test_long_string_uses_wide_prefix() {
		let mut row = MysqlRowBuffer::new();
		let value = vec![b'x'; 300];
		row.push_string(&value).unwrap();
		assert_eq!(&row.buf()[..3], &[0xFC, 0x2C, 0x01]);
		assert_eq!(row.len(), 303);
	}

	#[test]
	fn test_float_text() {
		let mut row = MysqlRowBuffer::new();
		row.push_double(1.5).unwrap();
		row.push_float(0.25).unwrap();
		row.push_double(1e20).unwrap();
		row.push_double(0.0).unwrap();
		assert_eq!(row.buf(), b"\x031.5\x040.25\x041e20\x010");
	}

	#[test]
	fn test_reset_keeps_limit() {
		let mut row = MysqlRowBuffer::with_max_row_bytes(8);
		row.push_string(b"abc").unwrap();
		row.reset();
		assert!(row.is_empty());
		assert_eq!(row.max_row_bytes(), 8);
	}

	#[test]
	fn test_row_too_large_leaves_buffer_unchanged() {
		let mut row = MysqlRowBuffer::with_max_row_bytes(6);
		row.push_string(b"abc").unwrap();

		assert_eq!(
			row.push_string(b"abc"),
			Err(EncodeError::RowTooLarge {
				size: 8,
				limit: 6
			})
		);
		assert_eq!(row.buf(), b"\x03abc");

		row.push_null().unwrap();
		row.push_null().unwrap();
		assert!(row.push_null().is_err());
		assert_eq!(row.len(), 6);
	}

	#[test]
	fn test_into_bytes() {
		let mut row = MysqlRowBuffer::new();
		row.push_bigint(i64::MIN).unwrap();
		let bytes = row.into_bytes();
		assert_eq!(bytes[0] as usize, bytes.len() - 1);
		assert_eq!(&bytes[1..], i64::MIN.to_string().as_bytes());
	}
}
