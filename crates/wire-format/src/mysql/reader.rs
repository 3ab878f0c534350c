// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 ReifyDB

use super::lenenc::read_length;
use crate::{EncodeError, Result};

/// Walks the values of one encoded row. Yields `None` for NULL.
#[derive(Debug, Clone)]
pub struct MysqlRowReader<'a> {
	buf: &'a [u8],
	offset: usize,
	failed: bool,
}

impl<'a> MysqlRowReader<'a> {
	pub fn new(buf: &'a [u8]) -> Self {
		Self {
			buf,
			offset: 0,
			failed: false,
		}
	}

	/// Bytes consumed so far.
	pub fn offset(&self) -> usize {
		self.offset
	}

	fn read_value(&mut self) -> Result<Option<&'a [u8]>> {
		match read_length(self.buf, self.offset)? {
			None => {
				self.offset += 1;
				Ok(None)
			}
			Some((len, header)) => {
				let start = self.offset + header;
				let end = start.checked_add(len).filter(|&end| end <= self.buf.len()).ok_or(
					EncodeError::Truncated {
						offset: self.buf.len(),
					},
				)?;
				self.offset = end;
				Ok(Some(&self.buf[start..end]))
			}
		}
	}
}

impl<'a> Iterator for MysqlRowReader<'a> {
	type Item = Result<Option<&'a [u8]>>;

	fn next(&mut self) -> Option<Self::Item> {
		if self.failed || self.offset >= self.buf.len() {
			return None;
		}
		let value = self.read_value();
		self.failed = value.is_err();
		Some(value)
	}
}

/// Decodes a whole row into owned values.
pub fn decode_row(buf: &[u8]) -> Result<Vec<Option<Vec<u8>>>> {
	MysqlRowReader::new(buf).map(|value| value.map(|v| v.map(<[u8]>::to_vec))).collect()
}
