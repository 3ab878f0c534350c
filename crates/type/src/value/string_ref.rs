// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 ReifyDB

/// A borrowed string value as produced by expression evaluation.
///
/// `data` is `None` when the producer handed back no backing storage. Such a
/// value still carries a length: a zero length means the empty string, any
/// other length means the value is missing and is treated as NULL.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct StringRef<'a> {
	data: Option<&'a [u8]>,
	len: usize,
}

impl<'a> StringRef<'a> {
	pub fn new(data: &'a [u8]) -> Self {
		Self {
			data: Some(data),
			len: data.len(),
		}
	}

	/// A value without backing storage.
	pub fn detached(len: usize) -> Self {
		Self {
			data: None,
			len,
		}
	}

	pub fn data(&self) -> Option<&'a [u8]> {
		self.data
	}

	pub fn len(&self) -> usize {
		self.len
	}

	pub fn is_empty(&self) -> bool {
		self.len == 0
	}
}

impl<'a> From<&'a [u8]> for StringRef<'a> {
	fn from(data: &'a [u8]) -> Self {
		Self::new(data)
	}
}

impl<'a> From<&'a str> for StringRef<'a> {
	fn from(data: &'a str) -> Self {
		Self::new(data.as_bytes())
	}
}
