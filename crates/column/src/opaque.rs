// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 ReifyDB

use tessera_type::{AggregateFunctionStateData, Error, Field, Result};

use crate::selection::{check_index, check_range, filter_vec, permute_vec, replicate_vec};

/// A column of serialized objects the engine cannot look into, such as
/// HyperLogLog sketches or bitmaps, tagged with the function that owns them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ColumnOpaque {
	function: String,
	data: Vec<Vec<u8>>,
}

impl ColumnOpaque {
	pub fn new(function: impl Into<String>) -> Self {
		Self {
			function: function.into(),
			data: Vec::new(),
		}
	}

	pub fn from_vec(function: impl Into<String>, data: Vec<Vec<u8>>) -> Self {
		Self {
			function: function.into(),
			data,
		}
	}

	pub fn function(&self) -> &str {
		&self.function
	}

	pub fn len(&self) -> usize {
		self.data.len()
	}

	pub fn is_empty(&self) -> bool {
		self.data.is_empty()
	}

	pub fn get(&self, index: usize) -> Option<&[u8]> {
		self.data.get(index).map(Vec::as_slice)
	}

	pub fn push(&mut self, value: impl Into<Vec<u8>>) {
		self.data.push(value.into());
	}

	pub fn insert_default(&mut self) {
		self.data.push(Vec::new());
	}

	pub fn field_at(&self, index: usize) -> Option<Field> {
		self.data
			.get(index)
			.map(|data| Field::AggregateFunctionState(AggregateFunctionStateData::new(self.function.as_str(), data.as_slice())))
	}

	pub fn insert_from(&mut self, src: &Self, index: usize) -> Result<()> {
		check_index(index, src.len())?;
		self.data.push(src.data[index].clone());
		Ok(())
	}

	pub fn insert_range_from(&mut self, src: &Self, start: usize, length: usize) -> Result<()> {
		check_range(start, length, src.len())?;
		self.data.extend_from_slice(&src.data[start..start + length]);
		Ok(())
	}

	pub fn pop_back(&mut self, count: usize) -> Result<()> {
		if count > self.data.len() {
			return Err(Error::PopOutOfBounds {
				count,
				size: self.data.len(),
			});
		}
		self.data.truncate(self.data.len() - count);
		Ok(())
	}

	pub fn filter(&self, mask: &[bool], size_hint: usize) -> Result<Self> {
		filter_vec(&self.data, mask, size_hint).map(|data| Self::from_vec(self.function.as_str(), data))
	}

	pub fn permute(&self, perm: &[usize], limit: usize) -> Result<Self> {
		permute_vec(&self.data, perm, limit).map(|data| Self::from_vec(self.function.as_str(), data))
	}

	pub fn replicate(&self, counts: &[usize]) -> Result<Self> {
		replicate_vec(&self.data, counts).map(|data| Self::from_vec(self.function.as_str(), data))
	}

	pub fn byte_size(&self) -> usize {
		self.data.iter().map(Vec::len).sum()
	}
}
