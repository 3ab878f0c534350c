// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 ReifyDB

use std::ops::Deref;

use tessera_type::{DecimalField, DecimalNative, Error, Field, FieldType, Result};

use crate::selection::{check_index, check_range, filter_vec, permute_vec, replicate_vec};

/// A column of fixed point decimals sharing one scale.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ColumnDecimal<T> {
	data: Vec<T>,
	scale: u32,
}

impl<T> Deref for ColumnDecimal<T> {
	type Target = [T];

	fn deref(&self) -> &Self::Target {
		&self.data
	}
}

impl<T: DecimalNative> ColumnDecimal<T>
where
	DecimalField<T>: FieldType,
{
	pub fn new(scale: u32) -> Self {
		Self {
			data: Vec::new(),
			scale,
		}
	}

	pub fn from_vec(data: Vec<T>, scale: u32) -> Self {
		Self {
			data,
			scale,
		}
	}

	pub fn scale(&self) -> u32 {
		self.scale
	}

	pub fn data(&self) -> &[T] {
		&self.data
	}

	pub fn push(&mut self, value: T) {
		self.data.push(value);
	}

	pub fn insert_default(&mut self) {
		self.data.push(T::default());
	}

	/// Appends the raw value of a decimal field of the matching width. The
	/// field's scale is not checked against the column's.
	pub fn insert_field(&mut self, field: &Field) -> Result<()> {
		let decimal = field.safe_get::<DecimalField<T>>()?;
		self.data.push(decimal.value());
		Ok(())
	}

	pub fn field_at(&self, index: usize) -> Option<Field> {
		self.data.get(index).map(|&v| T::into_field(DecimalField::new(v, self.scale)))
	}

	pub fn insert_from(&mut self, src: &Self, index: usize) -> Result<()> {
		check_index(index, src.len())?;
		self.data.push(src.data[index]);
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
		filter_vec(&self.data, mask, size_hint).map(|data| Self::from_vec(data, self.scale))
	}

	pub fn permute(&self, perm: &[usize], limit: usize) -> Result<Self> {
		permute_vec(&self.data, perm, limit).map(|data| Self::from_vec(data, self.scale))
	}

	pub fn replicate(&self, counts: &[usize]) -> Result<Self> {
		replicate_vec(&self.data, counts).map(|data| Self::from_vec(data, self.scale))
	}

	pub fn byte_size(&self) -> usize {
		self.data.len() * size_of::<T>()
	}
}
