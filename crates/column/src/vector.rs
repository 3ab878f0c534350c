// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 ReifyDB

use std::ops::Deref;

use tessera_type::{Error, Field, Result};

use crate::selection::{check_index, check_range, filter_vec, permute_vec, replicate_vec};

/// A column of fixed-width values stored contiguously.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ColumnVector<T> {
	data: Vec<T>,
}

impl<T> Deref for ColumnVector<T> {
	type Target = [T];

	fn deref(&self) -> &Self::Target {
		&self.data
	}
}

impl<T: Clone + Default> ColumnVector<T> {
	pub fn new() -> Self {
		Self {
			data: Vec::new(),
		}
	}

	pub fn with_capacity(capacity: usize) -> Self {
		Self {
			data: Vec::with_capacity(capacity),
		}
	}

	pub fn from_vec(data: Vec<T>) -> Self {
		Self {
			data,
		}
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
		filter_vec(&self.data, mask, size_hint).map(Self::from_vec)
	}

	pub fn permute(&self, perm: &[usize], limit: usize) -> Result<Self> {
		permute_vec(&self.data, perm, limit).map(Self::from_vec)
	}

	pub fn replicate(&self, counts: &[usize]) -> Result<Self> {
		replicate_vec(&self.data, counts).map(Self::from_vec)
	}

	pub fn byte_size(&self) -> usize {
		self.data.len() * size_of::<T>()
	}
}

impl<T: Clone + Default + Into<Field>> ColumnVector<T> {
	pub fn field_at(&self, index: usize) -> Option<Field> {
		self.data.get(index).cloned().map(Into::into)
	}
}

impl<T: Clone + Default> From<Vec<T>> for ColumnVector<T> {
	fn from(data: Vec<T>) -> Self {
		Self::from_vec(data)
	}
}

impl<T: Clone + Default> FromIterator<T> for ColumnVector<T> {
	fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
		Self::from_vec(iter.into_iter().collect())
	}
}

#[cfg(test)]
pub mod tests {
	use super::*;

	#[test]
	fn test_from_vec() {
		let column = ColumnVector::from_vec(vec![1i32, 2, 3]);
		assert_eq!(column.len(), 3);
		assert_eq!(column.get(1), Some(&2));
		assert_eq!(column.field_at(2), Some(Field::Int64(3)));
		assert_eq!(column.field_at(3), None);
	}

	#[test]
	fn test_insert_range_from() {
		let src = ColumnVector::from_vec(vec![1i64, 2, 3, 4]);
		let mut dst = ColumnVector::from_vec(vec![0i64]);

		dst.insert_range_from(&src, 2, 2).unwrap();
		assert_eq!(dst.data(), &[0, 3, 4]);

		assert!(dst.insert_range_from(&src, 3, 2).is_err());
		assert_eq!(dst.len(), 3);
	}

	#[test]
	fn test_filter_permute_replicate() {
		let column = ColumnVector::from_vec(vec![10i16, 20, 30]);

		assert_eq!(column.filter(&[false, true, true], 0).unwrap().data(), &[20, 30]);
		assert_eq!(column.permute(&[2, 1, 0], 0).unwrap().data(), &[30, 20, 10]);
		assert_eq!(column.permute(&[2, 1, 0], 1).unwrap().data(), &[30]);
		assert_eq!(column.replicate(&[0, 2, 1]).unwrap().data(), &[20, 20, 30]);
	}

	#[test]
	fn test_pop_back() {
		let mut column: ColumnVector<f64> = vec![1.0, 2.0].into();
		assert!(column.pop_back(3).is_err());
		column.pop_back(1).unwrap();
		assert_eq!(column.data(), &[1.0]);
	}

	#[test]
	fn test_insert_default() {
		let mut column = ColumnVector::<i8>::new();
		column.insert_default();
		column.push(-1);
		assert_eq!(column.data(), &[0, -1]);
		assert_eq!(column.byte_size(), 2);
	}
}
