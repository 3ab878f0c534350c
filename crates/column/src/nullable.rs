// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 ReifyDB

use tessera_type::{Error, Field, Result};

use crate::{
	Column,
	selection::{check_filter, check_index, check_permutation, check_range, check_replicate},
};

/// A nested column paired with a null map. The nested column keeps a
/// default placeholder at every null row so both stay the same length.
#[derive(Clone, Debug, PartialEq)]
pub struct ColumnNullable {
	nested: Box<Column>,
	null_map: Vec<bool>,
}

impl ColumnNullable {
	pub fn new(nested: Column, null_map: Vec<bool>) -> Result<Self> {
		if nested.len() != null_map.len() {
			return Err(Error::NullMapSizeMismatch {
				null_map: null_map.len(),
				nested: nested.len(),
			});
		}
		Ok(Self {
			nested: Box::new(nested),
			null_map,
		})
	}

	/// Wraps `nested` with every row marked as present.
	pub fn from_column(nested: Column) -> Self {
		let null_map = vec![false; nested.len()];
		Self {
			nested: Box::new(nested),
			null_map,
		}
	}

	pub fn nested(&self) -> &Column {
		&self.nested
	}

	pub fn null_map(&self) -> &[bool] {
		&self.null_map
	}

	pub fn len(&self) -> usize {
		self.null_map.len()
	}

	pub fn is_empty(&self) -> bool {
		self.null_map.is_empty()
	}

	/// # Panics
	///
	/// Panics if `index >= len()`.
	pub fn is_null_at(&self, index: usize) -> bool {
		self.null_map[index]
	}

	pub fn null_count(&self) -> usize {
		self.null_map.iter().filter(|&&null| null).count()
	}

	pub fn insert_null(&mut self) {
		self.nested.insert_default();
		self.null_map.push(true);
	}

	pub fn insert_default(&mut self) {
		self.insert_null();
	}

	pub fn field_at(&self, index: usize) -> Option<Field> {
		match self.null_map.get(index)? {
			true => Some(Field::Null),
			false => self.nested.field_at(index),
		}
	}

	pub fn insert_from(&mut self, src: &Self, index: usize) -> Result<()> {
		check_index(index, src.len())?;
		self.nested.insert_range_from(&src.nested, index, 1)?;
		self.null_map.push(src.null_map[index]);
		Ok(())
	}

	pub fn insert_range_from(&mut self, src: &Self, start: usize, length: usize) -> Result<()> {
		check_range(start, length, src.len())?;
		self.nested.insert_range_from(&src.nested, start, length)?;
		self.null_map.extend_from_slice(&src.null_map[start..start + length]);
		Ok(())
	}

	pub fn pop_back(&mut self, count: usize) -> Result<()> {
		self.nested.pop_back(count)?;
		self.null_map.truncate(self.null_map.len() - count);
		Ok(())
	}

	pub fn filter(&self, mask: &[bool], size_hint: usize) -> Result<Self> {
		check_filter(mask, self.len())?;
		let nested = self.nested.filter(mask, size_hint)?;
		let null_map =
			self.null_map.iter().zip(mask).filter(|(_, keep)| **keep).map(|(null, _)| *null).collect();
		Ok(Self {
			nested: Box::new(nested),
			null_map,
		})
	}

	pub fn permute(&self, perm: &[usize], limit: usize) -> Result<Self> {
		let limit = check_permutation(perm, limit, self.len())?;
		let nested = self.nested.permute(perm, limit)?;
		let null_map = perm[..limit].iter().map(|&i| self.null_map[i]).collect();
		Ok(Self {
			nested: Box::new(nested),
			null_map,
		})
	}

	pub fn replicate(&self, counts: &[usize]) -> Result<Self> {
		check_replicate(counts, self.len())?;
		let nested = self.nested.replicate(counts)?;
		let null_map = self
			.null_map
			.iter()
			.zip(counts)
			.flat_map(|(&null, &count)| std::iter::repeat_n(null, count))
			.collect();
		Ok(Self {
			nested: Box::new(nested),
			null_map,
		})
	}

	pub fn byte_size(&self) -> usize {
		self.nested.byte_size() + self.null_map.len()
	}
}

#[cfg(test)]
pub mod tests {
	use super::*;
	use crate::{ColumnString, ColumnVector};

	fn nullable_ints() -> ColumnNullable {
		let nested = Column::Int32(ColumnVector::from_vec(vec![1, 0, 3]));
		ColumnNullable::new(nested, vec![false, true, false]).unwrap()
	}

	#[test]
	fn test_new_checks_lengths() {
		let nested = Column::Int32(ColumnVector::from_vec(vec![1, 2]));
		assert_eq!(
			ColumnNullable::new(nested, vec![false]),
			Err(Error::NullMapSizeMismatch {
				null_map: 1,
				nested: 2
			})
		);
	}

	#[test]
	fn test_field_at() {
		let column = nullable_ints();
		assert_eq!(column.field_at(0), Some(Field::Int64(1)));
		assert_eq!(column.field_at(1), Some(Field::Null));
		assert_eq!(column.field_at(3), None);
		assert_eq!(column.null_count(), 1);
	}

	#[test]
	fn test_insert_null_keeps_lengths_aligned() {
		let mut column = ColumnNullable::from_column(Column::String(ColumnString::new()));
		column.insert_null();
		assert_eq!(column.len(), 1);
		assert_eq!(column.nested().len(), 1);
		assert!(column.is_null_at(0));
	}

	#[test]
	fn test_filter_permute_replicate() {
		let column = nullable_ints();

		let filtered = column.filter(&[false, true, true], 0).unwrap();
		assert_eq!(filtered.null_map(), &[true, false]);
		assert_eq!(filtered.field_at(1), Some(Field::Int64(3)));

		let permuted = column.permute(&[1, 2, 0], 0).unwrap();
		assert_eq!(permuted.null_map(), &[true, false, false]);

		let replicated = column.replicate(&[1, 2, 0]).unwrap();
		assert_eq!(replicated.null_map(), &[false, true, true]);
		assert_eq!(replicated.nested().len(), 3);
	}

	#[test]
	fn test_insert_range_from() {
		let src = nullable_ints();
		let mut dst = ColumnNullable::from_column(Column::Int32(ColumnVector::new()));
		dst.insert_range_from(&src, 1, 2).unwrap();
		assert_eq!(dst.null_map(), &[true, false]);
		assert!(dst.insert_range_from(&src, 2, 2).is_err());
		assert_eq!(dst.len(), 2);
	}
}
