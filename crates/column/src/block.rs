// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 ReifyDB

use tessera_type::{DataType, Error, Result};
use tracing::warn;

use crate::Column;

/// A column together with its declared type and name.
#[derive(Clone, Debug, PartialEq)]
pub struct ColumnWithTypeAndName {
	pub name: String,
	pub data_type: DataType,
	pub column: Column,
}

impl ColumnWithTypeAndName {
	pub fn new(name: impl Into<String>, data_type: impl Into<DataType>, column: impl Into<Column>) -> Self {
		Self {
			name: name.into(),
			data_type: data_type.into(),
			column: column.into(),
		}
	}
}

/// An ordered set of equally long columns.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Block {
	columns: Vec<ColumnWithTypeAndName>,
}

impl Block {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn from_columns(columns: Vec<ColumnWithTypeAndName>) -> Result<Self> {
		let mut block = Self {
			columns: Vec::with_capacity(columns.len()),
		};
		for column in columns {
			block.insert(column)?;
		}
		Ok(block)
	}

	/// Number of rows, zero for a block without columns.
	pub fn rows(&self) -> usize {
		self.columns.first().map_or(0, |c| c.column.len())
	}

	/// Number of columns.
	pub fn columns(&self) -> usize {
		self.columns.len()
	}

	pub fn is_empty(&self) -> bool {
		self.rows() == 0
	}

	/// Appends a column and returns its position.
	pub fn insert(&mut self, column: ColumnWithTypeAndName) -> Result<usize> {
		if !self.columns.is_empty() && column.column.len() != self.rows() {
			warn!(
				name = %column.name,
				rows = column.column.len(),
				expected = self.rows(),
				"rejecting column with mismatched row count"
			);
			return Err(Error::RowCountMismatch {
				name: column.name,
				expected: self.rows(),
				actual: column.column.len(),
			});
		}
		self.columns.push(column);
		Ok(self.columns.len() - 1)
	}

	pub fn get_by_position(&self, position: usize) -> Option<&ColumnWithTypeAndName> {
		self.columns.get(position)
	}

	pub fn get_by_name(&self, name: &str) -> Option<&ColumnWithTypeAndName> {
		self.columns.iter().find(|c| c.name == name)
	}

	pub fn iter(&self) -> impl Iterator<Item = &ColumnWithTypeAndName> + '_ {
		self.columns.iter()
	}

	/// Applies the same row selection to every column.
	pub fn filter(&self, mask: &[bool], size_hint: usize) -> Result<Self> {
		let columns = self
			.columns
			.iter()
			.map(|c| {
				Ok(ColumnWithTypeAndName {
					name: c.name.clone(),
					data_type: c.data_type,
					column: c.column.filter(mask, size_hint)?,
				})
			})
			.collect::<Result<Vec<_>>>()?;
		Ok(Self {
			columns,
		})
	}
}

#[cfg(test)]
pub mod tests {
	use super::*;
	use tessera_type::{Field, PrimitiveType};

	use crate::{ColumnString, ColumnVector};

	fn ints(values: Vec<i32>) -> ColumnWithTypeAndName {
		ColumnWithTypeAndName::new("id", PrimitiveType::Int, ColumnVector::from_vec(values))
	}

	#[test]
	fn test_empty_block() {
		let block = Block::new();
		assert_eq!(block.rows(), 0);
		assert_eq!(block.columns(), 0);
		assert!(block.get_by_position(0).is_none());
	}

	#[test]
	fn test_insert_returns_position() {
		let mut block = Block::new();
		assert_eq!(block.insert(ints(vec![1, 2])).unwrap(), 0);

		let names: ColumnString = ["a", "b"].into_iter().collect();
		let position = block.insert(ColumnWithTypeAndName::new("name", PrimitiveType::Varchar, names)).unwrap();
		assert_eq!(position, 1);
		assert_eq!(block.rows(), 2);
		assert_eq!(block.get_by_name("name").unwrap().data_type.primitive, PrimitiveType::Varchar);
	}

	#[test]
	fn test_insert_rejects_row_count_mismatch() {
		let mut block = Block::from_columns(vec![ints(vec![1, 2])]).unwrap();
		assert_eq!(
			block.insert(ints(vec![1])),
			Err(Error::RowCountMismatch {
				name: "id".to_string(),
				expected: 2,
				actual: 1
			})
		);
		assert_eq!(block.columns(), 1);
	}

	#[test]
	fn test_filter() {
		let block = Block::from_columns(vec![ints(vec![1, 2, 3])]).unwrap();
		let filtered = block.filter(&[true, false, true], 0).unwrap();
		assert_eq!(filtered.rows(), 2);
		assert_eq!(filtered.get_by_position(0).unwrap().column.field_at(1), Some(Field::Int64(3)));
	}
}
