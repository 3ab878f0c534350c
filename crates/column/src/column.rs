// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 ReifyDB

use tessera_type::{DateTimeValue, Error, Field, LegacyDecimal, Result};

use crate::{ColumnDecimal, ColumnNullable, ColumnOpaque, ColumnString, ColumnVector};

/// A column of any storage layout.
#[derive(Clone, Debug, PartialEq)]
pub enum Column {
	Int8(ColumnVector<i8>),
	Int16(ColumnVector<i16>),
	Int32(ColumnVector<i32>),
	Int64(ColumnVector<i64>),
	Int128(ColumnVector<i128>),
	Float32(ColumnVector<f32>),
	/// Also carries `TIME` values as seconds
	Float64(ColumnVector<f64>),
	DateTime(ColumnVector<DateTimeValue>),
	String(ColumnString),
	Decimal(ColumnVector<LegacyDecimal>),
	Decimal128(ColumnDecimal<i128>),
	Opaque(ColumnOpaque),
	Nullable(ColumnNullable),
}

macro_rules! with_column {
	($self:expr, $col:ident => $body:expr) => {
		match $self {
			Column::Int8($col) => $body,
			Column::Int16($col) => $body,
			Column::Int32($col) => $body,
			Column::Int64($col) => $body,
			Column::Int128($col) => $body,
			Column::Float32($col) => $body,
			Column::Float64($col) => $body,
			Column::DateTime($col) => $body,
			Column::String($col) => $body,
			Column::Decimal($col) => $body,
			Column::Decimal128($col) => $body,
			Column::Opaque($col) => $body,
			Column::Nullable($col) => $body,
		}
	};
}

macro_rules! map_column {
	($self:expr, $col:ident => $body:expr) => {
		match $self {
			Column::Int8($col) => Column::Int8($body),
			Column::Int16($col) => Column::Int16($body),
			Column::Int32($col) => Column::Int32($body),
			Column::Int64($col) => Column::Int64($body),
			Column::Int128($col) => Column::Int128($body),
			Column::Float32($col) => Column::Float32($body),
			Column::Float64($col) => Column::Float64($body),
			Column::DateTime($col) => Column::DateTime($body),
			Column::String($col) => Column::String($body),
			Column::Decimal($col) => Column::Decimal($body),
			Column::Decimal128($col) => Column::Decimal128($body),
			Column::Opaque($col) => Column::Opaque($body),
			Column::Nullable($col) => Column::Nullable($body),
		}
	};
}

impl Column {
	pub fn len(&self) -> usize {
		with_column!(self, c => c.len())
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	pub fn kind_name(&self) -> &'static str {
		match self {
			Column::Int8(_) => "Int8",
			Column::Int16(_) => "Int16",
			Column::Int32(_) => "Int32",
			Column::Int64(_) => "Int64",
			Column::Int128(_) => "Int128",
			Column::Float32(_) => "Float32",
			Column::Float64(_) => "Float64",
			Column::DateTime(_) => "DateTime",
			Column::String(_) => "String",
			Column::Decimal(_) => "Decimal",
			Column::Decimal128(_) => "Decimal128",
			Column::Opaque(_) => "Opaque",
			Column::Nullable(_) => "Nullable",
		}
	}

	pub fn is_nullable(&self) -> bool {
		matches!(self, Column::Nullable(_))
	}

	/// The column holding the values: the nested column of a nullable, the
	/// column itself otherwise.
	pub fn nested(&self) -> &Column {
		match self {
			Column::Nullable(c) => c.nested(),
			other => other,
		}
	}

	/// The value of row `index` as a [`Field`], `None` when out of bounds.
	pub fn field_at(&self, index: usize) -> Option<Field> {
		with_column!(self, c => c.field_at(index))
	}

	pub fn insert_default(&mut self) {
		with_column!(self, c => c.insert_default())
	}

	pub fn pop_back(&mut self, count: usize) -> Result<()> {
		with_column!(self, c => c.pop_back(count))
	}

	/// Appends `length` rows of `src` starting at `start`. Both columns must
	/// share the same storage layout.
	pub fn insert_range_from(&mut self, src: &Column, start: usize, length: usize) -> Result<()> {
		let (from, into) = (src.kind_name(), self.kind_name());
		match (self, src) {
			(Column::Int8(dst), Column::Int8(src)) => dst.insert_range_from(src, start, length),
			(Column::Int16(dst), Column::Int16(src)) => dst.insert_range_from(src, start, length),
			(Column::Int32(dst), Column::Int32(src)) => dst.insert_range_from(src, start, length),
			(Column::Int64(dst), Column::Int64(src)) => dst.insert_range_from(src, start, length),
			(Column::Int128(dst), Column::Int128(src)) => dst.insert_range_from(src, start, length),
			(Column::Float32(dst), Column::Float32(src)) => dst.insert_range_from(src, start, length),
			(Column::Float64(dst), Column::Float64(src)) => dst.insert_range_from(src, start, length),
			(Column::DateTime(dst), Column::DateTime(src)) => dst.insert_range_from(src, start, length),
			(Column::String(dst), Column::String(src)) => dst.insert_range_from(src, start, length),
			(Column::Decimal(dst), Column::Decimal(src)) => dst.insert_range_from(src, start, length),
			(Column::Decimal128(dst), Column::Decimal128(src)) => dst.insert_range_from(src, start, length),
			(Column::Opaque(dst), Column::Opaque(src)) => dst.insert_range_from(src, start, length),
			(Column::Nullable(dst), Column::Nullable(src)) => dst.insert_range_from(src, start, length),
			_ => Err(Error::ColumnKindMismatch {
				from,
				into,
			}),
		}
	}

	pub fn filter(&self, mask: &[bool], size_hint: usize) -> Result<Column> {
		Ok(map_column!(self, c => c.filter(mask, size_hint)?))
	}

	pub fn permute(&self, perm: &[usize], limit: usize) -> Result<Column> {
		Ok(map_column!(self, c => c.permute(perm, limit)?))
	}

	pub fn replicate(&self, counts: &[usize]) -> Result<Column> {
		Ok(map_column!(self, c => c.replicate(counts)?))
	}

	pub fn byte_size(&self) -> usize {
		with_column!(self, c => c.byte_size())
	}
}

impl From<ColumnString> for Column {
	fn from(column: ColumnString) -> Self {
		Column::String(column)
	}
}

impl From<ColumnNullable> for Column {
	fn from(column: ColumnNullable) -> Self {
		Column::Nullable(column)
	}
}

impl From<ColumnOpaque> for Column {
	fn from(column: ColumnOpaque) -> Self {
		Column::Opaque(column)
	}
}

impl From<ColumnDecimal<i128>> for Column {
	fn from(column: ColumnDecimal<i128>) -> Self {
		Column::Decimal128(column)
	}
}

macro_rules! column_from_vector {
	($($t:ty => $variant:ident),+ $(,)?) => {
		$(
			impl From<ColumnVector<$t>> for Column {
				fn from(column: ColumnVector<$t>) -> Self {
					Column::$variant(column)
				}
			}
		)+
	};
}

column_from_vector!(
	i8 => Int8,
	i16 => Int16,
	i32 => Int32,
	i64 => Int64,
	i128 => Int128,
	f32 => Float32,
	f64 => Float64,
	DateTimeValue => DateTime,
	LegacyDecimal => Decimal,
);
