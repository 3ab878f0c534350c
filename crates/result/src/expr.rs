// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 ReifyDB

use std::fmt::Debug;

use tessera_column::Block;
use tessera_type::{DateTimeValue, DecimalV2Value, LegacyDecimal, PrimitiveType, StringRef};

use crate::{Result, WriterError};

/// An evaluated value on the row tuple path.
#[derive(Clone, Debug, PartialEq)]
pub enum Datum {
	Boolean(bool),
	TinyInt(i8),
	SmallInt(i16),
	Int(i32),
	BigInt(i64),
	LargeInt(i128),
	Float(f32),
	Double(f64),
	/// Seconds since midnight
	Time(f64),
	DateTime(DateTimeValue),
	String(Vec<u8>),
	/// A string result without backing storage. A zero length is the empty
	/// string, anything else is written as NULL.
	DetachedString {
		len: usize,
	},
	Decimal(LegacyDecimal),
	DecimalV2(DecimalV2Value),
	Object(Vec<u8>),
}

impl Datum {
	pub fn string(value: impl Into<Vec<u8>>) -> Self {
		Datum::String(value.into())
	}

	pub fn kind_name(&self) -> &'static str {
		match self {
			Datum::Boolean(_) => "Boolean",
			Datum::TinyInt(_) => "TinyInt",
			Datum::SmallInt(_) => "SmallInt",
			Datum::Int(_) => "Int",
			Datum::BigInt(_) => "BigInt",
			Datum::LargeInt(_) => "LargeInt",
			Datum::Float(_) => "Float",
			Datum::Double(_) => "Double",
			Datum::Time(_) => "Time",
			Datum::DateTime(_) => "DateTime",
			Datum::String(_) | Datum::DetachedString {
				..
			} => "String",
			Datum::Decimal(_) => "Decimal",
			Datum::DecimalV2(_) => "DecimalV2",
			Datum::Object(_) => "Object",
		}
	}

	pub fn as_string_ref(&self) -> Option<StringRef<'_>> {
		match self {
			Datum::String(data) => Some(StringRef::new(data)),
			Datum::DetachedString {
				len,
			} => Some(StringRef::detached(*len)),
			_ => None,
		}
	}
}

/// One row of the tuple path. A `None` slot is SQL NULL.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TupleRow {
	values: Vec<Option<Datum>>,
}

impl TupleRow {
	pub fn new(values: Vec<Option<Datum>>) -> Self {
		Self {
			values,
		}
	}

	pub fn get(&self, slot: usize) -> Option<&Datum> {
		self.values.get(slot)?.as_ref()
	}

	pub fn len(&self) -> usize {
		self.values.len()
	}

	pub fn is_empty(&self) -> bool {
		self.values.is_empty()
	}
}

impl From<Vec<Option<Datum>>> for TupleRow {
	fn from(values: Vec<Option<Datum>>) -> Self {
		Self::new(values)
	}
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct RowBatch {
	rows: Vec<TupleRow>,
}

impl RowBatch {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn push(&mut self, row: impl Into<TupleRow>) {
		self.rows.push(row.into());
	}

	pub fn len(&self) -> usize {
		self.rows.len()
	}

	pub fn is_empty(&self) -> bool {
		self.rows.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = &TupleRow> + '_ {
		self.rows.iter()
	}
}

impl From<Vec<TupleRow>> for RowBatch {
	fn from(rows: Vec<TupleRow>) -> Self {
		Self {
			rows,
		}
	}
}

impl FromIterator<TupleRow> for RowBatch {
	fn from_iter<I: IntoIterator<Item = TupleRow>>(iter: I) -> Self {
		Self {
			rows: iter.into_iter().collect(),
		}
	}
}

/// An output expression on the tuple path.
pub trait OutputExpr: Debug + Send + Sync {
	fn result_type(&self) -> PrimitiveType;

	/// Declared fractional digits for decimal output, negative when unset.
	fn output_scale(&self) -> i32 {
		-1
	}

	/// The evaluated value for `row`, `None` for NULL.
	fn get_value<'a>(&self, row: &'a TupleRow) -> Option<&'a Datum>;
}

/// Reads a tuple slot as is.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SlotRef {
	slot: usize,
	result_type: PrimitiveType,
	output_scale: i32,
}

impl SlotRef {
	pub fn new(slot: usize, result_type: PrimitiveType) -> Self {
		Self {
			slot,
			result_type,
			output_scale: -1,
		}
	}

	pub fn with_output_scale(mut self, output_scale: i32) -> Self {
		self.output_scale = output_scale;
		self
	}
}

impl OutputExpr for SlotRef {
	fn result_type(&self) -> PrimitiveType {
		self.result_type
	}

	fn output_scale(&self) -> i32 {
		self.output_scale
	}

	fn get_value<'a>(&self, row: &'a TupleRow) -> Option<&'a Datum> {
		row.get(self.slot)
	}
}

/// An output expression on the columnar path.
pub trait VExpr: Debug + Send + Sync {
	fn result_type(&self) -> PrimitiveType;

	fn output_scale(&self) -> i32 {
		-1
	}

	/// Materializes the expression into `block` and returns the position of
	/// its result column.
	fn execute(&self, block: &mut Block) -> Result<usize>;
}

/// Refers to an existing column of the block.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColumnRef {
	position: usize,
	result_type: PrimitiveType,
	output_scale: i32,
}

impl ColumnRef {
	pub fn new(position: usize, result_type: PrimitiveType) -> Self {
		Self {
			position,
			result_type,
			output_scale: -1,
		}
	}

	pub fn with_output_scale(mut self, output_scale: i32) -> Self {
		self.output_scale = output_scale;
		self
	}
}

impl VExpr for ColumnRef {
	fn result_type(&self) -> PrimitiveType {
		self.result_type
	}

	fn output_scale(&self) -> i32 {
		self.output_scale
	}

	fn execute(&self, block: &mut Block) -> Result<usize> {
		if self.position >= block.columns() {
			return Err(WriterError::MissingColumn {
				position: self.position,
				columns: block.columns(),
			});
		}
		Ok(self.position)
	}
}

/// The output expressions of a writer, one per result column.
#[derive(Debug)]
pub enum OutputExprs {
	Row(Vec<Box<dyn OutputExpr>>),
	Vectorized(Vec<Box<dyn VExpr>>),
}

impl OutputExprs {
	pub fn len(&self) -> usize {
		match self {
			OutputExprs::Row(exprs) => exprs.len(),
			OutputExprs::Vectorized(exprs) => exprs.len(),
		}
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	pub fn is_vectorized(&self) -> bool {
		matches!(self, OutputExprs::Vectorized(_))
	}
}
