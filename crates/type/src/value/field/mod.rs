// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 ReifyDB

use std::{
	fmt::{Display, Formatter},
	ops::{Deref, DerefMut},
};

use serde::{Deserialize, Serialize};

mod compare;
mod get;
mod into;

pub use get::FieldType;

use crate::value::decimal::DecimalField;

/// Type tag of a [`Field`]. Discriminants are stable and order fields of
/// different kinds.
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FieldKind {
	Null = 0,
	UInt64 = 1,
	Int64 = 2,
	Float64 = 3,
	UInt128 = 4,
	Int128 = 5,
	String = 16,
	Array = 17,
	Tuple = 18,
	Decimal32 = 19,
	Decimal64 = 20,
	Decimal128 = 21,
	AggregateFunctionState = 22,
}

impl FieldKind {
	pub fn name(&self) -> &'static str {
		match self {
			FieldKind::Null => "Null",
			FieldKind::UInt64 => "UInt64",
			FieldKind::Int64 => "Int64",
			FieldKind::Float64 => "Float64",
			FieldKind::UInt128 => "UInt128",
			FieldKind::Int128 => "Int128",
			FieldKind::String => "String",
			FieldKind::Array => "Array",
			FieldKind::Tuple => "Tuple",
			FieldKind::Decimal32 => "Decimal32",
			FieldKind::Decimal64 => "Decimal64",
			FieldKind::Decimal128 => "Decimal128",
			FieldKind::AggregateFunctionState => "AggregateFunctionState",
		}
	}

	pub fn is_decimal(&self) -> bool {
		matches!(self, FieldKind::Decimal32 | FieldKind::Decimal64 | FieldKind::Decimal128)
	}

	/// Kinds whose payload owns heap memory.
	pub fn is_heap(&self) -> bool {
		matches!(self, FieldKind::String | FieldKind::Array | FieldKind::Tuple | FieldKind::AggregateFunctionState)
	}
}

impl Display for FieldKind {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.name())
	}
}

/// An ordered list of fields.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Array(pub Vec<Field>);

/// A fixed-arity group of fields.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Tuple(pub Vec<Field>);

macro_rules! field_list {
	($name:ident) => {
		impl $name {
			pub fn new(fields: Vec<Field>) -> Self {
				Self(fields)
			}
		}

		impl Clone for $name {
			fn clone(&self) -> Self {
				Self(self.0.clone())
			}

			fn clone_from(&mut self, source: &Self) {
				self.0.clone_from(&source.0);
			}
		}

		impl Deref for $name {
			type Target = Vec<Field>;

			fn deref(&self) -> &Self::Target {
				&self.0
			}
		}

		impl DerefMut for $name {
			fn deref_mut(&mut self) -> &mut Self::Target {
				&mut self.0
			}
		}

		impl From<Vec<Field>> for $name {
			fn from(fields: Vec<Field>) -> Self {
				Self(fields)
			}
		}
	};
}

field_list!(Array);
field_list!(Tuple);

/// Serialized state of an aggregate function together with the name of the
/// function that produced it.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct AggregateFunctionStateData {
	pub name: String,
	pub data: Vec<u8>,
}

impl AggregateFunctionStateData {
	pub fn new(name: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
		Self {
			name: name.into(),
			data: data.into(),
		}
	}
}

impl Clone for AggregateFunctionStateData {
	fn clone(&self) -> Self {
		Self {
			name: self.name.clone(),
			data: self.data.clone(),
		}
	}

	fn clone_from(&mut self, source: &Self) {
		self.name.clone_from(&source.name);
		self.data.clone_from(&source.data);
	}
}

/// A single dynamically typed scalar value.
///
/// Every narrower native value widens to one of these canonical kinds when
/// converted: signed integers to `Int64`, unsigned to `UInt64`, floats to
/// `Float64`, text to `String`.
#[derive(Debug, Default, Serialize, Deserialize)]
pub enum Field {
	#[default]
	Null,
	UInt64(u64),
	Int64(i64),
	Float64(f64),
	UInt128(u128),
	Int128(i128),
	/// Raw bytes, not required to be valid UTF-8
	String(Vec<u8>),
	Array(Array),
	Tuple(Tuple),
	Decimal32(DecimalField<i32>),
	Decimal64(DecimalField<i64>),
	Decimal128(DecimalField<i128>),
	AggregateFunctionState(AggregateFunctionStateData),
}

impl Field {
	pub fn null() -> Self {
		Field::Null
	}

	pub fn uint64(v: impl Into<u64>) -> Self {
		Field::UInt64(v.into())
	}

	pub fn int64(v: impl Into<i64>) -> Self {
		Field::Int64(v.into())
	}

	pub fn float64(v: impl Into<f64>) -> Self {
		Field::Float64(v.into())
	}

	pub fn string(v: impl AsRef<[u8]>) -> Self {
		Field::String(v.as_ref().to_vec())
	}

	pub fn kind(&self) -> FieldKind {
		match self {
			Field::Null => FieldKind::Null,
			Field::UInt64(_) => FieldKind::UInt64,
			Field::Int64(_) => FieldKind::Int64,
			Field::Float64(_) => FieldKind::Float64,
			Field::UInt128(_) => FieldKind::UInt128,
			Field::Int128(_) => FieldKind::Int128,
			Field::String(_) => FieldKind::String,
			Field::Array(_) => FieldKind::Array,
			Field::Tuple(_) => FieldKind::Tuple,
			Field::Decimal32(_) => FieldKind::Decimal32,
			Field::Decimal64(_) => FieldKind::Decimal64,
			Field::Decimal128(_) => FieldKind::Decimal128,
			Field::AggregateFunctionState(_) => FieldKind::AggregateFunctionState,
		}
	}

	pub fn is_null(&self) -> bool {
		matches!(self, Field::Null)
	}

	/// Replaces the content with `other`, dropping the previous payload.
	pub fn assign(&mut self, other: Field) {
		*self = other;
	}

	pub fn set(&mut self, value: impl Into<Field>) {
		*self = value.into();
	}

	/// Stores `bytes` as a string, reusing the existing buffer when the
	/// field already holds one.
	pub fn assign_string(&mut self, bytes: &[u8]) {
		match self {
			Field::String(buffer) => {
				buffer.clear();
				buffer.extend_from_slice(bytes);
			}
			other => *other = Field::String(bytes.to_vec()),
		}
	}
}

impl Clone for Field {
	fn clone(&self) -> Self {
		match self {
			Field::Null => Field::Null,
			Field::UInt64(v) => Field::UInt64(*v),
			Field::Int64(v) => Field::Int64(*v),
			Field::Float64(v) => Field::Float64(*v),
			Field::UInt128(v) => Field::UInt128(*v),
			Field::Int128(v) => Field::Int128(*v),
			Field::String(v) => Field::String(v.clone()),
			Field::Array(v) => Field::Array(v.clone()),
			Field::Tuple(v) => Field::Tuple(v.clone()),
			Field::Decimal32(v) => Field::Decimal32(*v),
			Field::Decimal64(v) => Field::Decimal64(*v),
			Field::Decimal128(v) => Field::Decimal128(*v),
			Field::AggregateFunctionState(v) => Field::AggregateFunctionState(v.clone()),
		}
	}

	/// Copies `source` into `self`. When both hold the same heap kind the
	/// existing allocation is reused.
	fn clone_from(&mut self, source: &Self) {
		match (self, source) {
			(Field::String(dst), Field::String(src)) => dst.clone_from(src),
			(Field::Array(dst), Field::Array(src)) => dst.clone_from(src),
			(Field::Tuple(dst), Field::Tuple(src)) => dst.clone_from(src),
			(Field::AggregateFunctionState(dst), Field::AggregateFunctionState(src)) => dst.clone_from(src),
			(dst, src) => *dst = src.clone(),
		}
	}
}

fn write_list(f: &mut Formatter<'_>, open: char, fields: &[Field], close: char) -> std::fmt::Result {
	write!(f, "{open}")?;
	for (i, field) in fields.iter().enumerate() {
		if i > 0 {
			f.write_str(", ")?;
		}
		write!(f, "{field}")?;
	}
	write!(f, "{close}")
}

impl Display for Field {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Field::Null => f.write_str("NULL"),
			Field::UInt64(v) => Display::fmt(v, f),
			Field::Int64(v) => Display::fmt(v, f),
			Field::Float64(v) => Display::fmt(v, f),
			Field::UInt128(v) => Display::fmt(v, f),
			Field::Int128(v) => Display::fmt(v, f),
			Field::String(v) => write!(f, "'{}'", String::from_utf8_lossy(v)),
			Field::Array(v) => write_list(f, '[', v, ']'),
			Field::Tuple(v) => write_list(f, '(', v, ')'),
			Field::Decimal32(v) => Display::fmt(v, f),
			Field::Decimal64(v) => Display::fmt(v, f),
			Field::Decimal128(v) => Display::fmt(v, f),
			Field::AggregateFunctionState(v) => write!(f, "AggregateFunctionState({})", v.name),
		}
	}
}
