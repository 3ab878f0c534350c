// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// The declared logical type of an output expression or column.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PrimitiveType {
	Null,
	Boolean,
	TinyInt,
	SmallInt,
	Int,
	BigInt,
	LargeInt,
	Float,
	Double,
	/// Seconds as a double, rendered as a time of day
	Time,
	Date,
	DateTime,
	Char,
	Varchar,
	String,
	/// HyperLogLog sketch
	Hll,
	/// Opaque binary object such as a bitmap
	Object,
	/// Arbitrary precision decimal
	Decimal,
	/// 128-bit fixed point decimal with nine fractional digits
	DecimalV2,
	Binary,
	Array,
}

impl PrimitiveType {
	pub fn is_string(&self) -> bool {
		matches!(self, PrimitiveType::Char | PrimitiveType::Varchar | PrimitiveType::String)
	}

	pub fn is_decimal(&self) -> bool {
		matches!(self, PrimitiveType::Decimal | PrimitiveType::DecimalV2)
	}

	pub fn is_integer(&self) -> bool {
		matches!(
			self,
			PrimitiveType::TinyInt
				| PrimitiveType::SmallInt
				| PrimitiveType::Int
				| PrimitiveType::BigInt
				| PrimitiveType::LargeInt
		)
	}

	/// Whether a value of this type may be wrapped as nullable.
	pub fn can_be_inside_nullable(&self) -> bool {
		!matches!(self, PrimitiveType::Null | PrimitiveType::Array)
	}

	pub fn name(&self) -> &'static str {
		match self {
			PrimitiveType::Null => "NULL",
			PrimitiveType::Boolean => "BOOLEAN",
			PrimitiveType::TinyInt => "TINYINT",
			PrimitiveType::SmallInt => "SMALLINT",
			PrimitiveType::Int => "INT",
			PrimitiveType::BigInt => "BIGINT",
			PrimitiveType::LargeInt => "LARGEINT",
			PrimitiveType::Float => "FLOAT",
			PrimitiveType::Double => "DOUBLE",
			PrimitiveType::Time => "TIME",
			PrimitiveType::Date => "DATE",
			PrimitiveType::DateTime => "DATETIME",
			PrimitiveType::Char => "CHAR",
			PrimitiveType::Varchar => "VARCHAR",
			PrimitiveType::String => "STRING",
			PrimitiveType::Hll => "HLL",
			PrimitiveType::Object => "OBJECT",
			PrimitiveType::Decimal => "DECIMAL",
			PrimitiveType::DecimalV2 => "DECIMALV2",
			PrimitiveType::Binary => "BINARY",
			PrimitiveType::Array => "ARRAY",
		}
	}
}

impl Display for PrimitiveType {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.name())
	}
}

/// A logical type together with its nullability.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DataType {
	pub primitive: PrimitiveType,
	pub nullable: bool,
}

impl DataType {
	pub fn new(primitive: PrimitiveType) -> Self {
		Self {
			primitive,
			nullable: false,
		}
	}

	/// Wraps the type as nullable. Returns `None` for types that cannot be
	/// stored inside a nullable column.
	pub fn nullable(primitive: PrimitiveType) -> Option<Self> {
		primitive.can_be_inside_nullable().then_some(Self {
			primitive,
			nullable: true,
		})
	}

	pub fn is_nullable(&self) -> bool {
		self.nullable
	}
}

impl From<PrimitiveType> for DataType {
	fn from(primitive: PrimitiveType) -> Self {
		Self::new(primitive)
	}
}

impl Display for DataType {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		if self.nullable {
			write!(f, "Nullable({})", self.primitive)
		} else {
			write!(f, "{}", self.primitive)
		}
	}
}

#[cfg(test)]
pub mod tests {
	use super::*;

	#[test]
	fn test_display() {
		assert_eq!(DataType::new(PrimitiveType::Varchar).to_string(), "VARCHAR");
		assert_eq!(DataType::nullable(PrimitiveType::DecimalV2).unwrap().to_string(), "Nullable(DECIMALV2)");
	}

	#[test]
	fn test_nullable_rejects_nested_nulls() {
		assert!(DataType::nullable(PrimitiveType::Null).is_none());
		assert!(DataType::nullable(PrimitiveType::Array).is_none());
		assert!(DataType::nullable(PrimitiveType::Int).is_some());
	}

	#[test]
	fn test_classification() {
		assert!(PrimitiveType::Char.is_string());
		assert!(PrimitiveType::String.is_string());
		assert!(!PrimitiveType::Binary.is_string());
		assert!(PrimitiveType::DecimalV2.is_decimal());
		assert!(PrimitiveType::LargeInt.is_integer());
		assert!(!PrimitiveType::Boolean.is_integer());
	}
}
