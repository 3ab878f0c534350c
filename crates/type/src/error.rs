// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 ReifyDB

use crate::value::FieldKind;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by scalar values and the column containers built on them.
///
/// Column operations validate their arguments before touching any storage,
/// so an error always leaves the column exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
	#[error("Bad get: has {has}, requested {requested}")]
	BadGet {
		has: FieldKind,
		requested: FieldKind,
	},

	#[error("Operator < is not implemented for aggregate function state '{name}'")]
	IncomparableAggregateState {
		name: String,
	},

	#[error("Comparing aggregate function states of different types: {left} and {right}")]
	AggregateStateMismatch {
		left: String,
		right: String,
	},

	#[error("Cannot combine decimals with scales {left} and {right}")]
	DecimalScaleMismatch {
		left: u32,
		right: u32,
	},

	#[error("Decimal arithmetic overflow")]
	DecimalOverflow,

	#[error("Invalid decimal literal '{0}'")]
	InvalidDecimal(String),

	#[error("Size of filter ({filter}) doesn't match size of column ({column})")]
	FilterSizeMismatch {
		filter: usize,
		column: usize,
	},

	#[error("Size of permutation ({permutation}) is less than required ({required})")]
	PermutationTooShort {
		permutation: usize,
		required: usize,
	},

	#[error("Permutation index {index} is out of bounds for column of size {size}")]
	PermutationIndexOutOfBounds {
		index: usize,
		size: usize,
	},

	#[error("Size of replicate counts ({counts}) doesn't match size of column ({column})")]
	ReplicateSizeMismatch {
		counts: usize,
		column: usize,
	},

	#[error("Parameter out of bound in insert_range_from: start={start}, length={length}, source size={size}")]
	RangeOutOfBounds {
		start: usize,
		length: usize,
		size: usize,
	},

	#[error("Row {index} is out of bounds for column of size {size}")]
	IndexOutOfBounds {
		index: usize,
		size: usize,
	},

	#[error("Cannot pop {count} rows from column of size {size}")]
	PopOutOfBounds {
		count: usize,
		size: usize,
	},

	#[error("Null map has {null_map} entries, nested column has {nested} rows")]
	NullMapSizeMismatch {
		null_map: usize,
		nested: usize,
	},

	#[error("Column '{name}' has {actual} rows, block has {expected}")]
	RowCountMismatch {
		name: String,
		expected: usize,
		actual: usize,
	},

	#[error("Cannot insert {from} column data into {into} column")]
	ColumnKindMismatch {
		from: &'static str,
		into: &'static str,
	},
}
