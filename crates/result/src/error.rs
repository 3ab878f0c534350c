// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 ReifyDB

use tessera_type::PrimitiveType;
use tessera_wire_format::EncodeError;

use crate::BatchState;

pub type Result<T> = std::result::Result<T, WriterError>;

/// Failure reported by a [`ResultSink`](crate::ResultSink).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SinkError {
	#[error("result sink is closed")]
	Closed,

	#[error("result sink rejected the batch: {0}")]
	Rejected(String),
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum WriterError {
	#[error("invalid result writer configuration: {0}")]
	Configuration(String),

	#[error("unsupported output type {0}")]
	UnsupportedType(PrimitiveType),

	#[error("pack mysql buffer failed: {0}")]
	Encoding(#[from] EncodeError),

	#[error("output column {column} declared as {declared} is stored as {stored}")]
	ColumnTypeMismatch {
		column: usize,
		declared: PrimitiveType,
		stored: &'static str,
	},

	#[error("output column {column} has scale {scale}, expected {expected}")]
	ColumnScaleMismatch {
		column: usize,
		scale: u32,
		expected: u32,
	},

	#[error("{actual} value cannot be written as {declared}")]
	DatumTypeMismatch {
		declared: PrimitiveType,
		actual: &'static str,
	},

	#[error("column position {position} is out of range for a block of {columns} columns")]
	MissingColumn {
		position: usize,
		columns: usize,
	},

	#[error("batch in state {state:?} cannot be delivered")]
	IncompleteBatch {
		state: BatchState,
	},

	#[error("failed to deliver batch: {0}")]
	Delivery(#[from] SinkError),

	#[error(transparent)]
	Column(#[from] tessera_type::Error),
}
