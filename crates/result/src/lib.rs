// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 ReifyDB

//! Result serialization.
//!
//! A [`ResultWriter`] turns either row tuples or columnar [`Block`]s into
//! wire rows, packs them into a [`ResultBatch`] and hands the batch to a
//! [`ResultSink`]. A batch is delivered whole or not at all.
//!
//! [`Block`]: tessera_column::Block

mod batch;
mod config;
mod convert;
mod error;
mod expr;
mod sink;
mod writer;

pub use batch::{BatchState, PendingBatch, ResultBatch};
pub use config::{DEFAULT_BATCH_SIZE, ResultWriterConfig};
pub use error::{Result, SinkError, WriterError};
pub use expr::{ColumnRef, Datum, OutputExpr, OutputExprs, RowBatch, SlotRef, TupleRow, VExpr};
pub use sink::ResultSink;
pub use writer::ResultWriter;
