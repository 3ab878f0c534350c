// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 ReifyDB

use tessera_wire_format::EncodeError;
use tracing::trace;

use crate::{ResultSink, WriterError};

/// Encoded rows ready for the client, in source order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResultBatch {
	rows: Vec<Vec<u8>>,
}

impl ResultBatch {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_capacity(rows: usize) -> Self {
		Self {
			rows: Vec::with_capacity(rows),
		}
	}

	pub fn push(&mut self, row: Vec<u8>) {
		self.rows.push(row);
	}

	pub fn len(&self) -> usize {
		self.rows.len()
	}

	pub fn is_empty(&self) -> bool {
		self.rows.is_empty()
	}

	pub fn rows(&self) -> &[Vec<u8>] {
		&self.rows
	}

	pub fn iter(&self) -> impl Iterator<Item = &[u8]> + '_ {
		self.rows.iter().map(Vec::as_slice)
	}

	pub fn into_rows(self) -> Vec<Vec<u8>> {
		self.rows
	}
}

/// Lifecycle of a batch under conversion.
///
/// `Empty -> Converting(0) -> .. -> Converting(n) -> Complete -> Delivered`,
/// with any conversion error moving to `Failed`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum BatchState {
	#[default]
	Empty,
	/// Position being converted: an output column on the columnar path, a
	/// row on the tuple path.
	Converting(usize),
	Complete,
	Delivered,
	Failed,
}

/// A batch owned by the writer until it is delivered.
#[derive(Debug)]
pub struct PendingBatch {
	batch: ResultBatch,
	state: BatchState,
}

impl PendingBatch {
	/// A batch that collects whole rows one at a time.
	pub fn new(rows: usize) -> Self {
		Self {
			batch: ResultBatch::with_capacity(rows),
			state: BatchState::Empty,
		}
	}

	/// A batch of `rows` empty rows that columns are appended onto.
	pub fn with_rows(rows: usize) -> Self {
		Self {
			batch: ResultBatch {
				rows: vec![Vec::new(); rows],
			},
			state: BatchState::Empty,
		}
	}

	pub fn state(&self) -> BatchState {
		self.state
	}

	pub fn len(&self) -> usize {
		self.batch.len()
	}

	pub fn is_empty(&self) -> bool {
		self.batch.is_empty()
	}

	pub fn rows(&self) -> &[Vec<u8>] {
		self.batch.rows()
	}

	pub fn begin(&mut self, position: usize) {
		if matches!(self.state, BatchState::Empty | BatchState::Converting(_)) {
			self.state = BatchState::Converting(position);
		}
	}

	pub fn push_row(&mut self, row: &[u8]) {
		self.batch.push(row.to_vec());
	}

	/// Appends one encoded cell per row, in row order. No row is touched when
	/// any of them would grow past `max_row_bytes`.
	pub fn append_column<'a>(
		&mut self,
		cells: impl IntoIterator<Item = &'a [u8]>,
		max_row_bytes: usize,
	) -> Result<(), WriterError> {
		let cells = cells.into_iter().collect::<Vec<_>>();
		for (row, cell) in self.batch.rows.iter().zip(&cells) {
			let size = row.len().saturating_add(cell.len());
			if size > max_row_bytes {
				return Err(EncodeError::RowTooLarge {
					size,
					limit: max_row_bytes,
				}
				.into());
			}
		}
		for (row, cell) in self.batch.rows.iter_mut().zip(cells) {
			row.extend_from_slice(cell);
		}
		Ok(())
	}

	pub fn complete(&mut self) {
		if matches!(self.state, BatchState::Empty | BatchState::Converting(_)) {
			self.state = BatchState::Complete;
		}
	}

	pub fn fail(&mut self) {
		self.state = BatchState::Failed;
	}

	/// Hands the batch to `sink`. Only a complete batch leaves the writer.
	pub fn deliver(self, sink: &dyn ResultSink) -> Result<BatchState, WriterError> {
		if self.state != BatchState::Complete {
			return Err(WriterError::IncompleteBatch {
				state: self.state,
			});
		}
		trace!(rows = self.batch.len(), "delivering batch");
		sink.add_batch(self.batch)?;
		Ok(BatchState::Delivered)
	}
}
