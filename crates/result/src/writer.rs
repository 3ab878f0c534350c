// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 ReifyDB

use std::sync::Arc;

use tessera_column::Block;
use tessera_wire_format::{MysqlRowBuffer, RowEncoder};
use tracing::{debug, info, instrument, warn};

use crate::{
	BatchState, OutputExprs, PendingBatch, Result, ResultSink, ResultWriterConfig, RowBatch, WriterError,
	convert::{convert_block, convert_rows},
};

/// Converts result batches into wire rows and delivers them to a sink.
///
/// A writer owns its encoders and counters and converts one batch at a time.
/// Producers that need parallelism use one writer each.
pub struct ResultWriter<E: RowEncoder = MysqlRowBuffer> {
	sink: Option<Arc<dyn ResultSink>>,
	exprs: OutputExprs,
	config: ResultWriterConfig,
	factory: fn(&ResultWriterConfig) -> E,
	row_buffer: Option<E>,
	vec_buffers: Vec<E>,
	written_rows: u64,
	reported_rows: u64,
	closed: bool,
	last_state: BatchState,
}

impl ResultWriter<MysqlRowBuffer> {
	pub fn new(sink: Option<Arc<dyn ResultSink>>, exprs: OutputExprs, config: ResultWriterConfig) -> Self {
		Self::with_encoder_factory(sink, exprs, config, |config| {
			MysqlRowBuffer::with_max_row_bytes(config.max_row_bytes)
		})
	}
}

impl<E: RowEncoder> ResultWriter<E> {
	pub fn with_encoder_factory(
		sink: Option<Arc<dyn ResultSink>>,
		exprs: OutputExprs,
		config: ResultWriterConfig,
		factory: fn(&ResultWriterConfig) -> E,
	) -> Self {
		Self {
			sink,
			exprs,
			config,
			factory,
			row_buffer: None,
			vec_buffers: Vec::new(),
			written_rows: 0,
			reported_rows: 0,
			closed: false,
			last_state: BatchState::Empty,
		}
	}

	/// Allocates the encoders. Fails when no sink is attached.
	pub fn init(&mut self) -> Result<()> {
		if self.sink.is_none() {
			return Err(WriterError::Configuration("result sink is not set".to_string()));
		}
		if self.config.batch_size == 0 {
			return Err(WriterError::Configuration("batch_size must be greater than zero".to_string()));
		}

		let factory = self.factory;
		self.row_buffer = Some(factory(&self.config));
		if self.exprs.is_vectorized() {
			let config = &self.config;
			self.vec_buffers = (0..config.batch_size).map(|_| factory(config)).collect();
		}

		debug!(
			columns = self.exprs.len(),
			batch_size = self.config.batch_size,
			vectorized = self.exprs.is_vectorized(),
			"result writer initialized"
		);
		Ok(())
	}

	/// Converts and delivers a batch of row tuples.
	#[instrument(name = "result::writer::append_row_batch", level = "debug", skip_all, fields(rows = batch.len()))]
	pub fn append_row_batch(&mut self, batch: &RowBatch) -> Result<()> {
		let OutputExprs::Row(exprs) = &self.exprs else {
			return Err(WriterError::Configuration("vectorized writer cannot convert row batches".to_string()));
		};
		let Some(encoder) = self.row_buffer.as_mut() else {
			return Err(not_initialized());
		};
		if batch.is_empty() {
			return Ok(());
		}

		let mut pending = PendingBatch::new(batch.len());
		let converted = convert_rows(encoder, exprs, batch, &mut pending);
		self.finish(pending, converted)
	}

	/// Converts and delivers a columnar block. Output expressions may add
	/// columns to `block`.
	#[instrument(name = "result::writer::append_block", level = "debug", skip_all, fields(rows = block.rows()))]
	pub fn append_block(&mut self, block: &mut Block) -> Result<()> {
		let OutputExprs::Vectorized(exprs) = &self.exprs else {
			return Err(WriterError::Configuration("row writer cannot convert blocks".to_string()));
		};
		if self.row_buffer.is_none() {
			return Err(not_initialized());
		}
		let rows = block.rows();
		if rows == 0 {
			return Ok(());
		}

		if self.vec_buffers.len() < rows {
			let (factory, config) = (self.factory, &self.config);
			self.vec_buffers.resize_with(rows, || factory(config));
		}

		let mut pending = PendingBatch::with_rows(rows);
		let converted =
			convert_block(exprs, block, &mut self.vec_buffers[..rows], &mut pending, self.config.max_row_bytes);
		self.finish(pending, converted)
	}

	/// Records the final row count. Calling it again reports nothing new.
	pub fn close(&mut self) -> Result<()> {
		if self.closed && self.reported_rows == self.written_rows {
			return Ok(());
		}
		self.reported_rows = self.written_rows;
		self.closed = true;
		info!(rows = self.reported_rows, "result writer closed");
		Ok(())
	}

	/// Rows delivered to the sink so far.
	pub fn written_rows(&self) -> u64 {
		self.written_rows
	}

	/// Rows reported by the last `close`.
	pub fn reported_rows(&self) -> u64 {
		self.reported_rows
	}

	pub fn last_batch_state(&self) -> BatchState {
		self.last_state
	}

	pub fn config(&self) -> &ResultWriterConfig {
		&self.config
	}

	fn finish(&mut self, mut pending: PendingBatch, converted: Result<()>) -> Result<()> {
		if let Err(err) = converted {
			pending.fail();
			self.last_state = pending.state();
			warn!(error = %err, "failed to convert result batch");
			return Err(err);
		}

		let Some(sink) = self.sink.as_deref() else {
			return Err(not_initialized());
		};

		let rows = pending.len();
		match pending.deliver(sink) {
			Ok(state) => {
				self.last_state = state;
				self.written_rows += rows as u64;
				debug!(rows, total = self.written_rows, "delivered result batch");
				Ok(())
			}
			Err(err) => {
				self.last_state = BatchState::Failed;
				warn!(rows, error = %err, "failed to deliver result batch");
				Err(err)
			}
		}
	}
}

fn not_initialized() -> WriterError {
	WriterError::Configuration("result writer is not initialized".to_string())
}
