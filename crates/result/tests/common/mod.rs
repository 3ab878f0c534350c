// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 ReifyDB

#![allow(dead_code)]

use std::sync::Arc;

use parking_lot::Mutex;
use tessera_result::{ResultBatch, ResultSink, SinkError};
use tessera_wire_format::decode_row;

/// Sink that keeps every accepted batch, or rejects all of them.
#[derive(Default)]
pub struct CollectSink {
	batches: Mutex<Vec<ResultBatch>>,
	reject: bool,
}

impl CollectSink {
	pub fn new() -> Arc<Self> {
		Arc::new(Self::default())
	}

	pub fn rejecting() -> Arc<Self> {
		Arc::new(Self {
			batches: Mutex::new(Vec::new()),
			reject: true,
		})
	}

	pub fn batches(&self) -> usize {
		self.batches.lock().len()
	}

	/// Every delivered row, decoded into text cells.
	pub fn rows(&self) -> Vec<Vec<Option<String>>> {
		self.batches
			.lock()
			.iter()
			.flat_map(|batch| batch.iter().map(decode).collect::<Vec<_>>())
			.collect()
	}
}

impl ResultSink for CollectSink {
	fn add_batch(&self, batch: ResultBatch) -> Result<(), SinkError> {
		if self.reject {
			return Err(SinkError::Rejected("fetch buffer is full".to_string()));
		}
		self.batches.lock().push(batch);
		Ok(())
	}
}

pub fn decode(row: &[u8]) -> Vec<Option<String>> {
	decode_row(row).unwrap().into_iter().map(|cell| cell.map(|v| String::from_utf8(v).unwrap())).collect()
}

pub fn cell(value: &str) -> Option<String> {
	Some(value.to_string())
}
