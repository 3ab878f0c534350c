// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 ReifyDB

use serde::{Deserialize, Serialize};
use tessera_wire_format::DEFAULT_MAX_ROW_BYTES;

/// Rows pre-allocated for the columnar path.
pub const DEFAULT_BATCH_SIZE: usize = 4064;

/// Configuration for a [`ResultWriter`](crate::ResultWriter).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResultWriterConfig {
	/// Number of row encoders allocated up front. Larger blocks grow the
	/// pool on demand.
	///
	/// Default: 4064
	pub batch_size: usize,

	/// Upper bound for one encoded row in bytes.
	///
	/// Default: 16 MiB
	pub max_row_bytes: usize,
}

impl Default for ResultWriterConfig {
	fn default() -> Self {
		Self {
			batch_size: DEFAULT_BATCH_SIZE,
			max_row_bytes: DEFAULT_MAX_ROW_BYTES,
		}
	}
}

impl ResultWriterConfig {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn batch_size(mut self, batch_size: usize) -> Self {
		self.batch_size = batch_size;
		self
	}

	pub fn max_row_bytes(mut self, max_row_bytes: usize) -> Self {
		self.max_row_bytes = max_row_bytes;
		self
	}
}
