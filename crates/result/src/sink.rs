// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 ReifyDB

use crate::{ResultBatch, SinkError};

/// Receives finished result batches.
///
/// A batch passed to `add_batch` belongs to the sink from then on, whether
/// or not it is accepted.
pub trait ResultSink: Send + Sync {
	fn add_batch(&self, batch: ResultBatch) -> Result<(), SinkError>;
}
