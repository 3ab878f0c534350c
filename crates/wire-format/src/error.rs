// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 ReifyDB

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EncodeError {
	#[error("row of {size} bytes exceeds the limit of {limit} bytes")]
	RowTooLarge {
		size: usize,
		limit: usize,
	},

	#[error("failed to format value as text")]
	Format,

	#[error("row truncated at byte {offset}")]
	Truncated {
		offset: usize,
	},

	#[error("invalid length prefix {prefix:#04x} at byte {offset}")]
	InvalidLength {
		prefix: u8,
		offset: usize,
	},
}
