// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 ReifyDB

//! Text protocol result rows.
//!
//! A row is the concatenation of its column values. NULL is the single byte
//! `0xFB`; every other value is its text form behind a length-encoded
//! integer prefix.

mod buffer;
mod lenenc;
mod reader;

pub use buffer::{DEFAULT_MAX_ROW_BYTES, MysqlRowBuffer};
pub use lenenc::NULL_MARKER;
pub use reader::{MysqlRowReader, decode_row};
