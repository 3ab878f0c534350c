// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 ReifyDB

mod encoder;
mod error;
pub mod mysql;

pub use encoder::RowEncoder;
pub use error::EncodeError;
pub use mysql::{DEFAULT_MAX_ROW_BYTES, MysqlRowBuffer, MysqlRowReader, NULL_MARKER, decode_row};

pub type Result<T> = std::result::Result<T, EncodeError>;
