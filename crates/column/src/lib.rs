// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 ReifyDB

mod block;
mod column;
mod decimal;
mod nullable;
mod opaque;
mod selection;
mod string;
mod vector;

pub use block::{Block, ColumnWithTypeAndName};
pub use column::Column;
pub use decimal::ColumnDecimal;
pub use nullable::ColumnNullable;
pub use opaque::ColumnOpaque;
pub use string::ColumnString;
pub use vector::ColumnVector;
