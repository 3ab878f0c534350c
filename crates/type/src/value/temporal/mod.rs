// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 ReifyDB

mod datetime;
mod time;

pub use datetime::{DATETIME_TEXT_CAPACITY, DateTimeValue, TimeKind};
pub use time::format_time_of_day;
