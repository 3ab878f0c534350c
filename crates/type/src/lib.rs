// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 ReifyDB

pub mod error;
pub mod value;

pub use error::{Error, Result};
pub use value::{
	AggregateFunctionStateData, Array, DataType, DecimalField, DecimalNative, DecimalV2Value, Field, FieldKind,
	FieldType, LegacyDecimal, PrimitiveType, StringRef, Tuple,
	decimal::{DECIMALV2_SCALE, MAX_OUTPUT_SCALE, text_scale},
	largeint::{LARGEINT_TEXT_CAPACITY, format_largeint},
	temporal::{DATETIME_TEXT_CAPACITY, DateTimeValue, TimeKind, format_time_of_day},
};
