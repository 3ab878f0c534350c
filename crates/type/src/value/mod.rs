// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 ReifyDB

pub mod decimal;
pub mod field;
pub mod largeint;
mod string_ref;
pub mod temporal;
mod r#type;

pub use decimal::{DecimalField, DecimalNative, DecimalV2Value, LegacyDecimal};
pub use field::{AggregateFunctionStateData, Array, Field, FieldKind, FieldType, Tuple};
pub use string_ref::StringRef;
pub use r#type::{DataType, PrimitiveType};
