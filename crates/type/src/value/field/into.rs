// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 ReifyDB

use super::{AggregateFunctionStateData, Array, Field, Tuple};
use crate::value::decimal::{DecimalField, DecimalNative};

macro_rules! widen {
	($variant:ident as $wide:ty: $($t:ty),+) => {
		$(
			impl From<$t> for Field {
				#[inline]
				fn from(v: $t) -> Self {
					Field::$variant(v as $wide)
				}
			}
		)+
	};
}

widen!(Int64 as i64: i8, i16, i32, i64);
widen!(UInt64 as u64: u8, u16, u32, u64);
widen!(Float64 as f64: f32, f64);
widen!(Int128 as i128: i128);
widen!(UInt128 as u128: u128);

impl From<bool> for Field {
	fn from(v: bool) -> Self {
		Field::UInt64(v as u64)
	}
}

impl From<&str> for Field {
	fn from(v: &str) -> Self {
		Field::String(v.as_bytes().to_vec())
	}
}

impl From<String> for Field {
	fn from(v: String) -> Self {
		Field::String(v.into_bytes())
	}
}

impl From<&[u8]> for Field {
	fn from(v: &[u8]) -> Self {
		Field::String(v.to_vec())
	}
}

impl From<Vec<u8>> for Field {
	fn from(v: Vec<u8>) -> Self {
		Field::String(v)
	}
}

impl From<Array> for Field {
	fn from(v: Array) -> Self {
		Field::Array(v)
	}
}

impl From<Tuple> for Field {
	fn from(v: Tuple) -> Self {
		Field::Tuple(v)
	}
}

impl From<AggregateFunctionStateData> for Field {
	fn from(v: AggregateFunctionStateData) -> Self {
		Field::AggregateFunctionState(v)
	}
}

impl<T: DecimalNative> From<DecimalField<T>> for Field {
	fn from(v: DecimalField<T>) -> Self {
		T::into_field(v)
	}
}

impl<T: Into<Field>> From<Option<T>> for Field {
	fn from(v: Option<T>) -> Self {
		v.map_or(Field::Null, Into::into)
	}
}
