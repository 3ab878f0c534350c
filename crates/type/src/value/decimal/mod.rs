// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 ReifyDB

use std::{
	cmp::Ordering,
	fmt::{Debug, Display, Formatter},
};

use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use serde::{Deserialize, Serialize};

use crate::{
	Error, Result,
	value::{Field, FieldKind},
};

pub(crate) mod format;
mod legacy;
mod v2;

pub use legacy::LegacyDecimal;
pub use v2::{DECIMALV2_SCALE, DecimalV2Value};

use format::{place_point, pow10};

/// Largest explicit output scale honoured when rendering decimals as text.
pub const MAX_OUTPUT_SCALE: i32 = 30;

/// Resolves an expression's declared output scale to the scale decimals are
/// rendered with. Scales outside `1..=MAX_OUTPUT_SCALE` fall back to the
/// value's natural scale, signalled by `None`.
pub fn text_scale(output_scale: i32) -> Option<u32> {
	(output_scale > 0 && output_scale <= MAX_OUTPUT_SCALE).then_some(output_scale as u32)
}

/// Native storage for a fixed point decimal of a given width.
pub trait DecimalNative:
	Copy + Ord + Default + Debug + Display + Into<i128> + TryFrom<i128> + Send + Sync + 'static
{
	const KIND: FieldKind;
	const MAX_PRECISION: u32;

	fn into_field(value: DecimalField<Self>) -> Field;
}

impl DecimalNative for i32 {
	const KIND: FieldKind = FieldKind::Decimal32;
	const MAX_PRECISION: u32 = 9;

	fn into_field(value: DecimalField<Self>) -> Field {
		Field::Decimal32(value)
	}
}

impl DecimalNative for i64 {
	const KIND: FieldKind = FieldKind::Decimal64;
	const MAX_PRECISION: u32 = 18;

	fn into_field(value: DecimalField<Self>) -> Field {
		Field::Decimal64(value)
	}
}

impl DecimalNative for i128 {
	const KIND: FieldKind = FieldKind::Decimal128;
	const MAX_PRECISION: u32 = 38;

	fn into_field(value: DecimalField<Self>) -> Field {
		Field::Decimal128(value)
	}
}

/// A fixed point decimal: an integer paired with the number of fractional
/// digits it carries.
#[derive(Copy, Clone, Debug, Default, Serialize, Deserialize)]
pub struct DecimalField<T> {
	value: T,
	scale: u32,
}

impl<T: DecimalNative> DecimalField<T> {
	pub fn new(value: T, scale: u32) -> Self {
		Self {
			value,
			scale,
		}
	}

	pub fn value(&self) -> T {
		self.value
	}

	pub fn scale(&self) -> u32 {
		self.scale
	}

	/// `10^scale` in the native width, or `None` when it does not fit.
	pub fn scale_multiplier(&self) -> Option<T> {
		pow10(self.scale).and_then(|m| T::try_from(m).ok())
	}

	/// Compares two decimals by value, rescaling to the larger scale first.
	pub fn cmp_decimal<U: DecimalNative>(&self, other: &DecimalField<U>) -> Ordering {
		compare_scaled(self.value.into(), self.scale, other.value.into(), other.scale)
	}

	pub fn eq_decimal<U: DecimalNative>(&self, other: &DecimalField<U>) -> bool {
		self.cmp_decimal(other) == Ordering::Equal
	}

	pub fn checked_add(&self, rhs: &Self) -> Result<Self> {
		self.combine(rhs, i128::checked_add)
	}

	pub fn checked_sub(&self, rhs: &Self) -> Result<Self> {
		self.combine(rhs, i128::checked_sub)
	}

	fn combine(&self, rhs: &Self, op: fn(i128, i128) -> Option<i128>) -> Result<Self> {
		if self.scale != rhs.scale {
			return Err(Error::DecimalScaleMismatch {
				left: self.scale,
				right: rhs.scale,
			});
		}
		let wide = op(self.value.into(), rhs.value.into()).ok_or(Error::DecimalOverflow)?;
		let value = T::try_from(wide).map_err(|_| Error::DecimalOverflow)?;
		Ok(Self::new(value, self.scale))
	}
}

fn compare_scaled(l: i128, l_scale: u32, r: i128, r_scale: u32) -> Ordering {
	let rescaled = match l_scale.cmp(&r_scale) {
		Ordering::Equal => return l.cmp(&r),
		Ordering::Less => pow10(r_scale - l_scale).and_then(|m| l.checked_mul(m)).map(|l| (l, r)),
		Ordering::Greater => pow10(l_scale - r_scale).and_then(|m| r.checked_mul(m)).map(|r| (l, r)),
	};

	match rescaled {
		Some((l, r)) => l.cmp(&r),
		None => {
			let l = BigDecimal::new(BigInt::from(l), l_scale as i64);
			let r = BigDecimal::new(BigInt::from(r), r_scale as i64);
			l.cmp(&r)
		}
	}
}

impl<T: DecimalNative> Display for DecimalField<T> {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		let value: i128 = self.value.into();
		f.write_str(&place_point(&value.unsigned_abs().to_string(), self.scale as usize, value < 0))
	}
}
