// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 ReifyDB

use std::{
	fmt::{Display, Formatter},
	str::FromStr,
};

use serde::{Deserialize, Serialize};

use super::format::place_point;
use crate::{Error, Result};

/// Number of fractional digits carried by a [`DecimalV2Value`].
pub const DECIMALV2_SCALE: u32 = 9;

const ONE_BILLION: i128 = 1_000_000_000;

/// A 128-bit fixed point decimal with nine fractional digits.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DecimalV2Value(i128);

impl DecimalV2Value {
	pub const fn new(raw: i128) -> Self {
		Self(raw)
	}

	/// Builds a value from an integer part and a fraction in billionths.
	/// Both parts are expected to carry the same sign.
	pub fn from_parts(int_value: i64, frac_value: i32) -> Self {
		Self(int_value as i128 * ONE_BILLION + frac_value as i128)
	}

	pub fn raw(&self) -> i128 {
		self.0
	}

	pub fn int_value(&self) -> i128 {
		self.0 / ONE_BILLION
	}

	pub fn frac_value(&self) -> i32 {
		(self.0 % ONE_BILLION) as i32
	}

	/// Renders with `scale` fractional digits when given, otherwise with the
	/// natural representation.
	pub fn to_text(&self, scale: Option<u32>) -> String {
		match scale {
			Some(scale) => self.to_string_with_scale(scale),
			None => self.to_string_natural(),
		}
	}

	/// Natural form: trailing fractional zeros are dropped.
	pub fn to_string_natural(&self) -> String {
		self.to_string()
	}

	/// Renders with exactly `scale` fractional digits. Scales below nine
	/// round half away from zero; larger scales pad with zeros.
	pub fn to_string_with_scale(&self, scale: u32) -> String {
		let negative = self.0 < 0;
		let magnitude = self.0.unsigned_abs();

		if scale <= DECIMALV2_SCALE {
			let divisor = 10u128.pow(DECIMALV2_SCALE - scale);
			let mut quotient = magnitude / divisor;
			if (magnitude % divisor) * 2 >= divisor {
				quotient += 1;
			}
			return place_point(&quotient.to_string(), scale as usize, negative);
		}

		let mut digits = magnitude.to_string();
		digits.extend(std::iter::repeat_n('0', (scale - DECIMALV2_SCALE) as usize));
		place_point(&digits, scale as usize, negative)
	}
}

impl Display for DecimalV2Value {
	/// Natural form: trailing fractional zeros are dropped, along with the
	/// point itself for whole numbers.
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		let mut magnitude = self.0.unsigned_abs();
		let mut scale = DECIMALV2_SCALE as usize;
		while scale > 0 && magnitude % 10 == 0 {
			magnitude /= 10;
			scale -= 1;
		}
		f.write_str(&place_point(&magnitude.to_string(), scale, self.0 < 0))
	}
}

impl FromStr for DecimalV2Value {
	type Err = Error;

	fn from_str(text: &str) -> Result<Self> {
		let invalid = || Error::InvalidDecimal(text.to_string());

		let trimmed = text.trim();
		let (negative, unsigned) = match trimmed.as_bytes().first() {
			Some(b'-') => (true, &trimmed[1..]),
			Some(b'+') => (false, &trimmed[1..]),
			_ => (false, trimmed),
		};

		let (int_part, frac_part) = unsigned.split_once('.').unwrap_or((unsigned, ""));
		if int_part.is_empty() && frac_part.is_empty() {
			return Err(invalid());
		}
		if !int_part.bytes().chain(frac_part.bytes()).all(|b| b.is_ascii_digit()) {
			return Err(invalid());
		}

		// Digits past the ninth are only accepted when they are zero.
		let (kept, dropped) = frac_part.split_at(frac_part.len().min(DECIMALV2_SCALE as usize));
		if dropped.bytes().any(|b| b != b'0') {
			return Err(invalid());
		}

		let int_value = if int_part.is_empty() {
			0
		} else {
			int_part.parse::<i128>().map_err(|_| invalid())?
		};
		let mut frac_value = if kept.is_empty() {
			0
		} else {
			kept.parse::<i128>().map_err(|_| invalid())?
		};
		frac_value *= 10i128.pow(DECIMALV2_SCALE - kept.len() as u32);

		let raw = int_value.checked_mul(ONE_BILLION).and_then(|v| v.checked_add(frac_value)).ok_or_else(invalid)?;
		Ok(Self(if negative {
			-raw
		} else {
			raw
		}))
	}
}
