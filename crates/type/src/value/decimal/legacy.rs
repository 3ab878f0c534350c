// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 ReifyDB

use std::{
	borrow::Cow,
	fmt::{Display, Formatter},
	str::FromStr,
};

use bigdecimal::BigDecimal;
use num_bigint::{BigInt, BigUint, Sign};
use num_traits::{ToPrimitive, pow};
use serde::{Deserialize, Serialize};

use super::{DecimalField, MAX_OUTPUT_SCALE, format::place_point};
use crate::{Error, Result, value::Field};

/// Largest exponent magnitude a [`LegacyDecimal`] may carry: 38 integer digits
/// plus the widest output scale.
pub const MAX_EXPONENT: i64 = 38 + MAX_OUTPUT_SCALE as i64;

/// An arbitrary precision decimal carried by the legacy `DECIMAL` type. Its
/// exponent stays within `±MAX_EXPONENT`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "BigDecimal", into = "BigDecimal")]
pub struct LegacyDecimal(BigDecimal);

impl LegacyDecimal {
	pub fn new(inner: BigDecimal) -> Result<Self> {
		let (_, exponent) = inner.as_bigint_and_exponent();
		if exponent.unsigned_abs() > MAX_EXPONENT.unsigned_abs() {
			return Err(Error::InvalidDecimal(format!("exponent {exponent} is out of range")));
		}
		Ok(Self(inner))
	}

	pub fn from_parts(mantissa: i128, scale: u32) -> Result<Self> {
		Self::new(BigDecimal::new(BigInt::from(mantissa), i64::from(scale)))
	}

	/// Parses a decimal literal. Surrounding whitespace and `_` digit
	/// separators are ignored.
	pub fn parse(text: &str) -> Result<Self> {
		let needs_trimming = text.as_bytes().first().is_some_and(|b| b.is_ascii_whitespace())
			|| text.as_bytes().last().is_some_and(|b| b.is_ascii_whitespace());
		let has_underscores = text.as_bytes().contains(&b'_');

		let value = match (needs_trimming, has_underscores) {
			(false, false) => Cow::Borrowed(text),
			(true, false) => Cow::Borrowed(text.trim()),
			(false, true) => Cow::Owned(text.replace('_', "")),
			(true, true) => Cow::Owned(text.trim().replace('_', "")),
		};

		if value.is_empty() {
			return Err(Error::InvalidDecimal(text.to_string()));
		}

		let inner = BigDecimal::from_str(&value).map_err(|_| Error::InvalidDecimal(text.to_string()))?;
		Self::new(inner).map_err(|_| Error::InvalidDecimal(text.to_string()))
	}

	pub fn inner(&self) -> &BigDecimal {
		&self.0
	}

	/// Unscaled magnitude and sign with a non-negative scale.
	fn unscaled(&self) -> (BigUint, bool, u32) {
		let (digits, exponent) = self.0.as_bigint_and_exponent();
		let negative = digits.sign() == Sign::Minus;
		let magnitude = digits.magnitude().clone();
		// bounded by MAX_EXPONENT on construction
		let shift = exponent.clamp(-MAX_EXPONENT, MAX_EXPONENT);
		match u32::try_from(shift) {
			Ok(scale) => (magnitude, negative, scale),
			Err(_) => (magnitude * pow(BigUint::from(10u8), shift.unsigned_abs() as usize), negative, 0),
		}
	}

	pub fn to_text(&self, scale: Option<u32>) -> String {
		match scale {
			Some(scale) => self.to_string_with_scale(scale),
			None => self.to_string_natural(),
		}
	}

	/// Natural form at the value's own scale.
	pub fn to_string_natural(&self) -> String {
		self.to_string()
	}

	/// Renders with exactly `scale` fractional digits, rounding half up on
	/// the magnitude.
	pub fn to_string_with_scale(&self, scale: u32) -> String {
		let (mut magnitude, negative, current) = self.unscaled();

		if current > scale {
			let divisor = pow(BigUint::from(10u8), (current - scale) as usize);
			let remainder = &magnitude % &divisor;
			magnitude = &magnitude / &divisor;
			if remainder * 2u8 >= divisor {
				magnitude += 1u8;
			}
		} else if current < scale {
			magnitude *= pow(BigUint::from(10u8), (scale - current) as usize);
		}

		place_point(&magnitude.to_string(), scale as usize, negative)
	}
}

impl Display for LegacyDecimal {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		let (magnitude, negative, scale) = self.unscaled();
		f.write_str(&place_point(&magnitude.to_string(), scale as usize, negative))
	}
}

impl TryFrom<BigDecimal> for LegacyDecimal {
	type Error = Error;

	fn try_from(inner: BigDecimal) -> Result<Self> {
		Self::new(inner)
	}
}

impl From<LegacyDecimal> for BigDecimal {
	fn from(value: LegacyDecimal) -> Self {
		value.0
	}
}

impl FromStr for LegacyDecimal {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self> {
		Self::parse(s)
	}
}

impl From<LegacyDecimal> for Field {
	/// Narrows to a 128-bit decimal when the value fits, otherwise keeps the
	/// exact text.
	fn from(value: LegacyDecimal) -> Self {
		let (digits, exponent) = value.0.as_bigint_and_exponent();
		if let Ok(scale) = u32::try_from(exponent)
			&& scale <= 38
			&& let Some(mantissa) = digits.to_i128()
		{
			return Field::Decimal128(DecimalField::new(mantissa, scale));
		}
		Field::String(value.to_string().into_bytes())
	}
}
