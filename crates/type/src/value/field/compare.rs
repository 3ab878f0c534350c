// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 ReifyDB

use std::cmp::Ordering;

use super::Field;
use crate::{Error, Result};

impl Field {
	/// Total order over fields.
	///
	/// Fields of different kinds order by their kind tag. Within a kind,
	/// floats use the IEEE total order, decimals compare by value after
	/// rescaling, and strings, arrays and tuples compare lexicographically.
	/// Aggregate function states have no order and yield an error.
	pub fn try_cmp(&self, other: &Field) -> Result<Ordering> {
		let (l_kind, r_kind) = (self.kind(), other.kind());
		if l_kind != r_kind {
			return Ok(l_kind.cmp(&r_kind));
		}

		Ok(match (self, other) {
			(Field::Null, Field::Null) => Ordering::Equal,
			(Field::UInt64(l), Field::UInt64(r)) => l.cmp(r),
			(Field::Int64(l), Field::Int64(r)) => l.cmp(r),
			(Field::Float64(l), Field::Float64(r)) => l.total_cmp(r),
			(Field::UInt128(l), Field::UInt128(r)) => l.cmp(r),
			(Field::Int128(l), Field::Int128(r)) => l.cmp(r),
			(Field::String(l), Field::String(r)) => l.cmp(r),
			(Field::Array(l), Field::Array(r)) => cmp_lists(l, r)?,
			(Field::Tuple(l), Field::Tuple(r)) => cmp_lists(l, r)?,
			(Field::Decimal32(l), Field::Decimal32(r)) => l.cmp_decimal(r),
			(Field::Decimal64(l), Field::Decimal64(r)) => l.cmp_decimal(r),
			(Field::Decimal128(l), Field::Decimal128(r)) => l.cmp_decimal(r),
			(Field::AggregateFunctionState(l), Field::AggregateFunctionState(_)) => {
				return Err(Error::IncomparableAggregateState {
					name: l.name.clone(),
				});
			}
			(l, _) => unreachable!("fields of kind {} already matched", l.kind()),
		})
	}

	/// Equality over fields. Floats are equal when their bit patterns are,
	/// so `NaN` equals itself and `0.0` differs from `-0.0`. Aggregate
	/// function states only compare when produced by the same function.
	pub fn try_eq(&self, other: &Field) -> Result<bool> {
		if self.kind() != other.kind() {
			return Ok(false);
		}

		Ok(match (self, other) {
			(Field::Null, Field::Null) => true,
			(Field::UInt64(l), Field::UInt64(r)) => l == r,
			(Field::Int64(l), Field::Int64(r)) => l == r,
			(Field::Float64(l), Field::Float64(r)) => l.to_bits() == r.to_bits(),
			(Field::UInt128(l), Field::UInt128(r)) => l == r,
			(Field::Int128(l), Field::Int128(r)) => l == r,
			(Field::String(l), Field::String(r)) => l == r,
			(Field::Array(l), Field::Array(r)) => eq_lists(l, r)?,
			(Field::Tuple(l), Field::Tuple(r)) => eq_lists(l, r)?,
			(Field::Decimal32(l), Field::Decimal32(r)) => l.eq_decimal(r),
			(Field::Decimal64(l), Field::Decimal64(r)) => l.eq_decimal(r),
			(Field::Decimal128(l), Field::Decimal128(r)) => l.eq_decimal(r),
			(Field::AggregateFunctionState(l), Field::AggregateFunctionState(r)) => {
				if l.name != r.name {
					return Err(Error::AggregateStateMismatch {
						left: l.name.clone(),
						right: r.name.clone(),
					});
				}
				l.data == r.data
			}
			(l, _) => unreachable!("fields of kind {} already matched", l.kind()),
		})
	}
}

fn cmp_lists(l: &[Field], r: &[Field]) -> Result<Ordering> {
	for (l, r) in l.iter().zip(r) {
		match l.try_cmp(r)? {
			Ordering::Equal => continue,
			ordering => return Ok(ordering),
		}
	}
	Ok(l.len().cmp(&r.len()))
}

fn eq_lists(l: &[Field], r: &[Field]) -> Result<bool> {
	if l.len() != r.len() {
		return Ok(false);
	}
	for (l, r) in l.iter().zip(r) {
		if !l.try_eq(r)? {
			return Ok(false);
		}
	}
	Ok(true)
}

impl PartialEq for Field {
	/// Falls back to `false` where [`Field::try_eq`] errors.
	fn eq(&self, other: &Self) -> bool {
		self.try_eq(other).unwrap_or(false)
	}
}

impl PartialOrd for Field {
	/// `None` where [`Field::try_cmp`] errors.
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		self.try_cmp(other).ok()
	}
}

#[cfg(test)]
pub mod tests {
	use super::*;
	use crate::value::{AggregateFunctionStateData, Array, DecimalField, Tuple};

	fn state(name: &str, data: &[u8]) -> Field {
		Field::AggregateFunctionState(AggregateFunctionStateData::new(name, data))
	}

	#[test]
	fn test_kind_orders_first() {
		assert!(Field::Null < Field::UInt64(0));
		assert!(Field::UInt64(u64::MAX) < Field::Int64(i64::MIN));
		assert!(Field::Int128(i128::MAX) < Field::string(""));
		assert!(Field::string("zzz") < Field::Array(Array::default()));
	}

	#[test]
	fn test_same_kind_by_value() {
		assert_eq!(Field::Int64(-1).try_cmp(&Field::Int64(1)).unwrap(), Ordering::Less);
		assert_eq!(Field::string("abc").try_cmp(&Field::string("abd")).unwrap(), Ordering::Less);
		assert_eq!(Field::string("ab").try_cmp(&Field::string("abc")).unwrap(), Ordering::Less);
		assert_eq!(Field::Null.try_cmp(&Field::Null).unwrap(), Ordering::Equal);
	}

	#[test]
	fn test_float_equality_is_bitwise() {
		assert_eq!(Field::Float64(f64::NAN), Field::Float64(f64::NAN));
		assert_ne!(Field::Float64(0.0), Field::Float64(-0.0));
		assert!(Field::Float64(-0.0) < Field::Float64(0.0));
	}

	#[test]
	fn test_decimals_compare_after_rescale() {
		let a = Field::Decimal64(DecimalField::new(150, 2));
		let b = Field::Decimal64(DecimalField::new(15, 1));
		assert_eq!(a, b);

		let c = Field::Decimal64(DecimalField::new(151, 2));
		assert!(b < c);
	}

	#[test]
	fn test_lists_lexicographic() {
		let short = Field::Array(Array::new(vec![Field::Int64(1)]));
		let long = Field::Array(Array::new(vec![Field::Int64(1), Field::Int64(0)]));
		let bigger = Field::Array(Array::new(vec![Field::Int64(2)]));
		assert!(short < long);
		assert!(long < bigger);

		let t1 = Field::Tuple(Tuple::new(vec![Field::string("a"), Field::Null]));
		let t2 = Field::Tuple(Tuple::new(vec![Field::string("a"), Field::Null]));
		assert_eq!(t1, t2);
	}

	#[test]
	fn test_aggregate_state_has_no_order() {
		let err = state("sum", b"1").try_cmp(&state("sum", b"2")).unwrap_err();
		assert_eq!(
			err,
			Error::IncomparableAggregateState {
				name: "sum".to_string()
			}
		);
		assert_eq!(state("sum", b"1").partial_cmp(&state("sum", b"2")), None);
	}

	#[test]
	fn test_aggregate_state_equality() {
		assert!(state("sum", b"1").try_eq(&state("sum", b"1")).unwrap());
		assert!(!state("sum", b"1").try_eq(&state("sum", b"2")).unwrap());
		assert!(matches!(
			state("sum", b"1").try_eq(&state("avg", b"1")),
			Err(Error::AggregateStateMismatch { .. })
		));
	}

	#[test]
	fn test_aggregate_state_error_propagates_through_lists() {
		let l = Field::Array(Array::new(vec![state("sum", b"1")]));
		let r = Field::Array(Array::new(vec![state("sum", b"1")]));
		assert!(l.try_cmp(&r).is_err());
	}

	#[test]
	fn test_different_kinds_never_equal() {
		assert!(!Field::Int64(1).try_eq(&Field::UInt64(1)).unwrap());
		assert_ne!(Field::string("1"), Field::Int64(1));
	}
}
