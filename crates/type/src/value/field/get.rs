// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 ReifyDB

use super::{AggregateFunctionStateData, Array, Field, FieldKind, Tuple};
use crate::{Error, Result, value::decimal::DecimalField};

/// Native payload types that a [`Field`] can hold, with the tag each maps to.
pub trait FieldType: Sized {
	const KIND: FieldKind;

	fn from_field(field: &Field) -> Option<&Self>;

	fn from_field_mut(field: &mut Field) -> Option<&mut Self>;
}

macro_rules! impl_field_type {
	($t:ty, $variant:ident) => {
		impl FieldType for $t {
			const KIND: FieldKind = FieldKind::$variant;

			#[inline]
			fn from_field(field: &Field) -> Option<&Self> {
				match field {
					Field::$variant(v) => Some(v),
					_ => None,
				}
			}

			#[inline]
			fn from_field_mut(field: &mut Field) -> Option<&mut Self> {
				match field {
					Field::$variant(v) => Some(v),
					_ => None,
				}
			}
		}
	};
}

impl_field_type!(u64, UInt64);
impl_field_type!(i64, Int64);
impl_field_type!(f64, Float64);
impl_field_type!(u128, UInt128);
impl_field_type!(i128, Int128);
impl_field_type!(Vec<u8>, String);
impl_field_type!(Array, Array);
impl_field_type!(Tuple, Tuple);
impl_field_type!(DecimalField<i32>, Decimal32);
impl_field_type!(DecimalField<i64>, Decimal64);
impl_field_type!(DecimalField<i128>, Decimal128);
impl_field_type!(AggregateFunctionStateData, AggregateFunctionState);

impl Field {
	/// Returns the payload as `T`.
	///
	/// # Panics
	///
	/// Panics when the field holds a different kind. Use [`Field::try_get`]
	/// or [`Field::safe_get`] when the kind is not known up front.
	pub fn get<T: FieldType>(&self) -> &T {
		match T::from_field(self) {
			Some(v) => v,
			None => panic!("called `Field::get::<{}>()` on a {} field", T::KIND, self.kind()),
		}
	}

	/// Mutable counterpart of [`Field::get`], with the same panic.
	pub fn get_mut<T: FieldType>(&mut self) -> &mut T {
		let kind = self.kind();
		match T::from_field_mut(self) {
			Some(v) => v,
			None => panic!("called `Field::get_mut::<{}>()` on a {} field", T::KIND, kind),
		}
	}

	pub fn try_get<T: FieldType>(&self) -> Option<&T> {
		T::from_field(self)
	}

	/// Copies the payload into `result` when the kind matches. `result` is
	/// left untouched otherwise.
	pub fn try_get_into<T: FieldType + Clone>(&self, result: &mut T) -> bool {
		match T::from_field(self) {
			Some(v) => {
				result.clone_from(v);
				true
			}
			None => false,
		}
	}

	pub fn safe_get<T: FieldType>(&self) -> Result<&T> {
		T::from_field(self).ok_or(Error::BadGet {
			has: self.kind(),
			requested: T::KIND,
		})
	}

	pub fn safe_get_mut<T: FieldType>(&mut self) -> Result<&mut T> {
		let has = self.kind();
		T::from_field_mut(self).ok_or(Error::BadGet {
			has,
			requested: T::KIND,
		})
	}
}
