// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 ReifyDB

use tessera_type::{
	DATETIME_TEXT_CAPACITY, LARGEINT_TEXT_CAPACITY, PrimitiveType, format_largeint, format_time_of_day, text_scale,
};
use tessera_wire_format::RowEncoder;

use super::{push_string_ref, unsupported};
use crate::{Datum, OutputExpr, PendingBatch, Result, RowBatch, TupleRow, WriterError};

pub(crate) fn convert_rows<E: RowEncoder>(
	encoder: &mut E,
	exprs: &[Box<dyn OutputExpr>],
	batch: &RowBatch,
	pending: &mut PendingBatch,
) -> Result<()> {
	for (index, row) in batch.iter().enumerate() {
		pending.begin(index);
		add_one_row(encoder, exprs, row)?;
		pending.push_row(encoder.buf());
	}
	pending.complete();
	Ok(())
}

fn add_one_row<E: RowEncoder>(encoder: &mut E, exprs: &[Box<dyn OutputExpr>], row: &TupleRow) -> Result<()> {
	encoder.reset();
	for expr in exprs {
		match expr.get_value(row) {
			None => encoder.push_null()?,
			Some(datum) => push_datum(encoder, expr.result_type(), expr.output_scale(), datum)?,
		}
	}
	Ok(())
}

fn push_datum<E: RowEncoder>(encoder: &mut E, ty: PrimitiveType, output_scale: i32, datum: &Datum) -> Result<()> {
	use PrimitiveType as T;

	match (ty, datum) {
		(T::Boolean, Datum::Boolean(v)) => encoder.push_tinyint(*v as i8)?,
		(T::Boolean | T::TinyInt, Datum::TinyInt(v)) => encoder.push_tinyint(*v)?,
		(T::SmallInt, Datum::SmallInt(v)) => encoder.push_smallint(*v)?,
		(T::Int, Datum::Int(v)) => encoder.push_int(*v)?,
		(T::BigInt, Datum::BigInt(v)) => encoder.push_bigint(*v)?,
		(T::LargeInt, Datum::LargeInt(v)) => {
			let mut buf = [0u8; LARGEINT_TEXT_CAPACITY];
			encoder.push_string(format_largeint(*v, &mut buf))?
		}
		(T::Float, Datum::Float(v)) => encoder.push_float(*v)?,
		(T::Double, Datum::Double(v)) => encoder.push_double(*v)?,
		(T::Time, Datum::Time(v)) => encoder.push_string(format_time_of_day(*v).as_bytes())?,
		(T::Date | T::DateTime, Datum::DateTime(v)) => {
			let mut buf = [0u8; DATETIME_TEXT_CAPACITY];
			encoder.push_string(v.to_text(&mut buf))?
		}
		(T::Hll | T::Object, _) => encoder.push_null()?,
		(T::Decimal, Datum::Decimal(v)) => encoder.push_string(v.to_text(text_scale(output_scale)).as_bytes())?,
		(T::DecimalV2, Datum::DecimalV2(v)) => {
			encoder.push_string(v.to_text(text_scale(output_scale)).as_bytes())?
		}
		(T::Char | T::Varchar | T::String, datum) => match datum.as_string_ref() {
			Some(value) => push_string_ref(encoder, value)?,
			None => return Err(mismatch(ty, datum)),
		},
		(T::Null | T::Binary | T::Array, _) => return Err(unsupported(ty)),
		(ty, datum) => return Err(mismatch(ty, datum)),
	}
	Ok(())
}

fn mismatch(declared: PrimitiveType, datum: &Datum) -> WriterError {
	WriterError::DatumTypeMismatch {
		declared,
		actual: datum.kind_name(),
	}
}
