// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 ReifyDB

use tessera_column::{Block, Column, ColumnDecimal, ColumnString, ColumnVector};
use tessera_type::{
	DATETIME_TEXT_CAPACITY, DECIMALV2_SCALE, DateTimeValue, DecimalV2Value, LARGEINT_TEXT_CAPACITY, LegacyDecimal, PrimitiveType,
	format_largeint, format_time_of_day, text_scale,
};
use tessera_wire_format::RowEncoder;
use tracing::trace;

use super::{push_string_ref, unsupported};
use crate::{PendingBatch, Result, VExpr, WriterError};

/// Reads one storage layout and writes its rows as a single wire kind.
trait ColumnConverter {
	type Storage;

	fn storage(column: &Column) -> Option<&Self::Storage>;

	/// Rejects storage whose layout the converter cannot read.
	fn check(_column: usize, _storage: &Self::Storage) -> Result<()> {
		Ok(())
	}

	fn push<E: RowEncoder>(storage: &Self::Storage, row: usize, scale: Option<u32>, encoder: &mut E) -> Result<()>;
}

macro_rules! converter {
	($name:ident, $variant:ident, $storage:ty, |$col:ident, $row:ident, $scale:ident, $enc:ident| $body:expr) => {
		struct $name;

		impl ColumnConverter for $name {
			type Storage = $storage;

			fn storage(column: &Column) -> Option<&Self::Storage> {
				match column {
					Column::$variant(c) => Some(c),
					_ => None,
				}
			}

			#[allow(unused_variables)]
			fn push<E: RowEncoder>(
				$col: &Self::Storage,
				$row: usize,
				$scale: Option<u32>,
				$enc: &mut E,
			) -> Result<()> {
				$body?;
				Ok(())
			}
		}
	};
}

converter!(TinyIntConverter, Int8, ColumnVector<i8>, |c, row, scale, e| e.push_tinyint(c[row]));
converter!(SmallIntConverter, Int16, ColumnVector<i16>, |c, row, scale, e| e.push_smallint(c[row]));
converter!(IntConverter, Int32, ColumnVector<i32>, |c, row, scale, e| e.push_int(c[row]));
converter!(BigIntConverter, Int64, ColumnVector<i64>, |c, row, scale, e| e.push_bigint(c[row]));
converter!(LargeIntConverter, Int128, ColumnVector<i128>, |c, row, scale, e| {
	let mut buf = [0u8; LARGEINT_TEXT_CAPACITY];
	e.push_string(format_largeint(c[row], &mut buf))
});
converter!(FloatConverter, Float32, ColumnVector<f32>, |c, row, scale, e| e.push_float(c[row]));
converter!(DoubleConverter, Float64, ColumnVector<f64>, |c, row, scale, e| e.push_double(c[row]));
converter!(TimeConverter, Float64, ColumnVector<f64>, |c, row, scale, e| {
	e.push_string(format_time_of_day(c[row]).as_bytes())
});
converter!(DateTimeConverter, DateTime, ColumnVector<DateTimeValue>, |c, row, scale, e| {
	let mut buf = [0u8; DATETIME_TEXT_CAPACITY];
	e.push_string(c[row].to_text(&mut buf))
});
converter!(StringConverter, String, ColumnString, |c, row, scale, e| push_string_ref(e, c.get_data_at(row)));
converter!(DecimalConverter, Decimal, ColumnVector<LegacyDecimal>, |c, row, scale, e| {
	e.push_string(c[row].to_text(scale).as_bytes())
});

/// Raw values are read as billionths, so the column must carry that scale.
struct DecimalV2Converter;

impl ColumnConverter for DecimalV2Converter {
	type Storage = ColumnDecimal<i128>;

	fn storage(column: &Column) -> Option<&Self::Storage> {
		match column {
			Column::Decimal128(c) => Some(c),
			_ => None,
		}
	}

	fn check(column: usize, storage: &Self::Storage) -> Result<()> {
		if storage.scale() != DECIMALV2_SCALE {
			return Err(WriterError::ColumnScaleMismatch {
				column,
				scale: storage.scale(),
				expected: DECIMALV2_SCALE,
			});
		}
		Ok(())
	}

	fn push<E: RowEncoder>(storage: &Self::Storage, row: usize, scale: Option<u32>, encoder: &mut E) -> Result<()> {
		encoder.push_string(DecimalV2Value::new(storage.data()[row]).to_text(scale).as_bytes())?;
		Ok(())
	}
}

/// Aggregate states have no text form; every row is NULL whatever the
/// storage holds.
struct ObjectConverter;

impl ColumnConverter for ObjectConverter {
	type Storage = Column;

	fn storage(column: &Column) -> Option<&Column> {
		Some(column)
	}

	fn push<E: RowEncoder>(_: &Column, _: usize, _: Option<u32>, encoder: &mut E) -> Result<()> {
		encoder.push_null()?;
		Ok(())
	}
}

/// Converts every output column of `block` and appends the cells onto the
/// rows of `pending`. `buffers` holds one encoder per row; `max_row_bytes`
/// bounds each assembled row.
pub(crate) fn convert_block<E: RowEncoder>(
	exprs: &[Box<dyn VExpr>],
	block: &mut Block,
	buffers: &mut [E],
	pending: &mut PendingBatch,
	max_row_bytes: usize,
) -> Result<()> {
	let positions = exprs.iter().map(|expr| expr.execute(block)).collect::<Result<Vec<_>>>()?;

	for (index, (expr, position)) in exprs.iter().zip(positions).enumerate() {
		pending.begin(index);
		let column = block.get_by_position(position).ok_or(WriterError::MissingColumn {
			position,
			columns: block.columns(),
		})?;
		trace!(index, name = %column.name, ty = %expr.result_type(), "converting column");

		convert_column(index, expr.result_type(), expr.output_scale(), &column.column, buffers)?;
		pending.append_column(buffers.iter().map(|encoder| encoder.buf()), max_row_bytes)?;
	}

	pending.complete();
	Ok(())
}

fn convert_column<E: RowEncoder>(
	index: usize,
	declared: PrimitiveType,
	output_scale: i32,
	column: &Column,
	buffers: &mut [E],
) -> Result<()> {
	use PrimitiveType as T;

	let scale = text_scale(output_scale);
	match declared {
		T::Boolean | T::TinyInt => dispatch::<TinyIntConverter, E>(index, declared, scale, column, buffers),
		T::SmallInt => dispatch::<SmallIntConverter, E>(index, declared, scale, column, buffers),
		T::Int => dispatch::<IntConverter, E>(index, declared, scale, column, buffers),
		T::BigInt => dispatch::<BigIntConverter, E>(index, declared, scale, column, buffers),
		T::LargeInt => dispatch::<LargeIntConverter, E>(index, declared, scale, column, buffers),
		T::Float => dispatch::<FloatConverter, E>(index, declared, scale, column, buffers),
		T::Double => dispatch::<DoubleConverter, E>(index, declared, scale, column, buffers),
		T::Time => dispatch::<TimeConverter, E>(index, declared, scale, column, buffers),
		T::Date | T::DateTime => dispatch::<DateTimeConverter, E>(index, declared, scale, column, buffers),
		T::Char | T::Varchar | T::String => dispatch::<StringConverter, E>(index, declared, scale, column, buffers),
		T::Decimal => dispatch::<DecimalConverter, E>(index, declared, scale, column, buffers),
		T::DecimalV2 => dispatch::<DecimalV2Converter, E>(index, declared, scale, column, buffers),
		T::Hll | T::Object => dispatch::<ObjectConverter, E>(index, declared, scale, column, buffers),
		T::Null | T::Binary | T::Array => Err(unsupported(declared)),
	}
}

/// Resolves the storage once for the whole column, then picks the nullable
/// or non-nullable loop.
fn dispatch<C: ColumnConverter, E: RowEncoder>(
	index: usize,
	declared: PrimitiveType,
	scale: Option<u32>,
	column: &Column,
	buffers: &mut [E],
) -> Result<()> {
	let (nested, null_map) = match column {
		Column::Nullable(nullable) => (nullable.nested(), Some(nullable.null_map())),
		other => (other, None),
	};

	let storage = C::storage(nested).ok_or(WriterError::ColumnTypeMismatch {
		column: index,
		declared,
		stored: nested.kind_name(),
	})?;
	C::check(index, storage)?;

	match null_map {
		Some(null_map) => convert_values::<C, E, true>(storage, null_map, scale, buffers),
		None => convert_values::<C, E, false>(storage, &[], scale, buffers),
	}
}

fn convert_values<C: ColumnConverter, E: RowEncoder, const NULLABLE: bool>(
	storage: &C::Storage,
	null_map: &[bool],
	scale: Option<u32>,
	buffers: &mut [E],
) -> Result<()> {
	for (row, encoder) in buffers.iter_mut().enumerate() {
		encoder.reset();
		if NULLABLE && null_map[row] {
			encoder.push_null()?;
			continue;
		}
		C::push(storage, row, scale, encoder)?;
	}
	Ok(())
}

#[cfg(test)]
pub mod tests {
	use tessera_column::{ColumnNullable, ColumnOpaque, ColumnWithTypeAndName};
	use tessera_wire_format::{MysqlRowBuffer, decode_row};

	use super::*;
	use crate::ColumnRef;

	fn convert(ty: PrimitiveType, scale: i32, column: impl Into<Column>) -> Result<Vec<Option<String>>> {
		let column = column.into();
		let mut buffers = vec![MysqlRowBuffer::new(); column.len()];
		convert_column(0, ty, scale, &column, &mut buffers)?;
		Ok(buffers
			.iter()
			.map(|b| {
				let mut values = decode_row(b.buf()).unwrap();
				assert_eq!(values.len(), 1);
				values.pop().unwrap().map(|v| String::from_utf8(v).unwrap())
			})
			.collect())
	}

	fn some(values: &[&str]) -> Vec<Option<String>> {
		values.iter().map(|v| Some(v.to_string())).collect()
	}

	#[test]
	fn test_integer_columns() {
		assert_eq!(convert(PrimitiveType::Boolean, -1, ColumnVector::from_vec(vec![1i8, 0])).unwrap(), some(&["1", "0"]));
		assert_eq!(convert(PrimitiveType::SmallInt, -1, ColumnVector::from_vec(vec![-7i16])).unwrap(), some(&["-7"]));
		assert_eq!(
			convert(PrimitiveType::BigInt, -1, ColumnVector::from_vec(vec![i64::MIN])).unwrap(),
			some(&["-9223372036854775808"])
		);
		assert_eq!(
			convert(PrimitiveType::LargeInt, -1, ColumnVector::from_vec(vec![i128::MAX])).unwrap(),
			some(&["170141183460469231731687303715884105727"])
		);
	}

	#[test]
	fn test_time_and_double_share_storage() {
		let seconds = || ColumnVector::from_vec(vec![59.9f64]);
		assert_eq!(convert(PrimitiveType::Time, -1, seconds()).unwrap(), some(&["00:00:59"]));
		assert_eq!(convert(PrimitiveType::Double, -1, seconds()).unwrap(), some(&["59.9"]));
	}

	#[test]
	fn test_decimal_v2_column_uses_output_scale() {
		let column = || ColumnDecimal::from_vec(vec![1_500_000_000i128, -5_000_000], 9);
		assert_eq!(convert(PrimitiveType::DecimalV2, 2, column()).unwrap(), some(&["1.50", "-0.01"]));
		assert_eq!(convert(PrimitiveType::DecimalV2, -1, column()).unwrap(), some(&["1.5", "-0.005"]));
	}

	#[test]
	fn test_decimal_v2_column_at_other_scale_is_rejected() {
		assert_eq!(
			convert(PrimitiveType::DecimalV2, 2, ColumnDecimal::from_vec(vec![150i128], 2)),
			Err(WriterError::ColumnScaleMismatch {
				column: 0,
				scale: 2,
				expected: 9,
			})
		);
	}

	#[test]
	fn test_opaque_column_is_null() {
		let states = ColumnOpaque::from_vec("hll_union", vec![vec![1, 2], vec![]]);
		assert_eq!(convert(PrimitiveType::Hll, -1, states).unwrap(), vec![None, None]);
	}

	#[test]
	fn test_nullable_skips_storage_at_null_rows() {
		let nested = Column::String(["a", "", "c"].into_iter().collect::<ColumnString>());
		let column = ColumnNullable::new(nested, vec![false, true, false]).unwrap();
		assert_eq!(
			convert(PrimitiveType::Varchar, -1, column).unwrap(),
			vec![Some("a".to_string()), None, Some("c".to_string())]
		);
	}

	#[test]
	fn test_storage_mismatch() {
		assert_eq!(
			convert(PrimitiveType::Int, -1, ColumnVector::from_vec(vec![1i64])),
			Err(WriterError::ColumnTypeMismatch {
				column: 0,
				declared: PrimitiveType::Int,
				stored: "Int64"
			})
		);
	}

	#[test]
	fn test_unsupported_type() {
		assert_eq!(
			convert(PrimitiveType::Binary, -1, ColumnString::new()),
			Err(WriterError::UnsupportedType(PrimitiveType::Binary))
		);
	}

	#[test]
	fn test_convert_block_interleaves_columns() {
		let mut block = Block::from_columns(vec![
			ColumnWithTypeAndName::new("id", PrimitiveType::Int, ColumnVector::from_vec(vec![1i32, 2])),
			ColumnWithTypeAndName::new("name", PrimitiveType::Varchar, ["x", "y"].into_iter().collect::<ColumnString>()),
		])
		.unwrap();
		let exprs: Vec<Box<dyn VExpr>> =
			vec![Box::new(ColumnRef::new(1, PrimitiveType::Varchar)), Box::new(ColumnRef::new(0, PrimitiveType::Int))];

		let mut buffers = vec![MysqlRowBuffer::new(); 2];
		let mut pending = PendingBatch::with_rows(2);
		convert_block(&exprs, &mut block, &mut buffers, &mut pending, usize::MAX).unwrap();

		assert_eq!(pending.state(), crate::BatchState::Complete);
		assert_eq!(pending.rows(), &[b"\x01x\x011".to_vec(), b"\x01y\x012".to_vec()]);
	}

	#[test]
	fn test_convert_block_bounds_assembled_rows() {
		let cells = || vec!["a".repeat(20)].into_iter().collect::<ColumnString>();
		let mut block = Block::from_columns(vec![
			ColumnWithTypeAndName::new("a", PrimitiveType::Varchar, cells()),
			ColumnWithTypeAndName::new("b", PrimitiveType::Varchar, cells()),
		])
		.unwrap();
		let exprs: Vec<Box<dyn VExpr>> = vec![
			Box::new(ColumnRef::new(0, PrimitiveType::Varchar)),
			Box::new(ColumnRef::new(1, PrimitiveType::Varchar)),
		];

		let mut buffers = vec![MysqlRowBuffer::with_max_row_bytes(32); 1];
		let mut pending = PendingBatch::with_rows(1);
		assert_eq!(
			convert_block(&exprs, &mut block, &mut buffers, &mut pending, 32),
			Err(WriterError::Encoding(tessera_wire_format::EncodeError::RowTooLarge {
				size: 42,
				limit: 32,
			}))
		);
		assert_eq!(pending.state(), crate::BatchState::Converting(1));
	}
}
