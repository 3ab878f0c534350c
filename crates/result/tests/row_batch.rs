// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 ReifyDB

mod common;

use std::sync::Arc;

use common::{CollectSink, cell};
use tessera_result::{
	BatchState, Datum, OutputExpr, OutputExprs, ResultSink, ResultWriter, ResultWriterConfig, RowBatch, SinkError,
	SlotRef, TupleRow, WriterError,
};
use tessera_type::{DecimalV2Value, PrimitiveType};
use tessera_wire_format::EncodeError;

fn writer(sink: Arc<CollectSink>, exprs: Vec<Box<dyn OutputExpr>>, config: ResultWriterConfig) -> ResultWriter {
	let sink: Arc<dyn ResultSink> = sink;
	let mut writer = ResultWriter::new(Some(sink), OutputExprs::Row(exprs), config);
	writer.init().unwrap();
	writer
}

fn int_varchar_decimal() -> Vec<Box<dyn OutputExpr>> {
	vec![
		Box::new(SlotRef::new(0, PrimitiveType::Int)),
		Box::new(SlotRef::new(1, PrimitiveType::Varchar)),
		Box::new(SlotRef::new(2, PrimitiveType::DecimalV2).with_output_scale(2)),
	]
}

#[test]
fn test_mixed_row_batch() {
	let sink = CollectSink::new();
	let mut writer = writer(sink.clone(), int_varchar_decimal(), ResultWriterConfig::default());

	let batch: RowBatch = vec![
		TupleRow::new(vec![
			Some(Datum::Int(1)),
			Some(Datum::string("a")),
			Some(Datum::DecimalV2(DecimalV2Value::from_parts(1, 500_000_000))),
		]),
		TupleRow::new(vec![
			None,
			Some(Datum::DetachedString {
				len: 0,
			}),
			None,
		]),
		TupleRow::new(vec![
			Some(Datum::Int(3)),
			Some(Datum::DetachedString {
				len: 8,
			}),
			Some(Datum::DecimalV2(DecimalV2Value::new(0))),
		]),
	]
	.into();

	writer.append_row_batch(&batch).unwrap();
	writer.close().unwrap();

	assert_eq!(
		sink.rows(),
		vec![
			vec![cell("1"), cell("a"), cell("1.50")],
			vec![None, cell(""), None],
			vec![cell("3"), None, cell("0.00")],
		]
	);
	assert_eq!(writer.written_rows(), 3);
	assert_eq!(writer.reported_rows(), 3);
	assert_eq!(writer.last_batch_state(), BatchState::Delivered);
}

#[test]
fn test_failure_midway_delivers_nothing() {
	let sink = CollectSink::new();
	let exprs: Vec<Box<dyn OutputExpr>> = vec![Box::new(SlotRef::new(0, PrimitiveType::Varchar))];
	let mut writer = writer(sink.clone(), exprs, ResultWriterConfig::new().max_row_bytes(16));

	let batch: RowBatch = (0..10)
		.map(|i| {
			let value = if i == 4 {
				"x".repeat(64)
			} else {
				format!("row {i}")
			};
			TupleRow::new(vec![Some(Datum::string(value))])
		})
		.collect();

	let err = writer.append_row_batch(&batch).unwrap_err();
	assert!(matches!(err, WriterError::Encoding(EncodeError::RowTooLarge { .. })));
	assert!(err.to_string().starts_with("pack mysql buffer failed"));
	assert_eq!(sink.batches(), 0);
	assert_eq!(writer.written_rows(), 0);
	assert_eq!(writer.last_batch_state(), BatchState::Failed);
}

#[test]
fn test_prior_batches_stay_delivered() {
	let sink = CollectSink::new();
	let exprs: Vec<Box<dyn OutputExpr>> = vec![Box::new(SlotRef::new(0, PrimitiveType::BigInt))];
	let mut writer = writer(sink.clone(), exprs, ResultWriterConfig::default());

	let good: RowBatch = vec![TupleRow::new(vec![Some(Datum::BigInt(1))])].into();
	let bad: RowBatch = vec![TupleRow::new(vec![Some(Datum::Int(2))])].into();

	writer.append_row_batch(&good).unwrap();
	assert_eq!(
		writer.append_row_batch(&bad),
		Err(WriterError::DatumTypeMismatch {
			declared: PrimitiveType::BigInt,
			actual: "Int"
		})
	);
	writer.close().unwrap();

	assert_eq!(sink.rows(), vec![vec![cell("1")]]);
	assert_eq!(writer.reported_rows(), 1);
}

#[test]
fn test_empty_batch_is_noop() {
	let sink = CollectSink::new();
	let mut writer = writer(sink.clone(), int_varchar_decimal(), ResultWriterConfig::default());

	writer.append_row_batch(&RowBatch::new()).unwrap();
	assert_eq!(sink.batches(), 0);
	assert_eq!(writer.last_batch_state(), BatchState::Empty);
}

#[test]
fn test_sink_rejection() {
	let sink = CollectSink::rejecting();
	let exprs: Vec<Box<dyn OutputExpr>> = vec![Box::new(SlotRef::new(0, PrimitiveType::TinyInt))];
	let mut writer = writer(sink, exprs, ResultWriterConfig::default());

	let batch: RowBatch = vec![TupleRow::new(vec![Some(Datum::TinyInt(1))])].into();
	assert_eq!(
		writer.append_row_batch(&batch),
		Err(WriterError::Delivery(SinkError::Rejected("fetch buffer is full".to_string())))
	);
	assert_eq!(writer.written_rows(), 0);
	assert_eq!(writer.last_batch_state(), BatchState::Failed);
}

#[test]
fn test_unsupported_type_fails_batch() {
	let sink = CollectSink::new();
	let exprs: Vec<Box<dyn OutputExpr>> = vec![Box::new(SlotRef::new(0, PrimitiveType::Array))];
	let mut writer = writer(sink.clone(), exprs, ResultWriterConfig::default());

	let batch: RowBatch = vec![TupleRow::new(vec![Some(Datum::Int(1))])].into();
	assert_eq!(writer.append_row_batch(&batch), Err(WriterError::UnsupportedType(PrimitiveType::Array)));
	assert_eq!(sink.batches(), 0);
}

#[test]
fn test_aggregate_state_is_null() {
	let sink = CollectSink::new();
	let exprs: Vec<Box<dyn OutputExpr>> = vec![Box::new(SlotRef::new(0, PrimitiveType::Object))];
	let mut writer = writer(sink.clone(), exprs, ResultWriterConfig::default());

	let batch: RowBatch = (0..3).map(|i| TupleRow::new(vec![Some(Datum::Object(vec![i; 4]))])).collect();
	writer.append_row_batch(&batch).unwrap();
	assert_eq!(sink.rows(), vec![vec![None]; 3]);
}

#[test]
fn test_init_requires_sink() {
	let mut writer = ResultWriter::new(None, OutputExprs::Row(Vec::new()), ResultWriterConfig::default());
	assert!(matches!(writer.init(), Err(WriterError::Configuration(_))));
	assert!(matches!(writer.append_row_batch(&RowBatch::new()), Err(WriterError::Configuration(_))));
}

#[test]
fn test_init_rejects_zero_batch_size() {
	let sink: Arc<dyn ResultSink> = CollectSink::new();
	let mut writer =
		ResultWriter::new(Some(sink), OutputExprs::Row(Vec::new()), ResultWriterConfig::new().batch_size(0));
	assert!(matches!(writer.init(), Err(WriterError::Configuration(_))));
}

#[test]
fn test_close_is_idempotent() {
	let sink = CollectSink::new();
	let exprs: Vec<Box<dyn OutputExpr>> = vec![Box::new(SlotRef::new(0, PrimitiveType::Int))];
	let mut writer = writer(sink, exprs, ResultWriterConfig::default());

	let batch: RowBatch = vec![TupleRow::new(vec![Some(Datum::Int(1))]); 2].into();
	writer.append_row_batch(&batch).unwrap();
	writer.close().unwrap();
	writer.close().unwrap();
	assert_eq!(writer.reported_rows(), 2);
}
