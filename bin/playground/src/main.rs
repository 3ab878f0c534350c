// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 ReifyDB

#![cfg_attr(not(debug_assertions), deny(warnings))]

use std::sync::Arc;

use tessera_column::{
	Block, Column, ColumnDecimal, ColumnNullable, ColumnOpaque, ColumnString, ColumnVector, ColumnWithTypeAndName,
};
use tessera_result::{
	ColumnRef, OutputExprs, ResultBatch, ResultSink, ResultWriter, ResultWriterConfig, SinkError, VExpr, WriterError,
};
use tessera_type::{DataType, DateTimeValue, PrimitiveType};
use tessera_wire_format::MysqlRowReader;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Prints every row it receives, one cell per column.
struct PrintSink;

impl ResultSink for PrintSink {
	fn add_batch(&self, batch: ResultBatch) -> Result<(), SinkError> {
		info!(rows = batch.len(), "received batch");
		for row in batch.iter() {
			let cells = MysqlRowReader::new(row)
				.map(|cell| match cell {
					Ok(Some(bytes)) => String::from_utf8_lossy(bytes).into_owned(),
					Ok(None) => "NULL".to_string(),
					Err(err) => format!("<{err}>"),
				})
				.collect::<Vec<_>>();
			println!("| {} |", cells.join(" | "));
		}
		Ok(())
	}
}

fn sample_block() -> Result<Block, WriterError> {
	let ids = ColumnNullable::new(Column::from(ColumnVector::from_vec(vec![1i32, 0, 3])), vec![false, true, false])?;
	let names: ColumnString = ["alice", "", "carol"].into_iter().collect();
	let balances = ColumnDecimal::from_vec(vec![1_500_000_000i128, -25_000_000, 0], 9);
	let seen = ColumnVector::from_vec(vec![
		DateTimeValue::new_datetime(2025, 1, 2, 3, 4, 5, 0).unwrap_or_default(),
		DateTimeValue::new_datetime(2025, 6, 30, 23, 59, 59, 123_456).unwrap_or_default(),
		DateTimeValue::default(),
	]);
	let visits = ColumnOpaque::from_vec("hll_union", vec![vec![1, 2, 3], vec![], vec![4]]);

	let nullable_int = DataType::nullable(PrimitiveType::Int).unwrap_or(PrimitiveType::Int.into());
	Ok(Block::from_columns(vec![
		ColumnWithTypeAndName::new("id", nullable_int, ids),
		ColumnWithTypeAndName::new("name", PrimitiveType::Varchar, names),
		ColumnWithTypeAndName::new("balance", PrimitiveType::DecimalV2, balances),
		ColumnWithTypeAndName::new("last_seen", PrimitiveType::DateTime, seen),
		ColumnWithTypeAndName::new("visits", PrimitiveType::Hll, visits),
	])?)
}

fn run() -> Result<u64, WriterError> {
	let exprs: Vec<Box<dyn VExpr>> = vec![
		Box::new(ColumnRef::new(0, PrimitiveType::Int)),
		Box::new(ColumnRef::new(1, PrimitiveType::Varchar)),
		Box::new(ColumnRef::new(2, PrimitiveType::DecimalV2).with_output_scale(2)),
		Box::new(ColumnRef::new(3, PrimitiveType::DateTime)),
		Box::new(ColumnRef::new(4, PrimitiveType::Hll)),
	];

	let sink: Arc<dyn ResultSink> = Arc::new(PrintSink);
	let mut writer = ResultWriter::new(Some(sink), OutputExprs::Vectorized(exprs), ResultWriterConfig::default());
	writer.init()?;

	let mut block = sample_block()?;
	writer.append_block(&mut block)?;
	writer.close()?;

	Ok(writer.reported_rows())
}

fn main() {
	tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
		.init();

	match run() {
		Ok(rows) => info!(rows, "done"),
		Err(err) => {
			error!(error = %err, "playground failed");
			std::process::exit(1);
		}
	}
}
