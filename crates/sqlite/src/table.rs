// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use bulkload_core::{
	TableHandle, UniqueBy,
	handle::{check_rows, check_unique_by},
};
use bulkload_type::{Result, Row, Value};
use rusqlite::{params_from_iter, types::Value as SqlValue};
use tracing::{instrument, trace};

use crate::{
	error::statement,
	store::SqliteStore,
	value::{quote_identifier, to_sql},
};

/// A handle onto one table of a [`SqliteStore`].
#[derive(Clone)]
pub struct SqliteTable {
	store: SqliteStore,
	table: String,
}

impl SqliteTable {
	pub(crate) fn new(store: SqliteStore, table: String) -> Self {
		Self {
			store,
			table,
		}
	}

	pub fn table(&self) -> &str {
		&self.table
	}

	/// `INSERT INTO "t" ("a", "b") VALUES (?, ?), (?, ?)` statements plus their
	/// flattened parameters, with columns in the order of the first row.
	///
	/// Rows are split across statements so none binds more than
	/// [`MAX_VARIABLES`] parameters. `suffix` is appended to each statement.
	fn insert_statements(&self, rows: &[Row], columns: &[String], suffix: &str) -> Vec<(String, Vec<SqlValue>)> {
		let placeholders = format!("({})", vec!["?"; columns.len()].join(", "));
		let head = format!(
			"INSERT INTO {} ({}) VALUES",
			quote_identifier(&self.table),
			columns.iter().map(|c| quote_identifier(c)).collect::<Vec<_>>().join(", ")
		);

		rows.chunks(rows_per_statement(columns.len()))
			.map(|part| {
				let values_clause = vec![placeholders.as_str(); part.len()].join(", ");
				let sql = format!("{} {}{}", head, values_clause, suffix);

				let mut params = Vec::with_capacity(columns.len() * part.len());
				for row in part {
					for column in columns {
						params.push(to_sql(row.get(column).unwrap_or(&Value::Undefined)));
					}
				}
				(sql, params)
			})
			.collect()
	}

	/// Runs every statement in one transaction.
	fn execute(&self, statements: Vec<(String, Vec<SqlValue>)>) -> Result<usize> {
		let mut conn = self.store.conn.lock();
		let tx = conn.transaction().map_err(statement)?;
		let mut changed = 0;
		for (sql, params) in statements {
			changed += tx.execute(&sql, params_from_iter(params)).map_err(statement)?;
		}
		tx.commit().map_err(statement)?;
		Ok(changed)
	}
}

/// SQLite's default cap on bound parameters per statement.
const MAX_VARIABLES: usize = 32766;

fn rows_per_statement(columns: usize) -> usize {
	(MAX_VARIABLES / columns.max(1)).max(1)
}

fn columns_of(rows: &[Row]) -> Vec<String> {
	rows[0].columns().map(str::to_string).collect()
}

impl TableHandle for SqliteTable {
	#[instrument(name = "store::sqlite::truncate", level = "trace", skip_all, fields(table = %self.table))]
	fn truncate(&mut self) -> Result<()> {
		let sql = format!("DELETE FROM {}", quote_identifier(&self.table));
		self.store.conn.lock().execute(&sql, []).map_err(statement)?;
		Ok(())
	}

	#[instrument(name = "store::sqlite::insert", level = "trace", skip_all, fields(table = %self.table, rows = rows.len()))]
	fn insert_rows(&mut self, rows: &[Row]) -> Result<()> {
		check_rows(rows)?;

		let columns = columns_of(rows);
		let statements = self.insert_statements(rows, &columns, "");
		trace!(statements = statements.len(), "split rows");
		let changed = self.execute(statements)?;
		trace!(changed, "inserted rows");
		Ok(())
	}

	#[instrument(name = "store::sqlite::upsert", level = "trace", skip_all, fields(table = %self.table, rows = rows.len()))]
	fn upsert_rows(&mut self, rows: &[Row], unique_by: &UniqueBy) -> Result<()> {
		check_rows(rows)?;
		check_unique_by(rows, unique_by)?;

		let columns = columns_of(rows);

		let conflict = unique_by.columns().iter().map(|c| quote_identifier(c)).collect::<Vec<_>>().join(", ");
		let updates: Vec<String> = columns
			.iter()
			.filter(|c| !unique_by.contains(c))
			.map(|c| {
				let column = quote_identifier(c);
				format!("{} = excluded.{}", column, column)
			})
			.collect();

		let suffix = if updates.is_empty() {
			format!(" ON CONFLICT ({}) DO NOTHING", conflict)
		} else {
			format!(" ON CONFLICT ({}) DO UPDATE SET {}", conflict, updates.join(", "))
		};

		let statements = self.insert_statements(rows, &columns, &suffix);
		let changed = self.execute(statements)?;
		trace!(changed, "upserted rows");
		Ok(())
	}
}
