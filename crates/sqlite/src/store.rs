// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{ops::Deref, sync::Arc};

use bulkload_core::{QueryResult, StoreError, TableHandle, TableRegistry, TargetId};
use bulkload_type::{Result, Row};
use parking_lot::Mutex;
use rusqlite::{Connection, OptionalExtension};
use tracing::{debug, instrument};

use crate::{
	config::{DbPath, SqliteConfig},
	connection::connect,
	error::statement,
	table::SqliteTable,
	value::{from_sql, quote_identifier},
};

#[derive(Clone)]
pub struct SqliteStore(Arc<SqliteStoreInner>);

pub struct SqliteStoreInner {
	pub(crate) conn: Mutex<Connection>,
	path: DbPath,
}

impl Deref for SqliteStore {
	type Target = SqliteStoreInner;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl SqliteStore {
	#[instrument(name = "store::sqlite::new", level = "info", skip(config), fields(
		db_path = ?config.path,
		journal_mode = %config.journal_mode.as_str()
	))]
	pub fn new(config: SqliteConfig) -> Result<Self> {
		let conn = connect(&config)?;
		Ok(Self(Arc::new(SqliteStoreInner {
			conn: Mutex::new(conn),
			path: config.path,
		})))
	}

	pub fn in_memory() -> Result<Self> {
		Self::new(SqliteConfig::in_memory())
	}

	pub fn path(&self) -> &DbPath {
		&self.path
	}

	/// Runs one or more `;`-separated statements, typically schema setup.
	pub fn execute_batch(&self, sql: &str) -> Result<()> {
		self.conn.lock().execute_batch(sql).map_err(statement)
	}

	pub fn has_table(&self, table: &str) -> Result<bool> {
		let conn = self.conn.lock();
		let found = conn
			.query_row("SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?1", [table], |_| Ok(()))
			.optional()
			.map_err(statement)?;
		Ok(found.is_some())
	}

	/// All rows of `table` in rowid order, with columns in declaration order.
	#[instrument(name = "store::sqlite::scan", level = "trace", skip(self))]
	pub fn scan(&self, table: &str) -> Result<QueryResult<Row>> {
		if !self.has_table(table)? {
			return Err(StoreError::TableNotFound {
				table: table.to_string(),
			}
			.into());
		}

		let conn = self.conn.lock();
		let sql = format!("SELECT * FROM {} ORDER BY rowid", quote_identifier(table));
		let mut stmt = conn.prepare(&sql).map_err(statement)?;
		let columns: Vec<String> = stmt.column_names().into_iter().map(str::to_string).collect();

		let rows = stmt
			.query_map([], |sql_row| {
				let mut row = Row::with_capacity(columns.len());
				for (index, column) in columns.iter().enumerate() {
					row.insert(column.as_str(), from_sql(sql_row.get_ref(index)?));
				}
				Ok(row)
			})
			.map_err(statement)?
			.collect::<std::result::Result<Vec<Row>, _>>()
			.map_err(statement)?;

		Ok(QueryResult::new(table, rows))
	}

	pub fn count(&self, table: &str) -> Result<usize> {
		let conn = self.conn.lock();
		let sql = format!("SELECT COUNT(*) FROM {}", quote_identifier(table));
		let count: i64 = conn.query_row(&sql, [], |row| row.get(0)).map_err(statement)?;
		Ok(count as usize)
	}

	pub fn handle(&self, table: impl Into<String>) -> SqliteTable {
		SqliteTable::new(self.clone(), table.into())
	}

	/// Makes `table` resolvable through `registry`. The table itself must
	/// already exist when the pipeline writes.
	pub fn register(&self, registry: &TableRegistry, table: impl Into<String>) {
		let table = table.into();
		debug!(table = %table, "registering sqlite table");

		let store = self.clone();
		registry.register(TargetId::new(table), move |target: &TargetId| {
			Ok(Box::new(store.handle(target.as_str())) as Box<dyn TableHandle>)
		});
	}
}
