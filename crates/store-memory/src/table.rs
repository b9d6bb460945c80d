// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use bulkload_core::{
	TableHandle, UniqueBy,
	handle::{check_rows, check_unique_by},
};
use bulkload_type::{Result, Row, Value};
use tracing::{instrument, trace};

use crate::store::MemoryStore;

/// A handle onto one table of a [`MemoryStore`].
#[derive(Clone)]
pub struct MemoryTable {
	store: MemoryStore,
	table: String,
}

impl MemoryTable {
	pub(crate) fn new(store: MemoryStore, table: String) -> Self {
		Self {
			store,
			table,
		}
	}

	pub fn table(&self) -> &str {
		&self.table
	}
}

fn key_of<'a>(row: &'a Row, unique_by: &UniqueBy) -> Vec<Option<&'a Value>> {
	unique_by.columns().iter().map(|column| row.get(column)).collect()
}

impl TableHandle for MemoryTable {
	#[instrument(name = "store::memory::truncate", level = "trace", skip_all, fields(table = %self.table))]
	fn truncate(&mut self) -> Result<()> {
		let mut tables = self.store.tables.write();
		tables.entry(self.table.clone()).or_default().clear();
		Ok(())
	}

	#[instrument(name = "store::memory::insert", level = "trace", skip_all, fields(table = %self.table, rows = rows.len()))]
	fn insert_rows(&mut self, rows: &[Row]) -> Result<()> {
		check_rows(rows)?;

		let mut tables = self.store.tables.write();
		tables.entry(self.table.clone()).or_default().extend_from_slice(rows);
		Ok(())
	}

	#[instrument(name = "store::memory::upsert", level = "trace", skip_all, fields(table = %self.table, rows = rows.len()))]
	fn upsert_rows(&mut self, rows: &[Row], unique_by: &UniqueBy) -> Result<()> {
		check_rows(rows)?;
		check_unique_by(rows, unique_by)?;

		let mut tables = self.store.tables.write();
		let stored = tables.entry(self.table.clone()).or_default();

		let mut updated = 0usize;
		for row in rows {
			let key = key_of(row, unique_by);
			match stored.iter_mut().find(|existing| key_of(existing, unique_by) == key) {
				Some(existing) => {
					existing.merge(row);
					updated += 1;
				}
				None => stored.push(row.clone()),
			}
		}

		trace!(updated, inserted = rows.len() - updated, "upserted rows");
		Ok(())
	}
}
