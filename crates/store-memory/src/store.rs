// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{collections::HashMap, ops::Deref, sync::Arc};

use bulkload_core::{QueryResult, StoreError, TableHandle, TableRegistry, TargetId};
use bulkload_type::{Result, Row};
use parking_lot::RwLock;
use tracing::debug;

use crate::table::MemoryTable;

#[derive(Clone)]
pub struct MemoryStore(Arc<MemoryStoreInner>);

pub struct MemoryStoreInner {
	pub(crate) tables: RwLock<HashMap<String, Vec<Row>>>,
}

impl Deref for MemoryStore {
	type Target = MemoryStoreInner;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl Default for MemoryStore {
	fn default() -> Self {
		Self::new()
	}
}

impl MemoryStore {
	pub fn new() -> Self {
		Self(Arc::new(MemoryStoreInner {
			tables: RwLock::new(HashMap::new()),
		}))
	}

	/// Creates `table` if it does not exist yet.
	pub fn create_table(&self, table: impl Into<String>) {
		self.tables.write().entry(table.into()).or_default();
	}

	pub fn has_table(&self, table: &str) -> bool {
		self.tables.read().contains_key(table)
	}

	/// A copy of the rows of `table`, in storage order. Unknown tables are empty.
	pub fn rows(&self, table: &str) -> Vec<Row> {
		self.tables.read().get(table).cloned().unwrap_or_default()
	}

	pub fn count(&self, table: &str) -> usize {
		self.tables.read().get(table).map_or(0, Vec::len)
	}

	pub fn scan(&self, table: &str) -> Result<QueryResult<Row>> {
		match self.tables.read().get(table) {
			Some(rows) => Ok(QueryResult::new(table, rows.clone())),
			None => Err(StoreError::TableNotFound {
				table: table.to_string(),
			}
			.into()),
		}
	}

	pub fn handle(&self, table: impl Into<String>) -> MemoryTable {
		let table = table.into();
		self.create_table(table.clone());
		MemoryTable::new(self.clone(), table)
	}

	/// Creates `table` and makes it resolvable through `registry`.
	pub fn register(&self, registry: &TableRegistry, table: impl Into<String>) {
		let table = table.into();
		self.create_table(table.clone());
		debug!(table = %table, "registering memory table");

		let store = self.clone();
		registry.register(TargetId::new(table), move |target: &TargetId| {
			Ok(Box::new(store.handle(target.as_str())) as Box<dyn TableHandle>)
		});
	}
}

#[cfg(test)]
mod tests {
	use bulkload_type::row;

	use super::*;

	#[test]
	fn test_scan_unknown_table() {
		let store = MemoryStore::new();
		assert_eq!(store.scan("missing").unwrap_err().code(), "STORE_005");
	}

	#[test]
	fn test_clones_share_tables() {
		let store = MemoryStore::new();
		let clone = store.clone();
		clone.handle("users").insert_rows(&[row! { id: 1 }]).unwrap();

		assert!(store.has_table("users"));
		assert_eq!(store.count("users"), 1);
		let result = store.scan("users").unwrap();
		assert_eq!(result.table(), "users");
		assert_eq!(result.len(), 1);
	}

	#[test]
	fn test_register_resolves_fresh_handles() {
		let store = MemoryStore::new();
		let registry = TableRegistry::new();
		store.register(&registry, "users");

		assert!(store.has_table("users"));
		let mut handle = registry.resolve(&TargetId::new("users")).unwrap();
		handle.insert_rows(&[row! { id: 1 }, row! { id: 2 }]).unwrap();
		assert_eq!(store.count("users"), 2);
	}
}
