// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! The storage collaborator contract.

use std::fmt::{Display, Formatter};

use bulkload_type::{Result, Row};
use serde::{Deserialize, Serialize};

use crate::error::StoreError;

/// A handle bound to one storage table.
///
/// `insert_rows` and `upsert_rows` receive a non-empty slice whose rows share
/// one column set, and apply it as a single logical batch. Errors are returned
/// as-is to the caller of the write.
pub trait TableHandle {
	fn truncate(&mut self) -> Result<()>;

	fn insert_rows(&mut self, rows: &[Row]) -> Result<()>;

	/// Inserts each row, or replaces the values of the existing row whose
	/// `unique_by` columns are equal.
	fn upsert_rows(&mut self, rows: &[Row], unique_by: &UniqueBy) -> Result<()>;
}

impl<T: TableHandle + ?Sized> TableHandle for Box<T> {
	fn truncate(&mut self) -> Result<()> {
		(**self).truncate()
	}

	fn insert_rows(&mut self, rows: &[Row]) -> Result<()> {
		(**self).insert_rows(rows)
	}

	fn upsert_rows(&mut self, rows: &[Row], unique_by: &UniqueBy) -> Result<()> {
		(**self).upsert_rows(rows, unique_by)
	}
}

/// The column(s) whose equality identifies an existing row during upsert.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UniqueBy {
	Column(String),
	Columns(Vec<String>),
}

impl UniqueBy {
	pub fn columns(&self) -> &[String] {
		match self {
			UniqueBy::Column(column) => std::slice::from_ref(column),
			UniqueBy::Columns(columns) => columns.as_slice(),
		}
	}

	pub fn is_empty(&self) -> bool {
		self.columns().is_empty()
	}

	pub fn contains(&self, column: &str) -> bool {
		self.columns().iter().any(|c| c == column)
	}
}

impl Display for UniqueBy {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(&self.columns().join(", "))
	}
}

impl From<&str> for UniqueBy {
	fn from(column: &str) -> Self {
		UniqueBy::Column(column.to_string())
	}
}

impl From<String> for UniqueBy {
	fn from(column: String) -> Self {
		UniqueBy::Column(column)
	}
}

impl From<Vec<String>> for UniqueBy {
	fn from(columns: Vec<String>) -> Self {
		UniqueBy::Columns(columns)
	}
}

impl From<Vec<&str>> for UniqueBy {
	fn from(columns: Vec<&str>) -> Self {
		UniqueBy::Columns(columns.into_iter().map(str::to_string).collect())
	}
}

impl<const N: usize> From<[&str; N]> for UniqueBy {
	fn from(columns: [&str; N]) -> Self {
		UniqueBy::Columns(columns.iter().map(|c| c.to_string()).collect())
	}
}

/// Rejects empty writes and rows whose column set differs from the first row's.
pub fn check_rows(rows: &[Row]) -> Result<()> {
	let Some(first) = rows.first() else {
		return Err(StoreError::EmptyRows.into());
	};

	for (index, row) in rows.iter().enumerate().skip(1) {
		if !row.same_columns(first) {
			return Err(StoreError::NonUniformColumns {
				expected: first.columns().collect::<Vec<_>>().join(", "),
				found: row.columns().collect::<Vec<_>>().join(", "),
				row: index,
			}
			.into());
		}
	}

	Ok(())
}

/// Rejects an empty key and rows lacking any key column.
pub fn check_unique_by(rows: &[Row], unique_by: &UniqueBy) -> Result<()> {
	if unique_by.is_empty() {
		return Err(StoreError::EmptyUniqueBy.into());
	}

	for (index, row) in rows.iter().enumerate() {
		if let Some(column) = unique_by.columns().iter().find(|c| !row.contains(c)) {
			return Err(StoreError::MissingUniqueColumn {
				column: column.clone(),
				row: index,
			}
			.into());
		}
	}

	Ok(())
}
