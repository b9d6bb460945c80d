// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! A storage-ready row: an insertion-ordered mapping of column name to [`Value`].

use indexmap::{IndexMap, map};
use serde::{Deserialize, Serialize};

use crate::value::{IntoValue, Value};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Row(IndexMap<String, Value>);

impl Row {
	pub fn new() -> Self {
		Self(IndexMap::new())
	}

	pub fn with_capacity(capacity: usize) -> Self {
		Self(IndexMap::with_capacity(capacity))
	}

	/// Sets `column` to `value`, keeping the column's original position if it already exists.
	pub fn insert(&mut self, column: impl Into<String>, value: impl IntoValue) -> Option<Value> {
		self.0.insert(column.into(), value.into_value())
	}

	pub fn with(mut self, column: impl Into<String>, value: impl IntoValue) -> Self {
		self.insert(column, value);
		self
	}

	pub fn get(&self, column: &str) -> Option<&Value> {
		self.0.get(column)
	}

	pub fn contains(&self, column: &str) -> bool {
		self.0.contains_key(column)
	}

	pub fn remove(&mut self, column: &str) -> Option<Value> {
		self.0.shift_remove(column)
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn columns(&self) -> impl Iterator<Item = &str> {
		self.0.keys().map(String::as_str)
	}

	pub fn values(&self) -> impl Iterator<Item = &Value> {
		self.0.values()
	}

	pub fn iter(&self) -> map::Iter<'_, String, Value> {
		self.0.iter()
	}

	/// True when both rows carry exactly the same column names, in any order.
	pub fn same_columns(&self, other: &Row) -> bool {
		self.len() == other.len() && self.0.keys().all(|k| other.0.contains_key(k))
	}

	/// Overwrites this row's columns with every column of `other`; columns only present here are kept.
	pub fn merge(&mut self, other: &Row) {
		for (column, value) in other.iter() {
			self.0.insert(column.clone(), value.clone());
		}
	}
}

impl From<IndexMap<String, Value>> for Row {
	fn from(map: IndexMap<String, Value>) -> Self {
		Self(map)
	}
}

impl From<serde_json::Map<String, serde_json::Value>> for Row {
	fn from(object: serde_json::Map<String, serde_json::Value>) -> Self {
		object.into_iter().map(|(k, v)| (k, Value::from(v))).collect()
	}
}

impl From<&Row> for serde_json::Value {
	fn from(row: &Row) -> Self {
		serde_json::Value::Object(row.iter().map(|(k, v)| (k.clone(), serde_json::Value::from(v))).collect())
	}
}

impl<K: Into<String>, V: IntoValue> FromIterator<(K, V)> for Row {
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		Self(iter.into_iter().map(|(k, v)| (k.into(), v.into_value())).collect())
	}
}

impl IntoIterator for Row {
	type Item = (String, Value);
	type IntoIter = map::IntoIter<String, Value>;

	fn into_iter(self) -> Self::IntoIter {
		self.0.into_iter()
	}
}

impl<'a> IntoIterator for &'a Row {
	type Item = (&'a String, &'a Value);
	type IntoIter = map::Iter<'a, String, Value>;

	fn into_iter(self) -> Self::IntoIter {
		self.0.iter()
	}
}

/// Builds a [`Row`] from `column: value` pairs.
///
/// ```ignore
/// let row = row! { id: 1, name: "Alice", "display name": "Al" };
/// ```
#[macro_export]
macro_rules! row {
	() => {
		$crate::row::Row::new()
	};

	{ $($key:tt : $value:expr),+ $(,)? } => {
		{
			let mut row = $crate::row::Row::new();
			$(
				row.insert($crate::row_key!($key), $crate::value::IntoValue::into_value($value));
			)*
			row
		}
	};
}

#[macro_export]
#[doc(hidden)]
macro_rules! row_key {
	($key:ident) => {
		stringify!($key).to_string()
	};
	($key:literal) => {
		$key.to_string()
	};
}

#[cfg(test)]
mod tests {
	use serde_json::json;

	use super::*;

	#[test]
	fn test_row_macro_keeps_column_order() {
		let row = row! { id: 1, name: "Alice", "display name": "Al" };
		let columns: Vec<&str> = row.columns().collect();
		assert_eq!(columns, vec!["id", "name", "display name"]);
		assert_eq!(row.get("id"), Some(&Value::Int8(1)));
		assert_eq!(row.get("name"), Some(&Value::utf8("Alice")));
	}

	#[test]
	fn test_same_columns_ignores_order() {
		let a = row! { id: 1, name: "a" };
		let b = row! { name: "b", id: 2 };
		let c = row! { id: 3 };
		assert!(a.same_columns(&b));
		assert!(!a.same_columns(&c));
	}

	#[test]
	fn test_merge_overwrites_and_keeps() {
		let mut existing = row! { id: 1, name: "old", note: "kept" };
		existing.merge(&row! { id: 1, name: "new" });
		assert_eq!(existing, row! { id: 1, name: "new", note: "kept" });
	}

	#[test]
	fn test_from_json_object() {
		let json = json!({"id": 7, "name": "x", "active": true});
		let row = Row::from(json.as_object().unwrap().clone());
		assert_eq!(row, row! { id: 7, name: "x", active: true });
		assert_eq!(serde_json::Value::from(&row), json);
	}

	#[test]
	fn test_serde_tags_each_value() {
		let row = row! { id: 1 };
		let text = serde_json::to_string(&row).unwrap();
		assert_eq!(text, r#"{"id":{"Int8":1}}"#);
	}
}
