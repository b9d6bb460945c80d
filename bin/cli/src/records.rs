// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use bulkload::{BulkProcess, Error, Result, Row, format_failed};
use serde_json::Value as Json;

/// Loads JSON objects as rows, one column per key.
///
/// An object is rejected when any of the required keys is missing or null.
#[derive(Debug, Clone, Default)]
pub struct JsonRecords {
	require: Vec<String>,
}

impl JsonRecords {
	pub fn new(require: Vec<String>) -> Self {
		Self {
			require,
		}
	}
}

impl BulkProcess for JsonRecords {
	type Item = Json;

	fn validate(&self, item: &Json) -> bool {
		let Some(object) = item.as_object() else {
			return false;
		};
		self.require.iter().all(|key| object.get(key).is_some_and(|value| !value.is_null()))
	}

	fn format(&self, item: Json) -> Result<Row> {
		match item {
			Json::Object(object) => Ok(Row::from(object)),
			other => Err(Error(format_failed(format!("expected a JSON object, got {}", other)))),
		}
	}
}
