// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

mod construction;
mod entry_points;
mod writes;

use bulkload_core::{BulkProcess, Result, Row, TableRegistry, TargetId};
use bulkload_testing::Recorder;
use serde_json::Value as Json;

/// Accepts JSON objects with a non-empty `name` and writes them to `users`.
pub struct Users;

impl BulkProcess for Users {
	type Item = Json;

	fn validate(&self, item: &Json) -> bool {
		item.get("name").and_then(Json::as_str).is_some_and(|name| !name.is_empty())
	}

	fn format(&self, item: Json) -> Result<Row> {
		match item {
			Json::Object(map) => Ok(Row::from(map)),
			_ => unreachable!("validate only accepts objects"),
		}
	}

	fn target(&self) -> Option<TargetId> {
		Some(TargetId::new("users"))
	}
}

pub fn recording_registry() -> (TableRegistry, Recorder) {
	let registry = TableRegistry::new();
	let recorder = Recorder::new();
	recorder.register(&registry, "users");
	(registry, recorder)
}
