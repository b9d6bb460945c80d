// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::collections::HashSet;

use bulkload_core::{
	Batch, BulkConfig, BulkPipeline, BulkProcess, Collection, QueryResult, Result, Row, TableRegistry, row,
};
use serde_json::json;

use crate::Users;

#[test]
fn test_mixed_batch_is_partitioned() {
	let batch = json!([{"id": 1, "name": "a"}, {"id": 2, "name": ""}, {"id": 3, "name": "b"}]);
	let pipeline = Users.pipeline(&TableRegistry::new(), batch).unwrap();

	assert_eq!(pipeline.data_count(), 2);
	assert_eq!(pipeline.failure_data_count(), 1);
	assert_eq!(pipeline.failure_data_array(), vec![json!({"id": 2, "name": ""})]);
	assert_eq!(pipeline.data_array(), vec![row! { id: 1, name: "a" }, row! { id: 3, name: "b" }]);
}

#[test]
fn test_all_valid() {
	let batch = json!([{"id": 1, "name": "a"}, {"id": 2, "name": "b"}]);
	let pipeline = Users.pipeline(&TableRegistry::new(), batch).unwrap();

	assert_eq!(pipeline.failure_data_count(), 0);
	assert_eq!(pipeline.data_count() + pipeline.failure_data_count(), 2);
}

#[test]
fn test_all_invalid() {
	let batch = json!([{"id": 1, "name": ""}, {"id": 2}]);
	let err = Users.pipeline(&TableRegistry::new(), batch).unwrap_err();
	assert_eq!(err.code(), "BULK_003");
}

#[test]
fn test_empty_input() {
	let err = Users.pipeline(&TableRegistry::new(), json!([])).unwrap_err();
	assert_eq!(err.code(), "BULK_002");
}

#[test]
fn test_unsupported_input() {
	let err = Users.pipeline(&TableRegistry::new(), json!("users.csv")).unwrap_err();
	assert_eq!(err.code(), "BULK_001");
	assert_eq!(err.message, "Invalid data type: string");
}

#[test]
fn test_every_input_shape_gives_the_same_rows() {
	let items = vec![json!({"id": 1, "name": "a"}), json!({"id": 2, "name": "b"})];
	let registry = TableRegistry::new();

	let from_list = Users.pipeline(&registry, items.clone()).unwrap();
	let from_sequence = Users.pipeline(&registry, Collection::from(items.clone())).unwrap();
	let from_query = Users.pipeline(&registry, QueryResult::new("staging", items.clone())).unwrap();

	assert_eq!(from_list.data(), from_sequence.data());
	assert_eq!(from_list.data(), from_query.data());
}

/// Rejects every repeated `id`, so of two equal items only the later one goes.
struct DistinctIds {
	seen: std::cell::RefCell<HashSet<i64>>,
}

impl BulkProcess for DistinctIds {
	type Item = (i64, &'static str);

	fn validate(&self, item: &Self::Item) -> bool {
		self.seen.borrow_mut().insert(item.0)
	}

	fn format(&self, item: Self::Item) -> Result<Row> {
		Ok(row! { id: item.0, name: item.1 })
	}
}

#[test]
fn test_equal_items_are_excluded_by_position() {
	let process = DistinctIds {
		seen: Default::default(),
	};
	let batch = vec![(1, "a"), (2, "b"), (1, "a")];
	let pipeline = BulkPipeline::new(process, &TableRegistry::new(), batch).unwrap();

	// the first copy stays accepted although an equal copy was rejected
	assert_eq!(pipeline.data_array(), vec![row! { id: 1, name: "a" }, row! { id: 2, name: "b" }]);
	assert_eq!(pipeline.failure_data_array(), vec![(1, "a")]);
}

#[test]
fn test_explicit_config_overrides_process_defaults() {
	let config = BulkConfig::default().with_chunk_limit(7).with_target("archive");
	let pipeline = BulkPipeline::with_config(
		Users,
		&TableRegistry::new(),
		config,
		Batch::from(vec![json!({"id": 1, "name": "a"})]),
	)
	.unwrap();

	assert_eq!(pipeline.limit(), 7);
	assert_eq!(pipeline.target().map(|t| t.as_str()), Some("archive"));
}
