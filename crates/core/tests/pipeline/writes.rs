// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use bulkload_core::{BulkProcess, TableRegistry, row};
use bulkload_store_memory::MemoryStore;
use bulkload_testing::{Event, Recorder};
use serde_json::{Value as Json, json};

use crate::{Users, recording_registry};

fn users(n: i64) -> Json {
	Json::Array((1..=n).map(|id| json!({"id": id, "name": format!("user-{}", id)})).collect())
}

#[test]
fn test_insert_in_chunks() {
	let (registry, recorder) = recording_registry();
	let mut pipeline = Users.pipeline(&registry, users(5)).unwrap();

	pipeline.set_limit(2).bulk_insert(false).unwrap();

	assert_eq!(recorder.events(), vec![Event::Insert(2), Event::Insert(2), Event::Insert(1)]);
	assert_eq!(recorder.rows(), pipeline.data_array());
}

#[test]
fn test_single_chunk_under_default_limit() {
	let (registry, recorder) = recording_registry();
	Users.pipeline(&registry, users(3)).unwrap().bulk_insert(false).unwrap();
	assert_eq!(recorder.chunk_sizes(), vec![3]);
}

#[test]
fn test_truncate_happens_before_first_insert() {
	let (registry, recorder) = recording_registry();
	let mut pipeline = Users.pipeline(&registry, users(3)).unwrap();

	pipeline.set_limit(2).bulk_insert(true).unwrap();

	assert_eq!(recorder.events(), vec![Event::Truncate, Event::Insert(2), Event::Insert(1)]);
}

#[test]
fn test_one_handle_per_write() {
	let (registry, recorder) = recording_registry();
	let mut pipeline = Users.pipeline(&registry, users(6)).unwrap();

	pipeline.set_limit(2).bulk_insert(true).unwrap();
	assert_eq!(recorder.resolved(), 1);

	pipeline.bulk_upsert("id").unwrap();
	assert_eq!(recorder.resolved(), 2);
}

#[test]
fn test_failing_chunk_stops_the_write() {
	let registry = TableRegistry::new();
	let recorder = Recorder::new().fail_on_write(2);
	recorder.register(&registry, "users");

	let mut pipeline = Users.pipeline(&registry, users(5)).unwrap();
	let err = pipeline.set_limit(2).bulk_insert(false).unwrap_err();

	assert_eq!(err.code(), "TEST_001");
	assert_eq!(recorder.events(), vec![Event::Insert(2)]);
	assert_eq!(recorder.rows().len(), 2);
}

#[test]
fn test_zero_limit_leaves_the_table_untouched() {
	let (registry, recorder) = recording_registry();
	let mut pipeline = Users.pipeline(&registry, users(2)).unwrap();

	let err = pipeline.set_limit(0).bulk_insert(true).unwrap_err();

	assert_eq!(err.code(), "BULK_006");
	assert!(recorder.events().is_empty());
	assert_eq!(recorder.resolved(), 0);
}

#[test]
fn test_upsert_passes_unique_by() {
	let (registry, recorder) = recording_registry();
	let mut pipeline = Users.pipeline(&registry, users(3)).unwrap();

	pipeline.set_limit(2).bulk_upsert(["id", "name"]).unwrap();

	let key = vec!["id".to_string(), "name".to_string()];
	assert_eq!(recorder.events(), vec![Event::Upsert(2, key.clone()), Event::Upsert(1, key)]);
}

#[test]
fn test_upsert_is_idempotent() {
	let store = MemoryStore::new();
	let registry = TableRegistry::new();
	store.register(&registry, "users");

	let pipeline = Users.pipeline(&registry, users(4)).unwrap();
	pipeline.bulk_upsert("id").unwrap();
	let once = store.rows("users");
	pipeline.bulk_upsert("id").unwrap();

	assert_eq!(store.rows("users"), once);
	assert_eq!(store.count("users"), 4);
}

#[test]
fn test_upsert_updates_existing_rows() {
	let store = MemoryStore::new();
	let registry = TableRegistry::new();
	store.register(&registry, "users");

	Users.insert(&registry, users(2), false).unwrap();
	Users.upsert(&registry, json!([{"id": 2, "name": "renamed"}, {"id": 3, "name": "new"}]), "id").unwrap();

	assert_eq!(
		store.rows("users"),
		vec![
			row! { id: 1, name: "user-1" },
			row! { id: 2, name: "renamed" },
			row! { id: 3, name: "new" },
		]
	);
}

#[test]
fn test_truncate_table_alone() {
	let (registry, recorder) = recording_registry();
	let pipeline = Users.pipeline(&registry, users(1)).unwrap();

	pipeline.truncate_table().unwrap();

	assert_eq!(recorder.events(), vec![Event::Truncate]);
}

#[test]
fn test_writes_chain() {
	let store = MemoryStore::new();
	let registry = TableRegistry::new();
	store.register(&registry, "users");

	let pipeline = Users.pipeline(&registry, users(3)).unwrap();
	pipeline.bulk_insert(false).unwrap().bulk_insert(true).unwrap();

	assert_eq!(store.count("users"), 3);
}
