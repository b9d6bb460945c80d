// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use bulkload_core::{BulkProcess, Entity, TableRegistry};
use bulkload_store_memory::MemoryStore;
use bulkload_testing::Event;
use serde_json::json;

use crate::{Users, recording_registry};

#[test]
fn test_insert_entry_point() {
	let (registry, recorder) = recording_registry();
	Users.insert(&registry, json!([{"id": 1, "name": "a"}, {"id": 2, "name": ""}]), true).unwrap();
	assert_eq!(recorder.events(), vec![Event::Truncate, Event::Insert(1)]);
}

#[test]
fn test_upsert_entry_point() {
	let (registry, recorder) = recording_registry();
	Users.upsert(&registry, json!([{"id": 1, "name": "a"}]), "id").unwrap();
	assert_eq!(recorder.events(), vec![Event::Upsert(1, vec!["id".to_string()])]);
}

#[test]
fn test_entry_point_propagates_construction_errors() {
	let (registry, recorder) = recording_registry();
	let err = Users.insert(&registry, json!(42), false).unwrap_err();
	assert_eq!(err.code(), "BULK_001");
	assert!(recorder.events().is_empty());
}

#[test]
fn test_entry_point_with_unregistered_target() {
	let err = Users.insert(&TableRegistry::new(), json!([{"id": 1, "name": "a"}]), false).unwrap_err();
	assert_eq!(err.code(), "BULK_005");
}

struct Customer;

impl Entity for Customer {
	const TABLE: &'static str = "customers";
}

#[test]
fn test_retarget_by_entity() {
	let store = MemoryStore::new();
	let registry = TableRegistry::new();
	store.register(&registry, "users");
	store.register(&registry, "customers");

	let mut pipeline = Users.pipeline(&registry, json!([{"id": 1, "name": "a"}])).unwrap();
	pipeline.set_target_of::<Customer>().bulk_insert(false).unwrap();
	pipeline.set_target_from(&Customer).bulk_insert(false).unwrap();

	assert_eq!(store.count("users"), 0);
	assert_eq!(store.count("customers"), 2);
}
