// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Destination binding: target identifiers, entity types and the handle registry.

use std::{
	collections::HashMap,
	fmt::{Debug, Display, Formatter},
	ops::Deref,
	sync::Arc,
};

use bulkload_type::Result;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tracing::{instrument, trace};

use crate::{error::BulkError, handle::TableHandle};

/// Names the storage table a pipeline writes to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TargetId(String);

impl TargetId {
	pub fn new(id: impl Into<String>) -> Self {
		Self(id.into())
	}

	pub fn of<E: Entity>() -> Self {
		Self::new(E::TABLE)
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl Display for TargetId {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(&self.0)
	}
}

impl AsRef<str> for TargetId {
	fn as_ref(&self) -> &str {
		&self.0
	}
}

impl From<&str> for TargetId {
	fn from(id: &str) -> Self {
		Self::new(id)
	}
}

impl From<String> for TargetId {
	fn from(id: String) -> Self {
		Self(id)
	}
}

impl From<&TargetId> for TargetId {
	fn from(id: &TargetId) -> Self {
		id.clone()
	}
}

/// A record type stored in a known table.
pub trait Entity {
	const TABLE: &'static str;

	fn target(&self) -> TargetId {
		TargetId::new(Self::TABLE)
	}
}

pub type HandleFactory = Arc<dyn Fn(&TargetId) -> Result<Box<dyn TableHandle>> + Send + Sync>;

/// Maps target identifiers to table-handle constructors.
///
/// Cloning is cheap and clones share the same registrations.
#[derive(Clone)]
pub struct TableRegistry(Arc<TableRegistryInner>);

pub struct TableRegistryInner {
	factories: RwLock<HashMap<TargetId, HandleFactory>>,
}

impl Deref for TableRegistry {
	type Target = TableRegistryInner;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl Default for TableRegistry {
	fn default() -> Self {
		Self::new()
	}
}

impl TableRegistry {
	pub fn new() -> Self {
		Self(Arc::new(TableRegistryInner {
			factories: RwLock::new(HashMap::new()),
		}))
	}

	/// Registers `factory` for `target`, replacing any earlier registration.
	pub fn register<F>(&self, target: impl Into<TargetId>, factory: F)
	where
		F: Fn(&TargetId) -> Result<Box<dyn TableHandle>> + Send + Sync + 'static,
	{
		let target = target.into();
		trace!(table = %target, "registering table handle factory");
		self.factories.write().insert(target, Arc::new(factory));
	}

	pub fn unregister(&self, target: &TargetId) -> bool {
		self.factories.write().remove(target).is_some()
	}

	pub fn contains(&self, target: &TargetId) -> bool {
		self.factories.read().contains_key(target)
	}

	pub fn targets(&self) -> Vec<TargetId> {
		let mut targets: Vec<TargetId> = self.factories.read().keys().cloned().collect();
		targets.sort();
		targets
	}

	/// Builds a fresh handle for `target`.
	#[instrument(name = "bulk::registry::resolve", level = "trace", skip_all, fields(table = %target))]
	pub fn resolve(&self, target: &TargetId) -> Result<Box<dyn TableHandle>> {
		// the lock is released before the factory runs
		let factory = self.factories.read().get(target).cloned();
		match factory {
			Some(factory) => factory(target),
			None => Err(BulkError::UnknownTarget {
				target: target.clone(),
			}
			.into()),
		}
	}
}

impl Debug for TableRegistry {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("TableRegistry").field("targets", &self.targets()).finish()
	}
}

#[cfg(test)]
mod tests {
	use bulkload_type::Row;

	use super::*;
	use crate::handle::UniqueBy;

	struct NullTable;

	impl TableHandle for NullTable {
		fn truncate(&mut self) -> Result<()> {
			Ok(())
		}

		fn insert_rows(&mut self, _rows: &[Row]) -> Result<()> {
			Ok(())
		}

		fn upsert_rows(&mut self, _rows: &[Row], _unique_by: &UniqueBy) -> Result<()> {
			Ok(())
		}
	}

	struct User;

	impl Entity for User {
		const TABLE: &'static str = "users";
	}

	#[test]
	fn test_target_from_entity() {
		assert_eq!(TargetId::of::<User>(), TargetId::new("users"));
		assert_eq!(User.target().as_str(), "users");
	}

	#[test]
	fn test_resolve_unknown_target() {
		let registry = TableRegistry::new();
		let err = registry.resolve(&TargetId::new("missing")).err().unwrap();
		assert_eq!(err.code(), "BULK_005");
	}

	#[test]
	fn test_resolve_calls_factory_each_time() {
		let registry = TableRegistry::new();
		let calls = Arc::new(std::sync::atomic::AtomicUsize::new(0));
		let counter = calls.clone();
		registry.register("users", move |_| {
			counter.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
			Ok(Box::new(NullTable) as Box<dyn TableHandle>)
		});

		let target = TargetId::new("users");
		registry.resolve(&target).unwrap();
		registry.resolve(&target).unwrap();
		assert_eq!(calls.load(std::sync::atomic::Ordering::SeqCst), 2);
	}

	#[test]
	fn test_clones_share_registrations() {
		let registry = TableRegistry::new();
		let clone = registry.clone();
		clone.register("a", |_| Ok(Box::new(NullTable) as Box<dyn TableHandle>));
		assert!(registry.contains(&TargetId::new("a")));
		assert_eq!(registry.targets(), vec![TargetId::new("a")]);
		assert!(registry.unregister(&TargetId::new("a")));
		assert!(!clone.contains(&TargetId::new("a")));
	}
}
