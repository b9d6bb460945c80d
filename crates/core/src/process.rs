// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use bulkload_type::{Result, Row};

use crate::{
	batch::Batch,
	config::DEFAULT_CHUNK_LIMIT,
	handle::UniqueBy,
	pipeline::BulkPipeline,
	target::{TableRegistry, TargetId},
};

/// The caller-defined half of a pipeline: which items to keep and how each
/// becomes a row.
///
/// # Example
///
/// ```ignore
/// struct Users;
///
/// impl BulkProcess for Users {
///     type Item = serde_json::Value;
///
///     fn validate(&self, item: &Self::Item) -> bool {
///         item["name"].as_str().is_some_and(|name| !name.is_empty())
///     }
///
///     fn format(&self, item: Self::Item) -> Result<Row> {
///         Ok(row! { id: item["id"].as_i64(), name: item["name"].as_str() })
///     }
///
///     fn target(&self) -> Option<TargetId> {
///         Some(TargetId::new("users"))
///     }
/// }
///
/// Users.insert(&registry, json!([{"id": 1, "name": "a"}]), false)?;
/// ```
pub trait BulkProcess: Sized {
	type Item;

	fn validate(&self, item: &Self::Item) -> bool;

	/// Called once per accepted item, in input order. An error discards every
	/// row formatted so far.
	fn format(&self, item: Self::Item) -> Result<Row>;

	fn target(&self) -> Option<TargetId> {
		None
	}

	fn chunk_limit(&self) -> usize {
		DEFAULT_CHUNK_LIMIT
	}

	fn pipeline(self, registry: &TableRegistry, batch: impl Into<Batch<Self::Item>>) -> Result<BulkPipeline<Self>> {
		BulkPipeline::new(self, registry, batch)
	}

	fn insert(self, registry: &TableRegistry, batch: impl Into<Batch<Self::Item>>, is_truncate: bool) -> Result<()> {
		self.pipeline(registry, batch)?.bulk_insert(is_truncate)?;
		Ok(())
	}

	fn upsert(
		self,
		registry: &TableRegistry,
		batch: impl Into<Batch<Self::Item>>,
		unique_by: impl Into<UniqueBy>,
	) -> Result<()> {
		self.pipeline(registry, batch)?.bulk_upsert(unique_by)?;
		Ok(())
	}
}
