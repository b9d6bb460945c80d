// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::{Debug, Formatter};

use bulkload_type::{Result, Row};
use tracing::{debug, instrument, warn};

use crate::{
	batch::{Batch, normalize},
	chunk::{check_chunk_limit, chunk_count, for_each_chunk},
	collection::Collection,
	config::BulkConfig,
	error::BulkError,
	handle::{TableHandle, UniqueBy},
	partition::partition,
	process::BulkProcess,
	target::{Entity, TableRegistry, TargetId},
};

/// A validated and formatted batch, ready to be written.
///
/// The accepted rows and the rejected items are computed once, when the
/// pipeline is built, and never change. Only the write settings (chunk limit
/// and target) can be adjusted afterwards.
pub struct BulkPipeline<P: BulkProcess> {
	process: P,
	data: Collection<Row>,
	failure_data: Collection<P::Item>,
	config: BulkConfig,
	registry: TableRegistry,
}

impl<P: BulkProcess> BulkPipeline<P> {
	/// Builds a pipeline whose settings come from the process defaults.
	pub fn new(process: P, registry: &TableRegistry, batch: impl Into<Batch<P::Item>>) -> Result<Self> {
		let config = BulkConfig {
			chunk_limit: process.chunk_limit(),
			target: process.target(),
		};
		Self::with_config(process, registry, config, batch)
	}

	#[instrument(name = "bulk::pipeline::new", level = "debug", skip_all)]
	pub fn with_config(
		process: P,
		registry: &TableRegistry,
		config: BulkConfig,
		batch: impl Into<Batch<P::Item>>,
	) -> Result<Self> {
		let items = normalize(batch.into())?;
		let (accepted, failure_data) = partition(items, |item| process.validate(item))?;

		if !failure_data.is_empty() {
			warn!(rejected = failure_data.count(), "items failed validation");
		}

		let data = accepted.into_iter().map(|item| process.format(item)).collect::<Result<Collection<Row>>>()?;

		debug!(rows = data.count(), "formatted rows");

		Ok(Self {
			process,
			data,
			failure_data,
			config,
			registry: registry.clone(),
		})
	}

	pub fn data(&self) -> &Collection<Row> {
		&self.data
	}

	pub fn data_array(&self) -> Vec<Row> {
		self.data.to_array()
	}

	pub fn data_count(&self) -> usize {
		self.data.count()
	}

	pub fn failure_data(&self) -> &Collection<P::Item> {
		&self.failure_data
	}

	pub fn failure_data_count(&self) -> usize {
		self.failure_data.count()
	}

	pub fn limit(&self) -> usize {
		self.config.chunk_limit
	}

	/// Takes effect on the next write. A limit of 0 is rejected when writing.
	pub fn set_limit(&mut self, limit: usize) -> &mut Self {
		self.config.chunk_limit = limit;
		self
	}

	pub fn target(&self) -> Option<&TargetId> {
		self.config.target.as_ref()
	}

	pub fn set_target(&mut self, target: impl Into<TargetId>) -> &mut Self {
		self.config.target = Some(target.into());
		self
	}

	pub fn set_target_of<E: Entity>(&mut self) -> &mut Self {
		self.set_target(TargetId::of::<E>())
	}

	pub fn set_target_from<E: Entity>(&mut self, entity: &E) -> &mut Self {
		self.set_target(entity.target())
	}

	pub fn config(&self) -> &BulkConfig {
		&self.config
	}

	pub fn process(&self) -> &P {
		&self.process
	}

	pub fn registry(&self) -> &TableRegistry {
		&self.registry
	}

	/// A fresh handle for the current target.
	pub fn resolve_handle(&self) -> Result<Box<dyn TableHandle>> {
		let Some(target) = self.config.target.as_ref() else {
			return Err(BulkError::UnboundTarget.into());
		};
		self.registry.resolve(target)
	}

	#[instrument(name = "bulk::pipeline::truncate", level = "debug", skip_all, fields(table = ?self.target()))]
	pub fn truncate_table(&self) -> Result<&Self> {
		self.resolve_handle()?.truncate()?;
		Ok(self)
	}

	/// Runs `action` over the accepted rows in chunks of [`Self::limit`] rows.
	pub fn bulk_process<F>(&self, action: F) -> Result<&Self>
	where
		F: FnMut(&[Row]) -> Result<()>,
	{
		for_each_chunk(self.data.as_slice(), self.limit(), action)?;
		Ok(self)
	}

	/// Inserts the accepted rows, optionally clearing the table first.
	///
	/// One handle serves the whole call. The table is truncated before the
	/// first chunk is written; nothing wraps the two in a transaction.
	#[instrument(name = "bulk::pipeline::insert", level = "debug", skip_all, fields(table = ?self.target(), rows = self.data_count(), truncate = is_truncate))]
	pub fn bulk_insert(&self, is_truncate: bool) -> Result<&Self> {
		check_chunk_limit(self.limit())?;
		let mut handle = self.resolve_handle()?;

		if is_truncate {
			handle.truncate()?;
		}

		debug!(chunks = chunk_count(self.data_count(), self.limit()), "inserting rows");
		self.bulk_process(|chunk| handle.insert_rows(chunk))
	}

	/// Inserts rows or replaces those matching an existing row on `unique_by`.
	#[instrument(name = "bulk::pipeline::upsert", level = "debug", skip_all, fields(table = ?self.target(), rows = self.data_count()))]
	pub fn bulk_upsert(&self, unique_by: impl Into<UniqueBy>) -> Result<&Self> {
		let unique_by = unique_by.into();
		check_chunk_limit(self.limit())?;
		let mut handle = self.resolve_handle()?;

		debug!(chunks = chunk_count(self.data_count(), self.limit()), unique_by = %unique_by, "upserting rows");
		self.bulk_process(|chunk| handle.upsert_rows(chunk, &unique_by))
	}
}

impl<P: BulkProcess> BulkPipeline<P>
where
	P::Item: Clone,
{
	pub fn failure_data_array(&self) -> Vec<P::Item> {
		self.failure_data.to_array()
	}
}

impl<P: BulkProcess> Debug for BulkPipeline<P> {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("BulkPipeline")
			.field("config", &self.config)
			.field("data_count", &self.data_count())
			.field("failure_data_count", &self.failure_data_count())
			.finish()
	}
}
