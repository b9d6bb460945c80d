// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Bulk ingestion of record batches.
//!
//! Implement [`BulkProcess`] for a record type, register the destination
//! table in a [`TableRegistry`] and call [`BulkProcess::insert`] or
//! [`BulkProcess::upsert`]. Use [`BulkProcess::pipeline`] to inspect the
//! accepted rows and the rejected items before writing.

pub use bulkload_core as core;
pub use bulkload_core::{
	Arrayable, Batch, BulkConfig, BulkError, BulkPipeline, BulkProcess, Collection, DEFAULT_CHUNK_LIMIT, Entity,
	QueryResult, StoreError, TableHandle, TableRegistry, TargetId, UniqueBy,
};
pub use bulkload_sqlite as sqlite;
pub use bulkload_sqlite::{SqliteConfig, SqliteStore};
pub use bulkload_store_memory as memory;
pub use bulkload_store_memory::MemoryStore;
pub use bulkload_type::{Diagnostic, Error, IntoValue, Result, Row, Value, row};

pub use bulkload_core::error::diagnostic::format_failed;
