// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! The bulk ingestion pipeline.
//!
//! A batch is normalized into a [`Collection`], partitioned by a
//! [`BulkProcess::validate`] hook, formatted into [`Row`]s by
//! [`BulkProcess::format`] and written to a [`TableHandle`] in chunks of at
//! most [`BulkConfig::chunk_limit`] rows.

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub mod batch;
pub mod chunk;
pub mod collection;
pub mod config;
pub mod error;
pub mod handle;
pub mod partition;
pub mod pipeline;
pub mod process;
pub mod target;

pub use batch::{Arrayable, Batch, QueryResult, normalize};
pub use bulkload_type::{Error, Result, Row, Value, row};
pub use chunk::for_each_chunk;
pub use collection::Collection;
pub use config::{BulkConfig, DEFAULT_CHUNK_LIMIT};
pub use error::{BulkError, StoreError};
pub use handle::{TableHandle, UniqueBy};
pub use partition::partition;
pub use pipeline::BulkPipeline;
pub use process::BulkProcess;
pub use target::{Entity, HandleFactory, TableRegistry, TargetId};
