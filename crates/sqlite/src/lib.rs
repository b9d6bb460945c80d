// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! A SQLite table store.
//!
//! Tables are ordinary SQLite tables created by the caller, for example with
//! [`SqliteStore::execute_batch`]. Upserts rely on a unique index covering the
//! unique-by columns.

#![cfg_attr(not(debug_assertions), deny(warnings))]

mod config;
mod connection;
pub mod error;
mod store;
mod table;
mod value;

pub use config::{DbPath, JournalMode, OpenFlags, SqliteConfig, SynchronousMode};
pub use error::SqliteError;
pub use store::{SqliteStore, SqliteStoreInner};
pub use table::SqliteTable;
