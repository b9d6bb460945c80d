// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! An in-memory table store.
//!
//! Tables are plain row vectors behind one shared lock. The store exists to
//! exercise the pipeline end to end; it enforces the write contract of
//! [`TableHandle`](bulkload_core::TableHandle) and nothing else.

#![cfg_attr(not(debug_assertions), deny(warnings))]

mod store;
mod table;

pub use store::{MemoryStore, MemoryStoreInner};
pub use table::MemoryTable;
