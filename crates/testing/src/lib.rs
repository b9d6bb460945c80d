// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub mod recorder;
pub mod tempdir;

pub use recorder::{Event, Recorder, RecordingTable};
pub use tempdir::temp_dir;
