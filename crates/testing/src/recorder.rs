// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! A table handle that records every call made to it.

use std::sync::Arc;

use bulkload_core::{TableHandle, TableRegistry, TargetId, UniqueBy};
use bulkload_type::{Diagnostic, Error, Result, Row};
use parking_lot::Mutex;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
	Truncate,
	Insert(usize),
	Upsert(usize, Vec<String>),
}

#[derive(Debug, Default)]
struct State {
	events: Vec<Event>,
	rows: Vec<Row>,
	writes: usize,
	resolved: usize,
	fail_on_write: Option<usize>,
}

/// Shared log behind every [`RecordingTable`] it hands out.
#[derive(Debug, Clone, Default)]
pub struct Recorder(Arc<Mutex<State>>);

impl Recorder {
	pub fn new() -> Self {
		Self::default()
	}

	/// Makes the `n`-th write (1-based, counting inserts and upserts) fail
	/// with `TEST_001` without being recorded.
	pub fn fail_on_write(self, n: usize) -> Self {
		self.0.lock().fail_on_write = Some(n);
		self
	}

	pub fn events(&self) -> Vec<Event> {
		self.0.lock().events.clone()
	}

	/// Every row written so far, in write order.
	pub fn rows(&self) -> Vec<Row> {
		self.0.lock().rows.clone()
	}

	/// Chunk sizes of the recorded writes.
	pub fn chunk_sizes(&self) -> Vec<usize> {
		self.0
			.lock()
			.events
			.iter()
			.filter_map(|event| match event {
				Event::Insert(n) | Event::Upsert(n, _) => Some(*n),
				Event::Truncate => None,
			})
			.collect()
	}

	/// How many handles were resolved through [`Recorder::register`].
	pub fn resolved(&self) -> usize {
		self.0.lock().resolved
	}

	pub fn handle(&self) -> RecordingTable {
		RecordingTable {
			recorder: self.clone(),
		}
	}

	pub fn register(&self, registry: &TableRegistry, target: impl Into<TargetId>) {
		let recorder = self.clone();
		registry.register(target, move |_| {
			recorder.0.lock().resolved += 1;
			Ok(Box::new(recorder.handle()) as Box<dyn TableHandle>)
		});
	}

	fn write(&self, rows: &[Row], event: Event) -> Result<()> {
		let mut state = self.0.lock();
		state.writes += 1;
		if state.fail_on_write == Some(state.writes) {
			return Err(Error(Diagnostic {
				code: "TEST_001".to_string(),
				message: format!("write {} failed", state.writes),
				..Default::default()
			}));
		}
		state.events.push(event);
		state.rows.extend_from_slice(rows);
		Ok(())
	}
}

#[derive(Debug, Clone)]
pub struct RecordingTable {
	recorder: Recorder,
}

impl TableHandle for RecordingTable {
	fn truncate(&mut self) -> Result<()> {
		self.recorder.0.lock().events.push(Event::Truncate);
		Ok(())
	}

	fn insert_rows(&mut self, rows: &[Row]) -> Result<()> {
		self.recorder.write(rows, Event::Insert(rows.len()))
	}

	fn upsert_rows(&mut self, rows: &[Row], unique_by: &UniqueBy) -> Result<()> {
		self.recorder.write(rows, Event::Upsert(rows.len(), unique_by.columns().to_vec()))
	}
}
