// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use bulkload_type::Result;
use tracing::trace;

use crate::error::BulkError;

pub fn check_chunk_limit(limit: usize) -> Result<()> {
	if limit == 0 {
		return Err(BulkError::InvalidChunkLimit {
			limit,
		}
		.into());
	}
	Ok(())
}

/// Number of chunks `len` items split into with at most `chunk_limit` each.
pub fn chunk_count(len: usize, chunk_limit: usize) -> usize {
	if chunk_limit == 0 {
		return 0;
	}
	len.div_ceil(chunk_limit)
}

/// Runs `action` over consecutive slices of at most `chunk_limit` rows.
///
/// Chunks are visited in order. The first failing chunk ends the loop and its
/// error is returned; chunks handled before it are not undone.
pub fn for_each_chunk<T, F>(rows: &[T], chunk_limit: usize, mut action: F) -> Result<()>
where
	F: FnMut(&[T]) -> Result<()>,
{
	check_chunk_limit(chunk_limit)?;

	let total = chunk_count(rows.len(), chunk_limit);
	for (index, chunk) in rows.chunks(chunk_limit).enumerate() {
		trace!(chunk = index, of = total, size = chunk.len(), "processing chunk");
		action(chunk)?;
	}

	Ok(())
}
