// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use bulkload_type::Result;
use tracing::debug;

use crate::{collection::Collection, error::BulkError};

/// Splits `items` into `(accepted, rejected)`, both in input order.
///
/// `validate` runs exactly once per item. Items are excluded by position, so
/// value-equal items receive independent verdicts.
pub fn partition<I>(items: Collection<I>, mut validate: impl FnMut(&I) -> bool) -> Result<(Collection<I>, Collection<I>)> {
	let total = items.count();
	let (accepted, rejected): (Vec<I>, Vec<I>) = items.into_iter().partition(|item| validate(item));

	if accepted.is_empty() {
		return Err(BulkError::EmptyAfterValidation {
			rejected: rejected.len(),
		}
		.into());
	}

	debug!(total, accepted = accepted.len(), rejected = rejected.len(), "partitioned items");
	Ok((Collection::from(accepted), Collection::from(rejected)))
}
