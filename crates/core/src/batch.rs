// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Accepted input shapes and their normalization into a [`Collection`].

use std::fmt::{Debug, Formatter};

use bulkload_type::Result;
use tracing::debug;

use crate::{collection::Collection, error::BulkError};

/// A value that can hand out its contents as an ordered list of items.
pub trait Arrayable<I> {
	fn to_array(&self) -> Vec<I>;
}

/// An ordered sequence read back from a storage table.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryResult<T> {
	table: String,
	items: Vec<T>,
}

impl<T> QueryResult<T> {
	pub fn new(table: impl Into<String>, items: Vec<T>) -> Self {
		Self {
			table: table.into(),
			items,
		}
	}

	pub fn table(&self) -> &str {
		&self.table
	}

	pub fn len(&self) -> usize {
		self.items.len()
	}

	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}

	pub fn iter(&self) -> std::slice::Iter<'_, T> {
		self.items.iter()
	}

	pub fn into_base(self) -> Collection<T> {
		Collection::from(self.items)
	}
}

/// Every input shape a pipeline accepts.
pub enum Batch<I> {
	List(Vec<I>),
	Sequence(Collection<I>),
	QueryResult(QueryResult<I>),
	Convertible(Box<dyn Arrayable<I>>),
	/// A shape with no item sequence behind it, such as a bare scalar.
	Unsupported {
		type_name: String,
	},
}

impl<I> Batch<I> {
	pub fn convertible(value: impl Arrayable<I> + 'static) -> Self {
		Batch::Convertible(Box::new(value))
	}

	pub fn unsupported(type_name: impl Into<String>) -> Self {
		Batch::Unsupported {
			type_name: type_name.into(),
		}
	}

	pub fn shape(&self) -> &str {
		match self {
			Batch::List(_) => "list",
			Batch::Sequence(_) => "sequence",
			Batch::QueryResult(_) => "query result",
			Batch::Convertible(_) => "convertible",
			Batch::Unsupported {
				type_name,
			} => type_name,
		}
	}
}

impl<I> Debug for Batch<I> {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Batch").field("shape", &self.shape()).finish()
	}
}

impl<I> From<Vec<I>> for Batch<I> {
	fn from(items: Vec<I>) -> Self {
		Batch::List(items)
	}
}

impl<I> From<Collection<I>> for Batch<I> {
	fn from(items: Collection<I>) -> Self {
		Batch::Sequence(items)
	}
}

impl<I> From<QueryResult<I>> for Batch<I> {
	fn from(result: QueryResult<I>) -> Self {
		Batch::QueryResult(result)
	}
}

/// A JSON array is a list of items; any other JSON document is unsupported.
impl From<serde_json::Value> for Batch<serde_json::Value> {
	fn from(json: serde_json::Value) -> Self {
		match json {
			serde_json::Value::Array(items) => Batch::List(items),
			serde_json::Value::Null => Batch::unsupported("null"),
			serde_json::Value::Bool(_) => Batch::unsupported("boolean"),
			serde_json::Value::Number(_) => Batch::unsupported("number"),
			serde_json::Value::String(_) => Batch::unsupported("string"),
			serde_json::Value::Object(_) => Batch::unsupported("object"),
		}
	}
}

pub fn normalize<I>(batch: Batch<I>) -> Result<Collection<I>> {
	let shape = batch.shape().to_string();

	let collection = match batch {
		Batch::List(items) => Collection::from(items),
		Batch::Sequence(collection) => collection,
		Batch::QueryResult(result) => result.into_base(),
		Batch::Convertible(value) => Collection::from(value.to_array()),
		Batch::Unsupported {
			type_name,
		} => {
			return Err(BulkError::InvalidInputType {
				type_name,
			}
			.into());
		}
	};

	if collection.is_empty() {
		return Err(BulkError::EmptyInput.into());
	}

	debug!(shape = %shape, items = collection.count(), "normalized batch");
	Ok(collection)
}
