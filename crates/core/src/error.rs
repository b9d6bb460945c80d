// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Pipeline and storage-collaborator error types and their diagnostics.

use bulkload_type::{
	Error,
	error::{Diagnostic, IntoDiagnostic},
};

use crate::target::TargetId;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BulkError {
	#[error("Invalid data type: {type_name}")]
	InvalidInputType {
		type_name: String,
	},

	#[error("data must not be empty")]
	EmptyInput,

	#[error("data must not be empty after validation")]
	EmptyAfterValidation {
		rejected: usize,
	},

	#[error("no target table is bound")]
	UnboundTarget,

	#[error("target '{target}' is not registered")]
	UnknownTarget {
		target: TargetId,
	},

	#[error("chunk limit must be a positive integer, got {limit}")]
	InvalidChunkLimit {
		limit: usize,
	},
}

impl IntoDiagnostic for BulkError {
	fn into_diagnostic(self) -> Diagnostic {
		let message = self.to_string();
		match self {
			BulkError::InvalidInputType {
				type_name,
			} => Diagnostic {
				code: "BULK_001".to_string(),
				message,
				label: Some(format!("unsupported input shape '{}'", type_name)),
				help: Some("Pass a list, a collection, a query result or a value implementing Arrayable"
					.to_string()),
				notes: vec![],
				cause: None,
			},

			BulkError::EmptyInput => Diagnostic {
				code: "BULK_002".to_string(),
				message,
				label: None,
				help: Some("Provide at least one item to ingest".to_string()),
				notes: vec![],
				cause: None,
			},

			BulkError::EmptyAfterValidation {
				rejected,
			} => Diagnostic {
				code: "BULK_003".to_string(),
				message,
				label: Some(format!("all {} items failed validation", rejected)),
				help: Some("Inspect the validation rule or the input data".to_string()),
				notes: vec![],
				cause: None,
			},

			BulkError::UnboundTarget => Diagnostic {
				code: "BULK_004".to_string(),
				message,
				label: None,
				help: Some("Call set_target, set_target_of or set_target_from before writing".to_string()),
				notes: vec![],
				cause: None,
			},

			BulkError::UnknownTarget {
				target,
			} => Diagnostic {
				code: "BULK_005".to_string(),
				message,
				label: Some(format!("no handle factory for '{}'", target)),
				help: Some("Register the target in the TableRegistry passed to the pipeline".to_string()),
				notes: vec![],
				cause: None,
			},

			BulkError::InvalidChunkLimit {
				..
			} => Diagnostic {
				code: "BULK_006".to_string(),
				message,
				label: None,
				help: Some("Use set_limit with a value of at least 1".to_string()),
				notes: vec![],
				cause: None,
			},
		}
	}
}

impl From<BulkError> for Error {
	fn from(err: BulkError) -> Self {
		bulkload_type::error!(err.into_diagnostic())
	}
}

/// Contract violations detected by storage collaborators.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StoreError {
	#[error("cannot write an empty set of rows")]
	EmptyRows,

	#[error("row {row} has columns [{found}], expected [{expected}]")]
	NonUniformColumns {
		expected: String,
		found: String,
		row: usize,
	},

	#[error("upsert requires at least one unique-by column")]
	EmptyUniqueBy,

	#[error("row {row} is missing unique-by column '{column}'")]
	MissingUniqueColumn {
		column: String,
		row: usize,
	},

	#[error("table '{table}' does not exist")]
	TableNotFound {
		table: String,
	},
}

impl IntoDiagnostic for StoreError {
	fn into_diagnostic(self) -> Diagnostic {
		let message = self.to_string();
		let (code, help) = match &self {
			StoreError::EmptyRows => ("STORE_001", "Only call insert_rows/upsert_rows with at least one row"),
			StoreError::NonUniformColumns {
				..
			} => ("STORE_002", "Every row of one write must carry the same columns"),
			StoreError::EmptyUniqueBy => ("STORE_003", "Name the column(s) that identify an existing row"),
			StoreError::MissingUniqueColumn {
				..
			} => ("STORE_004", "Format every row with all unique-by columns"),
			StoreError::TableNotFound {
				..
			} => ("STORE_005", "Create or register the table before reading it"),
		};

		Diagnostic {
			code: code.to_string(),
			message,
			label: None,
			help: Some(help.to_string()),
			notes: vec![],
			cause: None,
		}
	}
}

impl From<StoreError> for Error {
	fn from(err: StoreError) -> Self {
		bulkload_type::error!(err.into_diagnostic())
	}
}

pub mod diagnostic {
	use bulkload_type::error::Diagnostic;

	/// A formatter could not turn an item into a row
	pub fn format_failed(reason: impl Into<String>) -> Diagnostic {
		Diagnostic {
			code: "BULK_007".to_string(),
			message: format!("failed to format item: {}", reason.into()),
			label: None,
			help: None,
			notes: vec!["Formatting is all-or-nothing; no rows were kept".to_string()],
			cause: None,
		}
	}

	/// A configuration value is out of range or unparsable
	pub fn invalid_config(key: &str, reason: impl Into<String>) -> Diagnostic {
		Diagnostic {
			code: "CONFIG_001".to_string(),
			message: format!("invalid configuration value for '{}': {}", key, reason.into()),
			label: None,
			help: Some("chunk_limit must be a positive integer".to_string()),
			notes: vec![],
			cause: None,
		}
	}
}
