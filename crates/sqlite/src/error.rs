// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use bulkload_type::{
	Error,
	error::{Diagnostic, IntoDiagnostic},
};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SqliteError {
	#[error("failed to connect to database at {path}: {reason}")]
	Connection {
		path: String,
		reason: String,
	},

	#[error("sqlite statement failed: {reason}")]
	Statement {
		code: Option<String>,
		reason: String,
	},
}

/// Longest reason kept from a rusqlite error, whose text can embed the whole
/// statement.
const MAX_REASON: usize = 256;

fn shorten(mut reason: String) -> String {
	if reason.len() <= MAX_REASON {
		return reason;
	}
	let mut end = MAX_REASON;
	while !reason.is_char_boundary(end) {
		end -= 1;
	}
	reason.truncate(end);
	reason.push_str("...");
	reason
}

impl From<rusqlite::Error> for SqliteError {
	fn from(err: rusqlite::Error) -> Self {
		SqliteError::Statement {
			code: err.sqlite_error_code().map(|code| format!("{:?}", code)),
			reason: shorten(err.to_string()),
		}
	}
}

impl IntoDiagnostic for SqliteError {
	fn into_diagnostic(self) -> Diagnostic {
		let message = self.to_string();
		match self {
			SqliteError::Connection {
				path,
				..
			} => Diagnostic {
				code: "SQLITE_001".to_string(),
				message,
				label: Some(path),
				help: Some("Check that the database path exists and is writable".to_string()),
				notes: vec![],
				cause: None,
			},
			SqliteError::Statement {
				code,
				..
			} => Diagnostic {
				code: "SQLITE_002".to_string(),
				message,
				label: code,
				help: None,
				notes: vec![],
				cause: None,
			},
		}
	}
}

impl From<SqliteError> for Error {
	fn from(err: SqliteError) -> Self {
		bulkload_type::error!(err.into_diagnostic())
	}
}

/// Shorthand for lifting a rusqlite failure into a pipeline error.
pub(crate) fn statement(err: rusqlite::Error) -> Error {
	SqliteError::from(err).into()
}
