// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use bulkload_type::Result;
use rusqlite::Connection;

use crate::{
	config::{DbPath, OpenFlags, SqliteConfig},
	error::{SqliteError, statement},
};

pub(crate) fn connect(config: &SqliteConfig) -> Result<Connection> {
	let flags = convert_flags(&config.flags);

	let conn = match &config.path {
		DbPath::File(path) => {
			let path = resolve_db_path(path);
			Connection::open_with_flags(&path, flags).map_err(|e| SqliteError::Connection {
				path: path.display().to_string(),
				reason: e.to_string(),
			})?
		}
		DbPath::Memory => Connection::open_in_memory_with_flags(flags).map_err(|e| SqliteError::Connection {
			path: ":memory:".to_string(),
			reason: e.to_string(),
		})?,
	};

	conn.pragma_update(None, "journal_mode", config.journal_mode.as_str()).map_err(statement)?;
	conn.pragma_update(None, "synchronous", config.synchronous_mode.as_str()).map_err(statement)?;

	Ok(conn)
}

/// Creates the parent directory of a file database.
fn resolve_db_path(path: &std::path::Path) -> std::path::PathBuf {
	let is_uri = path.to_string_lossy().starts_with("file:");
	if !is_uri && let Some(parent) = path.parent() {
		std::fs::create_dir_all(parent).ok();
	}
	path.to_path_buf()
}

fn convert_flags(flags: &OpenFlags) -> rusqlite::OpenFlags {
	let mut rusqlite_flags = rusqlite::OpenFlags::empty();

	if flags.read_write {
		rusqlite_flags |= rusqlite::OpenFlags::SQLITE_OPEN_READ_WRITE;
	}
	if flags.create {
		rusqlite_flags |= rusqlite::OpenFlags::SQLITE_OPEN_CREATE;
	}
	if flags.full_mutex {
		rusqlite_flags |= rusqlite::OpenFlags::SQLITE_OPEN_FULL_MUTEX;
	}
	if flags.no_mutex {
		rusqlite_flags |= rusqlite::OpenFlags::SQLITE_OPEN_NO_MUTEX;
	}
	if flags.shared_cache {
		rusqlite_flags |= rusqlite::OpenFlags::SQLITE_OPEN_SHARED_CACHE;
	}
	if flags.private_cache {
		rusqlite_flags |= rusqlite::OpenFlags::SQLITE_OPEN_PRIVATE_CACHE;
	}
	if flags.uri {
		rusqlite_flags |= rusqlite::OpenFlags::SQLITE_OPEN_URI;
	}

	rusqlite_flags
}
