// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

#![cfg_attr(not(debug_assertions), deny(warnings))]

mod records;

use std::{error::Error, fs, path::PathBuf};

use bulkload::{BulkConfig, BulkPipeline, SqliteConfig, SqliteStore, TableRegistry};
use clap::{Args, Parser, Subcommand};
use records::JsonRecords;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Load a JSON array of objects into a SQLite table
#[derive(Debug, Parser)]
#[command(name = "bulkload", version)]
struct Cli {
	#[command(subcommand)]
	command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
	/// Append the records, optionally clearing the table first
	Insert {
		#[command(flatten)]
		source: Source,

		/// Delete every row of the table before inserting
		#[arg(long)]
		truncate: bool,
	},
	/// Insert the records or update rows with the same key
	Upsert {
		#[command(flatten)]
		source: Source,

		/// Column identifying an existing row; repeat for a composite key
		#[arg(long = "unique-by", required = true)]
		unique_by: Vec<String>,
	},
}

#[derive(Debug, Args)]
struct Source {
	/// SQLite database file
	#[arg(long)]
	db: PathBuf,

	/// Destination table
	#[arg(long)]
	table: String,

	/// JSON file holding an array of objects
	#[arg(long)]
	input: PathBuf,

	/// Rows per write; defaults to BULKLOAD_CHUNK_LIMIT or 1000
	#[arg(long)]
	limit: Option<usize>,

	/// Reject objects where this key is missing or null; repeatable
	#[arg(long)]
	require: Vec<String>,

	/// SQL run before loading, e.g. a CREATE TABLE IF NOT EXISTS statement
	#[arg(long)]
	init_sql: Option<String>,

	/// Write the rejected items to this file as a JSON array
	#[arg(long)]
	rejected_out: Option<PathBuf>,
}

impl Command {
	fn source(&self) -> &Source {
		match self {
			Command::Insert {
				source,
				..
			}
			| Command::Upsert {
				source,
				..
			} => source,
		}
	}
}

fn main() -> Result<(), Box<dyn Error>> {
	tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
		.init();

	let cli = Cli::parse();
	run(&cli.command)
}

fn run(command: &Command) -> Result<(), Box<dyn Error>> {
	let source = command.source();

	let mut config = BulkConfig::from_env()?.with_target(source.table.as_str());
	if let Some(limit) = source.limit {
		config = config.with_chunk_limit(limit);
	}

	let document: serde_json::Value = serde_json::from_str(&fs::read_to_string(&source.input)?)?;

	let store = SqliteStore::new(SqliteConfig::new(&source.db))?;
	if let Some(sql) = &source.init_sql {
		store.execute_batch(sql)?;
	}

	let registry = TableRegistry::new();
	store.register(&registry, source.table.as_str());

	let pipeline = BulkPipeline::with_config(JsonRecords::new(source.require.clone()), &registry, config, document)?;
	info!(accepted = pipeline.data_count(), rejected = pipeline.failure_data_count(), "loaded {}", source.input.display());

	if pipeline.failure_data_count() > 0 {
		warn!(rejected = pipeline.failure_data_count(), "some records failed validation");
	}
	if let Some(path) = &source.rejected_out {
		fs::write(path, serde_json::to_string_pretty(&pipeline.failure_data_array())?)?;
	}

	match command {
		Command::Insert {
			truncate,
			..
		} => {
			pipeline.bulk_insert(*truncate)?;
		}
		Command::Upsert {
			unique_by,
			..
		} => {
			pipeline.bulk_upsert(unique_by.clone())?;
		}
	}

	info!(table = %source.table, rows = pipeline.data_count(), "done");
	Ok(())
}
