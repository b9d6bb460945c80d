// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use bulkload_type::{Error, Result};
use serde::{Deserialize, Serialize};

use crate::{error::diagnostic::invalid_config, target::TargetId};

pub const DEFAULT_CHUNK_LIMIT: usize = 1000;

pub const ENV_CHUNK_LIMIT: &str = "BULKLOAD_CHUNK_LIMIT";
pub const ENV_TARGET: &str = "BULKLOAD_TARGET";

/// Write-time settings of a pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BulkConfig {
	/// Maximum number of rows handed to the store in one write call.
	pub chunk_limit: usize,
	/// Table the pipeline writes to.
	pub target: Option<TargetId>,
}

impl Default for BulkConfig {
	fn default() -> Self {
		Self {
			chunk_limit: DEFAULT_CHUNK_LIMIT,
			target: None,
		}
	}
}

impl BulkConfig {
	pub fn with_chunk_limit(mut self, chunk_limit: usize) -> Self {
		self.chunk_limit = chunk_limit;
		self
	}

	pub fn with_target(mut self, target: impl Into<TargetId>) -> Self {
		self.target = Some(target.into());
		self
	}

	/// Reads `BULKLOAD_CHUNK_LIMIT` and `BULKLOAD_TARGET`; unset keys keep
	/// their defaults.
	pub fn from_env() -> Result<Self> {
		Self::from_lookup(|key| std::env::var(key).ok())
	}

	pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
		let mut config = Self::default();

		if let Some(raw) = lookup(ENV_CHUNK_LIMIT) {
			config.chunk_limit = raw
				.trim()
				.parse::<usize>()
				.map_err(|err| Error(invalid_config(ENV_CHUNK_LIMIT, format!("'{}': {}", raw, err))))?;
		}

		if let Some(raw) = lookup(ENV_TARGET) {
			let raw = raw.trim();
			if !raw.is_empty() {
				config.target = Some(TargetId::new(raw));
			}
		}

		config.validate()?;
		Ok(config)
	}

	pub fn from_json_str(json: &str) -> Result<Self> {
		let config: Self =
			serde_json::from_str(json).map_err(|err| Error(invalid_config("config", err.to_string())))?;
		config.validate()?;
		Ok(config)
	}

	pub fn validate(&self) -> Result<()> {
		if self.chunk_limit == 0 {
			return Err(Error(invalid_config("chunk_limit", "must be greater than 0")));
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use std::collections::HashMap;

	use super::*;

	fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
		let vars: HashMap<String, String> = vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
		move |key| vars.get(key).cloned()
	}

	#[test]
	fn test_defaults() {
		let config = BulkConfig::default();
		assert_eq!(config.chunk_limit, 1000);
		assert_eq!(config.target, None);
	}

	#[test]
	fn test_builder() {
		let config = BulkConfig::default().with_chunk_limit(50).with_target("users");
		assert_eq!(config.chunk_limit, 50);
		assert_eq!(config.target, Some(TargetId::new("users")));
	}

	#[test]
	fn test_from_lookup() {
		let config = BulkConfig::from_lookup(lookup(&[(ENV_CHUNK_LIMIT, " 250 "), (ENV_TARGET, "orders")])).unwrap();
		assert_eq!(config.chunk_limit, 250);
		assert_eq!(config.target, Some(TargetId::new("orders")));
	}

	#[test]
	fn test_from_lookup_unset() {
		assert_eq!(BulkConfig::from_lookup(lookup(&[])).unwrap(), BulkConfig::default());
	}

	#[test]
	fn test_from_lookup_rejects_bad_limits() {
		let err = BulkConfig::from_lookup(lookup(&[(ENV_CHUNK_LIMIT, "ten")])).unwrap_err();
		assert_eq!(err.code(), "CONFIG_001");
		let err = BulkConfig::from_lookup(lookup(&[(ENV_CHUNK_LIMIT, "0")])).unwrap_err();
		assert_eq!(err.code(), "CONFIG_001");
	}

	#[test]
	fn test_from_json_str() {
		let config = BulkConfig::from_json_str(r#"{"target": "users"}"#).unwrap();
		assert_eq!(config.chunk_limit, DEFAULT_CHUNK_LIMIT);
		assert_eq!(config.target, Some(TargetId::new("users")));

		assert_eq!(BulkConfig::from_json_str(r#"{"chunk_limit": 0}"#).unwrap_err().code(), "CONFIG_001");
		assert_eq!(BulkConfig::from_json_str("[").unwrap_err().code(), "CONFIG_001");
	}
}
