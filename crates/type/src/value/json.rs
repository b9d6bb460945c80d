// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! Conversions between [`Value`] and `serde_json::Value`.
//!
//! Nested JSON arrays and objects have no scalar counterpart; they are kept as
//! their serialized JSON text.

use serde_json::Number;

use crate::value::Value;

impl From<serde_json::Value> for Value {
	fn from(json: serde_json::Value) -> Self {
		match json {
			serde_json::Value::Null => Value::Undefined,
			serde_json::Value::Bool(v) => Value::Boolean(v),
			serde_json::Value::Number(n) => from_number(&n),
			serde_json::Value::String(s) => Value::Utf8(s),
			nested @ (serde_json::Value::Array(_) | serde_json::Value::Object(_)) => {
				Value::Utf8(nested.to_string())
			}
		}
	}
}

impl From<&serde_json::Value> for Value {
	fn from(json: &serde_json::Value) -> Self {
		Value::from(json.clone())
	}
}

fn from_number(n: &Number) -> Value {
	if let Some(v) = n.as_i64() {
		Value::Int8(v)
	} else if let Some(v) = n.as_u64() {
		Value::Uint8(v)
	} else {
		n.as_f64().map(Value::float8).unwrap_or(Value::Undefined)
	}
}

impl From<&Value> for serde_json::Value {
	fn from(value: &Value) -> Self {
		match value {
			Value::Undefined => serde_json::Value::Null,
			Value::Boolean(v) => serde_json::Value::Bool(*v),
			Value::Int8(v) => serde_json::Value::from(*v),
			Value::Uint8(v) => serde_json::Value::from(*v),
			Value::Float8(v) => {
				Number::from_f64(v.value()).map(serde_json::Value::Number).unwrap_or(serde_json::Value::Null)
			}
			Value::Utf8(v) => serde_json::Value::String(v.clone()),
			Value::Blob(v) => serde_json::Value::Array(v.iter().map(|b| serde_json::Value::from(*b)).collect()),
		}
	}
}

impl From<Value> for serde_json::Value {
	fn from(value: Value) -> Self {
		serde_json::Value::from(&value)
	}
}
