// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use bulkload_type::Value;
use rusqlite::types::{Value as SqlValue, ValueRef};

pub(crate) fn to_sql(value: &Value) -> SqlValue {
	match value {
		Value::Undefined => SqlValue::Null,
		Value::Boolean(v) => SqlValue::Integer(i64::from(*v)),
		Value::Int8(v) => SqlValue::Integer(*v),
		// SQLite integers are signed 64-bit
		Value::Uint8(v) => match i64::try_from(*v) {
			Ok(v) => SqlValue::Integer(v),
			Err(_) => SqlValue::Real(*v as f64),
		},
		Value::Float8(v) => SqlValue::Real(v.value()),
		Value::Utf8(v) => SqlValue::Text(v.clone()),
		Value::Blob(v) => SqlValue::Blob(v.clone()),
	}
}

pub(crate) fn from_sql(value: ValueRef<'_>) -> Value {
	match value {
		ValueRef::Null => Value::Undefined,
		ValueRef::Integer(v) => Value::Int8(v),
		ValueRef::Real(v) => Value::float8(v),
		ValueRef::Text(v) => Value::Utf8(String::from_utf8_lossy(v).into_owned()),
		ValueRef::Blob(v) => Value::Blob(v.to_vec()),
	}
}

pub(crate) fn quote_identifier(name: &str) -> String {
	format!("\"{}\"", name.replace('"', "\"\""))
}
