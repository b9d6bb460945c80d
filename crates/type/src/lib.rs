// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub mod error;
pub mod row;
pub mod value;

pub use error::{Diagnostic, Error, IntoDiagnostic};
pub use row::Row;
pub use value::{IntoValue, OrderedF64, Value};

pub type Result<T> = std::result::Result<T, Error>;
