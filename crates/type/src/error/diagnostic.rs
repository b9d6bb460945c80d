// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::Write;

use serde::{Deserialize, Serialize};

/// A structured error report: a stable code, a human message and optional hints.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
	pub code: String,
	pub message: String,
	pub label: Option<String>,
	pub help: Option<String>,
	pub notes: Vec<String>,
	pub cause: Option<Box<Diagnostic>>,
}

impl Diagnostic {
	pub fn with_cause(mut self, cause: Diagnostic) -> Self {
		self.cause = Some(Box::new(cause));
		self
	}
}

pub trait IntoDiagnostic {
	fn into_diagnostic(self) -> Diagnostic;
}

impl IntoDiagnostic for Diagnostic {
	fn into_diagnostic(self) -> Diagnostic {
		self
	}
}

pub struct DefaultRenderer;

impl DefaultRenderer {
	pub fn render_string(diagnostic: &Diagnostic) -> String {
		let mut out = String::new();
		Self::render(&mut out, diagnostic, 0);
		out
	}

	fn render(out: &mut String, diagnostic: &Diagnostic, depth: usize) {
		let indent = "  ".repeat(depth);

		let _ = writeln!(out, "{}Error {}", indent, diagnostic.code);
		let _ = writeln!(out, "{}  {}", indent, diagnostic.message);

		if let Some(label) = &diagnostic.label {
			let _ = writeln!(out, "{}  --> {}", indent, label);
		}
		if let Some(help) = &diagnostic.help {
			let _ = writeln!(out, "{}  help: {}", indent, help);
		}
		for note in &diagnostic.notes {
			let _ = writeln!(out, "{}  note: {}", indent, note);
		}

		if let Some(cause) = &diagnostic.cause {
			let _ = writeln!(out, "{}caused by:", indent);
			Self::render(out, cause, depth + 1);
		}
	}
}
