// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::slice;

/// The canonical ordered sequence every accepted input shape collapses into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collection<T>(Vec<T>);

impl<T> Collection<T> {
	pub fn new() -> Self {
		Self(Vec::new())
	}

	pub fn count(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn iter(&self) -> slice::Iter<'_, T> {
		self.0.iter()
	}

	pub fn first(&self) -> Option<&T> {
		self.0.first()
	}

	pub fn get(&self, index: usize) -> Option<&T> {
		self.0.get(index)
	}

	pub fn as_slice(&self) -> &[T] {
		self.0.as_slice()
	}

	/// Consecutive slices of at most `size` items.
	///
	/// # Panics
	/// Panics if `size` is 0.
	pub fn chunk(&self, size: usize) -> slice::Chunks<'_, T> {
		self.0.chunks(size)
	}

	pub fn into_inner(self) -> Vec<T> {
		self.0
	}
}

impl<T: Clone> Collection<T> {
	pub fn to_array(&self) -> Vec<T> {
		self.0.clone()
	}
}

impl<T> Default for Collection<T> {
	fn default() -> Self {
		Self::new()
	}
}

impl<T> From<Vec<T>> for Collection<T> {
	fn from(items: Vec<T>) -> Self {
		Self(items)
	}
}

impl<T> FromIterator<T> for Collection<T> {
	fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
		Self(iter.into_iter().collect())
	}
}

impl<T> IntoIterator for Collection<T> {
	type Item = T;
	type IntoIter = std::vec::IntoIter<T>;

	fn into_iter(self) -> Self::IntoIter {
		self.0.into_iter()
	}
}

impl<'a, T> IntoIterator for &'a Collection<T> {
	type Item = &'a T;
	type IntoIter = slice::Iter<'a, T>;

	fn into_iter(self) -> Self::IntoIter {
		self.0.iter()
	}
}

impl<T> AsRef<[T]> for Collection<T> {
	fn as_ref(&self) -> &[T] {
		self.0.as_slice()
	}
}
