// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use std::fmt;

/// A trimmed, non-empty search text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Query(String);

impl Query {
	/// Returns `None` when `raw` is empty or whitespace only.
	pub fn parse(raw: &str) -> Option<Self> {
		let trimmed = raw.trim();
		if trimmed.is_empty() {
			None
		} else {
			Some(Self(trimmed.to_string()))
		}
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}

	/// Length in characters, not bytes.
	pub fn char_len(&self) -> usize {
		self.0.chars().count()
	}
}

impl fmt::Display for Query {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl AsRef<str> for Query {
	fn as_ref(&self) -> &str {
		&self.0
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn blank_input_is_rejected() {
		assert!(Query::parse("").is_none());
		assert!(Query::parse("   \t\n").is_none());
	}

	#[test]
	fn input_is_trimmed() {
		let query = Query::parse("  the wire ").unwrap();
		assert_eq!(query.as_str(), "the wire");
		assert_eq!(query.to_string(), "the wire");
	}

	#[test]
	fn length_counts_characters() {
		assert_eq!(Query::parse("ét").unwrap().char_len(), 2);
	}
}
