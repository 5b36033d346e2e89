// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Error types for the TVmaze API client.

use thiserror::Error;

/// Errors that can occur when querying the show-search endpoint.
#[derive(Debug, Error)]
pub enum SearchError {
	/// The request was superseded or abandoned by its caller.
	#[error("Search cancelled")]
	Cancelled,

	/// Network-level error during HTTP communication.
	#[error("Network error: {0}")]
	Network(#[from] reqwest::Error),

	/// The endpoint answered with a non-success status.
	#[error("Search API returned HTTP {status}")]
	Http { status: u16 },

	/// Invalid or unparseable response body.
	#[error("Invalid response from search API: {0}")]
	InvalidResponse(String),
}

impl SearchError {
	/// Cancellation is not a failure from the user's point of view.
	pub fn is_cancelled(&self) -> bool {
		matches!(self, SearchError::Cancelled)
	}
}
