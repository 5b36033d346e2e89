// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Result types returned by the show-search client.

use serde::{Deserialize, Serialize};

/// Image shown for shows that have no poster.
pub const PLACEHOLDER_IMAGE: &str = "https://placehold.co/210x295?text=No+Image";

/// Title shown for shows that have no name.
pub const UNKNOWN_TITLE: &str = "Unknown title";

/// One show returned by a search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowResult {
	pub title: Option<String>,
	pub image_url: Option<String>,
}

impl ShowResult {
	pub fn new(title: impl Into<String>, image_url: impl Into<String>) -> Self {
		Self {
			title: Some(title.into()),
			image_url: Some(image_url.into()),
		}
	}

	/// Title to display, falling back to [`UNKNOWN_TITLE`].
	pub fn display_title(&self) -> &str {
		self.title.as_deref().unwrap_or(UNKNOWN_TITLE)
	}

	/// Poster URL, falling back to the given placeholder.
	pub fn image_or<'a>(&'a self, placeholder: &'a str) -> &'a str {
		self.image_url.as_deref().unwrap_or(placeholder)
	}

	/// Alternative text for the poster image.
	pub fn alt_text(&self) -> String {
		format!("Poster for {}", self.display_title())
	}
}
