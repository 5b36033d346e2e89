// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Rendering surface driven by the controller.

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde::Serialize;
use showfind_search_tvmaze::ShowResult;

use crate::pagination::PageControl;

/// "Results 1–4 of 10 (page 1 of 3)"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResultsSummary {
	pub first: usize,
	pub last: usize,
	pub total: usize,
	pub page: usize,
	pub total_pages: usize,
}

impl fmt::Display for ResultsSummary {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"Results {}–{} of {} (page {} of {})",
			self.first, self.last, self.total, self.page, self.total_pages
		)
	}
}

/// One result card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Card {
	pub title: String,
	pub image_url: String,
	pub alt_text: String,
}

impl Card {
	pub fn from_result(result: &ShowResult, placeholder_image: &str) -> Self {
		Self {
			title: result.display_title().to_string(),
			image_url: result.image_or(placeholder_image).to_string(),
			alt_text: result.alt_text(),
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageView {
	pub summary: ResultsSummary,
	pub cards: Vec<Card>,
}

/// Content of the results area.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "state")]
pub enum ResultsPane {
	#[default]
	Empty,
	Loading,
	NoResults { message: String },
	Error { message: String },
	Page(PageView),
}

/// The UI collaborators of the controller.
///
/// Every method replaces the previous content of its surface. Calls are made
/// while the controller holds its state lock, so implementations must not
/// call back into the controller.
pub trait SearchView: Send + Sync + 'static {
	fn replace_results(&self, pane: ResultsPane);

	fn replace_pagination(&self, controls: Vec<PageControl>);

	/// Pushes text to the live announcement region. Empty text clears it.
	fn announce(&self, message: &str);

	fn set_busy(&self, busy: bool);
}

/// Latest content of each surface.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ViewState {
	pub results: ResultsPane,
	pub pagination: Vec<PageControl>,
	pub announcement: String,
	pub busy: bool,
}

/// In-memory [`SearchView`] that keeps the latest state for a renderer to
/// draw from. Cheap to clone; clones share state.
#[derive(Debug, Clone, Default)]
pub struct RenderedView {
	state: Arc<Mutex<ViewState>>,
}

impl RenderedView {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn snapshot(&self) -> ViewState {
		self.lock().clone()
	}

	fn lock(&self) -> MutexGuard<'_, ViewState> {
		self.state.lock().unwrap_or_else(PoisonError::into_inner)
	}
}

impl SearchView for RenderedView {
	fn replace_results(&self, pane: ResultsPane) {
		self.lock().results = pane;
	}

	fn replace_pagination(&self, controls: Vec<PageControl>) {
		self.lock().pagination = controls;
	}

	fn announce(&self, message: &str) {
		self.lock().announcement = message.to_string();
	}

	fn set_busy(&self, busy: bool) {
		self.lock().busy = busy;
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use showfind_search_tvmaze::PLACEHOLDER_IMAGE;

	#[test]
	fn summary_format() {
		let summary = ResultsSummary {
			first: 9,
			last: 10,
			total: 10,
			page: 3,
			total_pages: 3,
		};
		assert_eq!(summary.to_string(), "Results 9–10 of 10 (page 3 of 3)");
	}

	#[test]
	fn card_uses_fallbacks() {
		let card = Card::from_result(&ShowResult::default(), PLACEHOLDER_IMAGE);
		assert_eq!(card.title, "Unknown title");
		assert_eq!(card.image_url, PLACEHOLDER_IMAGE);
		assert_eq!(card.alt_text, "Poster for Unknown title");
	}

	#[test]
	fn rendered_view_clones_share_state() {
		let view = RenderedView::new();
		let other = view.clone();
		other.set_busy(true);
		other.announce("hello");
		other.replace_results(ResultsPane::Loading);

		let state = view.snapshot();
		assert!(state.busy);
		assert_eq!(state.announcement, "hello");
		assert_eq!(state.results, ResultsPane::Loading);
	}
}
