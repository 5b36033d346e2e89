// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Non-interactive `showfind search`.

use std::fmt::Write as _;

use anyhow::{Context, Result};
use showfind_core::{
	ControllerOptions, Query, RenderedView, ResultsPane, SearchBackend, SearchController, ViewState,
};

use crate::render::pagination_line;

/// Runs one search and returns what the view holds afterwards, with
/// `page` rendered (clamped into range).
pub async fn run_search<B: SearchBackend>(
	backend: B,
	options: ControllerOptions,
	query: &str,
	page: usize,
) -> Result<ViewState> {
	let query = Query::parse(query).context("search text must not be blank")?;
	let view = RenderedView::new();
	let controller = SearchController::with_options(backend, view.clone(), options);

	controller.search(query).await;
	if page != 1 && controller.snapshot().result_count > 0 {
		controller.render_page(page);
	}

	Ok(view.snapshot())
}

/// Plain-text rendering of a view state for stdout.
pub fn format_plain(state: &ViewState) -> String {
	let mut out = String::new();
	match &state.results {
		ResultsPane::Empty | ResultsPane::Loading => {}
		ResultsPane::NoResults { message } | ResultsPane::Error { message } => {
			let _ = writeln!(out, "{message}");
		}
		ResultsPane::Page(page) => {
			let _ = writeln!(out, "{}", page.summary);
			for card in &page.cards {
				let _ = writeln!(out);
				let _ = writeln!(out, "  {}", card.title);
				let _ = writeln!(out, "    image: {}", card.image_url);
				let _ = writeln!(out, "    alt:   {}", card.alt_text);
			}
			if !state.pagination.is_empty() {
				let line: String = pagination_line(&state.pagination)
					.spans
					.iter()
					.map(|span| span.content.as_ref())
					.collect();
				let _ = writeln!(out);
				let _ = writeln!(out, "{line}");
			}
		}
	}
	out
}

pub fn is_failure(state: &ViewState) -> bool {
	matches!(state.results, ResultsPane::Error { .. })
}
