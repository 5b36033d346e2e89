// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! The search controller: input handling, request lifecycle and paging.
//!
//! At most one request is current. Starting a search cancels the previous
//! request's token without waiting for it; the superseded call notices the
//! cancellation when it resumes and returns without touching any state.

use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use showfind_search_tvmaze::{SearchError, ShowResult, PLACEHOLDER_IMAGE};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, instrument};

use crate::backend::SearchBackend;
use crate::debounce::{Debouncer, DEFAULT_DEBOUNCE};
use crate::pagination::{page_controls, total_pages, ControlKind, PageWindow, DEFAULT_PAGE_SIZE};
use crate::query::Query;
use crate::view::{Card, PageView, ResultsPane, SearchView};

pub const DEFAULT_MIN_QUERY_CHARS: usize = 2;
pub const NO_RESULTS_MESSAGE: &str = "No results found.";
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong. Please try again later.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControllerOptions {
	pub page_size: usize,
	pub debounce: Duration,
	/// Live input shorter than this clears the results instead of searching.
	pub min_query_chars: usize,
	pub placeholder_image: String,
}

impl Default for ControllerOptions {
	fn default() -> Self {
		Self {
			page_size: DEFAULT_PAGE_SIZE,
			debounce: DEFAULT_DEBOUNCE,
			min_query_chars: DEFAULT_MIN_QUERY_CHARS,
			placeholder_image: PLACEHOLDER_IMAGE.to_string(),
		}
	}
}

/// How a single search call ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
	/// Results were stored and page 1 rendered.
	Completed { result_count: usize },
	/// The generic error was shown.
	Failed,
	/// Superseded or cleared, in which case nothing was touched, or aborted
	/// by the backend itself, which leaves the results area empty.
	Cancelled,
}

/// Read-only view of controller state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControllerSnapshot {
	pub result_count: usize,
	pub current_page: usize,
	pub total_pages: usize,
	pub busy: bool,
	pub in_flight: bool,
}

struct InFlight {
	id: u64,
	token: CancellationToken,
}

struct State {
	results: Vec<ShowResult>,
	current_page: usize,
	busy: bool,
	/// Pagination controls for `results` are on screen.
	navigable: bool,
	in_flight: Option<InFlight>,
	next_request_id: u64,
	/// Bumped by every clear; debounced searches scheduled before it are stale.
	generation: u64,
}

impl Default for State {
	fn default() -> Self {
		Self {
			results: Vec::new(),
			current_page: 1,
			busy: false,
			navigable: false,
			in_flight: None,
			next_request_id: 0,
			generation: 0,
		}
	}
}

struct Ticket {
	id: u64,
	token: CancellationToken,
}

struct Inner<B, V> {
	backend: B,
	view: V,
	options: ControllerOptions,
	debouncer: Debouncer,
	state: Mutex<State>,
}

/// Drives searches against a [`SearchBackend`] and renders into a
/// [`SearchView`]. Cheap to clone; clones share state.
pub struct SearchController<B, V> {
	inner: Arc<Inner<B, V>>,
}

impl<B, V> Clone for SearchController<B, V> {
	fn clone(&self) -> Self {
		Self {
			inner: Arc::clone(&self.inner),
		}
	}
}

impl<B: SearchBackend, V: SearchView> SearchController<B, V> {
	pub fn new(backend: B, view: V) -> Self {
		Self::with_options(backend, view, ControllerOptions::default())
	}

	pub fn with_options(backend: B, view: V, options: ControllerOptions) -> Self {
		let options = ControllerOptions {
			page_size: options.page_size.max(1),
			..options
		};
		Self {
			inner: Arc::new(Inner {
				backend,
				view,
				debouncer: Debouncer::new(options.debounce),
				options,
				state: Mutex::new(State::default()),
			}),
		}
	}

	pub fn options(&self) -> &ControllerOptions {
		&self.inner.options
	}

	pub fn view(&self) -> &V {
		&self.inner.view
	}

	/// Explicit submission. Blank input is ignored; anything else searches
	/// immediately, bypassing the debouncer.
	pub fn on_submit(&self, raw: &str) -> Option<JoinHandle<SearchOutcome>> {
		let query = Query::parse(raw)?;
		self.inner.debouncer.cancel();
		Some(tokio::spawn(self.search(query)))
	}

	/// Live input. Long enough text schedules a debounced search; shorter
	/// text clears everything synchronously.
	pub fn on_input(&self, raw: &str) {
		match Query::parse(raw) {
			Some(query) if query.char_len() >= self.inner.options.min_query_chars => {
				let generation = self.lock_state().generation;
				let this = self.clone();
				self.inner.debouncer.call(move || async move {
					this.search_scheduled(query, generation).await;
				});
			}
			_ => self.clear(),
		}
	}

	/// Cancels any pending or in-flight search and empties every surface.
	pub fn clear(&self) {
		self.inner.debouncer.cancel();

		let mut state = self.lock_state();
		if let Some(in_flight) = state.in_flight.take() {
			debug!(request_id = in_flight.id, "cancelling in-flight search");
			in_flight.token.cancel();
		}
		state.results.clear();
		state.current_page = 1;
		state.busy = false;
		state.navigable = false;
		state.generation += 1;

		let view = &self.inner.view;
		view.replace_results(ResultsPane::Empty);
		view.replace_pagination(Vec::new());
		view.announce("");
		view.set_busy(false);
	}

	/// Starts a search for `query`.
	///
	/// The previous request is cancelled and the loading state rendered
	/// before this returns; the returned future performs the request and
	/// renders its outcome.
	pub fn search(&self, query: Query) -> impl Future<Output = SearchOutcome> + Send + 'static {
		let ticket = self.begin(&query);
		let this = self.clone();
		async move { this.complete(query, ticket).await }
	}

	/// Runs a debounced search unless the input was cleared after it was
	/// scheduled. Returns `None` when the search was skipped.
	async fn search_scheduled(&self, query: Query, generation: u64) -> Option<SearchOutcome> {
		let ticket = {
			let mut state = self.lock_state();
			if state.generation != generation {
				debug!(query = %query, "input cleared before debounced search started");
				return None;
			}
			self.begin_locked(&mut state, &query)
		};
		Some(self.clone().complete(query, ticket).await)
	}

	fn begin(&self, query: &Query) -> Ticket {
		let mut state = self.lock_state();
		self.begin_locked(&mut state, query)
	}

	fn begin_locked(&self, state: &mut State, query: &Query) -> Ticket {
		if let Some(previous) = state.in_flight.take() {
			debug!(request_id = previous.id, "superseding in-flight search");
			previous.token.cancel();
		}

		state.next_request_id += 1;
		let ticket = Ticket {
			id: state.next_request_id,
			token: CancellationToken::new(),
		};
		state.in_flight = Some(InFlight {
			id: ticket.id,
			token: ticket.token.clone(),
		});
		state.busy = true;
		state.navigable = false;

		info!(request_id = ticket.id, query = %query, "starting search");

		let view = &self.inner.view;
		view.set_busy(true);
		view.replace_results(ResultsPane::Loading);
		view.replace_pagination(Vec::new());

		ticket
	}

	#[instrument(skip(self, query, ticket), fields(request_id = ticket.id, query = %query))]
	async fn complete(self, query: Query, ticket: Ticket) -> SearchOutcome {
		let result = tokio::select! {
			biased;
			_ = ticket.token.cancelled() => Err(SearchError::Cancelled),
			result = self.inner.backend.search(&query, &ticket.token) => result,
		};

		let mut state = self.lock_state();

		// A newer search or a clear owns the state now.
		if ticket.token.is_cancelled() {
			debug!("search superseded, discarding outcome");
			return SearchOutcome::Cancelled;
		}

		let outcome = match result {
			Ok(results) => {
				let result_count = results.len();
				debug!(result_count, "search completed");
				state.results = results;
				state.current_page = 1;
				self.render_locked(&mut state, 1);
				SearchOutcome::Completed { result_count }
			}
			Err(SearchError::Cancelled) => {
				// Our token never fired, so this call still owns the view.
				debug!("backend reported cancellation");
				self.inner.view.replace_results(ResultsPane::Empty);
				self.inner.view.replace_pagination(Vec::new());
				SearchOutcome::Cancelled
			}
			Err(err) => {
				error!(error = %err, "search failed");
				let view = &self.inner.view;
				view.replace_results(ResultsPane::Error {
					message: GENERIC_ERROR_MESSAGE.to_string(),
				});
				view.replace_pagination(Vec::new());
				view.announce(GENERIC_ERROR_MESSAGE);
				state.navigable = false;
				SearchOutcome::Failed
			}
		};

		if state.in_flight.as_ref().is_some_and(|f| f.id == ticket.id) {
			state.in_flight = None;
		}
		state.busy = false;
		self.inner.view.set_busy(false);

		outcome
	}

	/// Renders `page` of the current result set, clamped into range.
	pub fn render_page(&self, page: usize) {
		let mut state = self.lock_state();
		self.render_locked(&mut state, page);
	}

	/// Activates a pagination control. Returns whether the page changed.
	///
	/// Only controls that are on screen can be activated: navigation is
	/// refused while a search is loading and after a failed search.
	pub fn navigate(&self, kind: ControlKind) -> bool {
		let mut state = self.lock_state();
		if state.busy || !state.navigable {
			return false;
		}

		let total = total_pages(state.results.len(), self.inner.options.page_size);
		let target = page_controls(state.current_page, total)
			.into_iter()
			.find(|control| control.kind == kind)
			.filter(|control| control.is_navigable())
			.map(|control| control.target);

		match target {
			Some(page) => {
				debug!(page, "navigating");
				self.render_locked(&mut state, page);
				true
			}
			None => false,
		}
	}

	pub fn next_page(&self) -> bool {
		self.navigate(ControlKind::Next)
	}

	pub fn previous_page(&self) -> bool {
		self.navigate(ControlKind::Previous)
	}

	pub fn go_to_page(&self, page: usize) -> bool {
		self.navigate(ControlKind::Page(page))
	}

	pub fn snapshot(&self) -> ControllerSnapshot {
		let state = self.lock_state();
		ControllerSnapshot {
			result_count: state.results.len(),
			current_page: state.current_page,
			total_pages: total_pages(state.results.len(), self.inner.options.page_size),
			busy: state.busy,
			in_flight: state.in_flight.is_some(),
		}
	}

	/// Whether a debounced search is waiting for input to settle.
	pub fn has_pending_input(&self) -> bool {
		self.inner.debouncer.is_pending()
	}

	fn render_locked(&self, state: &mut State, requested: usize) {
		let view = &self.inner.view;
		let options = &self.inner.options;

		let Some(window) = PageWindow::compute(state.results.len(), options.page_size, requested)
		else {
			state.current_page = 1;
			state.navigable = false;
			view.replace_results(ResultsPane::NoResults {
				message: NO_RESULTS_MESSAGE.to_string(),
			});
			view.replace_pagination(Vec::new());
			return;
		};

		state.current_page = window.page;
		state.navigable = window.total_pages > 1;

		let cards = state.results[window.range()]
			.iter()
			.map(|result| Card::from_result(result, &options.placeholder_image))
			.collect();

		view.replace_results(ResultsPane::Page(PageView {
			summary: window.summary(),
			cards,
		}));
		view.replace_pagination(page_controls(window.page, window.total_pages));
	}

	fn lock_state(&self) -> MutexGuard<'_, State> {
		self.inner.state.lock().unwrap_or_else(PoisonError::into_inner)
	}
}
