// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Search controller for showfind.
//!
//! This crate owns the interactive search flow:
//! - [`Debouncer`]: delays live-typing searches until input settles
//! - [`SearchController`]: one in-flight request at a time, newest search wins
//! - [`pagination`]: page clamping, slicing and navigation controls
//!
//! Rendering is delegated to a [`SearchView`] and network access to a
//! [`SearchBackend`], so the controller runs the same under a terminal UI,
//! a one-shot CLI, or a test double.

pub mod backend;
pub mod controller;
pub mod debounce;
pub mod pagination;
pub mod query;
pub mod view;

pub use backend::SearchBackend;
pub use controller::{
	ControllerOptions, ControllerSnapshot, SearchController, SearchOutcome, DEFAULT_MIN_QUERY_CHARS,
	GENERIC_ERROR_MESSAGE, NO_RESULTS_MESSAGE,
};
pub use debounce::{Debouncer, DEFAULT_DEBOUNCE};
pub use pagination::{ControlKind, PageControl, PageWindow, DEFAULT_PAGE_SIZE};
pub use query::Query;
pub use showfind_search_tvmaze::{SearchError, ShowResult, PLACEHOLDER_IMAGE, UNKNOWN_TITLE};
pub use view::{Card, PageView, RenderedView, ResultsPane, ResultsSummary, SearchView, ViewState};
