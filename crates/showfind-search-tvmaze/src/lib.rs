// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! TVmaze show-search API client for showfind.
//!
//! This crate provides a typed Rust client for the public
//! `search/shows` endpoint, encapsulating HTTP communication, cancellation
//! and response parsing.

pub mod client;
pub mod error;
pub mod types;

pub use client::{TvMazeClient, DEFAULT_BASE_URL};
pub use error::SearchError;
pub use types::{ShowResult, PLACEHOLDER_IMAGE, UNKNOWN_TITLE};
