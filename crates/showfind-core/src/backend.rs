// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use std::sync::Arc;

use async_trait::async_trait;
use showfind_search_tvmaze::{SearchError, ShowResult, TvMazeClient};
use tokio_util::sync::CancellationToken;

use crate::query::Query;

/// Source of search results.
///
/// Implementations should resolve to [`SearchError::Cancelled`] promptly once
/// `cancel` fires. The controller discards the outcome of a cancelled call
/// either way.
#[async_trait]
pub trait SearchBackend: Send + Sync + 'static {
	async fn search(
		&self,
		query: &Query,
		cancel: &CancellationToken,
	) -> Result<Vec<ShowResult>, SearchError>;
}

#[async_trait]
impl SearchBackend for TvMazeClient {
	async fn search(
		&self,
		query: &Query,
		cancel: &CancellationToken,
	) -> Result<Vec<ShowResult>, SearchError> {
		TvMazeClient::search(self, query.as_str(), cancel).await
	}
}

#[async_trait]
impl<T: SearchBackend + ?Sized> SearchBackend for Arc<T> {
	async fn search(
		&self,
		query: &Query,
		cancel: &CancellationToken,
	) -> Result<Vec<ShowResult>, SearchError> {
		(**self).search(query, cancel).await
	}
}
