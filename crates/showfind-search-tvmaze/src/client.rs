// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! TVmaze API client implementation.

use reqwest::Client;
use serde::Deserialize;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, instrument, trace};

use crate::error::SearchError;
use crate::types::ShowResult;

pub const DEFAULT_BASE_URL: &str = "https://api.tvmaze.com/search/shows";

/// Client for the TVmaze show-search endpoint.
#[derive(Debug, Clone)]
pub struct TvMazeClient {
	http_client: Client,
	base_url: String,
}

#[derive(Debug, Deserialize)]
struct ApiHit {
	#[serde(default)]
	show: Option<ApiShow>,
}

#[derive(Debug, Default, Deserialize)]
struct ApiShow {
	#[serde(default)]
	name: Option<String>,
	#[serde(default)]
	image: Option<ApiImage>,
}

#[derive(Debug, Deserialize)]
struct ApiImage {
	#[serde(default)]
	medium: Option<String>,
}

impl From<ApiHit> for ShowResult {
	fn from(hit: ApiHit) -> Self {
		let show = hit.show.unwrap_or_default();
		ShowResult {
			title: show.name,
			image_url: show.image.and_then(|image| image.medium),
		}
	}
}

impl TvMazeClient {
	/// Creates a client pointed at the public TVmaze endpoint.
	pub fn new() -> Result<Self, SearchError> {
		let http_client = showfind_common_http::new_client()?;
		Ok(Self::with_http_client(http_client))
	}

	/// Creates a client around an existing reqwest client.
	pub fn with_http_client(http_client: Client) -> Self {
		Self {
			http_client,
			base_url: DEFAULT_BASE_URL.to_string(),
		}
	}

	/// Sets a custom base URL for the API (useful for testing).
	pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
		self.base_url = base_url.into();
		self
	}

	pub fn base_url(&self) -> &str {
		&self.base_url
	}

	/// Builds the request URL for a query: the trimmed text is
	/// percent-encoded into the `q` parameter.
	pub fn search_url(&self, query: &str) -> String {
		let separator = if self.base_url.contains('?') { '&' } else { '?' };
		format!(
			"{}{}q={}",
			self.base_url,
			separator,
			urlencoding::encode(query.trim())
		)
	}

	/// Searches for shows matching `query`.
	///
	/// Resolves to [`SearchError::Cancelled`] as soon as `cancel` fires; the
	/// underlying request is dropped at that point.
	#[instrument(skip(self, cancel), fields(query = %query.trim()))]
	pub async fn search(
		&self,
		query: &str,
		cancel: &CancellationToken,
	) -> Result<Vec<ShowResult>, SearchError> {
		if cancel.is_cancelled() {
			return Err(SearchError::Cancelled);
		}

		tokio::select! {
			biased;
			_ = cancel.cancelled() => {
				debug!("Search request cancelled");
				Err(SearchError::Cancelled)
			}
			result = self.search_inner(query) => result,
		}
	}

	async fn search_inner(&self, query: &str) -> Result<Vec<ShowResult>, SearchError> {
		let url = self.search_url(query);
		debug!(url = %url, "Sending search request");

		let response = self.http_client.get(&url).send().await.map_err(|e| {
			error!(error = %e, "Network error during search request");
			SearchError::Network(e)
		})?;

		let status = response.status();
		debug!(status = %status, "Received search response");

		if !status.is_success() {
			error!(status = status.as_u16(), "Search API error");
			return Err(SearchError::Http {
				status: status.as_u16(),
			});
		}

		let body = response.text().await.map_err(|e| {
			error!(error = %e, "Failed to read response body");
			SearchError::Network(e)
		})?;

		trace!(body = %body, "Response body");

		let results = parse_results(&body)?;
		debug!(result_count = results.len(), "Search completed successfully");
		Ok(results)
	}
}

/// Parses a `search/shows` response body. A blank body counts as no hits.
pub fn parse_results(body: &str) -> Result<Vec<ShowResult>, SearchError> {
	if body.trim().is_empty() {
		return Ok(Vec::new());
	}

	let hits: Vec<ApiHit> = serde_json::from_str(body).map_err(|e| {
		error!(error = %e, "Failed to parse search response");
		SearchError::InvalidResponse(format!("JSON parse error: {e}"))
	})?;

	Ok(hits.into_iter().map(ShowResult::from).collect())
}
