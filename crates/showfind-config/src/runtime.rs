// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Fully resolved configuration.

use std::time::Duration;

use showfind_core::{ControllerOptions, DEFAULT_DEBOUNCE, DEFAULT_MIN_QUERY_CHARS, DEFAULT_PAGE_SIZE};
use showfind_search_tvmaze::{DEFAULT_BASE_URL, PLACEHOLDER_IMAGE};

use crate::{ConfigError, ConfigLayer, PathsConfig};

const MAX_PAGE_SIZE: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowfindConfig {
	pub endpoint: String,
	pub page_size: usize,
	pub debounce: Duration,
	pub min_query_chars: usize,
	pub placeholder_image: String,
	pub paths: PathsConfig,
}

impl ShowfindConfig {
	/// Built-in defaults as a layer, the lowest precedence source.
	pub fn defaults() -> ConfigLayer {
		ConfigLayer {
			endpoint: Some(DEFAULT_BASE_URL.to_string()),
			page_size: Some(DEFAULT_PAGE_SIZE),
			debounce_ms: Some(DEFAULT_DEBOUNCE.as_millis() as u64),
			min_query_chars: Some(DEFAULT_MIN_QUERY_CHARS),
			placeholder_image: Some(PLACEHOLDER_IMAGE.to_string()),
		}
	}

	/// Validates a merged layer. Fields still unset take their defaults.
	pub fn from_layer(layer: ConfigLayer, paths: PathsConfig) -> Result<Self, ConfigError> {
		let layer = Self::defaults().merge(layer);

		let endpoint = layer.endpoint.unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
		if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
			return Err(ConfigError::invalid_value(
				"endpoint",
				format!("expected an http(s) URL, got {endpoint:?}"),
			));
		}

		let page_size = layer.page_size.unwrap_or(DEFAULT_PAGE_SIZE);
		if !(1..=MAX_PAGE_SIZE).contains(&page_size) {
			return Err(ConfigError::invalid_value(
				"page_size",
				format!("must be between 1 and {MAX_PAGE_SIZE}, got {page_size}"),
			));
		}

		let min_query_chars = layer.min_query_chars.unwrap_or(DEFAULT_MIN_QUERY_CHARS);
		if min_query_chars == 0 {
			return Err(ConfigError::invalid_value(
				"min_query_chars",
				"must be at least 1",
			));
		}

		let debounce = layer
			.debounce_ms
			.map(Duration::from_millis)
			.unwrap_or(DEFAULT_DEBOUNCE);

		Ok(Self {
			endpoint,
			page_size,
			debounce,
			min_query_chars,
			placeholder_image: layer
				.placeholder_image
				.unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string()),
			paths,
		})
	}

	pub fn controller_options(&self) -> ControllerOptions {
		ControllerOptions {
			page_size: self.page_size,
			debounce: self.debounce,
			min_query_chars: self.min_query_chars,
			placeholder_image: self.placeholder_image.clone(),
		}
	}
}
