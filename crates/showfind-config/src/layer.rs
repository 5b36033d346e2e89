// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use serde::Deserialize;

/// One source's partial view of the configuration. Unset fields defer to
/// lower-precedence layers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigLayer {
	pub endpoint: Option<String>,
	pub page_size: Option<usize>,
	pub debounce_ms: Option<u64>,
	pub min_query_chars: Option<usize>,
	pub placeholder_image: Option<String>,
}

impl ConfigLayer {
	/// Overlays `higher` on top of `self`.
	pub fn merge(mut self, higher: ConfigLayer) -> Self {
		if higher.endpoint.is_some() {
			self.endpoint = higher.endpoint;
		}
		if higher.page_size.is_some() {
			self.page_size = higher.page_size;
		}
		if higher.debounce_ms.is_some() {
			self.debounce_ms = higher.debounce_ms;
		}
		if higher.min_query_chars.is_some() {
			self.min_query_chars = higher.min_query_chars;
		}
		if higher.placeholder_image.is_some() {
			self.placeholder_image = higher.placeholder_image;
		}
		self
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn higher_layer_wins_field_by_field() {
		let base = ConfigLayer {
			endpoint: Some("https://a".into()),
			page_size: Some(4),
			..Default::default()
		};
		let higher = ConfigLayer {
			page_size: Some(8),
			debounce_ms: Some(250),
			..Default::default()
		};

		let merged = base.merge(higher);
		assert_eq!(merged.endpoint.as_deref(), Some("https://a"));
		assert_eq!(merged.page_size, Some(8));
		assert_eq!(merged.debounce_ms, Some(250));
		assert_eq!(merged.min_query_chars, None);
	}

	#[test]
	fn unknown_keys_are_rejected() {
		let parsed: Result<ConfigLayer, _> = toml::from_str("page_sise = 3");
		assert!(parsed.is_err());
	}
}
