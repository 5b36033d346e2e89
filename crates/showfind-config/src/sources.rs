// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration sources: TOML files, environment, command line.

use std::path::Path;
use std::str::FromStr;

use crate::{ConfigError, ConfigLayer};

pub const ENV_ENDPOINT: &str = "SHOWFIND_ENDPOINT";
pub const ENV_PAGE_SIZE: &str = "SHOWFIND_PAGE_SIZE";
pub const ENV_DEBOUNCE_MS: &str = "SHOWFIND_DEBOUNCE_MS";
pub const ENV_MIN_QUERY_CHARS: &str = "SHOWFIND_MIN_QUERY_CHARS";
pub const ENV_PLACEHOLDER_IMAGE: &str = "SHOWFIND_PLACEHOLDER_IMAGE";

/// Reads a TOML config file.
pub fn read_file(path: &Path) -> Result<ConfigLayer, ConfigError> {
	let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
		path: path.to_path_buf(),
		source,
	})?;
	parse_toml(path, &content)
}

/// Reads a TOML config file, treating a missing file as an empty layer.
pub fn read_optional_file(path: &Path) -> Result<ConfigLayer, ConfigError> {
	if !path.exists() {
		tracing::debug!(path = %path.display(), "config file not present");
		return Ok(ConfigLayer::default());
	}
	read_file(path)
}

fn parse_toml(path: &Path, content: &str) -> Result<ConfigLayer, ConfigError> {
	toml::from_str(content).map_err(|source| ConfigError::TomlParse {
		path: path.to_path_buf(),
		source,
	})
}

/// Builds a layer from `SHOWFIND_*` variables in the process environment.
pub fn env_layer() -> Result<ConfigLayer, ConfigError> {
	env_layer_from(|key| std::env::var(key).ok())
}

/// Builds a layer from `SHOWFIND_*` variables looked up through `lookup`.
pub fn env_layer_from<F>(lookup: F) -> Result<ConfigLayer, ConfigError>
where
	F: Fn(&str) -> Option<String>,
{
	Ok(ConfigLayer {
		endpoint: lookup(ENV_ENDPOINT),
		page_size: parse_env(&lookup, ENV_PAGE_SIZE)?,
		debounce_ms: parse_env(&lookup, ENV_DEBOUNCE_MS)?,
		min_query_chars: parse_env(&lookup, ENV_MIN_QUERY_CHARS)?,
		placeholder_image: lookup(ENV_PLACEHOLDER_IMAGE),
	})
}

fn parse_env<F, T>(lookup: &F, key: &str) -> Result<Option<T>, ConfigError>
where
	F: Fn(&str) -> Option<String>,
	T: FromStr,
	T::Err: std::fmt::Display,
{
	lookup(key)
		.map(|raw| {
			raw.trim()
				.parse()
				.map_err(|e| ConfigError::Env(format!("{key}={raw}: {e}")))
		})
		.transpose()
}

/// Values given on the command line.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
	pub endpoint: Option<String>,
	pub page_size: Option<usize>,
	pub debounce_ms: Option<u64>,
	pub min_query_chars: Option<usize>,
}

impl From<CliOverrides> for ConfigLayer {
	fn from(cli: CliOverrides) -> Self {
		ConfigLayer {
			endpoint: cli.endpoint,
			page_size: cli.page_size,
			debounce_ms: cli.debounce_ms,
			min_query_chars: cli.min_query_chars,
			placeholder_image: None,
		}
	}
}
