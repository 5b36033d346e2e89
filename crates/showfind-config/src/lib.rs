// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration management for showfind.
//!
//! This crate provides:
//! - XDG Base Directory compliant path resolution
//! - Layered configuration from multiple sources
//! - TOML configuration file parsing
//! - Environment variable overrides
//! - Configuration validation
//!
//! Precedence, lowest first: built-in defaults, the user config file, an
//! explicit `--config` file, `SHOWFIND_*` environment variables, command
//! line flags.

pub mod error;
pub mod layer;
pub mod paths;
pub mod runtime;
pub mod sources;

use std::path::Path;

pub use error::ConfigError;
pub use layer::ConfigLayer;
pub use paths::PathsConfig;
pub use runtime::ShowfindConfig;
pub use sources::CliOverrides;

/// Load configuration from all sources.
pub fn load_config(
	explicit_file: Option<&Path>,
	cli: CliOverrides,
) -> Result<ShowfindConfig, ConfigError> {
	let paths = paths::resolve_xdg_paths()?;
	let env = sources::env_layer()?;
	load_config_from(paths, explicit_file, env, cli)
}

/// Load configuration with the environment layer supplied by the caller.
pub fn load_config_from(
	paths: PathsConfig,
	explicit_file: Option<&Path>,
	env: ConfigLayer,
	cli: CliOverrides,
) -> Result<ShowfindConfig, ConfigError> {
	let mut layer = sources::read_optional_file(&paths.user_config_file)?;
	if let Some(path) = explicit_file {
		layer = layer.merge(sources::read_file(path)?);
	}
	let layer = layer.merge(env).merge(cli.into());

	let config = ShowfindConfig::from_layer(layer, paths)?;
	tracing::debug!(
		endpoint = %config.endpoint,
		page_size = config.page_size,
		debounce_ms = config.debounce.as_millis() as u64,
		"configuration loaded"
	);
	Ok(config)
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::fs;

	fn paths_in(dir: &Path) -> PathsConfig {
		PathsConfig {
			user_config_file: dir.join("config.toml"),
			state_dir: dir.join("state"),
		}
	}

	#[test]
	fn layers_apply_in_precedence_order() {
		let dir = tempfile::tempdir().unwrap();
		fs::write(
			dir.path().join("config.toml"),
			"page_size = 5\ndebounce_ms = 100\nmin_query_chars = 3\n",
		)
		.unwrap();
		let explicit = dir.path().join("explicit.toml");
		fs::write(&explicit, "debounce_ms = 200\n").unwrap();

		let env = ConfigLayer {
			min_query_chars: Some(1),
			endpoint: Some("http://env/search".into()),
			..Default::default()
		};
		let cli = CliOverrides {
			endpoint: Some("http://cli/search".into()),
			..Default::default()
		};

		let config = load_config_from(paths_in(dir.path()), Some(&explicit), env, cli).unwrap();
		assert_eq!(config.page_size, 5);
		assert_eq!(config.debounce.as_millis(), 200);
		assert_eq!(config.min_query_chars, 1);
		assert_eq!(config.endpoint, "http://cli/search");
	}

	#[test]
	fn no_files_means_defaults() {
		let dir = tempfile::tempdir().unwrap();
		let config = load_config_from(
			paths_in(dir.path()),
			None,
			ConfigLayer::default(),
			CliOverrides::default(),
		)
		.unwrap();
		assert_eq!(config.page_size, 4);
		assert_eq!(config.paths.state_dir, dir.path().join("state"));
	}
}
