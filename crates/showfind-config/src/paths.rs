// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! XDG Base Directory compliant path resolution.

use std::path::PathBuf;

use crate::ConfigError;

/// Resolved XDG paths for showfind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathsConfig {
	/// User config file: ~/.config/showfind/config.toml
	pub user_config_file: PathBuf,
	/// State directory: ~/.local/state/showfind/
	pub state_dir: PathBuf,
}

impl PathsConfig {
	/// Log file used while the terminal UI owns the screen.
	pub fn log_file(&self) -> PathBuf {
		self.state_dir.join("showfind.log")
	}
}

impl Default for PathsConfig {
	fn default() -> Self {
		Self {
			user_config_file: PathBuf::from("~/.config/showfind/config.toml"),
			state_dir: PathBuf::from("~/.local/state/showfind"),
		}
	}
}

/// Resolve XDG paths according to the Base Directory Specification.
///
/// Uses environment variables if set, otherwise falls back to defaults:
/// - XDG_CONFIG_HOME or ~/.config
/// - XDG_STATE_HOME or ~/.local/state
pub fn resolve_xdg_paths() -> Result<PathsConfig, ConfigError> {
	let home = dirs::home_dir().ok_or(ConfigError::HomeDirNotFound)?;

	let config_home = std::env::var_os("XDG_CONFIG_HOME")
		.map(PathBuf::from)
		.unwrap_or_else(|| home.join(".config"));

	let state_home = std::env::var_os("XDG_STATE_HOME")
		.map(PathBuf::from)
		.unwrap_or_else(|| home.join(".local/state"));

	tracing::debug!(
		config_home = %config_home.display(),
		state_home = %state_home.display(),
		"resolved XDG paths"
	);

	Ok(PathsConfig {
		user_config_file: config_home.join("showfind/config.toml"),
		state_dir: state_home.join("showfind"),
	})
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_resolve_xdg_paths_succeeds() {
		let paths = resolve_xdg_paths().unwrap();
		assert!(paths
			.user_config_file
			.ends_with("showfind/config.toml"));
		assert!(paths.state_dir.ends_with("showfind"));
	}

	#[test]
	fn test_log_file_lives_in_state_dir() {
		let paths = PathsConfig::default();
		assert_eq!(
			paths.log_file(),
			PathBuf::from("~/.local/state/showfind/showfind.log")
		);
	}
}
