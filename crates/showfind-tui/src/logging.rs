// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Tracing subscriber setup.
//!
//! The terminal UI owns stdout, so interactive sessions log to a file in the
//! state directory. One-shot commands log to stderr.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

fn filter(level: Option<&str>, default: &str) -> Result<EnvFilter> {
	match level {
		Some(level) => EnvFilter::try_new(level).with_context(|| format!("invalid log filter {level:?}")),
		None => Ok(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))),
	}
}

pub fn init_file(log_file: &Path, level: Option<&str>) -> Result<()> {
	if let Some(dir) = log_file.parent() {
		std::fs::create_dir_all(dir)
			.with_context(|| format!("creating log directory {}", dir.display()))?;
	}
	let file = OpenOptions::new()
		.create(true)
		.append(true)
		.open(log_file)
		.with_context(|| format!("opening log file {}", log_file.display()))?;

	tracing_subscriber::fmt()
		.with_env_filter(filter(level, "info")?)
		.with_writer(Mutex::new(file))
		.with_ansi(false)
		.init();
	Ok(())
}

pub fn init_stderr(level: Option<&str>) -> Result<()> {
	tracing_subscriber::fmt()
		.with_env_filter(filter(level, "warn")?)
		.with_writer(std::io::stderr)
		.init();
	Ok(())
}
