// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use showfind_search_tvmaze::TvMazeClient;
use showfind_tui::cli::{Cli, Command};
use showfind_tui::{logging, oneshot, runner, App};

#[tokio::main]
async fn main() -> Result<ExitCode> {
	let cli = Cli::parse();

	let config = showfind_config::load_config(cli.config.as_deref(), cli.overrides())
		.context("loading configuration")?;

	let client = TvMazeClient::new()
		.context("building HTTP client")?
		.with_base_url(config.endpoint.clone());

	match cli.command {
		Some(Command::Search { query, page, json }) => {
			logging::init_stderr(cli.log_level.as_deref())?;

			let state = oneshot::run_search(client, config.controller_options(), &query, page).await?;
			if json {
				println!("{}", serde_json::to_string_pretty(&state)?);
			} else {
				print!("{}", oneshot::format_plain(&state));
			}

			Ok(if oneshot::is_failure(&state) {
				ExitCode::FAILURE
			} else {
				ExitCode::SUCCESS
			})
		}
		Some(Command::Tui) | None => {
			logging::init_file(&config.paths.log_file(), cli.log_level.as_deref())?;
			tracing::info!(endpoint = %config.endpoint, "starting interactive session");

			let app = App::new(client, config.controller_options());
			runner::run(app, runner::TICK_RATE)?;
			Ok(ExitCode::SUCCESS)
		}
	}
}
