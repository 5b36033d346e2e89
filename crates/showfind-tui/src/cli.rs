// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use showfind_config::CliOverrides;

#[derive(Debug, Parser)]
#[command(name = "showfind", version, about = "Search TV shows from the terminal")]
pub struct Cli {
	#[command(subcommand)]
	pub command: Option<Command>,

	/// Search endpoint, e.g. https://api.tvmaze.com/search/shows
	#[arg(long, global = true)]
	pub endpoint: Option<String>,

	/// Results per page
	#[arg(long, global = true)]
	pub page_size: Option<usize>,

	/// Quiet period before a live search fires, in milliseconds
	#[arg(long, global = true)]
	pub debounce_ms: Option<u64>,

	/// Minimum characters before live input triggers a search
	#[arg(long, global = true)]
	pub min_query_chars: Option<usize>,

	/// Extra config file layered over the user config
	#[arg(long, global = true, value_name = "PATH")]
	pub config: Option<PathBuf>,

	/// Log filter, e.g. "debug" or "showfind_core=trace" (overrides RUST_LOG)
	#[arg(long, global = true)]
	pub log_level: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
	/// Interactive search (default)
	Tui,
	/// Run one search and print a page of results
	Search {
		query: String,

		/// Page to print
		#[arg(long, default_value_t = 1)]
		page: usize,

		/// Print the rendered state as JSON
		#[arg(long)]
		json: bool,
	},
}

impl Cli {
	pub fn overrides(&self) -> CliOverrides {
		CliOverrides {
			endpoint: self.endpoint.clone(),
			page_size: self.page_size,
			debounce_ms: self.debounce_ms,
			min_query_chars: self.min_query_chars,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use clap::CommandFactory;

	#[test]
	fn cli_definition_is_valid() {
		Cli::command().debug_assert();
	}

	#[test]
	fn defaults_to_tui() {
		let cli = Cli::try_parse_from(["showfind"]).unwrap();
		assert!(cli.command.is_none());
	}

	#[test]
	fn search_subcommand_with_global_flags() {
		let cli = Cli::try_parse_from([
			"showfind",
			"search",
			"the office",
			"--page",
			"2",
			"--page-size",
			"6",
			"--json",
		])
		.unwrap();

		match &cli.command {
			Some(Command::Search { query, page, json }) => {
				assert_eq!(query, "the office");
				assert_eq!(*page, 2);
				assert!(*json);
			}
			other => panic!("unexpected command {other:?}"),
		}
		assert_eq!(cli.overrides().page_size, Some(6));
	}
}
