// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::io;
use std::time::Duration;

use crossterm::{
	event::{self, Event, KeyEventKind},
	terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
	ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use showfind_core::SearchBackend;

use crate::app::App;

pub const TICK_RATE: Duration = Duration::from_millis(80);

/// Runs the event loop until the user quits, restoring the terminal after.
///
/// Blocks the calling thread while polling for input; searches progress on
/// the Tokio runtime's worker threads.
pub fn run<B: SearchBackend>(mut app: App<B>, tick_rate: Duration) -> anyhow::Result<()> {
	enable_raw_mode()?;
	io::stdout().execute(EnterAlternateScreen)?;

	let backend = CrosstermBackend::new(io::stdout());
	let mut terminal = Terminal::new(backend)?;

	let result = (|| -> anyhow::Result<()> {
		loop {
			terminal.draw(|frame| app.render(frame))?;

			if event::poll(tick_rate)? {
				if let Event::Key(key) = event::read()? {
					if key.kind == KeyEventKind::Press {
						app.handle_key_event(key);
					}
				}
			}

			app.tick();

			if app.should_quit() {
				break;
			}
		}
		Ok(())
	})();

	disable_raw_mode()?;
	io::stdout().execute(LeaveAlternateScreen)?;

	result
}
