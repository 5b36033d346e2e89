// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Headless terminal driving for showfind's UI tests.
//!
//! [`Screen`] draws into ratatui's in-memory backend and reads the cells
//! back as text. [`KeyDriver`] feeds key events to a [`KeyDriven`] component
//! and redraws after each one, so assertions always see the latest frame.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::TestBackend, layout::Rect, Frame, Terminal};

/// Anything that reacts to terminal events and draws into an area.
pub trait KeyDriven {
	fn draw(&self, frame: &mut Frame, area: Rect);
	fn on_event(&mut self, event: Event);
}

/// An off-screen terminal of fixed size.
pub struct Screen {
	terminal: Terminal<TestBackend>,
}

impl Screen {
	pub fn new(width: u16, height: u16) -> Self {
		let terminal =
			Terminal::new(TestBackend::new(width, height)).expect("test backend never fails");
		Self { terminal }
	}

	pub fn draw(&mut self, draw_fn: impl FnOnce(&mut Frame, Rect)) {
		self.terminal
			.draw(|frame| {
				let area = frame.area();
				draw_fn(frame, area);
			})
			.expect("drawing to the test backend never fails");
	}

	/// Every row of the last frame, trailing blanks included.
	pub fn rows(&self) -> Vec<String> {
		let buffer = self.terminal.backend().buffer();
		let area = buffer.area;
		(area.top()..area.bottom())
			.map(|y| {
				(area.left()..area.right())
					.map(|x| buffer[(x, y)].symbol())
					.collect()
			})
			.collect()
	}

	/// Index of the first row containing `needle`.
	pub fn row_of(&self, needle: &str) -> Option<usize> {
		self.rows().iter().position(|row| row.contains(needle))
	}

	pub fn contains(&self, needle: &str) -> bool {
		self.row_of(needle).is_some()
	}
}

/// Drives a component with key presses, one redraw per interaction.
pub struct KeyDriver<C> {
	pub screen: Screen,
	pub component: C,
}

impl<C: KeyDriven> KeyDriver<C> {
	pub fn new(component: C, width: u16, height: u16) -> Self {
		Self {
			screen: Screen::new(width, height),
			component,
		}
	}

	pub fn redraw(&mut self) {
		let component = &self.component;
		self.screen.draw(|frame, area| component.draw(frame, area));
	}

	pub fn send(&mut self, event: Event) {
		self.component.on_event(event);
		self.redraw();
	}

	pub fn press(&mut self, code: KeyCode) {
		self.press_with(code, KeyModifiers::NONE);
	}

	pub fn press_with(&mut self, code: KeyCode, modifiers: KeyModifiers) {
		self.send(Event::Key(KeyEvent::new(code, modifiers)));
	}

	pub fn submit(&mut self) {
		self.press(KeyCode::Enter);
	}

	/// Types `text` one character at a time and redraws once at the end.
	pub fn type_text(&mut self, text: &str) {
		for ch in text.chars() {
			self.component
				.on_event(Event::Key(KeyEvent::new(KeyCode::Char(ch), KeyModifiers::NONE)));
		}
		self.redraw();
	}

	pub fn erase(&mut self, count: usize) {
		for _ in 0..count {
			self.component
				.on_event(Event::Key(KeyEvent::new(KeyCode::Backspace, KeyModifiers::NONE)));
		}
		self.redraw();
	}

	pub fn shows(&self, needle: &str) -> bool {
		self.screen.contains(needle)
	}
}

#[cfg(feature = "proptest")]
pub mod strategies {
	use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
	use proptest::prelude::*;

	/// Keys a user plausibly presses in a search box.
	pub fn key_event_strategy() -> impl Strategy<Value = KeyEvent> {
		let key_code = prop_oneof![
			Just(KeyCode::Enter),
			Just(KeyCode::Backspace),
			Just(KeyCode::Left),
			Just(KeyCode::Right),
			Just(KeyCode::PageUp),
			Just(KeyCode::PageDown),
			proptest::char::range('a', 'z').prop_map(KeyCode::Char),
			proptest::char::range('0', '9').prop_map(KeyCode::Char),
			proptest::sample::select(vec![' ', '&', '?', '#', '%', 'é']).prop_map(KeyCode::Char),
		];

		let modifiers = prop_oneof![Just(KeyModifiers::NONE), Just(KeyModifiers::ALT)];

		(key_code, modifiers).prop_map(|(code, mods)| KeyEvent::new(code, mods))
	}

	pub fn event_sequence_strategy(max_len: usize) -> impl Strategy<Value = Vec<Event>> {
		proptest::collection::vec(key_event_strategy().prop_map(Event::Key), 0..=max_len)
	}
}

#[cfg(feature = "proptest")]
pub use strategies::{event_sequence_strategy, key_event_strategy};

#[cfg(test)]
mod tests {
	use super::*;
	use ratatui::layout::{Constraint, Layout};
	use ratatui::text::Line;
	use ratatui::widgets::Paragraph;

	const TITLES: [&str; 4] = ["The Wire", "The Office", "Fargo", "Lost"];

	/// A search box over a fixed catalogue. Matches update on Enter only.
	#[derive(Default)]
	struct TitleSearch {
		input: String,
		matches: Vec<&'static str>,
	}

	impl KeyDriven for TitleSearch {
		fn draw(&self, frame: &mut Frame, area: Rect) {
			let [input_row, results] =
				Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(area);
			frame.render_widget(Paragraph::new(format!("> {}", self.input)), input_row);
			let lines: Vec<Line> = self.matches.iter().map(|title| Line::raw(*title)).collect();
			frame.render_widget(Paragraph::new(lines), results);
		}

		fn on_event(&mut self, event: Event) {
			let Event::Key(key) = event else { return };
			match key.code {
				KeyCode::Char(ch) => self.input.push(ch),
				KeyCode::Backspace => {
					self.input.pop();
				}
				KeyCode::Enter => {
					let needle = self.input.to_lowercase();
					self.matches = TITLES
						.into_iter()
						.filter(|title| title.to_lowercase().contains(&needle))
						.collect();
				}
				_ => {}
			}
		}
	}

	#[test]
	fn screen_rows_match_terminal_size() {
		let mut screen = Screen::new(30, 4);
		screen.draw(|frame, area| frame.render_widget(Paragraph::new("hello"), area));

		let rows = screen.rows();
		assert_eq!(rows.len(), 4);
		assert!(rows.iter().all(|row| row.chars().count() == 30));
		assert_eq!(screen.row_of("hello"), Some(0));
		assert_eq!(screen.row_of("absent"), None);
	}

	#[test]
	fn typing_then_submitting_fills_results_below_input() {
		let mut driver = KeyDriver::new(TitleSearch::default(), 30, 6);

		driver.type_text("the");
		assert!(driver.shows("> the"));
		assert!(!driver.shows("The Wire"), "nothing listed before Enter");

		driver.submit();
		let input_row = driver.screen.row_of("> the").unwrap();
		let wire_row = driver.screen.row_of("The Wire").unwrap();
		assert!(wire_row > input_row);
		assert!(driver.shows("The Office"));
		assert!(!driver.shows("Fargo"));
	}

	#[test]
	fn erasing_and_resubmitting_changes_results() {
		let mut driver = KeyDriver::new(TitleSearch::default(), 30, 6);

		driver.type_text("lost");
		driver.submit();
		assert!(driver.shows("Lost"));

		driver.erase(4);
		driver.type_text("far");
		driver.submit();
		assert!(driver.shows("Fargo"));
		assert!(!driver.shows("Lost"));
	}
}
