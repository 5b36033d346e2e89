// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::Rect;
use ratatui::Frame;
use showfind_core::{ControllerOptions, RenderedView, SearchBackend, SearchController, ViewState};
use tracing::debug;

use crate::render;

/// Interactive search session: an input line bound to a controller.
pub struct App<B> {
	input: String,
	controller: SearchController<B, RenderedView>,
	view: RenderedView,
	spinner_frame: usize,
	should_quit: bool,
}

impl<B: SearchBackend> App<B> {
	pub fn new(backend: B, options: ControllerOptions) -> Self {
		let view = RenderedView::new();
		let controller = SearchController::with_options(backend, view.clone(), options);
		Self {
			input: String::new(),
			controller,
			view,
			spinner_frame: 0,
			should_quit: false,
		}
	}

	pub fn input(&self) -> &str {
		&self.input
	}

	pub fn controller(&self) -> &SearchController<B, RenderedView> {
		&self.controller
	}

	pub fn view_state(&self) -> ViewState {
		self.view.snapshot()
	}

	pub fn should_quit(&self) -> bool {
		self.should_quit
	}

	/// Must be called from within a Tokio runtime: edits and submissions
	/// spawn search tasks.
	pub fn handle_key_event(&mut self, key: KeyEvent) {
		let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
		let alt = key.modifiers.contains(KeyModifiers::ALT);

		match key.code {
			KeyCode::Esc => self.should_quit = true,
			KeyCode::Char('c') if ctrl => self.should_quit = true,
			KeyCode::Char('u') if ctrl => {
				self.input.clear();
				self.input_changed();
			}
			KeyCode::Char(digit @ '1'..='9') if alt => {
				let page = digit as usize - '0' as usize;
				self.controller.go_to_page(page);
			}
			KeyCode::Char(ch) if !ctrl && !alt => {
				self.input.push(ch);
				self.input_changed();
			}
			KeyCode::Backspace => {
				if self.input.pop().is_some() {
					self.input_changed();
				}
			}
			KeyCode::Enter => {
				if self.controller.on_submit(&self.input).is_none() {
					debug!("ignoring blank submission");
				}
			}
			KeyCode::Left | KeyCode::PageUp => {
				self.controller.previous_page();
			}
			KeyCode::Right | KeyCode::PageDown => {
				self.controller.next_page();
			}
			_ => {}
		}
	}

	fn input_changed(&self) {
		self.controller.on_input(&self.input);
	}

	pub fn tick(&mut self) {
		if self.view.snapshot().busy {
			self.spinner_frame = self.spinner_frame.wrapping_add(1);
		}
	}

	pub fn render(&self, frame: &mut Frame) {
		let area = frame.area();
		self.render_in(frame, area);
	}

	pub fn render_in(&self, frame: &mut Frame, area: Rect) {
		let state = self.view.snapshot();
		render::draw(
			frame,
			area,
			&render::Screen {
				input: &self.input,
				state: &state,
				spinner_frame: self.spinner_frame,
			},
		);
	}
}
