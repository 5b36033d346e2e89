// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use ratatui::{
	layout::{Constraint, Direction, Layout, Rect},
	style::{Color, Modifier, Style},
	text::{Line, Span},
	widgets::{Block, Borders, Paragraph, Wrap},
	Frame,
};
use showfind_core::{Card, ControlKind, PageControl, PageView, ResultsPane, ViewState};

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
const CARD_HEIGHT: u16 = 4;
const HINT: &str = "Enter search · ←/→ pages · Alt+1-9 jump · Ctrl+U clear · Esc quit";
const IDLE_MESSAGE: &str = "Type to search TV shows.";
const LOADING_MESSAGE: &str = "Loading...";

/// Everything one frame needs.
pub struct Screen<'a> {
	pub input: &'a str,
	pub state: &'a ViewState,
	pub spinner_frame: usize,
}

pub fn draw(frame: &mut Frame, area: Rect, screen: &Screen) {
	let chunks = Layout::default()
		.direction(Direction::Vertical)
		.constraints([
			Constraint::Length(3),
			Constraint::Length(1),
			Constraint::Min(0),
			Constraint::Length(1),
		])
		.split(area);

	draw_input(frame, chunks[0], screen.input);
	draw_status(frame, chunks[1], screen);
	draw_results(frame, chunks[2], &screen.state.results);
	frame.render_widget(
		Paragraph::new(pagination_line(&screen.state.pagination)),
		chunks[3],
	);
}

fn draw_input(frame: &mut Frame, area: Rect, input: &str) {
	let block = Block::default()
		.borders(Borders::ALL)
		.title(" Search shows ");
	let line = Line::from(vec![
		Span::raw(input),
		Span::styled("▏", Style::default().add_modifier(Modifier::SLOW_BLINK)),
	]);
	frame.render_widget(Paragraph::new(line).block(block), area);
}

fn draw_status(frame: &mut Frame, area: Rect, screen: &Screen) {
	let state = screen.state;
	let line = if state.busy {
		let spinner = SPINNER_FRAMES[screen.spinner_frame % SPINNER_FRAMES.len()];
		Line::from(vec![
			Span::styled(spinner, Style::default().fg(Color::Cyan)),
			Span::raw(" Searching..."),
		])
	} else if !state.announcement.is_empty() {
		Line::from(Span::styled(
			state.announcement.as_str(),
			Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
		))
	} else {
		Line::from(Span::styled(HINT, Style::default().fg(Color::DarkGray)))
	};
	frame.render_widget(Paragraph::new(line), area);
}

fn draw_results(frame: &mut Frame, area: Rect, pane: &ResultsPane) {
	let message = |text: &str, style: Style| {
		Paragraph::new(Line::from(Span::styled(text.to_string(), style))).wrap(Wrap { trim: true })
	};

	match pane {
		ResultsPane::Empty => {
			frame.render_widget(message(IDLE_MESSAGE, Style::default().fg(Color::DarkGray)), area)
		}
		ResultsPane::Loading => frame.render_widget(message(LOADING_MESSAGE, Style::default()), area),
		ResultsPane::NoResults { message: text } => {
			frame.render_widget(message(text, Style::default()), area)
		}
		ResultsPane::Error { message: text } => {
			frame.render_widget(message(text, Style::default().fg(Color::Red)), area)
		}
		ResultsPane::Page(page) => draw_page(frame, area, page),
	}
}

fn draw_page(frame: &mut Frame, area: Rect, page: &PageView) {
	let mut constraints = vec![Constraint::Length(1)];
	constraints.extend(page.cards.iter().map(|_| Constraint::Length(CARD_HEIGHT)));
	constraints.push(Constraint::Min(0));

	let chunks = Layout::default()
		.direction(Direction::Vertical)
		.constraints(constraints)
		.split(area);

	frame.render_widget(
		Paragraph::new(Line::from(Span::styled(
			page.summary.to_string(),
			Style::default().add_modifier(Modifier::BOLD),
		))),
		chunks[0],
	);

	for (card, chunk) in page.cards.iter().zip(chunks.iter().skip(1)) {
		draw_card(frame, *chunk, card);
	}
}

fn draw_card(frame: &mut Frame, area: Rect, card: &Card) {
	let block = Block::default()
		.borders(Borders::ALL)
		.title(Span::styled(
			format!(" {} ", card.title),
			Style::default().add_modifier(Modifier::BOLD),
		));
	let dim = Style::default().fg(Color::DarkGray);
	let body = vec![
		Line::from(vec![Span::styled("image ", dim), Span::raw(card.image_url.as_str())]),
		Line::from(vec![Span::styled("alt   ", dim), Span::raw(card.alt_text.as_str())]),
	];
	frame.render_widget(Paragraph::new(body).block(block), area);
}

/// "‹ Previous  1  [2]  3  Next ›"; empty when there is nothing to page.
pub fn pagination_line(controls: &[PageControl]) -> Line<'static> {
	let mut spans = Vec::with_capacity(controls.len() * 2);
	for (i, control) in controls.iter().enumerate() {
		if i > 0 {
			spans.push(Span::raw("  "));
		}
		spans.push(control_span(control));
	}
	Line::from(spans)
}

fn control_span(control: &PageControl) -> Span<'static> {
	let text = match control.kind {
		ControlKind::Previous => format!("‹ {}", control.label()),
		ControlKind::Next => format!("{} ›", control.label()),
		ControlKind::Page(_) if control.current => format!("[{}]", control.label()),
		ControlKind::Page(_) => control.label(),
	};

	let style = if control.current {
		Style::default().add_modifier(Modifier::BOLD | Modifier::REVERSED)
	} else if control.enabled {
		Style::default().fg(Color::Cyan)
	} else {
		Style::default().fg(Color::DarkGray)
	};

	Span::styled(text, style)
}

#[cfg(test)]
mod tests {
	use super::*;
	use showfind_core::pagination::page_controls;

	fn line_text(line: &Line) -> String {
		line.spans.iter().map(|s| s.content.as_ref()).collect()
	}

	#[test]
	fn pagination_marks_current_page() {
		let line = pagination_line(&page_controls(2, 3));
		assert_eq!(line_text(&line), "‹ Previous  1  [2]  3  Next ›");
	}

	#[test]
	fn no_controls_no_text() {
		assert_eq!(line_text(&pagination_line(&[])), "");
	}

	#[test]
	fn disabled_controls_are_dimmed() {
		let controls = page_controls(1, 2);
		assert_eq!(control_span(&controls[0]).style.fg, Some(Color::DarkGray));
		assert_eq!(control_span(&controls[3]).style.fg, Some(Color::Cyan));
	}
}
