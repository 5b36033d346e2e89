// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Client-side pagination over the current result set.

use std::ops::Range;

use serde::Serialize;

use crate::view::ResultsSummary;

pub const DEFAULT_PAGE_SIZE: usize = 4;

/// Number of pages needed for `len` items. Zero items means zero pages.
pub fn total_pages(len: usize, page_size: usize) -> usize {
	len.div_ceil(page_size.max(1))
}

/// The visible slice of a result set for one (clamped) page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
	/// 1-based page, always within `1..=total_pages`.
	pub page: usize,
	pub total_pages: usize,
	/// Half-open, 0-based bounds into the result set.
	pub start: usize,
	pub end: usize,
	pub total: usize,
}

impl PageWindow {
	/// Clamps `requested` into range and computes the slice bounds.
	/// Returns `None` for an empty result set.
	pub fn compute(len: usize, page_size: usize, requested: usize) -> Option<Self> {
		let page_size = page_size.max(1);
		let total_pages = total_pages(len, page_size);
		if total_pages == 0 {
			return None;
		}

		let page = requested.clamp(1, total_pages);
		let start = (page - 1) * page_size;
		let end = (page * page_size).min(len);

		Some(Self {
			page,
			total_pages,
			start,
			end,
			total: len,
		})
	}

	pub fn range(&self) -> Range<usize> {
		self.start..self.end
	}

	pub fn summary(&self) -> ResultsSummary {
		ResultsSummary {
			first: self.start + 1,
			last: self.end,
			total: self.total,
			page: self.page,
			total_pages: self.total_pages,
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "page")]
pub enum ControlKind {
	Previous,
	Page(usize),
	Next,
}

/// One entry of the pagination bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageControl {
	pub kind: ControlKind,
	/// Page that activating this control renders.
	pub target: usize,
	pub enabled: bool,
	/// Marks the numbered control of the page on screen.
	pub current: bool,
}

impl PageControl {
	pub fn label(&self) -> String {
		match self.kind {
			ControlKind::Previous => "Previous".to_string(),
			ControlKind::Page(n) => n.to_string(),
			ControlKind::Next => "Next".to_string(),
		}
	}

	/// Whether activating this control changes the page.
	pub fn is_navigable(&self) -> bool {
		self.enabled && !self.current
	}
}

/// Builds the pagination bar: Previous, one control per page, Next.
/// Empty when there is at most one page.
pub fn page_controls(current: usize, total_pages: usize) -> Vec<PageControl> {
	if total_pages <= 1 {
		return Vec::new();
	}

	let current = current.clamp(1, total_pages);
	let mut controls = Vec::with_capacity(total_pages + 2);

	controls.push(PageControl {
		kind: ControlKind::Previous,
		target: current.saturating_sub(1).max(1),
		enabled: current > 1,
		current: false,
	});

	controls.extend((1..=total_pages).map(|page| PageControl {
		kind: ControlKind::Page(page),
		target: page,
		enabled: page != current,
		current: page == current,
	}));

	controls.push(PageControl {
		kind: ControlKind::Next,
		target: (current + 1).min(total_pages),
		enabled: current < total_pages,
		current: false,
	});

	controls
}
