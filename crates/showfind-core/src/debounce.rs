// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Trailing-edge debouncing for live search.

use std::future::Future;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio_util::sync::CancellationToken;
use tracing::trace;

pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(400);

/// Runs a callback once a quiet period has elapsed since the last call.
///
/// Holds at most one pending call. Scheduling a new call cancels the pending
/// one; a callback whose delay has already elapsed runs to completion and is
/// not affected by later calls.
#[derive(Debug)]
pub struct Debouncer {
	delay: Duration,
	pending: Mutex<Option<CancellationToken>>,
}

impl Default for Debouncer {
	fn default() -> Self {
		Self::new(DEFAULT_DEBOUNCE)
	}
}

impl Debouncer {
	pub fn new(delay: Duration) -> Self {
		Self {
			delay,
			pending: Mutex::new(None),
		}
	}

	pub fn delay(&self) -> Duration {
		self.delay
	}

	/// Schedules `f` to run after the delay, replacing any pending call.
	///
	/// Must be called from within a Tokio runtime.
	pub fn call<F, Fut>(&self, f: F)
	where
		F: FnOnce() -> Fut + Send + 'static,
		Fut: Future<Output = ()> + Send + 'static,
	{
		let token = CancellationToken::new();
		if let Some(previous) = self.lock().replace(token.clone()) {
			previous.cancel();
		}

		let delay = self.delay;
		tokio::spawn(async move {
			tokio::select! {
				biased;
				_ = token.cancelled() => {
					trace!("debounced call superseded");
					return;
				}
				_ = tokio::time::sleep(delay) => {}
			}
			// Fired: no longer pending.
			token.cancel();
			f().await;
		});
	}

	/// Drops the pending call, if any. Returns whether one was pending.
	pub fn cancel(&self) -> bool {
		match self.lock().take() {
			Some(token) if !token.is_cancelled() => {
				token.cancel();
				true
			}
			_ => false,
		}
	}

	/// Whether a call is scheduled but has not fired yet.
	pub fn is_pending(&self) -> bool {
		self.lock()
			.as_ref()
			.is_some_and(|token| !token.is_cancelled())
	}

	fn lock(&self) -> MutexGuard<'_, Option<CancellationToken>> {
		self.pending.lock().unwrap_or_else(PoisonError::into_inner)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::sync::atomic::{AtomicUsize, Ordering};
	use std::sync::Arc;

	#[tokio::test(start_paused = true)]
	async fn fires_once_after_quiet_period() {
		let debouncer = Debouncer::new(Duration::from_millis(400));
		let calls = Arc::new(AtomicUsize::new(0));

		let counter = calls.clone();
		debouncer.call(move || async move {
			counter.fetch_add(1, Ordering::SeqCst);
		});
		assert!(debouncer.is_pending());

		tokio::time::sleep(Duration::from_millis(399)).await;
		assert_eq!(calls.load(Ordering::SeqCst), 0);

		tokio::time::sleep(Duration::from_millis(2)).await;
		tokio::task::yield_now().await;
		assert_eq!(calls.load(Ordering::SeqCst), 1);
		assert!(!debouncer.is_pending());
	}

	#[tokio::test(start_paused = true)]
	async fn newer_call_replaces_pending_one() {
		let debouncer = Debouncer::new(Duration::from_millis(400));
		let seen = Arc::new(Mutex::new(Vec::new()));

		for value in ["b", "br", "bre"] {
			let seen = seen.clone();
			debouncer.call(move || async move {
				seen.lock().unwrap().push(value);
			});
			tokio::time::sleep(Duration::from_millis(100)).await;
		}

		tokio::time::sleep(Duration::from_millis(500)).await;
		assert_eq!(*seen.lock().unwrap(), vec!["bre"]);
	}

	#[tokio::test(start_paused = true)]
	async fn cancel_drops_pending_call() {
		let debouncer = Debouncer::default();
		let calls = Arc::new(AtomicUsize::new(0));

		let counter = calls.clone();
		debouncer.call(move || async move {
			counter.fetch_add(1, Ordering::SeqCst);
		});

		assert!(debouncer.cancel());
		assert!(!debouncer.cancel());

		tokio::time::sleep(Duration::from_secs(1)).await;
		assert_eq!(calls.load(Ordering::SeqCst), 0);
	}

	#[tokio::test(start_paused = true)]
	async fn fired_call_is_not_cancelled_by_later_calls() {
		let debouncer = Debouncer::new(Duration::from_millis(10));
		let finished = Arc::new(AtomicUsize::new(0));

		let done = finished.clone();
		debouncer.call(move || async move {
			tokio::time::sleep(Duration::from_millis(100)).await;
			done.fetch_add(1, Ordering::SeqCst);
		});

		tokio::time::sleep(Duration::from_millis(20)).await;
		assert!(!debouncer.cancel());

		tokio::time::sleep(Duration::from_millis(200)).await;
		assert_eq!(finished.load(Ordering::SeqCst), 1);
	}
}
