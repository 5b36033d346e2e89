// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Terminal front-end for showfind: an interactive search screen and a
//! one-shot `search` command, both driving the same controller.

pub mod app;
pub mod cli;
pub mod logging;
pub mod oneshot;
pub mod render;
pub mod runner;

pub use app::App;
