// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Shared HTTP utilities for showfind.
//!
//! Every outbound request goes through a client built here so that the
//! User-Agent header stays consistent across the search backends.

mod client;

pub use client::{builder, builder_with_user_agent, new_client, user_agent};
