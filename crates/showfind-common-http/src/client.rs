// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! HTTP client with a consistent User-Agent header.

use reqwest::{Client, ClientBuilder};

/// Creates a new HTTP client with the standard showfind User-Agent header.
///
/// No request timeout is configured: an in-flight search lives until it
/// resolves, fails, or is cancelled by the caller.
pub fn new_client() -> Result<Client, reqwest::Error> {
	builder().build()
}

/// Creates a new HTTP client builder with the standard showfind User-Agent.
///
/// # Example
/// ```ignore
/// let client = showfind_common_http::builder()
///     .connect_timeout(Duration::from_secs(5))
///     .build()?;
/// ```
pub fn builder() -> ClientBuilder {
	builder_with_user_agent(user_agent())
}

/// Creates a new HTTP client builder with a custom User-Agent header.
pub fn builder_with_user_agent(user_agent: impl Into<String>) -> ClientBuilder {
	let user_agent = user_agent.into();
	tracing::trace!(user_agent = %user_agent, "building HTTP client");
	Client::builder().user_agent(user_agent)
}

/// Returns the standard showfind User-Agent string.
///
/// Format: `showfind/{version} ({os}-{arch})`
pub fn user_agent() -> String {
	format!(
		"showfind/{} ({}-{})",
		env!("CARGO_PKG_VERSION"),
		std::env::consts::OS,
		std::env::consts::ARCH
	)
}
