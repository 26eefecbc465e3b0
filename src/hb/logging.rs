// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: hashbrowns
// File: logging.rs
// Author: hashbrowns maintainers
// Copyright (c) 2025 hashbrowns maintainers

use crate::hb::config::LOG_ENV;
use std::io;
use tracing_subscriber::EnvFilter;

/// Diagnostics go to stderr so digests on stdout stay pipeable.
/// `HASHBROWNS_LOG` takes an `EnvFilter` directive; defaults to `warn`.
pub fn init(ansi: bool) {
	let filter = EnvFilter::try_from_env(LOG_ENV)
		.unwrap_or_else(|_| EnvFilter::new("warn"));
	let _ = tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(io::stderr)
		.with_ansi(ansi)
		.with_target(false)
		.without_time()
		.try_init();
}
