// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: hashbrowns
// File: config.rs
// Author: hashbrowns maintainers
// Copyright (c) 2025 hashbrowns maintainers

//! Runtime settings collected from the command line and environment.

use crate::hb::algorithm::Algorithm;
use crate::hb::clipboard::ClipboardKind;
use crate::hb::console::color::ColorMode;
use crate::hb::output::OutputFormat;
use clap::ArgMatches;
use std::path::PathBuf;

pub const ALGORITHMS_ENV: &str = "HASHBROWNS_ALGORITHMS";
pub const LOG_ENV: &str = "HASHBROWNS_LOG";

#[derive(Debug, Clone)]
pub struct Settings {
	pub path: PathBuf,
	/// One-shot algorithm; the console runs when unset.
	pub algorithm: Option<String>,
	pub check: Option<String>,
	pub format: OutputFormat,
	/// Probe list for the registry.
	pub algorithms: Vec<String>,
	pub script: Option<PathBuf>,
	pub ignore_errors: bool,
	pub clipboard: ClipboardKind,
	pub color: ColorMode,
}

impl Settings {
	pub fn from_matches(matches: &ArgMatches) -> Self {
		let algorithms = matches
			.get_many::<String>("algorithms")
			.map(|values| values.map(|v| v.trim().to_string()).collect())
			.unwrap_or_else(default_probe_list);
		let color = if matches.get_flag("no-color") {
			ColorMode::Never
		} else {
			matches
				.get_one::<ColorMode>("color")
				.copied()
				.unwrap_or_default()
		};
		Self {
			path: matches
				.get_one::<PathBuf>("file")
				.cloned()
				.unwrap_or_default(),
			algorithm: matches.get_one::<String>("algorithm").cloned(),
			check: matches.get_one::<String>("check").cloned(),
			format: matches
				.get_one::<OutputFormat>("format")
				.copied()
				.unwrap_or_default(),
			algorithms,
			script: matches.get_one::<PathBuf>("script").cloned(),
			ignore_errors: matches.get_flag("ignore-errors"),
			clipboard: matches
				.get_one::<ClipboardKind>("clipboard")
				.copied()
				.unwrap_or_default(),
			color,
		}
	}
}

pub fn default_probe_list() -> Vec<String> {
	Algorithm::defaults()
		.into_iter()
		.map(|alg| alg.id().to_string())
		.collect()
}
