// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: hashbrowns
// File: color.rs
// Author: hashbrowns maintainers
// Copyright (c) 2025 hashbrowns maintainers

use clap::ValueEnum;
use colored::{control, Colorize};
use std::env;
use std::io::{self, IsTerminal};

/// Color preference from `--color` / `NO_COLOR`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorMode {
	#[default]
	Auto,
	Always,
	Never,
}

impl ColorMode {
	/// Decision for console output on stdout.
	pub fn should_emit(self) -> bool {
		self.should_emit_on(&io::stdout())
	}

	/// Decision for a specific stream, e.g. stderr for diagnostics.
	pub fn should_emit_on<T: IsTerminal>(self, stream: &T) -> bool {
		match self {
			ColorMode::Always => true,
			ColorMode::Never => false,
			ColorMode::Auto => {
				env::var_os("NO_COLOR").is_none() && stream.is_terminal()
			}
		}
	}

	/// Applies the preference process-wide for `colored`.
	pub fn apply(self) {
		control::set_override(self.should_emit());
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineRole {
	Prompt,
	Digest,
	Success,
	Warning,
	Error,
	Info,
}

pub fn paint(role: LineRole, text: &str) -> String {
	match role {
		LineRole::Prompt => text.bright_cyan().to_string(),
		LineRole::Digest => text.bold().to_string(),
		LineRole::Success => text.green().to_string(),
		LineRole::Warning => text.yellow().to_string(),
		LineRole::Error => text.red().bold().to_string(),
		LineRole::Info => text.cyan().to_string(),
	}
}
