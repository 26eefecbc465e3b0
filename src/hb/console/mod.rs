// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: hashbrowns
// File: mod.rs
// Author: hashbrowns maintainers
// Copyright (c) 2025 hashbrowns maintainers

//! Terminal front end: one command per line, dispatched to the
//! controller.

pub mod color;
pub mod parser;
pub mod script;
pub mod session;

use std::io::{self, IsTerminal};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleMode {
	/// Line editor on a terminal.
	Interactive,
	/// Commands read from a non-terminal stdin.
	Piped,
	/// Commands read from `--script`.
	Script,
}

#[derive(Debug, Clone)]
pub struct ConsoleOptions {
	pub mode: ConsoleMode,
	pub script_path: Option<PathBuf>,
	pub ignore_errors: bool,
}

impl ConsoleOptions {
	/// Interactive when stdin is a terminal, piped otherwise.
	pub fn detect() -> Self {
		if io::stdin().is_terminal() {
			Self::interactive()
		} else {
			Self::piped()
		}
	}

	pub fn interactive() -> Self {
		Self {
			mode: ConsoleMode::Interactive,
			script_path: None,
			ignore_errors: false,
		}
	}

	pub fn piped() -> Self {
		Self {
			mode: ConsoleMode::Piped,
			script_path: None,
			ignore_errors: false,
		}
	}

	pub fn from_script(path: PathBuf, ignore_errors: bool) -> Self {
		Self {
			mode: ConsoleMode::Script,
			script_path: Some(path),
			ignore_errors,
		}
	}
}

pub use parser::parse_command;
pub use session::ConsoleSession;
