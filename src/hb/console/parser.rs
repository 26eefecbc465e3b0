// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: hashbrowns
// File: parser.rs
// Author: hashbrowns maintainers
// Copyright (c) 2025 hashbrowns maintainers

use crate::hb::algorithm::Algorithm;
use crate::hb::controller::Command;
use crate::hb::error::{HashbrownsError, Result};

/// Maps one console line to a command. Blank lines and `#` comments
/// yield `Ok(None)`.
pub fn parse_command(input: &str) -> Result<Option<Command>> {
	let trimmed = input.trim();
	if trimmed.is_empty() || trimmed.starts_with('#') {
		return Ok(None);
	}

	let (head, rest) = match trimmed.split_once(char::is_whitespace) {
		Some((head, rest)) => (head, rest.trim()),
		None => (trimmed, ""),
	};
	let keyword = head.to_ascii_lowercase();

	let command = match keyword.as_str() {
		"copy" | "c" => Command::Copy,
		"ref" | "reference" | "compare" | "check" => {
			if rest.is_empty() {
				Command::ClearReference
			} else {
				Command::Reference(rest.to_string())
			}
		}
		"clear" => Command::ClearReference,
		"show" | "status" => Command::Show,
		"list" | "ls" => Command::List,
		"help" | "?" => Command::Help,
		"quit" | "exit" | "q" => Command::Quit,
		_ => match head.parse::<Algorithm>() {
			Ok(algorithm) if rest.is_empty() => Command::Select(algorithm),
			Ok(algorithm) => {
				return Err(HashbrownsError::Console(format!(
					"`{}` takes no arguments",
					algorithm.id()
				)))
			}
			Err(_) => {
				return Err(HashbrownsError::Console(format!(
					"unknown command `{}`; try `help`",
					head
				)))
			}
		},
	};
	Ok(Some(command))
}
