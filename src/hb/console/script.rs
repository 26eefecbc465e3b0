// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: hashbrowns
// File: script.rs
// Author: hashbrowns maintainers
// Copyright (c) 2025 hashbrowns maintainers

use super::session::ConsoleSession;
use crate::hb::error::{HashbrownsError, Result};
use std::fs::File;
use std::io::{self, BufReader, Read, Seek};
use std::path::Path;

/// Runs the commands in `path`, echoing each one before its output.
pub fn run_script<S: Read + Seek>(
	session: &mut ConsoleSession<'_, S>,
	path: &Path,
) -> Result<i32> {
	let file = File::open(path).map_err(HashbrownsError::Script)?;
	let mut stdout = io::stdout();
	session.run_lines(BufReader::new(file), &mut stdout, true)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::hb::clipboard::MemoryClipboard;
	use crate::hb::console::ConsoleOptions;
	use crate::hb::controller::Hashbrowns;
	use crate::hb::registry::AlgorithmRegistry;
	use std::io::{Cursor, Write};
	use tempfile::NamedTempFile;

	fn session_for<'a>(
		clipboard: &'a mut MemoryClipboard,
		script: &Path,
	) -> ConsoleSession<'a, Cursor<Vec<u8>>> {
		let controller = Hashbrowns::new(
			Cursor::new(b"abc".to_vec()),
			"abc.txt",
			AlgorithmRegistry::with_defaults(),
			clipboard,
		);
		ConsoleSession::new(
			controller,
			ConsoleOptions::from_script(script.to_path_buf(), false),
		)
	}

	#[test]
	fn missing_script_is_an_error() {
		let mut clipboard = MemoryClipboard::default();
		let path = Path::new("does-not-exist.hb");
		let mut session = session_for(&mut clipboard, path);
		let err = run_script(&mut session, path).unwrap_err();
		assert!(matches!(err, HashbrownsError::Script(_)));
	}

	#[test]
	fn script_runs_to_completion() {
		let mut file = NamedTempFile::new().expect("temp script");
		file.write_all(b"# smoke\nsha256\nref ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad\ncopy\n")
			.expect("write script");
		let mut clipboard = MemoryClipboard::default();
		let mut session = session_for(&mut clipboard, file.path());
		assert_eq!(session.run().expect("script ran"), 0);
		assert!(session.controller().verdict().is_match());
		drop(session);
		assert_eq!(
			clipboard.contents(),
			Some("ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad")
		);
	}
}
