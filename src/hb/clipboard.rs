// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: hashbrowns
// File: clipboard.rs
// Author: hashbrowns maintainers
// Copyright (c) 2025 hashbrowns maintainers

//! Clipboard services the controller can hand digests to.

use crate::hb::error::{HashbrownsError, Result};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use clap::ValueEnum;
use std::io::{self, IsTerminal, Write};

pub trait Clipboard {
	fn copy_text(&mut self, text: &str) -> Result<()>;
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, ValueEnum)]
pub enum ClipboardKind {
	/// Terminal clipboard via the OSC 52 escape sequence.
	#[default]
	Osc52,
	#[value(name = "none")]
	Disabled,
}

/// Writes `ESC ] 52 ; c ; <base64> BEL` so the terminal emulator places
/// the text on the system clipboard. Refuses to copy when `out` is not
/// attached to a terminal.
pub struct Osc52Clipboard<W: Write> {
	out: W,
	attached: bool,
}

impl<W: Write> Osc52Clipboard<W> {
	pub fn new(out: W, attached: bool) -> Self {
		Self { out, attached }
	}

	pub fn into_inner(self) -> W {
		self.out
	}
}

impl<W: Write> Clipboard for Osc52Clipboard<W> {
	fn copy_text(&mut self, text: &str) -> Result<()> {
		if !self.attached {
			return Err(HashbrownsError::Clipboard(io::Error::new(
				io::ErrorKind::Unsupported,
				"stderr is not a terminal, OSC 52 has no receiver",
			)));
		}
		let payload = STANDARD.encode(text.as_bytes());
		write!(self.out, "\x1b]52;c;{}\x07", payload)
			.and_then(|_| self.out.flush())
			.map_err(HashbrownsError::Clipboard)
	}
}

/// Refuses every copy; used with `--clipboard none`.
#[derive(Debug, Default)]
pub struct NullClipboard;

impl Clipboard for NullClipboard {
	fn copy_text(&mut self, _text: &str) -> Result<()> {
		Err(HashbrownsError::Clipboard(io::Error::new(
			io::ErrorKind::Unsupported,
			"clipboard disabled",
		)))
	}
}

/// Keeps the last copied text in memory.
#[derive(Debug, Default, Clone)]
pub struct MemoryClipboard {
	contents: Option<String>,
}

impl MemoryClipboard {
	pub fn contents(&self) -> Option<&str> {
		self.contents.as_deref()
	}
}

impl Clipboard for MemoryClipboard {
	fn copy_text(&mut self, text: &str) -> Result<()> {
		self.contents = Some(text.to_string());
		Ok(())
	}
}

pub fn build(kind: ClipboardKind) -> Box<dyn Clipboard> {
	match kind {
		ClipboardKind::Osc52 => {
			let stderr = io::stderr();
			let attached = stderr.is_terminal();
			Box::new(Osc52Clipboard::new(stderr, attached))
		}
		ClipboardKind::Disabled => Box::new(NullClipboard),
	}
}
