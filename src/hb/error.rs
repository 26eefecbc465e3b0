// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: hashbrowns
// File: error.rs
// Author: hashbrowns maintainers
// Copyright (c) 2025 hashbrowns maintainers

use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, HashbrownsError>;

#[derive(Debug, Error)]
pub enum HashbrownsError {
	/// The file could not be opened, or is not a regular file.
	#[error("File is not readable: {}", path.display())]
	SourceUnreadable {
		path: PathBuf,
		#[source]
		source: io::Error,
	},
	#[error("{0}: not supported")]
	UnsupportedAlgorithm(String),
	#[error("read failed: {0}")]
	Read(#[source] io::Error),
	#[error("clipboard unavailable: {0}")]
	Clipboard(#[source] io::Error),
	#[error("script failed: {0}")]
	Script(#[source] io::Error),
	#[error("{0}")]
	Console(String),
}

impl HashbrownsError {
	pub fn exit_code(&self) -> i32 {
		match self {
			Self::SourceUnreadable { .. } => 1,
			Self::UnsupportedAlgorithm(_) => 64,
			Self::Script(_) => 66,
			Self::Read(_) | Self::Clipboard(_) | Self::Console(_) => 70,
		}
	}
}
