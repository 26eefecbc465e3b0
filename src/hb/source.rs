// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: hashbrowns
// File: source.rs
// Author: hashbrowns maintainers
// Copyright (c) 2025 hashbrowns maintainers

use crate::hb::error::{HashbrownsError, Result};
use std::fs::File;
use std::io::{self, Read, Seek, SeekFrom};
use std::path::{Path, PathBuf};

/// The file being hashed. Opened once, read-only, rewound after every
/// digest and closed when dropped.
#[derive(Debug)]
pub struct ByteSource {
	path: PathBuf,
	file: File,
	len: u64,
}

impl ByteSource {
	pub fn open(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref().to_path_buf();
		let unreadable = |source: io::Error| HashbrownsError::SourceUnreadable {
			path: path.clone(),
			source,
		};
		let file = File::open(&path).map_err(unreadable)?;
		let metadata = file.metadata().map_err(unreadable)?;
		if !metadata.is_file() {
			return Err(unreadable(io::Error::new(
				io::ErrorKind::InvalidInput,
				"not a regular file",
			)));
		}
		tracing::debug!(path = %path.display(), bytes = metadata.len(), "opened source");
		Ok(Self {
			len: metadata.len(),
			path,
			file,
		})
	}

	/// Size of the file when it was opened.
	pub fn len(&self) -> u64 {
		self.len
	}

	pub fn is_empty(&self) -> bool {
		self.len == 0
	}

	/// File name used in headings and one-shot output.
	pub fn display_name(&self) -> String {
		self.path
			.file_name()
			.map(|name| name.to_string_lossy().into_owned())
			.unwrap_or_else(|| self.path.display().to_string())
	}
}

impl Read for ByteSource {
	fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
		self.file.read(buf)
	}
}

impl Seek for ByteSource {
	fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
		self.file.seek(pos)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::io::Write;
	use tempfile::{tempdir, NamedTempFile};

	#[test]
	fn open_missing_path_is_unreadable() {
		let dir = tempdir().expect("tempdir");
		let err = ByteSource::open(dir.path().join("missing.bin")).unwrap_err();
		assert!(matches!(err, HashbrownsError::SourceUnreadable { .. }));
	}

	#[test]
	fn open_directory_is_unreadable() {
		let dir = tempdir().expect("tempdir");
		let err = ByteSource::open(dir.path()).unwrap_err();
		assert!(matches!(err, HashbrownsError::SourceUnreadable { .. }));
	}

	#[test]
	fn open_records_length_and_name() {
		let mut file = NamedTempFile::new().expect("temp file");
		file.write_all(b"hashbrowns").expect("write");
		let source = ByteSource::open(file.path()).expect("open");
		assert_eq!(source.len(), 10);
		assert!(!source.is_empty());
		assert_eq!(
			source.display_name(),
			file.path().file_name().unwrap().to_string_lossy()
		);
	}
}
