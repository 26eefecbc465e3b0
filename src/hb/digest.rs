// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: hashbrowns
// File: digest.rs
// Author: hashbrowns maintainers
// Copyright (c) 2025 hashbrowns maintainers

//! Streaming digest computation over a rewindable byte source.

use crate::hb::algorithm::Algorithm;
use crate::hb::error::{HashbrownsError, Result};
use crate::hb::registry::AlgorithmRegistry;
use serde::Serialize;
use std::fmt;
use std::io::{Read, Seek};

/// Bytes read per iteration.
pub const CHUNK_SIZE: usize = 64 * 1024;

/// A finished digest: the algorithm and its lowercase hex rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Digest {
	pub algorithm: Algorithm,
	pub hex: String,
}

impl Digest {
	pub fn as_str(&self) -> &str {
		&self.hex
	}
}

impl fmt::Display for Digest {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.hex)
	}
}

/// Hashes the full content of `source` and rewinds it to offset 0, so the
/// next call sees the same bytes.
pub fn compute<R>(
	source: &mut R,
	algorithm: Algorithm,
	registry: &AlgorithmRegistry,
) -> Result<Digest>
where
	R: Read + Seek + ?Sized,
{
	let mut hasher = registry.hasher(algorithm)?;
	let mut buffer = vec![0u8; CHUNK_SIZE];
	let streamed = loop {
		match source.read(&mut buffer) {
			Ok(0) => break Ok(()),
			Ok(count) => hasher.update(&buffer[..count]),
			Err(err) if err.kind() == std::io::ErrorKind::Interrupted => {}
			Err(err) => break Err(err),
		}
	};
	source.rewind().map_err(HashbrownsError::Read)?;
	streamed.map_err(HashbrownsError::Read)?;

	let hex = hex::encode(hasher.finalize());
	tracing::debug!(algorithm = %algorithm, digest = %hex, "computed digest");
	Ok(Digest { algorithm, hex })
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::io::{Cursor, SeekFrom};

	fn digest_of(bytes: &[u8], algorithm: Algorithm) -> String {
		let registry = AlgorithmRegistry::with_defaults();
		let mut cursor = Cursor::new(bytes);
		compute(&mut cursor, algorithm, &registry)
			.expect("digest")
			.hex
	}

	#[test]
	fn empty_input_vectors() {
		assert_eq!(
			digest_of(b"", Algorithm::Md5),
			"d41d8cd98f00b204e9800998ecf8427e"
		);
		assert_eq!(
			digest_of(b"", Algorithm::Sha256),
			"e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
		);
	}

	#[test]
	fn abc_sha256_vector() {
		assert_eq!(
			digest_of(b"abc", Algorithm::Sha256),
			"ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
		);
	}

	#[test]
	fn source_is_rewound_after_compute() {
		let registry = AlgorithmRegistry::with_defaults();
		let mut cursor = Cursor::new(b"rewind me".to_vec());
		let first = compute(&mut cursor, Algorithm::Sha1, &registry).unwrap();
		assert_eq!(cursor.stream_position().unwrap(), 0);
		let second = compute(&mut cursor, Algorithm::Sha1, &registry).unwrap();
		assert_eq!(first, second);
	}

	#[test]
	fn input_larger_than_one_chunk() {
		let data = vec![0x61u8; CHUNK_SIZE * 2 + 17];
		let registry = AlgorithmRegistry::with_defaults();
		let mut cursor = Cursor::new(data.clone());
		let streamed = compute(&mut cursor, Algorithm::Sha512, &registry).unwrap();
		let mut hasher = registry.hasher(Algorithm::Sha512).unwrap();
		hasher.update(&data);
		assert_eq!(streamed.hex, hex::encode(hasher.finalize()));
	}

	#[test]
	fn hex_length_matches_output_size() {
		let registry = AlgorithmRegistry::with_defaults();
		for alg in registry.algorithms() {
			let mut cursor = Cursor::new(b"length check");
			let digest = compute(&mut cursor, alg, &registry).unwrap();
			assert_eq!(digest.hex.len(), alg.hex_len(), "{}", alg);
			assert!(digest.hex.chars().all(|c| matches!(c, '0'..='9' | 'a'..='f')));
		}
	}

	/// Serves `fail_after` bytes, then fails every read until rewound.
	struct FailingReader {
		inner: Cursor<Vec<u8>>,
		fail_after: u64,
		armed: bool,
	}

	impl Read for FailingReader {
		fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
			if self.armed && self.inner.position() >= self.fail_after {
				return Err(std::io::Error::other("device went away"));
			}
			let limit = if self.armed {
				let room = (self.fail_after - self.inner.position()) as usize;
				buf.len().min(room)
			} else {
				buf.len()
			};
			self.inner.read(&mut buf[..limit])
		}
	}

	impl Seek for FailingReader {
		fn seek(&mut self, pos: SeekFrom) -> std::io::Result<u64> {
			self.inner.seek(pos)
		}
	}

	#[test]
	fn failed_read_still_rewinds_source() {
		let registry = AlgorithmRegistry::with_defaults();
		let mut source = FailingReader {
			inner: Cursor::new(b"abcdefgh".to_vec()),
			fail_after: 4,
			armed: true,
		};
		let err = compute(&mut source, Algorithm::Md5, &registry).unwrap_err();
		assert!(matches!(err, HashbrownsError::Read(_)));
		assert_eq!(source.stream_position().unwrap(), 0);

		source.armed = false;
		let retry = compute(&mut source, Algorithm::Md5, &registry).unwrap();
		assert_eq!(retry.hex, digest_of(b"abcdefgh", Algorithm::Md5));
		assert_eq!(source.stream_position().unwrap(), 0);
	}

	#[test]
	fn unprobed_algorithm_is_unsupported() {
		let registry = AlgorithmRegistry::probe(["md5"]);
		let mut cursor = Cursor::new(b"abc");
		cursor.seek(SeekFrom::Start(0)).unwrap();
		let err = compute(&mut cursor, Algorithm::Sha256, &registry).unwrap_err();
		assert!(matches!(err, HashbrownsError::UnsupportedAlgorithm(_)));
	}
}
