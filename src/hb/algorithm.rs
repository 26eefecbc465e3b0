// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: hashbrowns
// File: algorithm.rs
// Author: hashbrowns maintainers
// Copyright (c) 2025 hashbrowns maintainers

use crate::hb::error::HashbrownsError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use strum::{EnumIter, IntoEnumIterator};

/// Digest algorithms hashbrowns knows how to name. Whether an
/// implementation is actually available is decided by the registry.
#[derive(
	Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Serialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
	Md5,
	Sha1,
	Sha256,
	Sha512,
	#[serde(rename = "sha3-256")]
	Sha3_256,
	#[serde(rename = "sha3-512")]
	Sha3_512,
	Whirlpool,
}

impl Algorithm {
	/// Canonical lowercase identifier used on the command line.
	pub fn id(self) -> &'static str {
		match self {
			Self::Md5 => "md5",
			Self::Sha1 => "sha1",
			Self::Sha256 => "sha256",
			Self::Sha512 => "sha512",
			Self::Sha3_256 => "sha3-256",
			Self::Sha3_512 => "sha3-512",
			Self::Whirlpool => "whirlpool",
		}
	}

	/// Label shown to the user: names ending in a digit are upper-cased
	/// (`SHA3-256`), the rest are capitalized (`Whirlpool`).
	pub fn label(self) -> String {
		let id = self.id();
		if id.ends_with(|c: char| c.is_ascii_digit()) {
			id.to_ascii_uppercase()
		} else {
			let mut chars = id.chars();
			match chars.next() {
				Some(first) => {
					first.to_ascii_uppercase().to_string() + chars.as_str()
				}
				None => String::new(),
			}
		}
	}

	/// Digest size in bytes.
	pub fn output_len(self) -> usize {
		match self {
			Self::Md5 => 16,
			Self::Sha1 => 20,
			Self::Sha256 | Self::Sha3_256 => 32,
			Self::Sha512 | Self::Sha3_512 | Self::Whirlpool => 64,
		}
	}

	/// Length of the rendered hex digest.
	pub fn hex_len(self) -> usize {
		self.output_len() * 2
	}

	/// The probe list used when no algorithms are configured.
	pub fn defaults() -> Vec<Algorithm> {
		Algorithm::iter().collect()
	}
}

impl fmt::Display for Algorithm {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.id())
	}
}

impl FromStr for Algorithm {
	type Err = HashbrownsError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		// `sha3_256`, `SHA3-256` and `sha-256` style spellings all resolve.
		let needle: String = s
			.trim()
			.chars()
			.filter(|c| !matches!(c, '-' | '_'))
			.map(|c| c.to_ascii_lowercase())
			.collect();
		Algorithm::iter()
			.find(|alg| alg.id().replace('-', "") == needle)
			.ok_or_else(|| {
				HashbrownsError::UnsupportedAlgorithm(s.trim().to_string())
			})
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn labels_follow_digit_rule() {
		assert_eq!(Algorithm::Md5.label(), "MD5");
		assert_eq!(Algorithm::Sha512.label(), "SHA512");
		assert_eq!(Algorithm::Sha3_256.label(), "SHA3-256");
		assert_eq!(Algorithm::Whirlpool.label(), "Whirlpool");
	}

	#[test]
	fn parse_accepts_labels_and_underscores() {
		assert_eq!("SHA3_512".parse::<Algorithm>().ok(), Some(Algorithm::Sha3_512));
		assert_eq!("sha3-256".parse::<Algorithm>().ok(), Some(Algorithm::Sha3_256));
		assert_eq!(" MD5 ".parse::<Algorithm>().ok(), Some(Algorithm::Md5));
		assert_eq!("Whirlpool".parse::<Algorithm>().ok(), Some(Algorithm::Whirlpool));
		assert_eq!("SHA-256".parse::<Algorithm>().ok(), Some(Algorithm::Sha256));
	}

	#[test]
	fn parse_rejects_unknown_identifier() {
		let err = "blake2b".parse::<Algorithm>().unwrap_err();
		assert!(matches!(
			err,
			HashbrownsError::UnsupportedAlgorithm(ref id) if id == "blake2b"
		));
	}

	#[test]
	fn hex_len_is_twice_output_len() {
		assert_eq!(Algorithm::Md5.hex_len(), 32);
		assert_eq!(Algorithm::Sha1.hex_len(), 40);
		assert_eq!(Algorithm::Sha256.hex_len(), 64);
		assert_eq!(Algorithm::Sha512.hex_len(), 128);
	}
}
