// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: hashbrowns
// File: weak.rs
// Author: hashbrowns maintainers
// Copyright (c) 2025 hashbrowns maintainers

//! Notices for digests that are still useful as checksums but no longer
//! collision resistant.

use crate::hb::algorithm::Algorithm;
use colored::Colorize;

#[derive(Debug, Clone, Copy)]
pub struct WeakAlgorithm {
	pub algorithm: Algorithm,
	pub replacement_hint: &'static str,
}

const WEAK_ALGORITHMS: &[WeakAlgorithm] = &[
	WeakAlgorithm {
		algorithm: Algorithm::Md5,
		replacement_hint: "compare against a SHA-256 or SHA-512 reference when one is published",
	},
	WeakAlgorithm {
		algorithm: Algorithm::Sha1,
		replacement_hint: "prefer SHA-256, SHA-512 or SHA3 references",
	},
];

pub fn lookup(algorithm: Algorithm) -> Option<&'static WeakAlgorithm> {
	WEAK_ALGORITHMS
		.iter()
		.find(|entry| entry.algorithm == algorithm)
}

/// One-line notice, or `None` for algorithms without known collisions.
pub fn notice_for(algorithm: Algorithm) -> Option<String> {
	let entry = lookup(algorithm)?;
	Some(format!(
		"note: {} has known collisions; {}",
		algorithm.label(),
		entry.replacement_hint
	))
}

pub fn emit_notice(algorithm: Algorithm) {
	if let Some(notice) = notice_for(algorithm) {
		eprintln!("{}", notice.yellow());
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn md5_and_sha1_are_flagged() {
		assert!(notice_for(Algorithm::Md5).unwrap().contains("MD5"));
		assert!(notice_for(Algorithm::Sha1).unwrap().contains("SHA1"));
	}

	#[test]
	fn sha2_and_sha3_are_not_flagged() {
		for alg in [
			Algorithm::Sha256,
			Algorithm::Sha512,
			Algorithm::Sha3_256,
			Algorithm::Sha3_512,
		] {
			assert!(notice_for(alg).is_none(), "{}", alg);
		}
	}
}
