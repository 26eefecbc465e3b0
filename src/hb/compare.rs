// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: hashbrowns
// File: compare.rs
// Author: hashbrowns maintainers
// Copyright (c) 2025 hashbrowns maintainers

use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Verdict {
	Match,
	Mismatch,
	/// Either the digest or the reference is still empty.
	NoVerdict,
}

impl Verdict {
	pub fn is_match(self) -> bool {
		matches!(self, Verdict::Match)
	}
}

impl fmt::Display for Verdict {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			Verdict::Match => "match",
			Verdict::Mismatch => "mismatch",
			Verdict::NoVerdict => "no verdict",
		})
	}
}

fn normalize(value: &str) -> String {
	value.trim().to_ascii_lowercase()
}

/// Compares a pasted reference hash against the last computed digest.
pub fn compare(digest: Option<&str>, candidate: &str) -> Verdict {
	let candidate = normalize(candidate);
	let digest = digest.map(normalize).unwrap_or_default();
	if candidate.is_empty() || digest.is_empty() {
		Verdict::NoVerdict
	} else if candidate == digest {
		Verdict::Match
	} else {
		Verdict::Mismatch
	}
}
