// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: hashbrowns
// File: output.rs
// Author: hashbrowns maintainers
// Copyright (c) 2025 hashbrowns maintainers

//! Serialization of one-shot results.

use crate::hb::algorithm::Algorithm;
use crate::hb::compare::Verdict;
use crate::hb::digest::Digest;
use crate::hb::error::{HashbrownsError, Result};
use clap::ValueEnum;
use serde::Serialize;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
	/// `<digest>  <path>`, the layout of `sha256sum`.
	#[default]
	Hex,
	Json,
}

#[derive(Debug, Serialize)]
pub struct DigestRecord<'a> {
	pub path: &'a str,
	pub algorithm: Algorithm,
	pub digest: &'a str,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub reference: Option<&'a str>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub verdict: Option<Verdict>,
}

impl<'a> DigestRecord<'a> {
	pub fn new(path: &'a str, digest: &'a Digest) -> Self {
		Self {
			path,
			algorithm: digest.algorithm,
			digest: digest.as_str(),
			reference: None,
			verdict: None,
		}
	}

	pub fn with_check(mut self, reference: &'a str, verdict: Verdict) -> Self {
		self.reference = Some(reference.trim());
		self.verdict = Some(verdict);
		self
	}
}

pub fn render(record: &DigestRecord<'_>, format: OutputFormat) -> Result<String> {
	match format {
		OutputFormat::Hex => {
			let mut text = format!("{}  {}", record.digest, record.path);
			if let Some(verdict) = record.verdict {
				let status = if verdict.is_match() { "OK" } else { "FAILED" };
				text.push_str(&format!("\n{}: {}", record.path, status));
			}
			Ok(text)
		}
		OutputFormat::Json => serde_json::to_string_pretty(record)
			.map_err(|err| HashbrownsError::Console(err.to_string())),
	}
}
