// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: hashbrowns
// File: controller.rs
// Author: hashbrowns maintainers
// Copyright (c) 2025 hashbrowns maintainers

//! Owns the open file and the transient digest state, and turns user
//! intents into core operations.

use crate::hb::algorithm::Algorithm;
use crate::hb::clipboard::Clipboard;
use crate::hb::compare::{compare, Verdict};
use crate::hb::digest::{compute, Digest};
use crate::hb::error::{HashbrownsError, Result};
use crate::hb::registry::AlgorithmRegistry;
use crate::hb::source::ByteSource;
use std::io::{Read, Seek};
use std::path::Path;

/// Everything a user can ask for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
	Select(Algorithm),
	Copy,
	Reference(String),
	ClearReference,
	Show,
	List,
	Help,
	Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
	pub name: String,
	pub digest: Option<Digest>,
	pub reference: String,
	pub verdict: Verdict,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
	Computed { digest: Digest, verdict: Verdict },
	Copied(Digest),
	NothingToCopy,
	Compared(Verdict),
	Status(Status),
	Algorithms(Vec<Algorithm>),
	Help,
	Quit,
}

pub struct Hashbrowns<'a, S = ByteSource> {
	source: S,
	name: String,
	registry: AlgorithmRegistry,
	clipboard: &'a mut dyn Clipboard,
	digest: Option<Digest>,
	reference: String,
}

impl<'a> Hashbrowns<'a, ByteSource> {
	/// Opens `path` once for the lifetime of the controller.
	pub fn open(
		path: impl AsRef<Path>,
		registry: AlgorithmRegistry,
		clipboard: &'a mut dyn Clipboard,
	) -> Result<Self> {
		let source = ByteSource::open(path)?;
		let name = source.display_name();
		Ok(Self::new(source, name, registry, clipboard))
	}
}

impl<'a, S: Read + Seek> Hashbrowns<'a, S> {
	pub fn new(
		source: S,
		name: impl Into<String>,
		registry: AlgorithmRegistry,
		clipboard: &'a mut dyn Clipboard,
	) -> Self {
		Self {
			source,
			name: name.into(),
			registry,
			clipboard,
			digest: None,
			reference: String::new(),
		}
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn registry(&self) -> &AlgorithmRegistry {
		&self.registry
	}

	pub fn digest(&self) -> Option<&Digest> {
		self.digest.as_ref()
	}

	pub fn verdict(&self) -> Verdict {
		compare(self.digest.as_ref().map(Digest::as_str), &self.reference)
	}

	pub fn dispatch(&mut self, command: Command) -> Result<Outcome> {
		match command {
			Command::Select(algorithm) => self.select(algorithm),
			Command::Copy => self.copy(),
			Command::Reference(text) => {
				self.reference = text;
				Ok(Outcome::Compared(self.verdict()))
			}
			Command::ClearReference => {
				self.reference.clear();
				Ok(Outcome::Compared(Verdict::NoVerdict))
			}
			Command::Show => Ok(Outcome::Status(Status {
				name: self.name.clone(),
				digest: self.digest.clone(),
				reference: self.reference.clone(),
				verdict: self.verdict(),
			})),
			Command::List => {
				Ok(Outcome::Algorithms(self.registry.algorithms().collect()))
			}
			Command::Help => Ok(Outcome::Help),
			Command::Quit => Ok(Outcome::Quit),
		}
	}

	fn select(&mut self, algorithm: Algorithm) -> Result<Outcome> {
		if !self.registry.contains(algorithm) {
			return Err(HashbrownsError::UnsupportedAlgorithm(
				algorithm.id().to_string(),
			));
		}
		let digest = compute(&mut self.source, algorithm, &self.registry)?;
		self.digest = Some(digest.clone());
		Ok(Outcome::Computed {
			digest,
			verdict: self.verdict(),
		})
	}

	fn copy(&mut self) -> Result<Outcome> {
		match &self.digest {
			Some(digest) if !digest.hex.is_empty() => {
				self.clipboard.copy_text(&digest.hex)?;
				tracing::debug!(algorithm = %digest.algorithm, "digest copied");
				Ok(Outcome::Copied(digest.clone()))
			}
			_ => Ok(Outcome::NothingToCopy),
		}
	}
}
