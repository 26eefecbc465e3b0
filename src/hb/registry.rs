// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: hashbrowns
// File: registry.rs
// Author: hashbrowns maintainers
// Copyright (c) 2025 hashbrowns maintainers

//! Maps algorithm identifiers to hasher constructors. The registry is
//! built once at startup from a probe list; anything that cannot be
//! resolved is skipped with a warning instead of failing the run.

use crate::hb::algorithm::Algorithm;
use crate::hb::error::{HashbrownsError, Result};
use digest::DynDigest;

pub type HasherFactory = fn() -> Box<dyn DynDigest>;

macro_rules! hasher_factory {
	($name:ident, $hasher:ty) => {
		fn $name() -> Box<dyn DynDigest> {
			Box::new(<$hasher>::default())
		}
	};
}

hasher_factory!(new_md5, md5::Md5);
hasher_factory!(new_sha1, sha1::Sha1);
hasher_factory!(new_sha256, sha2::Sha256);
hasher_factory!(new_sha512, sha2::Sha512);
hasher_factory!(new_sha3_256, sha3::Sha3_256);
hasher_factory!(new_sha3_512, sha3::Sha3_512);
#[cfg(feature = "whirlpool")]
hasher_factory!(new_whirlpool, whirlpool::Whirlpool);

/// Returns the constructor compiled in for `algorithm`, if any.
pub fn factory_for(algorithm: Algorithm) -> Option<HasherFactory> {
	match algorithm {
		Algorithm::Md5 => Some(new_md5),
		Algorithm::Sha1 => Some(new_sha1),
		Algorithm::Sha256 => Some(new_sha256),
		Algorithm::Sha512 => Some(new_sha512),
		Algorithm::Sha3_256 => Some(new_sha3_256),
		Algorithm::Sha3_512 => Some(new_sha3_512),
		#[cfg(feature = "whirlpool")]
		Algorithm::Whirlpool => Some(new_whirlpool),
		#[cfg(not(feature = "whirlpool"))]
		Algorithm::Whirlpool => None,
	}
}

#[derive(Debug, Clone)]
pub struct AlgorithmRegistry {
	available: Vec<(Algorithm, HasherFactory)>,
	skipped: Vec<String>,
}

impl AlgorithmRegistry {
	/// Resolves every identifier in `ids`, keeping probe order and
	/// dropping duplicates.
	pub fn probe<I, S>(ids: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		let mut available: Vec<(Algorithm, HasherFactory)> = Vec::new();
		let mut skipped = Vec::new();
		for id in ids {
			let id = id.as_ref().trim();
			if id.is_empty() {
				continue;
			}
			let resolved = id
				.parse::<Algorithm>()
				.ok()
				.and_then(|alg| factory_for(alg).map(|f| (alg, f)));
			match resolved {
				Some((alg, factory)) => {
					if !available.iter().any(|(known, _)| *known == alg) {
						tracing::debug!(algorithm = %alg, "algorithm available");
						available.push((alg, factory));
					}
				}
				None => {
					tracing::warn!("{}: not supported, skipping", id);
					skipped.push(id.to_string());
				}
			}
		}
		Self { available, skipped }
	}

	pub fn with_defaults() -> Self {
		Self::probe(Algorithm::defaults().iter().map(|alg| alg.id()))
	}

	pub fn algorithms(&self) -> impl Iterator<Item = Algorithm> + '_ {
		self.available.iter().map(|(alg, _)| *alg)
	}

	pub fn skipped(&self) -> &[String] {
		&self.skipped
	}

	pub fn is_empty(&self) -> bool {
		self.available.is_empty()
	}

	pub fn contains(&self, algorithm: Algorithm) -> bool {
		self.available.iter().any(|(alg, _)| *alg == algorithm)
	}

	/// Parses a user supplied name and checks it was offered.
	pub fn resolve(&self, name: &str) -> Result<Algorithm> {
		let algorithm = name.parse::<Algorithm>()?;
		if self.contains(algorithm) {
			Ok(algorithm)
		} else {
			Err(HashbrownsError::UnsupportedAlgorithm(
				algorithm.id().to_string(),
			))
		}
	}

	/// Fresh hasher state for `algorithm`.
	pub fn hasher(&self, algorithm: Algorithm) -> Result<Box<dyn DynDigest>> {
		self.available
			.iter()
			.find(|(alg, _)| *alg == algorithm)
			.map(|(_, factory)| factory())
			.ok_or_else(|| {
				HashbrownsError::UnsupportedAlgorithm(
					algorithm.id().to_string(),
				)
			})
	}
}
