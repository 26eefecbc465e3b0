// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: hashbrowns
// File: lib.rs
// Author: hashbrowns maintainers
// Copyright (c) 2025 hashbrowns maintainers

pub mod hb {
	pub mod algorithm;
	pub mod app;
	pub mod clipboard;
	pub mod compare;
	pub mod config;
	pub mod console;
	pub mod controller;
	pub mod digest;
	pub mod error;
	pub mod logging;
	pub mod output;
	pub mod registry;
	pub mod source;
	pub mod weak;
}

pub use hb::algorithm::Algorithm;
pub use hb::compare::{compare, Verdict};
pub use hb::digest::{compute, Digest};
pub use hb::error::{HashbrownsError, Result};
pub use hb::registry::AlgorithmRegistry;
pub use hb::source::ByteSource;
