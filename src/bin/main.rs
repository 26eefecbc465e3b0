// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: hashbrowns
// File: main.rs
// Author: hashbrowns maintainers
// Copyright (c) 2025 hashbrowns maintainers

use hashbrowns::hb::app;

fn main() {
	std::process::exit(app::run());
}
