// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: hashbrowns
// File: app.rs
// Author: hashbrowns maintainers
// Copyright (c) 2025 hashbrowns maintainers

use crate::hb::clipboard::{self, ClipboardKind};
use crate::hb::compare::{compare, Verdict};
use crate::hb::config::{Settings, ALGORITHMS_ENV};
use crate::hb::console::color::ColorMode;
use crate::hb::console::session::report_error;
use crate::hb::console::{ConsoleOptions, ConsoleSession};
use crate::hb::controller::Hashbrowns;
use crate::hb::digest;
use crate::hb::error::{HashbrownsError, Result};
use crate::hb::logging;
use crate::hb::output::{render, DigestRecord, OutputFormat};
use crate::hb::registry::AlgorithmRegistry;
use crate::hb::source::ByteSource;
use crate::hb::weak;
use clap::{crate_name, Arg, ArgAction};
use std::io;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "{before-help}{name} {version}
{about-with-newline}
Without --algorithm an interactive console opens on FILE; pipe commands
on stdin or pass --script to run them unattended.
{usage-heading} {usage}

{all-args}{after-help}
";

pub fn build_cli() -> clap::Command {
	clap::Command::new(crate_name!())
		.help_template(HELP_TEMPLATE)
		.version(clap::crate_version!())
		.about("Compute and verify file digests")
		.arg(
			Arg::new("file")
				.value_name("FILE")
				.help("File to hash")
				.value_parser(clap::value_parser!(PathBuf))
				.required(true),
		)
		.arg(
			Arg::new("algorithm")
				.short('a')
				.long("algorithm")
				.help("Print one digest and exit (e.g. sha256)"),
		)
		.arg(
			Arg::new("check")
				.short('c')
				.long("check")
				.value_name("HASH")
				.requires("algorithm")
				.help("Compare against a reference digest; exit 1 unless it matches"),
		)
		.arg(
			Arg::new("format")
				.long("format")
				.value_parser(clap::value_parser!(OutputFormat))
				.default_value("hex")
				.help("One-shot output format"),
		)
		.arg(
			Arg::new("algorithms")
				.long("algorithms")
				.value_name("LIST")
				.env(ALGORITHMS_ENV)
				.value_delimiter(',')
				.help("Comma-separated algorithms to offer; unknown ones are skipped"),
		)
		.arg(
			Arg::new("script")
				.long("script")
				.value_name("PATH")
				.value_parser(clap::value_parser!(PathBuf))
				.conflicts_with("algorithm")
				.help("Run console commands from a file"),
		)
		.arg(
			Arg::new("ignore-errors")
				.long("ignore-errors")
				.action(ArgAction::SetTrue)
				.help("Keep running scripted commands after a failure"),
		)
		.arg(
			Arg::new("clipboard")
				.long("clipboard")
				.value_parser(clap::value_parser!(ClipboardKind))
				.default_value("osc52")
				.help("Clipboard service used by `copy`"),
		)
		.arg(
			Arg::new("color")
				.long("color")
				.value_parser(clap::value_parser!(ColorMode))
				.default_value("auto")
				.help("Colorize output"),
		)
		.arg(
			Arg::new("no-color")
				.long("no-color")
				.action(ArgAction::SetTrue)
				.help("Same as --color never"),
		)
}

/// Parses the process arguments and runs; returns the exit status.
pub fn run() -> i32 {
	let matches = build_cli().get_matches();
	let settings = Settings::from_matches(&matches);
	settings.color.apply();
	logging::init(settings.color.should_emit_on(&io::stderr()));
	match execute(&settings) {
		Ok(code) => code,
		Err(err) => {
			report_error(&err);
			err.exit_code()
		}
	}
}

pub fn execute(settings: &Settings) -> Result<i32> {
	// The file is validated before anything is offered to the user.
	let source = ByteSource::open(&settings.path)?;
	let registry = AlgorithmRegistry::probe(&settings.algorithms);
	if registry.is_empty() {
		return Err(HashbrownsError::Console(
			"no supported digest algorithms available".into(),
		));
	}
	match &settings.algorithm {
		Some(name) => run_one_shot(source, &registry, name, settings),
		None => run_console(source, registry, settings),
	}
}

fn run_one_shot(
	mut source: ByteSource,
	registry: &AlgorithmRegistry,
	name: &str,
	settings: &Settings,
) -> Result<i32> {
	let algorithm = registry.resolve(name)?;
	let digest = digest::compute(&mut source, algorithm, registry)?;
	weak::emit_notice(algorithm);

	let path = settings.path.display().to_string();
	let mut record = DigestRecord::new(&path, &digest);
	let mut code = 0;
	if let Some(reference) = &settings.check {
		let verdict = compare(Some(digest.as_str()), reference);
		if verdict != Verdict::Match {
			code = 1;
		}
		record = record.with_check(reference, verdict);
	}
	println!("{}", render(&record, settings.format)?);
	Ok(code)
}

fn run_console(
	source: ByteSource,
	registry: AlgorithmRegistry,
	settings: &Settings,
) -> Result<i32> {
	let mut clipboard = clipboard::build(settings.clipboard);
	let name = source.display_name();
	let controller = Hashbrowns::new(source, name, registry, &mut *clipboard);
	let options = match &settings.script {
		Some(path) => ConsoleOptions::from_script(path.clone(), settings.ignore_errors),
		None => {
			let mut options = ConsoleOptions::detect();
			options.ignore_errors = settings.ignore_errors;
			options
		}
	};
	ConsoleSession::new(controller, options).run()
}
