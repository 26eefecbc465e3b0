// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: hashbrowns
// File: session.rs
// Author: hashbrowns maintainers
// Copyright (c) 2025 hashbrowns maintainers

use super::color::{paint, LineRole};
use super::parser::parse_command;
use super::{ConsoleMode, ConsoleOptions};
use crate::hb::compare::Verdict;
use crate::hb::controller::{Hashbrowns, Outcome, Status};
use crate::hb::error::{HashbrownsError, Result};
use crate::hb::source::ByteSource;
use crate::hb::weak;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::io::{self, BufRead, Read, Seek, Write};

pub(crate) enum Flow {
	Continue,
	Exit(i32),
}

fn output_failed(err: io::Error) -> HashbrownsError {
	HashbrownsError::Console(format!("cannot write output: {}", err))
}

pub(crate) fn report_error(err: &HashbrownsError) {
	eprintln!("{}", paint(LineRole::Error, &format!("error: {}", err)));
}

/// A console bound to one open file.
pub struct ConsoleSession<'a, S = ByteSource> {
	controller: Hashbrowns<'a, S>,
	options: ConsoleOptions,
}

impl<'a, S: Read + Seek> ConsoleSession<'a, S> {
	pub fn new(controller: Hashbrowns<'a, S>, options: ConsoleOptions) -> Self {
		Self {
			controller,
			options,
		}
	}

	pub fn controller(&self) -> &Hashbrowns<'a, S> {
		&self.controller
	}

	pub fn run(&mut self) -> Result<i32> {
		match self.options.mode {
			ConsoleMode::Interactive => self.run_interactive(),
			ConsoleMode::Piped => {
				let stdin = io::stdin();
				let mut stdout = io::stdout();
				self.run_lines(stdin.lock(), &mut stdout, false)
			}
			ConsoleMode::Script => {
				let Some(path) = self.options.script_path.clone() else {
					return Err(HashbrownsError::Console(
						"script path required for --script".into(),
					));
				};
				super::script::run_script(self, &path)
			}
		}
	}

	fn prompt(&self) -> String {
		format!("hashbrowns({})> ", self.controller.name())
	}

	fn run_interactive(&mut self) -> Result<i32> {
		let mut editor = DefaultEditor::new()
			.map_err(|err| HashbrownsError::Console(err.to_string()))?;
		let mut stdout = io::stdout();
		self.print_banner(&mut stdout).map_err(output_failed)?;
		loop {
			let prompt = paint(LineRole::Prompt, &self.prompt());
			match editor.readline(&prompt) {
				Ok(line) => {
					if !line.trim().is_empty() {
						let _ = editor.add_history_entry(line.as_str());
					}
					match self.execute_line(&line, &mut stdout) {
						Ok(Flow::Continue) => continue,
						Ok(Flow::Exit(code)) => return Ok(code),
						Err(err) => report_error(&err),
					}
				}
				Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
					println!();
					return Ok(0);
				}
				Err(err) => {
					return Err(HashbrownsError::Console(err.to_string()));
				}
			}
		}
	}

	/// Executes commands from `reader` until EOF or `quit`. A failing
	/// line stops the run unless errors are ignored.
	pub fn run_lines<R: BufRead, W: Write>(
		&mut self,
		reader: R,
		out: &mut W,
		echo: bool,
	) -> Result<i32> {
		let mut last_failure = 0;
		for (idx, line) in reader.lines().enumerate() {
			let line = line.map_err(HashbrownsError::Script)?;
			if echo && !line.trim().is_empty() && !line.trim().starts_with('#') {
				let echoed = format!("{}{}", self.prompt(), line.trim());
				writeln!(out, "{}", paint(LineRole::Prompt, &echoed))
					.map_err(output_failed)?;
			}
			match self.execute_line(&line, out) {
				Ok(Flow::Continue) => continue,
				Ok(Flow::Exit(code)) => return Ok(code),
				Err(err) if self.options.ignore_errors => {
					tracing::warn!(line = idx + 1, "command failed, continuing");
					report_error(&err);
					last_failure = err.exit_code();
				}
				Err(err) => {
					report_error(&err);
					return Ok(err.exit_code());
				}
			}
		}
		Ok(last_failure)
	}

	pub(crate) fn execute_line<W: Write>(
		&mut self,
		raw: &str,
		out: &mut W,
	) -> Result<Flow> {
		let Some(command) = parse_command(raw)? else {
			return Ok(Flow::Continue);
		};
		tracing::debug!(?command, "dispatching");
		let outcome = self.controller.dispatch(command)?;
		self.render(&outcome, out).map_err(output_failed)
	}

	fn print_banner<W: Write>(&self, out: &mut W) -> io::Result<()> {
		writeln!(
			out,
			"{}",
			paint(
				LineRole::Info,
				&format!("hashbrowns: {}", self.controller.name())
			)
		)?;
		let labels: Vec<String> = self
			.controller
			.registry()
			.algorithms()
			.map(|alg| alg.label())
			.collect();
		writeln!(out, "algorithms: {}", labels.join(" "))?;
		let skipped = self.controller.registry().skipped();
		if !skipped.is_empty() {
			writeln!(
				out,
				"{}",
				paint(
					LineRole::Warning,
					&format!("skipped:    {}", skipped.join(" "))
				)
			)?;
		}
		writeln!(out, "type `help` for commands")
	}

	fn render<W: Write>(&self, outcome: &Outcome, out: &mut W) -> io::Result<Flow> {
		match outcome {
			Outcome::Computed { digest, verdict } => {
				writeln!(
					out,
					"{:<9} {}",
					digest.algorithm.label(),
					paint(LineRole::Digest, digest.as_str())
				)?;
				weak::emit_notice(digest.algorithm);
				if *verdict != Verdict::NoVerdict {
					render_verdict(*verdict, out)?;
				}
			}
			Outcome::Copied(digest) => {
				writeln!(
					out,
					"{}",
					paint(
						LineRole::Success,
						&format!("copied {} digest to clipboard", digest.algorithm.label())
					)
				)?;
			}
			Outcome::NothingToCopy => {
				writeln!(
					out,
					"{}",
					paint(LineRole::Warning, "nothing to copy; pick an algorithm first")
				)?;
			}
			Outcome::Compared(verdict) => render_verdict(*verdict, out)?,
			Outcome::Status(status) => render_status(status, out)?,
			Outcome::Algorithms(algorithms) => {
				for alg in algorithms {
					writeln!(
						out,
						"  {:<10} {} bits",
						alg.label(),
						alg.output_len() * 8
					)?;
				}
			}
			Outcome::Help => print_help(out)?,
			Outcome::Quit => return Ok(Flow::Exit(0)),
		}
		Ok(Flow::Continue)
	}
}

fn render_verdict<W: Write>(verdict: Verdict, out: &mut W) -> io::Result<()> {
	let line = match verdict {
		Verdict::Match => paint(LineRole::Success, "✔ matches reference"),
		Verdict::Mismatch => paint(LineRole::Error, "✘ does not match reference"),
		Verdict::NoVerdict => paint(LineRole::Info, "no verdict"),
	};
	writeln!(out, "{}", line)
}

fn render_status<W: Write>(status: &Status, out: &mut W) -> io::Result<()> {
	writeln!(out, "file:      {}", status.name)?;
	match &status.digest {
		Some(digest) => writeln!(
			out,
			"digest:    {} {}",
			digest.algorithm.label(),
			digest.as_str()
		)?,
		None => writeln!(out, "digest:    (none)")?,
	}
	if status.reference.trim().is_empty() {
		writeln!(out, "reference: (none)")?;
	} else {
		writeln!(out, "reference: {}", status.reference.trim())?;
	}
	writeln!(out, "verdict:   {}", status.verdict)
}

fn print_help<W: Write>(out: &mut W) -> io::Result<()> {
	writeln!(out, "Commands:")?;
	writeln!(out, "  <algorithm>     Hash the file, e.g. `sha256` or `SHA3-512`")?;
	writeln!(out, "  list            Show available algorithms")?;
	writeln!(out, "  copy            Copy the last digest to the clipboard")?;
	writeln!(out, "  ref <hash>      Compare the last digest with a reference")?;
	writeln!(out, "  clear           Forget the reference")?;
	writeln!(out, "  show            Print digest, reference and verdict")?;
	writeln!(out, "  help            Show this message")?;
	writeln!(out, "  quit/exit       Leave hashbrowns")
}
