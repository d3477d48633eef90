//! Read-transform-write of candidate files.
//!
//! This module handles:
//! - Per-file substitution with write-back only on change
//! - The folder walk pipeline used by `strip-domain`
//! - The glob pipeline used by `resub`

use crate::config::StripConfig;
use crate::error::{Result, ResubError};
use crate::files::{glob_files, walk_files};
use crate::rules::RuleSet;
use std::io::Write;
use std::path::Path;

/// How file bytes are decoded into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decoding {
	/// Invalid UTF-8 is an error; the file is skipped.
	Strict,

	/// Invalid UTF-8 sequences are replaced with U+FFFD.
	Lossy,
}

/// Result of processing a single file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
	/// The rules changed the text and the file was rewritten.
	Changed,

	/// Nothing matched; the file was not written.
	Unchanged,
}

/// Per-run counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
	pub modified: usize,
	pub unchanged: usize,
	pub skipped: usize,
}

impl Summary {
	fn record(&mut self, result: &Result<Outcome>) {
		match result {
			Ok(Outcome::Changed) => self.modified += 1,
			Ok(Outcome::Unchanged) => self.unchanged += 1,
			Err(_) => self.skipped += 1,
		}
	}
}

/// Read a file as text using the given decoding.
pub fn read_text(path: &Path, decoding: Decoding) -> Result<String> {
	let bytes = std::fs::read(path).map_err(|source| ResubError::FileRead {
		path: path.to_path_buf(),
		source,
	})?;

	match decoding {
		Decoding::Strict => String::from_utf8(bytes).map_err(|source| ResubError::Decode {
			path: path.to_path_buf(),
			source,
		}),
		Decoding::Lossy => Ok(String::from_utf8_lossy(&bytes).into_owned()),
	}
}

/// Apply `rules` to the file at `path`, writing back only if the text changed.
pub fn apply_to_file(path: &Path, rules: &RuleSet, decoding: Decoding) -> Result<Outcome> {
	let original = read_text(path, decoding)?;
	let text = rules.apply(&original);

	if text == original {
		tracing::debug!(path = %path.display(), "unchanged");
		return Ok(Outcome::Unchanged);
	}

	std::fs::write(path, text).map_err(|source| ResubError::FileWrite {
		path: path.to_path_buf(),
		source,
	})?;

	Ok(Outcome::Changed)
}

/// Walk `config.root` and apply its substitution to every file with strict decoding.
///
/// Prints `Updated: <path>` per rewritten file and
/// `Skipped (not text or no permission): <path>` per file that could not be processed.
pub fn strip_folder(config: &StripConfig, out: &mut impl Write) -> Result<Summary> {
	let rules = config.rules()?;
	let mut summary = Summary::default();

	for path in walk_files(&config.root) {
		let result = apply_to_file(&path, &rules, Decoding::Strict);
		match &result {
			Ok(Outcome::Changed) => {
				writeln!(out, "Updated: {}", path.display()).map_err(ResubError::Output)?;
			}
			Ok(Outcome::Unchanged) => {}
			Err(err) => {
				tracing::debug!(path = %path.display(), error = %err, "skipped");
				writeln!(out, "Skipped (not text or no permission): {}", path.display())
					.map_err(ResubError::Output)?;
			}
		}
		summary.record(&result);
	}

	Ok(summary)
}

/// Expand `pattern` and apply `rules` to every matched file with lossy decoding.
///
/// Prints `Skipped <path>: <error>` per failing file and a final
/// `Done. Modified <n> file(s).` line.
pub fn replace_glob(pattern: &str, rules: &RuleSet, out: &mut impl Write) -> Result<Summary> {
	let files = glob_files(pattern)?;
	let mut summary = Summary::default();

	for path in &files {
		let result = apply_to_file(path, rules, Decoding::Lossy);
		if let Err(err) = &result {
			writeln!(out, "Skipped {}: {}", path.display(), error_chain(err))
				.map_err(ResubError::Output)?;
		}
		summary.record(&result);
	}

	writeln!(out, "Done. Modified {} file(s).", summary.modified).map_err(ResubError::Output)?;
	Ok(summary)
}

/// Render an error with its sources, `outer: inner: ...`.
fn error_chain(err: &dyn std::error::Error) -> String {
	let mut message = err.to_string();
	let mut source = err.source();
	while let Some(inner) = source {
		message.push_str(": ");
		message.push_str(&inner.to_string());
		source = inner.source();
	}
	message
}
