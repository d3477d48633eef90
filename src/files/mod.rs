//! Candidate file enumeration.
//!
//! Both enumerators yield regular files only; directories are never returned.

use crate::error::{Result, ResubError};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Recursively walk `root`, yielding every regular file beneath it.
///
/// Symlinks to files are yielded; symlinked directories are not descended into.
/// Entries that cannot be read are logged and skipped. A missing root yields nothing.
pub fn walk_files(root: &Path) -> impl Iterator<Item = PathBuf> {
	WalkDir::new(root)
		.into_iter()
		.filter_map(|entry| match entry {
			Ok(entry) => Some(entry),
			Err(err) => {
				tracing::warn!(error = %err, "skipping unreadable entry");
				None
			}
		})
		.filter(|entry| entry.path().is_file())
		.map(|entry| entry.into_path())
}

/// Expand a glob pattern (with `**` recursion) and keep regular files only.
pub fn glob_files(pattern: &str) -> Result<Vec<PathBuf>> {
	let paths = glob::glob(pattern).map_err(|source| ResubError::InvalidGlob {
		pattern: pattern.to_string(),
		source,
	})?;

	let mut files = Vec::new();
	for entry in paths {
		match entry {
			Ok(path) if path.is_file() => files.push(path),
			Ok(_) => {}
			Err(err) => tracing::warn!(error = %err, "skipping unreadable glob match"),
		}
	}

	tracing::debug!(pattern, matched = files.len(), "expanded glob");
	Ok(files)
}
