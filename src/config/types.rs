use crate::error::Result;
use crate::rules::{Rule, RuleSet};
use serde::Deserialize;
use std::path::PathBuf;

/// Folder rewritten when no root is given.
pub const DEFAULT_ROOT: &str = "../resources/assets/quiversandsheaths/shapes";

/// Domain prefix removed when no pattern is given.
pub const DEFAULT_PATTERN: &str = "game:";

/// Settings for the `strip-domain` folder rewrite.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct StripConfig {
	/// Directory walked recursively for candidate files.
	pub root: PathBuf,

	/// Regex removed (or replaced) in every file under `root`.
	pub pattern: String,

	/// Replacement template for `pattern`.
	pub replacement: String,
}

impl Default for StripConfig {
	fn default() -> Self {
		StripConfig {
			root: PathBuf::from(DEFAULT_ROOT),
			pattern: DEFAULT_PATTERN.to_string(),
			replacement: String::new(),
		}
	}
}

impl StripConfig {
	/// Compile the single substitution this config describes.
	pub fn rules(&self) -> Result<RuleSet> {
		Ok(Rule::new(&self.pattern, self.replacement.as_str())?.into())
	}
}
