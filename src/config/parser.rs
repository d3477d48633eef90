use crate::config::types::StripConfig;
use crate::error::{Result, ResubError};
use std::path::Path;

/// Parse a config file from the given path.
pub fn parse_config_file(path: &Path) -> Result<StripConfig> {
	let content = std::fs::read_to_string(path).map_err(|source| ResubError::ConfigReadError {
		path: path.to_path_buf(),
		source,
	})?;

	parse_config_str(&content, path)
}

/// Parse a config from a string (useful for testing).
pub fn parse_config_str(content: &str, path: &Path) -> Result<StripConfig> {
	let config: StripConfig =
		toml::from_str(content).map_err(|source| ResubError::ConfigParseError {
			path: path.to_path_buf(),
			source,
		})?;

	// Reject patterns that won't compile before any file is walked
	config.rules()?;

	Ok(config)
}
