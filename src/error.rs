use std::path::PathBuf;

/// Library-level structured errors for resub.
///
/// Use `thiserror` for structured errors that library consumers can match on.
/// The CLI binaries wrap these with `anyhow` for rich context chains.
#[derive(Debug, thiserror::Error)]
pub enum ResubError {
	#[error("Failed to read rule file: {path}")]
	RuleFileRead {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Line {line} has no tab separator: {content}")]
	MissingSeparator { line: usize, content: String },

	#[error("Invalid regex pattern on line {line}: {pattern}")]
	InvalidRuleRegex {
		line: usize,
		pattern: String,
		#[source]
		source: regex::Error,
	},

	#[error("Invalid replacement on line {line}: {replacement} ({reason})")]
	InvalidReplacement {
		line: usize,
		replacement: String,
		reason: String,
	},

	#[error("Invalid regex pattern: {pattern}")]
	InvalidRegex {
		pattern: String,
		#[source]
		source: regex::Error,
	},

	#[error("Failed to read config file: {path}")]
	ConfigReadError {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to parse config file: {path}")]
	ConfigParseError {
		path: PathBuf,
		#[source]
		source: toml::de::Error,
	},

	#[error("Invalid glob pattern: {pattern}")]
	InvalidGlob {
		pattern: String,
		#[source]
		source: glob::PatternError,
	},

	#[error("Failed to read {path}")]
	FileRead {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("File is not valid UTF-8 text: {path}")]
	Decode {
		path: PathBuf,
		#[source]
		source: std::string::FromUtf8Error,
	},

	#[error("Failed to write {path}")]
	FileWrite {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to write progress output")]
	Output(#[source] std::io::Error),
}

/// Result type alias using ResubError.
pub type Result<T> = std::result::Result<T, ResubError>;
