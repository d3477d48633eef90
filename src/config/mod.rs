//! Configuration for the `strip-domain` folder rewrite.
//!
//! This module handles:
//! - Compiled-in defaults
//! - Optional TOML config file parsing

pub mod parser;
pub mod types;

pub use parser::{parse_config_file, parse_config_str};
pub use types::{DEFAULT_PATTERN, DEFAULT_ROOT, StripConfig};
