//! Resub - bulk regex substitution across files.
//!
//! This library provides the core functionality for the `resub` and
//! `strip-domain` binaries, including:
//! - Tab-separated rule file parsing into ordered rule sets
//! - Candidate file enumeration by glob or recursive walk
//! - Read-transform-write of files, writing only when the text changed
//!
//! # Example
//!
//! ```no_run
//! use resub::apply::{Decoding, Outcome, apply_to_file};
//! use resub::rules::parse_rule_file;
//! use std::path::Path;
//!
//! let rules = parse_rule_file(Path::new("replacements.txt")).unwrap();
//! let outcome = apply_to_file(Path::new("shape.json"), &rules, Decoding::Lossy).unwrap();
//!
//! if outcome == Outcome::Changed {
//!     println!("rewrote shape.json");
//! }
//! ```

pub mod apply;
pub mod config;
pub mod error;
pub mod files;
pub mod logging;
pub mod rules;

pub use error::{Result, ResubError};
