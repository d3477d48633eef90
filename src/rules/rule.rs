use crate::error::{Result, ResubError};
use regex::Regex;
use std::borrow::Cow;

/// A single regex substitution.
#[derive(Debug, Clone)]
pub struct Rule {
	/// The pattern to match.
	pub pattern: Regex,

	/// The replacement template. Capture groups are referenced as `$1` or `${name}`.
	pub replacement: String,
}

impl Rule {
	/// Compile a rule from a pattern string and a replacement template.
	pub fn new(pattern: &str, replacement: impl Into<String>) -> Result<Self> {
		let pattern = Regex::new(pattern).map_err(|source| ResubError::InvalidRegex {
			pattern: pattern.to_string(),
			source,
		})?;

		Ok(Rule {
			pattern,
			replacement: replacement.into(),
		})
	}

	/// Replace every match of this rule in `input`.
	///
	/// Borrows the input when nothing matched.
	pub fn apply<'a>(&self, input: &'a str) -> Cow<'a, str> {
		self.pattern.replace_all(input, self.replacement.as_str())
	}
}

/// An ordered, immutable sequence of rules.
///
/// Rules run in order over the accumulated text, so later rules see the
/// output of earlier ones.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
	rules: Vec<Rule>,
}

impl RuleSet {
	pub fn new(rules: Vec<Rule>) -> Self {
		RuleSet { rules }
	}

	pub fn len(&self) -> usize {
		self.rules.len()
	}

	pub fn is_empty(&self) -> bool {
		self.rules.is_empty()
	}

	pub fn iter(&self) -> std::slice::Iter<'_, Rule> {
		self.rules.iter()
	}

	/// Apply every rule in order and return the final text.
	pub fn apply(&self, input: &str) -> String {
		let mut text = input.to_string();
		for rule in &self.rules {
			if let Cow::Owned(replaced) = rule.apply(&text) {
				tracing::debug!(pattern = %rule.pattern, "rule matched");
				text = replaced;
			}
		}
		text
	}
}

impl From<Rule> for RuleSet {
	fn from(rule: Rule) -> Self {
		RuleSet { rules: vec![rule] }
	}
}

impl<'a> IntoIterator for &'a RuleSet {
	type Item = &'a Rule;
	type IntoIter = std::slice::Iter<'a, Rule>;

	fn into_iter(self) -> Self::IntoIter {
		self.rules.iter()
	}
}
