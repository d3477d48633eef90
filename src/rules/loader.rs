use crate::error::{Result, ResubError};
use crate::rules::rule::{Rule, RuleSet};
use crate::rules::template::translate_template;
use std::path::Path;

/// Lines whose trimmed form starts with this marker are ignored.
pub const COMMENT_MARKER: char = '#';

/// Separates a rule's pattern from its replacement.
pub const SEPARATOR: char = '\t';

/// Parse a rule file from the given path.
pub fn parse_rule_file(path: &Path) -> Result<RuleSet> {
	let content = std::fs::read_to_string(path).map_err(|source| ResubError::RuleFileRead {
		path: path.to_path_buf(),
		source,
	})?;

	let rules = parse_rule_str(&content)?;
	tracing::debug!(path = %path.display(), rules = rules.len(), "loaded rule file");
	Ok(rules)
}

/// Parse rules from a string, one `<pattern>\t<replacement>` per line.
///
/// Only the first tab splits; any later tabs belong to the replacement.
/// Replacements use backslash group references (`\1`, `\g<name>`); see
/// [`translate_template`].
pub fn parse_rule_str(content: &str) -> Result<RuleSet> {
	let mut rules = Vec::new();

	for (index, line) in content.lines().enumerate() {
		let line_num = index + 1;

		if line.is_empty() || line.trim_start().starts_with(COMMENT_MARKER) {
			continue;
		}

		let (pattern, replacement) = line.split_once(SEPARATOR).ok_or_else(|| {
			ResubError::MissingSeparator {
				line: line_num,
				content: line.to_string(),
			}
		})?;

		let template =
			translate_template(replacement).map_err(|reason| ResubError::InvalidReplacement {
				line: line_num,
				replacement: replacement.to_string(),
				reason,
			})?;

		let rule = Rule::new(pattern, template).map_err(|err| match err {
			ResubError::InvalidRegex { pattern, source } => ResubError::InvalidRuleRegex {
				line: line_num,
				pattern,
				source,
			},
			other => other,
		})?;
		rules.push(rule);
	}

	Ok(RuleSet::new(rules))
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::fs;

	#[test]
	fn test_parse_empty_rule_file() {
		let rules = parse_rule_str("").unwrap();
		assert!(rules.is_empty());
	}

	#[test]
	fn test_parse_preserves_order() {
		let rules = parse_rule_str("a\tb\nb\tc\n").unwrap();
		assert_eq!(rules.len(), 2);
		assert_eq!(rules.apply("a"), "c");

		let patterns: Vec<_> = rules.iter().map(|r| r.pattern.as_str()).collect();
		assert_eq!(patterns, vec!["a", "b"]);
	}

	#[test]
	fn test_skips_comments_and_blank_lines() {
		let content = "# header\n\n   # indented comment\n\t# tab-indented\ngame:\t\n";
		let rules = parse_rule_str(content).unwrap();
		assert_eq!(rules.len(), 1);
		assert_eq!(rules.apply("game:arrow"), "arrow");
	}

	#[test]
	fn test_only_comments_yields_no_rules() {
		let rules = parse_rule_str("# one\n#two\n\n").unwrap();
		assert!(rules.is_empty());
	}

	#[test]
	fn test_splits_on_first_tab_only() {
		let rules = parse_rule_str("x\ty\tz\n").unwrap();
		let rule = rules.iter().next().unwrap();
		assert_eq!(rule.pattern.as_str(), "x");
		assert_eq!(rule.replacement, "y\tz");
	}

	#[test]
	fn test_empty_replacement() {
		let rules = parse_rule_str("game:\t").unwrap();
		assert_eq!(rules.iter().next().unwrap().replacement, "");
	}

	#[test]
	fn test_whitespace_pattern_is_a_rule() {
		let rules = parse_rule_str(" \t\n").unwrap();
		assert_eq!(rules.len(), 1);
		assert_eq!(rules.apply("a b c"), "abc");
	}

	#[test]
	fn test_whitespace_only_line_needs_separator() {
		match parse_rule_str("a\tb\n   \n").unwrap_err() {
			ResubError::MissingSeparator { line, content } => {
				assert_eq!(line, 2);
				assert_eq!(content, "   ");
			}
			other => panic!("Expected MissingSeparator, got {other:?}"),
		}
	}

	#[test]
	fn test_dollar_in_replacement_is_literal() {
		let rules = parse_rule_str("price\t$5 off\n").unwrap();
		assert_eq!(rules.apply("price"), "$5 off");
	}

	#[test]
	fn test_backslash_group_references() {
		let rules = parse_rule_str("(\\w+)-x\t\\1_y\n").unwrap();
		assert_eq!(rules.apply("bow-x"), "bow_y");

		let rules = parse_rule_str("(?P<ns>\\w+):(?P<id>\\w+)\t\\g<id>@\\g<ns>\n").unwrap();
		assert_eq!(rules.apply("game:arrow"), "arrow@game");
	}

	#[test]
	fn test_escaped_backslash_in_replacement() {
		let rules = parse_rule_str("/\t\\\\\n").unwrap();
		assert_eq!(rules.apply("item/arrow"), "item\\arrow");
	}

	#[test]
	fn test_invalid_replacement_reports_line() {
		match parse_rule_str("a\tb\nc\t\\g<oops\n").unwrap_err() {
			ResubError::InvalidReplacement { line, replacement, .. } => {
				assert_eq!(line, 2);
				assert_eq!(replacement, "\\g<oops");
			}
			other => panic!("Expected InvalidReplacement, got {other:?}"),
		}
	}

	#[test]
	fn test_crlf_line_endings() {
		let rules = parse_rule_str("a\tb\r\nc\td\r\n").unwrap();
		assert_eq!(rules.apply("ac"), "bd");
	}

	#[test]
	fn test_missing_separator_reports_line() {
		let content = "# comment\na\tb\nfoo bar\n";
		match parse_rule_str(content).unwrap_err() {
			ResubError::MissingSeparator { line, content } => {
				assert_eq!(line, 3);
				assert_eq!(content, "foo bar");
			}
			other => panic!("Expected MissingSeparator, got {other:?}"),
		}
	}

	#[test]
	fn test_invalid_regex_reports_line() {
		match parse_rule_str("ok\tfine\n[broken\tx\n").unwrap_err() {
			ResubError::InvalidRuleRegex { line, pattern, .. } => {
				assert_eq!(line, 2);
				assert_eq!(pattern, "[broken");
			}
			other => panic!("Expected InvalidRuleRegex, got {other:?}"),
		}
	}

	#[test]
	fn test_parse_rule_file() {
		let temp_dir = tempfile::tempdir().unwrap();
		let path = temp_dir.path().join("rules.txt");
		fs::write(&path, "item-(\\w+)\tblock-\\1\n").unwrap();

		let rules = parse_rule_file(&path).unwrap();
		assert_eq!(rules.apply("item-bow"), "block-bow");
	}

	#[test]
	fn test_parse_missing_rule_file() {
		let result = parse_rule_file(Path::new("/nonexistent/rules.txt"));
		assert!(matches!(result, Err(ResubError::RuleFileRead { .. })));
	}
}
