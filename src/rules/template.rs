//! Backslash-style replacement templates.
//!
//! Rule files write group references as `\1` or `\g<name>`, with `$` taken
//! literally. The regex crate expects `${1}` and `$$`, so rule-file
//! replacements are rewritten once at load time.

/// Rewrite a backslash-style replacement into a regex crate template.
///
/// - `\1` .. `\99` and `\g<N>` / `\g<name>` become `${N}` / `${name}`
/// - `\\` becomes a literal backslash
/// - `\n`, `\t`, `\r`, `\f`, `\v`, `\a`, `\b` become their control characters
/// - `$` becomes `$$`
///
/// Any other escape is kept as written, backslash included.
pub fn translate_template(input: &str) -> Result<String, String> {
	let mut output = String::with_capacity(input.len());
	let mut chars = input.chars().peekable();

	while let Some(c) = chars.next() {
		match c {
			'$' => output.push_str("$$"),
			'\\' => match chars.next() {
				None => return Err("trailing backslash".to_string()),
				Some('\\') => output.push('\\'),
				Some('n') => output.push('\n'),
				Some('t') => output.push('\t'),
				Some('r') => output.push('\r'),
				Some('f') => output.push('\u{0c}'),
				Some('v') => output.push('\u{0b}'),
				Some('a') => output.push('\u{07}'),
				Some('b') => output.push('\u{08}'),
				Some(d @ '1'..='9') => {
					let mut group = d.to_string();
					if let Some(&next) = chars.peek()
						&& next.is_ascii_digit()
					{
						group.push(next);
						chars.next();
					}
					push_group(&mut output, &group);
				}
				Some('g') => {
					if chars.next() != Some('<') {
						return Err("missing < after \\g".to_string());
					}
					let mut name = String::new();
					loop {
						match chars.next() {
							Some('>') => break,
							Some(ch) => name.push(ch),
							None => return Err(format!("missing > in \\g<{name}")),
						}
					}
					if !is_group_name(&name) {
						return Err(format!("bad group name {name:?}"));
					}
					push_group(&mut output, &name);
				}
				Some(other) => {
					output.push('\\');
					output.push(other);
				}
			},
			_ => output.push(c),
		}
	}

	Ok(output)
}

fn push_group(output: &mut String, group: &str) {
	output.push_str("${");
	output.push_str(group);
	output.push('}');
}

fn is_group_name(name: &str) -> bool {
	if name.is_empty() {
		return false;
	}
	if name.chars().all(|c| c.is_ascii_digit()) {
		return true;
	}
	let mut chars = name.chars();
	chars
		.next()
		.is_some_and(|first| first == '_' || first.is_alphabetic())
		&& chars.all(|c| c == '_' || c.is_alphanumeric())
}
