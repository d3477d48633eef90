use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

use resub::apply::replace_glob;
use resub::logging;
use resub::rules::parse_rule_file;

const USAGE: &str = "Usage: resub <glob_path> <replacements.txt>";

#[derive(Parser)]
#[command(name = "resub")]
#[command(about = "Apply tab-separated regex rules to every file matched by a glob")]
#[command(disable_help_flag = true, disable_version_flag = true)]
struct Cli {
	/// Glob pattern selecting target files (`**` matches any depth)
	#[arg(allow_hyphen_values = true)]
	glob_path: String,

	/// Rule file with one `<regex><TAB><replacement>` per line
	#[arg(allow_hyphen_values = true)]
	rule_file: PathBuf,
}

fn main() -> ExitCode {
	logging::init();

	// Anything but exactly two positionals, flags included, gets the usage line
	let Ok(cli) = Cli::try_parse() else {
		println!("{USAGE}");
		return ExitCode::FAILURE;
	};

	match run(&cli) {
		Ok(code) => code,
		Err(e) => {
			eprintln!("error: {e:?}");
			ExitCode::FAILURE
		}
	}
}

fn run(cli: &Cli) -> Result<ExitCode> {
	// Rules are loaded before any file is touched
	let rules = parse_rule_file(&cli.rule_file)
		.with_context(|| format!("Failed to load rules from {}", cli.rule_file.display()))?;

	let stdout = std::io::stdout();
	let summary = replace_glob(&cli.glob_path, &rules, &mut stdout.lock())
		.with_context(|| format!("Failed to process {}", cli.glob_path))?;

	tracing::debug!(
		modified = summary.modified,
		unchanged = summary.unchanged,
		skipped = summary.skipped,
		"run complete"
	);
	Ok(ExitCode::SUCCESS)
}
