use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

use resub::apply::strip_folder;
use resub::config::{StripConfig, parse_config_file};
use resub::logging;

#[derive(Parser)]
#[command(name = "strip-domain")]
#[command(
	author,
	version,
	about = "Remove a domain prefix from every file under an asset folder"
)]
struct Cli {
	/// TOML file providing `root`, `pattern` and `replacement`
	#[arg(long, value_name = "PATH")]
	config: Option<PathBuf>,

	/// Folder to walk (overrides the config file)
	#[arg(long, value_name = "DIR")]
	root: Option<PathBuf>,

	/// Regex to replace (overrides the config file)
	#[arg(long)]
	pattern: Option<String>,

	/// Replacement template (overrides the config file)
	#[arg(long)]
	replacement: Option<String>,
}

impl Cli {
	fn resolve_config(self) -> Result<StripConfig> {
		let mut config = match self.config {
			Some(ref path) => parse_config_file(path)
				.with_context(|| format!("Failed to load config {}", path.display()))?,
			None => StripConfig::default(),
		};

		if let Some(root) = self.root {
			config.root = root;
		}
		if let Some(pattern) = self.pattern {
			config.pattern = pattern;
		}
		if let Some(replacement) = self.replacement {
			config.replacement = replacement;
		}

		Ok(config)
	}
}

fn main() -> ExitCode {
	logging::init();

	match run(Cli::parse()) {
		Ok(code) => code,
		Err(e) => {
			eprintln!("error: {e:?}");
			ExitCode::FAILURE
		}
	}
}

fn run(cli: Cli) -> Result<ExitCode> {
	let config = cli.resolve_config()?;
	tracing::debug!(root = %config.root.display(), pattern = %config.pattern, "stripping folder");

	let stdout = std::io::stdout();
	strip_folder(&config, &mut stdout.lock())
		.with_context(|| format!("Failed to process {}", config.root.display()))?;

	Ok(ExitCode::SUCCESS)
}
