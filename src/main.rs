use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use pint_config::ConfigLoadError;
use pint_config::config::{ConfigurationRepository, DEFAULT_CONFIG_FILE};

#[derive(Parser)]
#[command(name = "pint-config")]
#[command(
	author,
	version,
	about = "Inspect and validate JSON or YAML code style configuration files"
)]
#[command(arg_required_else_help = true)]
struct Cli {
	#[command(subcommand)]
	command: Commands,

	/// Configuration file to read (YAML when it ends in .yml or .yaml, JSON otherwise)
	#[arg(long, global = true, value_name = "PATH", default_value = DEFAULT_CONFIG_FILE)]
	config: PathBuf,

	/// Preset to use instead of the one in the configuration file
	#[arg(long, global = true, value_name = "NAME")]
	preset: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
	/// Display the effective configuration as JSON
	Show,
	/// Check the configuration file for errors without printing it
	Validate,
}

fn main() -> ExitCode {
	match run() {
		Ok(code) => code,
		Err(e) => {
			if let Some(load_error) = e.downcast_ref::<ConfigLoadError>() {
				eprintln!("{load_error}");
				return ExitCode::from(load_error.exit_code());
			}
			eprintln!("error: {e:?}");
			ExitCode::FAILURE
		}
	}
}

fn run() -> Result<ExitCode> {
	let cli = Cli::parse();
	let repo = ConfigurationRepository::new(Some(&cli.config), cli.preset);

	match cli.command {
		Commands::Show => handle_show(&repo),
		Commands::Validate => handle_validate(&repo, &cli.config),
	}
}

fn handle_show(repo: &ConfigurationRepository) -> Result<ExitCode> {
	let resolved = repo.resolve()?;
	let json =
		serde_json::to_string_pretty(&resolved).context("Failed to serialize configuration")?;

	println!("{json}");
	Ok(ExitCode::SUCCESS)
}

fn handle_validate(repo: &ConfigurationRepository, path: &Path) -> Result<ExitCode> {
	if !path.exists() {
		println!(
			"No configuration file found at [{}]; using defaults.",
			path.display()
		);
		return Ok(ExitCode::SUCCESS);
	}

	repo.resolve()?;
	println!("Configuration file [{}] is valid.", path.display());

	Ok(ExitCode::SUCCESS)
}
