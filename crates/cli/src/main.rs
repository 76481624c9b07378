mod commands;
mod config_file;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use commands::check::cmd_check;
use commands::validate_config::cmd_validate_config;

/// Exit code for a submission the guard would block.
pub(crate) const EXIT_BLOCKED: i32 = 1;
/// Exit code for unreadable or invalid configuration and input files.
pub(crate) const EXIT_INVALID: i32 = 2;

/// Output format for CLI responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    Text,
    Json,
}

/// Distinct-selection submit guard for card forms.
#[derive(Parser)]
#[command(
    name = "submit-guard",
    version,
    about = "Distinct-selection submit guard for card forms"
)]
struct Cli {
    /// Output format (text or json)
    #[arg(long, global = true, default_value = "text", value_enum)]
    output: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one submission attempt over recorded inputs
    Check {
        /// Path to the guard configuration (.json or .toml)
        #[arg(long)]
        config: PathBuf,
        /// Path to a JSON array of recorded inputs
        #[arg(long)]
        inputs: PathBuf,
    },

    /// Validate a guard configuration file and print the effective settings
    ValidateConfig {
        /// Path to the guard configuration (.json or .toml)
        config: PathBuf,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Check { config, inputs } => {
            cmd_check(&config, &inputs, cli.output, cli.quiet);
        }
        Commands::ValidateConfig { config } => {
            cmd_validate_config(&config, cli.output, cli.quiet);
        }
    }
}

pub(crate) fn report_error(msg: &str, output: OutputFormat, quiet: bool) {
    if quiet {
        return;
    }
    match output {
        OutputFormat::Text => eprintln!("{}", msg),
        OutputFormat::Json => {
            eprintln!("{}", serde_json::json!({ "error": msg }));
        }
    }
}
