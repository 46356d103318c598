//! # qac CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use qac_cli::config::CliConfig;
use qac_cli::options::{run_options, OptionsArgs};
use qac_cli::replay::{run_replay, ReplayArgs};
use qac_cli::schema::{run_schema, SchemaArgs};

/// QA compliance form driver.
///
/// Prints option catalogs and the question table, and replays recorded
/// action scripts against a form session.
#[derive(Parser, Debug)]
#[command(name = "qac", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a YAML configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print an option catalog, or every catalog.
    Options(OptionsArgs),

    /// Print the question table.
    Schema(SchemaArgs),

    /// Dispatch an action script against a fresh form session.
    Replay(ReplayArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Options(args) => run_options(&args),
        Commands::Schema(args) => run_schema(&args),
        Commands::Replay(args) => {
            CliConfig::load(cli.config.as_deref()).and_then(|config| run_replay(&args, &config))
        }
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
