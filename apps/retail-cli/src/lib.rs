//! # Retail Calculator CLI
//!
//! Thin front end over `retail-core`. Plays the part of the form layer:
//! takes raw input, validates it, supplies the region tax table, prints
//! the result.
//!
//! ## Module Organization
//! ```text
//! retail_cli/
//! ├── lib.rs          ◄─── You are here (startup & dispatch)
//! ├── cli.rs          ◄─── clap argument definitions
//! ├── config.rs       ◄─── Environment configuration
//! ├── error.rs        ◄─── AppError for command handlers
//! └── commands/
//!     ├── quote.rs    ◄─── Price breakdown
//!     └── regions.rs  ◄─── Region table edits & listing
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;

use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use config::RetailConfig;
use error::AppResult;

/// Runs the CLI.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  1. Parse arguments (clap exits on --help / bad flags)                  │
/// │  2. Initialize tracing (stderr, RUST_LOG aware)                         │
/// │  3. Load RetailConfig from the environment                              │
/// │  4. Apply --add-region / --remove-region to a copy of the table         │
/// │  5. Dispatch the subcommand, print its output to stdout                 │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() -> ExitCode {
    let cli = Cli::parse();

    init_tracing();

    match execute(cli) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(error = %err, "Command failed");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

/// Loads configuration and runs the parsed command, returning its output.
pub fn execute(cli: Cli) -> AppResult<String> {
    let config = RetailConfig::from_env()?;
    info!(
        regions = config.region_tax_map.len(),
        currency = %config.currency_symbol,
        "Configuration loaded"
    );

    dispatch(cli, config)
}

/// Runs the parsed command against an already-loaded configuration.
pub fn dispatch(cli: Cli, mut config: RetailConfig) -> AppResult<String> {
    config.region_tax_map = commands::regions::apply_region_edits(
        &config.region_tax_map,
        &cli.add_regions,
        &cli.remove_regions,
    )?;

    match cli.command {
        Commands::Quote(args) => {
            commands::quote::run(&args, &config.region_tax_map, &config.currency_symbol)
        }
        Commands::Regions { json } => commands::regions::list(&config.region_tax_map, json),
        Commands::Config => Ok(serde_json::to_string_pretty(&config)?),
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=retail_cli=trace` - Trace for this crate only
/// - Default: INFO level
///
/// Logs go to stderr so stdout stays clean for piping `--json` output.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
