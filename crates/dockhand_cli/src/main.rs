//! Dockhand CLI - Main entry point.
//!
//! Exit codes:
//! - 0: Success
//! - 1: General error
//! - 2: Invalid arguments or unknown app
//! - 3: Configuration validation failure
//! - 4: Repository error

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;

use commands::{Cli, Commands};

/// CI-friendly exit codes
pub struct ExitCodes;

impl ExitCodes {
    pub const SUCCESS: u8 = 0;
    pub const GENERAL_ERROR: u8 = 1;
    pub const INVALID_ARGS: u8 = 2;
    pub const VALIDATION_FAILURE: u8 = 3;
    pub const REPOSITORY_ERROR: u8 = 4;
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    let level = if cli.verbose { "dockhand=debug" } else { "dockhand=info" };
    let log_result = tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(
            EnvFilter::from_default_env()
                .add_directive(level.parse().unwrap())
                .add_directive("warn".parse().unwrap()),
        )
        .try_init();

    if log_result.is_err() {
        // Logging already initialized, continue
    }

    let repository_path = cli.repository.clone();

    let result = match cli.command {
        Commands::List(args) => commands::list::execute(&repository_path, args).await,
        Commands::Search(args) => commands::search::execute(&repository_path, args).await,
        Commands::Show(args) => commands::show::execute(&repository_path, args).await,
        Commands::Validate(args) => commands::validate::execute(&repository_path, args).await,
        Commands::Status(args) => commands::status::execute(args).await,
    };

    match result {
        Ok(()) => ExitCode::from(ExitCodes::SUCCESS),
        Err(e) => {
            let exit_code = categorize_error(&e);
            eprintln!("❌ Error: {:#}", e);
            ExitCode::from(exit_code)
        }
    }
}

/// Categorize error to determine exit code
fn categorize_error(e: &anyhow::Error) -> u8 {
    let msg = e.to_string().to_lowercase();

    if msg.contains("not found") || msg.contains("key=value") {
        ExitCodes::INVALID_ARGS
    } else if msg.contains("repository") || msg.contains("definition") {
        ExitCodes::REPOSITORY_ERROR
    } else {
        ExitCodes::GENERAL_ERROR
    }
}
