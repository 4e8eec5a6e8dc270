//! CLI command definitions.
//!
//! Each subcommand maps to one repository or daemon operation: browsing and
//! searching the catalog, inspecting a single template, validating a
//! candidate configuration, and reporting daemon status.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub mod list;
pub mod search;
pub mod show;
pub mod status;
pub mod validate;

/// Dockhand - self-hosted container app marketplace
#[derive(Parser)]
#[command(name = "dockhand")]
#[command(version, about = "Dockhand - catalog and validate container app templates")]
#[command(long_about = r#"
Dockhand catalogs installable application templates and validates
user-supplied configuration against each template's declared schema
before deployment.

COMMANDS:
  list      → Browse the app catalog, optionally by category
  search    → Search apps by name, description, or tag
  show      → Show one app's full definition
  validate  → Validate configuration values against an app's schema
  status    → Report Docker daemon health and containers

EXIT CODES:
  0 - Success
  1 - General error
  2 - Invalid arguments or unknown app
  3 - Configuration validation failure
  4 - Repository error
"#)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the app definition repository
    #[arg(
        long,
        global = true,
        env = "DOCKHAND_REPOSITORY",
        default_value = dockhand_apps::DEFAULT_REPOSITORY_PATH
    )]
    pub repository: PathBuf,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Browse the app catalog
    List(list::ListArgs),

    /// Search apps by name, description, or tag
    Search(search::SearchArgs),

    /// Show one app's full definition
    Show(show::ShowArgs),

    /// Validate configuration values against an app's schema
    Validate(validate::ValidateArgs),

    /// Report Docker daemon health and containers
    Status(status::StatusArgs),
}
