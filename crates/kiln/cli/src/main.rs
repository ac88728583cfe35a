//! Kiln CLI - command-line interface for the product catalog
//!
//! This CLI lets operators:
//! - List the product families and their variants
//! - Build a whole family in one variant
//! - Run a single creator of a product line
//! - Assemble a showroom from the configured selections

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;
mod output;

use commands::{build, craft, families, showroom};
use error::CliResult;

/// Kiln CLI application
#[derive(Parser)]
#[command(name = "kiln")]
#[command(about = "Kiln - variant-consistent product catalog", long_about = None)]
#[command(version)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, env = "KILN_CONFIG", global = true)]
    config: Option<PathBuf>,

    /// Output format (table, json, yaml)
    #[arg(short, long, default_value = "table", global = true)]
    output: output::OutputFormat,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand)]
enum Commands {
    /// List families, their kind and registered keys
    Families,

    /// Build every product of a family in one variant
    Build {
        /// Family name (e.g. furniture)
        family: String,
        /// Variant key (e.g. victorian)
        variant: String,
    },

    /// Run one creator of a product line
    Craft {
        /// Product line name (e.g. armour)
        line: String,
        /// Creator key (e.g. helmet)
        creator: String,
    },

    /// Build every family with the configured selections
    Showroom,

    /// Show the effective configuration
    Config,
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        output::print_error(&err.to_string());
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> CliResult<()> {
    let loaded = config::load(cli.config.as_deref())?;

    // Initialize tracing
    let filter = if cli.verbose {
        "debug".to_string()
    } else {
        loaded.config.logging.level.clone()
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();
    tracing::debug!(path = ?loaded.path, "Configuration loaded");

    let catalog = kiln_catalog::global()?;

    match cli.command {
        Commands::Families => families::execute(&catalog, cli.output),
        Commands::Build { family, variant } => build::execute(&catalog, &family, &variant, cli.output),
        Commands::Craft { line, creator } => craft::execute(&catalog, &line, &creator, cli.output),
        Commands::Showroom => showroom::execute(&catalog, &loaded.config, cli.output),
        Commands::Config => {
            if let Some(path) = &loaded.path {
                tracing::info!(path = %path.display(), "Effective configuration");
            }
            output::print_single(&loaded.config, cli.output)
        }
    }
}
