//! Folio CLI - Maintenance tools for the stored portfolio content.
//!
//! # Usage
//!
//! ```bash
//! # Put the default content back
//! folio reset
//!
//! # Print the stored snapshot as JSON
//! folio export > backup.json
//!
//! # Validate a snapshot file and store it
//! folio import backup.json
//!
//! # Report duplicate ids in the stored snapshot
//! folio check
//! ```
//!
//! Every command works on `FOLIO_STORAGE_PATH`, or `--storage` when given.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "folio")]
#[command(author, version, about = "Folio content tools")]
struct Cli {
    /// Storage file shared with the site
    #[arg(long, global = true, env = "FOLIO_STORAGE_PATH", default_value = "data/portfolio.json")]
    storage: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replace the stored content with the defaults
    Reset,
    /// Print the stored snapshot as JSON
    Export,
    /// Validate a snapshot file and store it
    Import {
        /// JSON file holding a complete snapshot
        file: PathBuf,
    },
    /// Report duplicate ids in the stored snapshot
    Check,
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // Logs go to stderr so `export` output stays clean
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

#[allow(clippy::print_stdout)]
async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Reset => commands::content::reset(&cli.storage).await?,
        Commands::Export => {
            let json = commands::content::export(&cli.storage).await?;
            println!("{json}");
        }
        Commands::Import { file } => commands::content::import(&cli.storage, &file).await?,
        Commands::Check => {
            let duplicates = commands::content::check(&cli.storage).await?;
            if !duplicates.is_empty() {
                for (section, id) in &duplicates {
                    tracing::error!(section, id, "Duplicate id");
                }
                return Err(format!("{} duplicate id(s) found", duplicates.len()).into());
            }
            tracing::info!("No duplicate ids");
        }
    }
    Ok(())
}
