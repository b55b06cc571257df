//! Lautrec CLI binary.
//!
//! This binary provides command-line access to the campaign pipeline:
//! - Generate a campaign from a brief
//! - Inspect the platform registry
//! - Estimate campaign costs
//! - Probe collaborator health

use clap::Parser;

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{Cli, Commands, run_campaign, show_estimate, show_health, show_platforms};

    // Load environment variables from .env file
    let _ = dotenvy::dotenv();

    // Parse command-line arguments
    let cli = Cli::parse();

    // Initialize tracing
    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Execute the requested command
    match cli.command {
        Commands::Run(args) => {
            run_campaign(args).await?;
        }

        Commands::Platforms => {
            show_platforms()?;
        }

        Commands::Estimate(args) => {
            show_estimate(args)?;
        }

        Commands::Health => {
            show_health().await?;
        }
    }

    Ok(())
}
