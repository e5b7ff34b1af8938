//! Algotale CLI binary.
//!
//! Command-line access to the story pipeline:
//! - Generate a story for a topic with level/theme preferences
//! - List the supported topic set

use clap::Parser;

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{Cli, Commands, run_generate, run_topics};

    // Pick up provider credentials from .env if present
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
        .init();

    // Execute the requested command
    match cli.command {
        Commands::Generate {
            topic,
            level,
            theme,
            seed,
            code,
        } => {
            run_generate(&topic, &level, &theme, seed, code).await;
        }

        Commands::Topics => {
            run_topics();
        }
    }

    Ok(())
}
