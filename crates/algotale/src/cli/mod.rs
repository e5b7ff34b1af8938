//! CLI argument definitions and command handlers.

mod run;

pub use run::{run_generate, run_topics};

use clap::{Parser, Subcommand};

/// AI-generated stories that teach data structures and algorithms.
#[derive(Parser)]
#[command(name = "algotale", version, about)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Generate a story for a topic
    Generate {
        /// Topic id (arrays, stacks, queues, linked-lists, sorting, trees,
        /// graphs, recursion); anything else falls back to arrays
        topic: String,

        /// Experience level (beginner, advanced)
        #[arg(short, long, default_value = "beginner")]
        level: String,

        /// Narrative theme (adventure, sci-fi, mystery, fantasy)
        #[arg(short, long, default_value = "adventure")]
        theme: String,

        /// Explicit uniqueness seed in [0, 1); fresh random seed when omitted
        #[arg(short, long)]
        seed: Option<f64>,

        /// Print the topic's code listing after the story
        #[arg(long)]
        code: bool,
    },

    /// List the supported topics
    Topics,
}
