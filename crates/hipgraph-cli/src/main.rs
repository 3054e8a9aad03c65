//! Command-line demo client for hipGRAPH.
//!
//! Loads an edge list from a text file, builds a graph, runs one of the
//! algorithm families, and prints the result as a table or JSON.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};

mod commands;
mod output;

/// Output format selection.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table.
    Table,
    /// Machine-readable JSON.
    Json,
}

/// Algorithm selection for the `run` command.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Algorithm {
    /// In- and out-degrees per vertex.
    Degrees,
    /// PageRank scores.
    Pagerank,
    /// Weakly connected component labels.
    Components,
    /// Per-vertex triangle counts.
    Triangles,
}

#[derive(Parser)]
#[command(name = "hipgraph", version, about = "hipGRAPH demo client")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Output format.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// Suppress non-essential output.
    #[arg(long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Run an algorithm over an edge-list file.
    ///
    /// The file holds one edge per line: `src dst [weight]`, whitespace
    /// separated; `#` starts a comment.
    Run {
        /// Edge-list file.
        file: PathBuf,
        /// Algorithm to run.
        #[arg(long, value_enum, default_value_t = Algorithm::Degrees)]
        algorithm: Algorithm,
    },
    /// Print graph statistics and backend information.
    Info {
        /// Edge-list file.
        file: PathBuf,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Run { file, algorithm } => {
            commands::run::run(&file, algorithm, cli.format, cli.quiet)
        }
        Command::Info { file } => commands::info::run(&file, cli.format, cli.quiet),
    }
}
