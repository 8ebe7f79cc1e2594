//! Command line argument parsing for the boggler CLI using clap.

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// boggler - deep search for high-scoring Boggle boards
#[derive(Parser, Debug, Clone)]
#[command(name = "boggler")]
#[command(about = "Deep search for high-scoring 5x5 Boggle boards")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct BogglerArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl BogglerArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Run the hill-climbing board search
    Search(SearchArgs),

    /// Score the given boards and exit
    Score(ScoreArgs),
}

/// Arguments for the board search
#[derive(Parser, Debug, Clone)]
pub struct SearchArgs {
    /// Directory holding the four lexicon part files
    #[arg(short, long, value_name = "DIR")]
    pub lexicon: PathBuf,

    /// Starting board (25 letters, optional 2-digit locked-cell suffix)
    #[arg(long, value_name = "BOARD", conflicts_with = "seed_file")]
    pub seed: Option<String>,

    /// File of whitespace-separated starting boards
    #[arg(long, value_name = "FILE")]
    pub seed_file: Option<PathBuf>,

    /// Seed boards to expand before stopping
    #[arg(long, default_value = "1000")]
    pub seeds: usize,

    /// Deviation rounds per seed
    #[arg(long, default_value = "25")]
    pub rounds: usize,

    /// Boards expanded per round; must be a multiple of the worker count
    #[arg(long, default_value = "64")]
    pub boards_per_round: usize,

    /// Worker threads (default: largest power of two within the core count)
    #[arg(short, long)]
    pub workers: Option<usize>,

    /// How many of the best boards to print
    #[arg(short, long, default_value = "10")]
    pub top: usize,
}

/// Arguments for one-off board scoring
#[derive(Parser, Debug, Clone)]
pub struct ScoreArgs {
    /// Directory holding the four lexicon part files
    #[arg(short, long, value_name = "DIR")]
    pub lexicon: PathBuf,

    /// Board strings to score
    #[arg(value_name = "BOARD", required = true)]
    pub boards: Vec<String>,
}

/// Output format options
#[derive(ValueEnum, Debug, Clone, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
