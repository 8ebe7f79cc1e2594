//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{BogglerArgs, OutputFormat};
use crate::error::Result;

/// One board with its score.
#[derive(Debug, Serialize, Deserialize)]
pub struct BoardResult {
    pub board: String,
    pub score: u32,
}

/// Result structure for a search run.
#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResults {
    pub boards: Vec<BoardResult>,
    pub seeds_run: usize,
    pub boards_scored: u64,
    pub duration_ms: u64,
}

/// Result structure for one-off scoring.
#[derive(Debug, Serialize, Deserialize)]
pub struct ScoreResults {
    pub boards: Vec<BoardResult>,
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize>(message: &str, result: &T, args: &BogglerArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in human-readable format.
fn output_human<T: Serialize>(message: &str, result: &T, args: &BogglerArgs) -> Result<()> {
    if args.verbosity() > 0 {
        println!("{message}");
        println!();
    }

    let value = serde_json::to_value(result)?;
    if let Some(boards) = value.get("boards").and_then(|b| b.as_array()) {
        for (i, entry) in boards.iter().enumerate() {
            let board = entry.get("board").and_then(|b| b.as_str()).unwrap_or("?");
            let score = entry.get("score").and_then(|s| s.as_u64()).unwrap_or(0);
            println!("{:>4}. {board}  {score}", i + 1);
        }
    }

    if let Some(obj) = value.as_object() {
        let mut trailer = Vec::new();
        if let Some(seeds) = obj.get("seeds_run").and_then(|v| v.as_u64()) {
            trailer.push(format!("{seeds} seeds"));
        }
        if let Some(scored) = obj.get("boards_scored").and_then(|v| v.as_u64()) {
            trailer.push(format!("{scored} boards scored"));
        }
        if let Some(ms) = obj.get("duration_ms").and_then(|v| v.as_u64()) {
            trailer.push(format!("{ms}ms"));
        }
        if !trailer.is_empty() && args.verbosity() > 0 {
            println!();
            println!("{}", trailer.join(", "));
        }
    }
    Ok(())
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &BogglerArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    println!("{json}");
    Ok(())
}
