//! Command implementations for the boggler CLI.

use std::fs;
use std::sync::Arc;
use std::time::Instant;

use crate::candidate::Candidate;
use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::{BogglerError, Result};
use crate::lexicon::{LexiconGraph, MarkTable};
use crate::scorer::Scorer;
use crate::search::{DEFAULT_SEED_BOARD, SearchConfig, SearchEngine};

/// Execute a CLI command.
pub fn execute_command(args: BogglerArgs) -> Result<()> {
    match &args.command {
        Command::Search(search_args) => run_search(search_args.clone(), &args),
        Command::Score(score_args) => score_boards(score_args.clone(), &args),
    }
}

/// Run the full hill-climbing search.
fn run_search(args: SearchArgs, cli_args: &BogglerArgs) -> Result<()> {
    if cli_args.verbosity() > 1 {
        println!("Loading lexicon from: {}", args.lexicon.display());
    }
    let graph = Arc::new(LexiconGraph::load_dir(&args.lexicon)?);
    let starting_boards = load_starting_boards(&args)?;

    let mut config = SearchConfig::default();
    config.seed_count = args.seeds;
    config.rounds = args.rounds;
    config.boards_per_round = args.boards_per_round;
    if let Some(workers) = args.workers {
        config.workers = workers;
    }

    let engine = SearchEngine::new(graph, config)?;
    let start_time = Instant::now();
    let outcome = engine.run(&starting_boards)?;
    let duration = start_time.elapsed();

    let boards = outcome
        .master
        .iter()
        .take(args.top)
        .map(|c| BoardResult {
            board: c.to_string(),
            score: c.score,
        })
        .collect();
    output_result(
        "Search finished",
        &SearchResults {
            boards,
            seeds_run: outcome.seeds_run,
            boards_scored: outcome.boards_scored,
            duration_ms: duration.as_millis() as u64,
        },
        cli_args,
    )
}

/// The starting boards: a seed file, an explicit seed, or the stock board.
fn load_starting_boards(args: &SearchArgs) -> Result<Vec<Candidate>> {
    if let Some(path) = &args.seed_file {
        let text = fs::read_to_string(path)?;
        let boards = text
            .split_whitespace()
            .map(Candidate::parse)
            .collect::<Result<Vec<_>>>()?;
        if boards.is_empty() {
            return Err(BogglerError::invalid_board(format!(
                "seed file {} holds no boards",
                path.display()
            )));
        }
        Ok(boards)
    } else {
        let seed = args.seed.as_deref().unwrap_or(DEFAULT_SEED_BOARD);
        Ok(vec![Candidate::parse(seed)?])
    }
}

/// Score boards given on the command line, without searching.
fn score_boards(args: ScoreArgs, cli_args: &BogglerArgs) -> Result<()> {
    let graph = LexiconGraph::load_dir(&args.lexicon)?;
    let scorer = Scorer::new(&graph);
    let mut marks = MarkTable::new(graph.word_count());

    let mut boards = Vec::with_capacity(args.boards.len());
    for s in &args.boards {
        let candidate = Candidate::parse(s)?;
        let score = scorer.score(&candidate.board(), &mut marks);
        boards.push(BoardResult {
            board: candidate.to_string(),
            score,
        });
    }
    output_result("Scored boards", &ScoreResults { boards }, cli_args)
}
