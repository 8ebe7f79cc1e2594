//! Whole-run orchestrator behavior over on-disk lexicons.

mod common;

use std::sync::Arc;

use boggler::candidate::Candidate;
use boggler::lexicon::LexiconGraph;
use boggler::search::{SearchConfig, SearchEngine};
use tempfile::TempDir;

fn load(words: &[&str]) -> Arc<LexiconGraph> {
    let dir = TempDir::new().unwrap();
    common::write_lexicon_dir(dir.path(), words).unwrap();
    Arc::new(LexiconGraph::load_dir(dir.path()).unwrap())
}

fn small_config() -> SearchConfig {
    SearchConfig {
        seed_count: 2,
        rounds: 2,
        boards_per_round: 4,
        workers: 2,
        master_capacity: 16,
        evaluate_capacity: 8,
    }
}

#[test]
fn test_search_never_loses_to_its_seed() {
    let graph = load(common::SAMPLE_WORDS);
    let engine = SearchEngine::new(graph, small_config()).unwrap();

    // CAT + CATS + ACT on the top row: 3 points before any climbing.
    let seed = Candidate::parse("CATSPPPPPPPPPPPPPPPPPPPPP").unwrap();
    let outcome = engine.run(&[seed]).unwrap();

    assert!(outcome.master.get(0).unwrap().score >= 3);
    assert_eq!(outcome.seeds_run, 2);
    assert!(outcome.boards_scored > 25 * 13);
}

#[test]
fn test_seed_exhaustion_is_clean() {
    let graph = load(common::SAMPLE_WORDS);
    let mut config = small_config();
    config.seed_count = 10;
    config.master_capacity = 1;
    let engine = SearchEngine::new(graph, config).unwrap();

    // An all-P board and every single-letter deviation of it score zero,
    // so the one-slot master never gains a second seed.
    let seed = Candidate::parse("PPPPPPPPPPPPPPPPPPPPPPPPP").unwrap();
    let outcome = engine.run(&[seed]).unwrap();
    assert_eq!(outcome.seeds_run, 1);
    assert_eq!(outcome.master.get(0).unwrap().score, 0);
}

#[test]
fn test_locked_seed_cell_survives() {
    let graph = load(common::SAMPLE_WORDS);
    let mut config = small_config();
    config.seed_count = 1;
    config.rounds = 1;
    let engine = SearchEngine::new(graph, config).unwrap();

    let seed = Candidate::parse("CATSPPPPPPPPPPPPPPPPPPPPP00").unwrap();
    let outcome = engine.run(&[seed]).unwrap();
    // The starting board keeps its suffix on the master list.
    let listed = outcome
        .master
        .iter()
        .find(|c| c.cells == seed.cells)
        .unwrap();
    assert_eq!(listed.locked_cell, Some(0));
}
