//! On-disk lexicon loading round-trips and corruption handling.

mod common;

use std::fs;

use boggler::alphabet;
use boggler::error::BogglerError;
use boggler::lexicon::LexiconGraph;
use boggler::lexicon::graph::PART_FILE_NAMES;
use tempfile::TempDir;

fn node_for(graph: &LexiconGraph, word: &str) -> Option<u32> {
    let mut letters = word
        .bytes()
        .map(|b| alphabet::letter_index(b).unwrap());
    let mut node = LexiconGraph::root(letters.next()?);
    for letter in letters {
        node = graph.child(node, letter)?;
    }
    Some(node)
}

#[test]
fn test_load_dir_round_trip() {
    let dir = TempDir::new().unwrap();
    common::write_lexicon_dir(dir.path(), common::SAMPLE_WORDS).unwrap();
    let graph = LexiconGraph::load_dir(dir.path()).unwrap();

    assert_eq!(graph.word_count() as usize, common::SAMPLE_WORDS.len());
    for word in common::SAMPLE_WORDS {
        let node = node_for(&graph, word).unwrap_or_else(|| panic!("no path for {word}"));
        assert!(graph.node(node).is_word(), "{word} not flagged as a word");
    }

    // Prefixes that are not words, and dead-end transitions.
    let ca = node_for(&graph, "CA").unwrap();
    assert!(!graph.node(ca).is_word());
    assert!(node_for(&graph, "CAD").is_none());
    assert!(node_for(&graph, "TOASTS").is_none());
}

#[test]
fn test_missing_part_is_io_error() {
    let dir = TempDir::new().unwrap();
    common::write_lexicon_dir(dir.path(), common::SAMPLE_WORDS).unwrap();
    fs::remove_file(dir.path().join(PART_FILE_NAMES[2])).unwrap();
    assert!(matches!(
        LexiconGraph::load_dir(dir.path()),
        Err(BogglerError::Io(_))
    ));
}

#[test]
fn test_truncated_part_is_corrupt() {
    let dir = TempDir::new().unwrap();
    common::write_lexicon_dir(dir.path(), common::SAMPLE_WORDS).unwrap();
    let path = dir.path().join(PART_FILE_NAMES[0]);
    let bytes = fs::read(&path).unwrap();
    fs::write(&path, &bytes[..bytes.len() - 3]).unwrap();
    assert!(matches!(
        LexiconGraph::load_dir(dir.path()),
        Err(BogglerError::CorruptLexicon(_))
    ));
}

#[test]
fn test_oversized_part_is_corrupt() {
    let dir = TempDir::new().unwrap();
    common::write_lexicon_dir(dir.path(), common::SAMPLE_WORDS).unwrap();
    let path = dir.path().join(PART_FILE_NAMES[3]);
    let mut bytes = fs::read(&path).unwrap();
    bytes.push(0);
    fs::write(&path, &bytes).unwrap();
    assert!(matches!(
        LexiconGraph::load_dir(dir.path()),
        Err(BogglerError::CorruptLexicon(_))
    ));
}
