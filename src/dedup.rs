//! Board membership sets.
//!
//! The orchestrator keeps three of these across a whole run: boards used
//! as seeds, boards already expanded into deviations, and boards that ever
//! made the Master list. A fourth, short-lived set suppresses duplicates
//! within a single round's merged batches.

use std::collections::HashSet;

use ahash::RandomState;

use crate::board::CellLetters;

/// A set of boards. Identity is the 25 cells only; locked-cell suffixes
/// and scores never matter.
#[derive(Debug, Default)]
pub struct DedupSet {
    boards: HashSet<CellLetters, RandomState>,
}

impl DedupSet {
    /// Create an empty set.
    pub fn new() -> Self {
        DedupSet {
            boards: HashSet::with_hasher(RandomState::new()),
        }
    }

    /// Add a board; returns true if it was not already present.
    pub fn insert(&mut self, cells: CellLetters) -> bool {
        self.boards.insert(cells)
    }

    /// Whether a board is in the set.
    pub fn contains(&self, cells: &CellLetters) -> bool {
        self.boards.contains(cells)
    }

    /// Number of boards in the set.
    pub fn len(&self) -> usize {
        self.boards.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.boards.is_empty()
    }
}
