//! Board scoring against the lexicon graph.
//!
//! One scoring pass walks every legal path (adjacent cells, no cell reused
//! within a path) from each of the 25 starting cells, following the graph
//! edge-by-edge. Each end-of-word node contributes its score exactly once
//! per pass: the node's marker is derived incrementally from the word-rank
//! array during the walk and stamped in the pass's [`MarkTable`] mark, so
//! a word reachable through many distinct cell paths still counts once.
//! Marker derivation is O(1) per edge; there is no hash table and no word
//! string materialization anywhere on this path.
//!
//! The marker recurrence, carried forward on every descent:
//!
//! ```text
//! marker(child) = marker(parent) - rank(parent.child_start) + rank(child)
//!                 [- 1 if parent is a word]
//! ```
//!
//! seeded at a top-level node with `marker = rank(node)`.

use crate::alphabet::SCORE_CARD;
use crate::board::{self, Board, CELL_COUNT};
use crate::lexicon::{LexiconGraph, MarkTable};

/// Scores boards against a lexicon graph.
#[derive(Debug, Clone, Copy)]
pub struct Scorer<'g> {
    graph: &'g LexiconGraph,
}

impl<'g> Scorer<'g> {
    /// Create a scorer over a loaded graph.
    pub fn new(graph: &'g LexiconGraph) -> Self {
        Scorer { graph }
    }

    /// Total score of a board, counting each distinct word once.
    ///
    /// Takes a fresh mark from `marks`; the table is the only state shared
    /// across the 25 starting cells, which is what makes whole-board dedup
    /// a single array access per word node.
    pub fn score(&self, board: &Board, marks: &mut MarkTable) -> u32 {
        let mark = marks.advance();
        let mut total = 0;
        for cell in 0..CELL_COUNT {
            let node = LexiconGraph::root(board.letter(cell));
            let marker = i64::from(self.graph.word_rank(node));
            total += self.descend(board, marks, mark, cell, 1 << cell, node, marker, 1);
        }
        total
    }

    /// Depth-first walk from one cell/node pair. `used` is the path's
    /// cell bitmask; clearing happens implicitly on return.
    #[allow(clippy::too_many_arguments)]
    fn descend(
        &self,
        board: &Board,
        marks: &mut MarkTable,
        mark: u32,
        cell: usize,
        used: u32,
        node: u32,
        marker: i64,
        length: usize,
    ) -> u32 {
        let record = self.graph.node(node);
        let mut score = 0;
        // Intermediate marker sums dip below zero; only final markers are
        // guaranteed to land back in [1, word_count].
        let mut base = marker;
        if record.is_word() {
            if marks.stamp(marker as u32, mark) {
                score += SCORE_CARD[length];
            }
            base -= 1;
        }

        let start = record.child_start();
        if start == 0 {
            return score;
        }
        base -= i64::from(self.graph.word_rank(start));
        let pattern = self.graph.offset_pattern(record.offset_slot());

        for &neighbor in board::neighbors(cell) {
            let bit = 1u32 << neighbor;
            if used & bit != 0 {
                continue;
            }
            let letter = board.letter(neighbor as usize);
            if let Some(offset) = LexiconGraph::child_offset(pattern, letter) {
                let child = start + offset;
                let child_marker = base + i64::from(self.graph.word_rank(child));
                score += self.descend(
                    board,
                    marks,
                    mark,
                    neighbor as usize,
                    used | bit,
                    child,
                    child_marker,
                    length + 1,
                );
            }
        }
        score
    }
}
