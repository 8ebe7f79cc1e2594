//! Fixed-capacity descending result lists.
//!
//! The search keeps two of these: the Master list (capacity 1026, the
//! run's overall best boards) and a per-round Evaluate list (capacity 66,
//! the boards worth expanding next round). Insertion is O(log K) via
//! binary position search; the cutoff test that gates most submissions is
//! O(1).

use std::collections::HashSet;

use ahash::RandomState;

use crate::board::CellLetters;
use crate::candidate::Candidate;

/// A bounded, score-descending list of distinct boards.
#[derive(Debug)]
pub struct TopKList {
    capacity: usize,
    /// Sorted by score descending; ties keep insertion order.
    entries: Vec<Candidate>,
    /// Mirror of the boards currently on the list.
    members: HashSet<CellLetters, RandomState>,
}

impl TopKList {
    /// Create an empty list holding at most `capacity` boards.
    pub fn new(capacity: usize) -> Self {
        TopKList {
            capacity,
            entries: Vec::with_capacity(capacity),
            members: HashSet::with_capacity_and_hasher(capacity, RandomState::new()),
        }
    }

    /// Maximum number of boards the list will hold.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Current number of boards.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The score a submission must beat to get in: the minimum score when
    /// the list is full, zero otherwise.
    #[inline]
    pub fn cutoff(&self) -> u32 {
        if self.entries.len() == self.capacity {
            self.entries.last().map_or(0, |e| e.score)
        } else {
            0
        }
    }

    /// Whether a board is currently on the list. Locked-cell suffix and
    /// score play no part in identity.
    pub fn contains(&self, cells: &CellLetters) -> bool {
        self.members.contains(cells)
    }

    /// The entry at a rank (0 = best).
    pub fn get(&self, rank: usize) -> Option<&Candidate> {
        self.entries.get(rank)
    }

    /// Iterate entries best-first.
    pub fn iter(&self) -> impl Iterator<Item = &Candidate> {
        self.entries.iter()
    }

    /// Submit a candidate. Returns true if it was added: duplicates of a
    /// listed board are ignored, and a score at or below a full list's
    /// minimum is a no-op. When a full list accepts a board, the current
    /// minimum falls off.
    pub fn insert(&mut self, candidate: Candidate) -> bool {
        if self.members.contains(&candidate.cells) {
            return false;
        }
        let full = self.entries.len() == self.capacity;
        if full && candidate.score <= self.cutoff() {
            return false;
        }
        // First position with a strictly lower score: new ties land after
        // existing ones, preserving discovery order.
        let position = self.entries.partition_point(|e| e.score >= candidate.score);
        self.entries.insert(position, candidate);
        self.members.insert(candidate.cells);
        if self.entries.len() > self.capacity
            && let Some(dropped) = self.entries.pop()
        {
            self.members.remove(&dropped.cells);
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::ALPHABET_SIZE;
    use crate::board::CELL_COUNT;

    fn cells(seed: u8) -> CellLetters {
        let mut c = [0u8; CELL_COUNT];
        for (i, slot) in c.iter_mut().enumerate() {
            *slot = (seed as usize + i) as u8 % ALPHABET_SIZE as u8;
        }
        c
    }

    fn candidate(seed: u8, score: u32) -> Candidate {
        Candidate::new(cells(seed), None, score)
    }

    #[test]
    fn test_stays_sorted_and_bounded() {
        let mut list = TopKList::new(3);
        for (seed, score) in [(1, 5), (2, 9), (3, 1), (4, 7), (5, 3)] {
            list.insert(candidate(seed, score));
        }
        assert_eq!(list.len(), 3);
        let scores: Vec<u32> = list.iter().map(|c| c.score).collect();
        assert_eq!(scores, vec![9, 7, 5]);
    }

    #[test]
    fn test_cutoff_rejects_low_scores() {
        let mut list = TopKList::new(2);
        assert_eq!(list.cutoff(), 0);
        assert!(list.insert(candidate(1, 10)));
        assert!(list.insert(candidate(2, 20)));
        assert_eq!(list.cutoff(), 10);

        // At the minimum: no-op.
        assert!(!list.insert(candidate(3, 10)));
        // Below it: no-op.
        assert!(!list.insert(candidate(4, 5)));
        assert_eq!(list.len(), 2);

        // Above it: the old minimum falls off.
        assert!(list.insert(candidate(5, 15)));
        assert!(!list.contains(&cells(1)));
        assert_eq!(list.cutoff(), 15);
    }

    #[test]
    fn test_duplicate_boards_rejected() {
        let mut list = TopKList::new(4);
        assert!(list.insert(candidate(1, 10)));
        // Same board, different score and suffix: still a duplicate.
        let mut dup = candidate(1, 99);
        dup.locked_cell = Some(3);
        assert!(!list.insert(dup));
        assert_eq!(list.len(), 1);
        assert_eq!(list.get(0).unwrap().score, 10);
    }

    #[test]
    fn test_evicted_board_may_return() {
        let mut list = TopKList::new(1);
        assert!(list.insert(candidate(1, 5)));
        assert!(list.insert(candidate(2, 8)));
        assert!(!list.contains(&cells(1)));
        // The membership mirror must have forgotten the evicted board.
        assert!(list.insert(candidate(1, 9)));
    }

    #[test]
    fn test_ties_keep_discovery_order() {
        let mut list = TopKList::new(4);
        list.insert(candidate(1, 7));
        list.insert(candidate(2, 7));
        list.insert(candidate(3, 9));
        let order: Vec<CellLetters> = list.iter().map(|c| c.cells).collect();
        assert_eq!(order, vec![cells(3), cells(1), cells(2)]);
    }
}
