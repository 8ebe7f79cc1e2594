//! Per-worker word mark state.
//!
//! A [`MarkTable`] pairs one stamp slot per word marker with a
//! monotonically increasing mark counter. A scoring pass takes a fresh
//! mark and stamps each word it finds; a marker already stamped with the
//! current mark has been counted in this pass. Because marks only ever
//! grow, the table never needs clearing between passes.
//!
//! Each worker owns exactly one table. When the coordinator needs to score
//! on a worker's behalf, the whole table moves by value and moves back at
//! the next round dispatch; counters stay monotone across the handoff.

/// Stamp table plus mark counter for one worker.
#[derive(Debug)]
pub struct MarkTable {
    /// One slot per word marker; index 0 is unused.
    stamps: Vec<u32>,
    /// The most recently issued mark. 2^32 passes is a deeper search than
    /// any practical run, so the counter is never reset.
    now: u32,
}

impl MarkTable {
    /// Create a zeroed table for a lexicon of `word_count` words.
    pub fn new(word_count: u32) -> Self {
        MarkTable {
            stamps: vec![0; word_count as usize + 1],
            now: 0,
        }
    }

    /// Issue the mark for a new scoring pass.
    #[inline]
    pub fn advance(&mut self) -> u32 {
        self.now += 1;
        self.now
    }

    /// The most recently issued mark.
    pub fn current(&self) -> u32 {
        self.now
    }

    /// Stamp a marker with the given mark. Returns true if this is the
    /// marker's first sighting under that mark.
    #[inline]
    pub fn stamp(&mut self, marker: u32, mark: u32) -> bool {
        let slot = &mut self.stamps[marker as usize];
        if *slot < mark {
            *slot = mark;
            true
        } else {
            false
        }
    }
}
