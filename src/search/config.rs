//! Search run parameters.

use crate::error::{BogglerError, Result};

/// Capacity of the Master result list.
pub const MASTER_LIST_CAPACITY: usize = 1026;

/// Capacity of the per-round Evaluate list.
pub const EVALUATE_LIST_CAPACITY: usize = 66;

/// Parameters of one search run.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// How many seed boards to expand before stopping.
    pub seed_count: usize,
    /// Deviation rounds per seed.
    pub rounds: usize,
    /// Boards taken off the Evaluate list each round. Must be a positive
    /// multiple of `workers` and no larger than the Evaluate capacity.
    pub boards_per_round: usize,
    /// Scoring worker threads.
    pub workers: usize,
    /// Master list capacity.
    pub master_capacity: usize,
    /// Evaluate list capacity.
    pub evaluate_capacity: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            seed_count: 1000,
            rounds: 25,
            boards_per_round: 64,
            workers: default_workers(),
            master_capacity: MASTER_LIST_CAPACITY,
            evaluate_capacity: EVALUATE_LIST_CAPACITY,
        }
    }
}

/// Default worker count: the largest power of two no larger than the
/// machine's core count, capped at 64 so it always divides the stock
/// boards-per-round evenly.
pub fn default_workers() -> usize {
    let cores = num_cpus::get().clamp(1, 64);
    1 << (usize::BITS - 1 - cores.leading_zeros())
}

impl SearchConfig {
    /// Check the parameters for internal consistency.
    pub fn validate(&self) -> Result<()> {
        if self.seed_count == 0 {
            return Err(BogglerError::config("seed count must be at least 1"));
        }
        if self.rounds == 0 {
            return Err(BogglerError::config("round count must be at least 1"));
        }
        if self.workers == 0 {
            return Err(BogglerError::config("worker count must be at least 1"));
        }
        if self.boards_per_round == 0 || self.boards_per_round % self.workers != 0 {
            return Err(BogglerError::config(format!(
                "boards per round ({}) must be a positive multiple of the worker count ({})",
                self.boards_per_round, self.workers
            )));
        }
        if self.boards_per_round > self.evaluate_capacity {
            return Err(BogglerError::config(format!(
                "boards per round ({}) cannot exceed the evaluate list capacity ({})",
                self.boards_per_round, self.evaluate_capacity
            )));
        }
        if self.master_capacity == 0 || self.evaluate_capacity == 0 {
            return Err(BogglerError::config("list capacities must be at least 1"));
        }
        Ok(())
    }
}
