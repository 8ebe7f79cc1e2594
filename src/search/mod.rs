//! The concurrent hill-climbing search.
//!
//! Restart-based local search: pick a promising seed board off the Master
//! list, explore its single-letter deviation neighborhood for a fixed
//! number of rounds with a pool of scoring workers, then restart from the
//! next-best unseeded board. Only boards one Hamming step away from
//! already-promising boards are ever scored; diversity comes from the
//! repeated restarts, and termination is purely iteration-count based.

pub mod config;
pub mod engine;
pub(crate) mod worker;

pub use config::SearchConfig;
pub use engine::{SearchEngine, SearchOutcome};

use crate::alphabet::ALPHABET_SIZE;
use crate::board::{CELL_COUNT, CellLetters};

/// The historical starting board, used when the caller supplies no seed.
pub const DEFAULT_SEED_BOARD: &str = "AGRIMODAOLSTECETISMNGPART";

/// Visit every single-letter deviation of a board: each cell except the
/// locked one, replaced by each of the 13 other letters. The callback
/// receives the deviated cells and the changed cell index.
pub(crate) fn for_each_deviation<F>(cells: &CellLetters, locked_cell: Option<u8>, mut visit: F)
where
    F: FnMut(CellLetters, u8),
{
    for cell in 0..CELL_COUNT {
        if locked_cell == Some(cell as u8) {
            continue;
        }
        let original = cells[cell];
        for letter in 0..ALPHABET_SIZE as u8 {
            if letter == original {
                continue;
            }
            let mut deviated = *cells;
            deviated[cell] = letter;
            visit(deviated, cell as u8);
        }
    }
}
