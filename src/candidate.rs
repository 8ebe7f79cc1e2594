//! Scored board candidates and batch sorting.
//!
//! A candidate is a board, the cell whose change produced it (the "locked"
//! cell, excluded from further deviation so a round never immediately
//! reverts its own step), and a score. The locked cell and score never
//! participate in board identity.

use std::fmt;

use crate::alphabet::{self, letter_at};
use crate::board::{Board, CELL_COUNT, CellLetters};
use crate::error::{BogglerError, Result};

/// A board string with its score and optional locked cell.
#[derive(Debug, Clone, Copy)]
pub struct Candidate {
    /// The board cells; this alone is the candidate's identity.
    pub cells: CellLetters,
    /// The cell changed to produce this board, if any.
    pub locked_cell: Option<u8>,
    /// The board's total score.
    pub score: u32,
}

impl Candidate {
    /// Create a candidate.
    pub fn new(cells: CellLetters, locked_cell: Option<u8>, score: u32) -> Self {
        Candidate {
            cells,
            locked_cell,
            score,
        }
    }

    /// Parse a board string: 25 letters, optionally followed by a 2-digit
    /// zero-padded locked-cell suffix. The score starts at zero.
    pub fn parse(s: &str) -> Result<Self> {
        let bytes = s.as_bytes();
        let locked_cell = match bytes.len() {
            CELL_COUNT => None,
            27 => {
                let suffix = &bytes[CELL_COUNT..];
                if !suffix.iter().all(u8::is_ascii_digit) {
                    // Byte 25 need not be a char boundary, so never slice
                    // the str here.
                    return Err(BogglerError::invalid_board(format!(
                        "locked-cell suffix {:?} is not two digits",
                        String::from_utf8_lossy(suffix)
                    )));
                }
                let cell = (suffix[0] - b'0') * 10 + (suffix[1] - b'0');
                if cell as usize >= CELL_COUNT {
                    return Err(BogglerError::invalid_board(format!(
                        "locked cell {cell} out of range"
                    )));
                }
                Some(cell)
            }
            n => {
                return Err(BogglerError::invalid_board(format!(
                    "board string must be {CELL_COUNT} or 27 characters, got {n}"
                )));
            }
        };

        let mut cells = [0u8; CELL_COUNT];
        for (i, &b) in bytes[..CELL_COUNT].iter().enumerate() {
            cells[i] = alphabet::letter_index(b)?;
        }
        Ok(Candidate::new(cells, locked_cell, 0))
    }

    /// The candidate as a populated board.
    pub fn board(&self) -> Board {
        Board::from_cells(self.cells)
    }

    /// The bare 25-character board string, without the suffix.
    pub fn board_string(&self) -> String {
        self.cells.iter().map(|&c| letter_at(c) as char).collect()
    }
}

impl fmt::Display for Candidate {
    /// The full board string, with the locked-cell suffix when present.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.board_string())?;
        if let Some(cell) = self.locked_cell {
            write!(f, "{cell:02}")?;
        }
        Ok(())
    }
}

/// Sort a batch of candidates by score, highest first. Stable: candidates
/// with equal scores keep their discovery order. Batches run to a few
/// thousand entries per worker per round; only the top few dozen matter
/// downstream, but the whole batch is ordered so the consumer can stop at
/// its cutoff.
pub fn sort_candidates_descending(candidates: &mut [Candidate]) {
    candidates.sort_by(|a, b| b.score.cmp(&a.score));
}
