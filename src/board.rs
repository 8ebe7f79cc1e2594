//! The 5×5 board and its precomputed cell adjacency.
//!
//! Cells are numbered row-major, 0..25. Each cell's neighbors (up to 8,
//! fewer at edges and corners) are computed once into a static table; the
//! scorer only ever walks these slices.

use std::fmt;

use crate::alphabet::{self, letter_at};
use crate::error::{BogglerError, Result};

/// Board rows.
pub const ROWS: usize = 5;

/// Board columns.
pub const COLS: usize = 5;

/// Total cells on a board.
pub const CELL_COUNT: usize = ROWS * COLS;

/// A board as 25 letter indices, row-major. This is also the identity used
/// for dedup: two boards are equal iff their cells are equal.
pub type CellLetters = [u8; CELL_COUNT];

/// Per-cell neighbor lists: slot 0 holds the count, slots 1..=count the
/// neighboring cell numbers.
static NEIGHBOR_TABLE: [[u8; 9]; CELL_COUNT] = build_neighbor_table();

const fn build_neighbor_table() -> [[u8; 9]; CELL_COUNT] {
    let mut table = [[0u8; 9]; CELL_COUNT];
    let mut cell = 0;
    while cell < CELL_COUNT {
        let row = (cell / COLS) as isize;
        let col = (cell % COLS) as isize;
        let mut count = 0;
        let mut dr = -1isize;
        while dr <= 1 {
            let mut dc = -1isize;
            while dc <= 1 {
                if dr != 0 || dc != 0 {
                    let r = row + dr;
                    let c = col + dc;
                    if r >= 0 && r < ROWS as isize && c >= 0 && c < COLS as isize {
                        count += 1;
                        table[cell][count] = (r * COLS as isize + c) as u8;
                    }
                }
                dc += 1;
            }
            dr += 1;
        }
        table[cell][0] = count as u8;
        cell += 1;
    }
    table
}

/// The neighbors of a cell, as cell numbers.
#[inline]
pub fn neighbors(cell: usize) -> &'static [u8] {
    let entry = &NEIGHBOR_TABLE[cell];
    let count = entry[0] as usize;
    &entry[1..=count]
}

/// A populated board ready for scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: CellLetters,
}

impl Board {
    /// Build a board from letter indices.
    pub fn from_cells(cells: CellLetters) -> Self {
        Board { cells }
    }

    /// Parse a bare 25-character board string (no locked-cell suffix).
    ///
    /// Every letter must be in the lexicon character set.
    pub fn parse(s: &str) -> Result<Self> {
        let bytes = s.as_bytes();
        if bytes.len() != CELL_COUNT {
            return Err(BogglerError::invalid_board(format!(
                "board string must be {} characters, got {}",
                CELL_COUNT,
                bytes.len()
            )));
        }
        let mut cells = [0u8; CELL_COUNT];
        for (i, &b) in bytes.iter().enumerate() {
            cells[i] = alphabet::letter_index(b)?;
        }
        Ok(Board { cells })
    }

    /// The letter index at a cell.
    #[inline]
    pub fn letter(&self, cell: usize) -> u8 {
        self.cells[cell]
    }

    /// The raw cells.
    #[inline]
    pub fn cells(&self) -> &CellLetters {
        &self.cells
    }

    /// Render the board as a bordered grid for display.
    pub fn to_grid_string(&self) -> String {
        let rule = "-".repeat(COLS * 2 + 1);
        let mut out = String::new();
        out.push_str(&rule);
        out.push('\n');
        for row in 0..ROWS {
            for col in 0..COLS {
                out.push('|');
                out.push(letter_at(self.cells[row * COLS + col]) as char);
            }
            out.push_str("|\n");
            out.push_str(&rule);
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &c in &self.cells {
            write!(f, "{}", letter_at(c) as char)?;
        }
        Ok(())
    }
}
