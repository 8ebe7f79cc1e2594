//! The reduced lexicon character set and the word score table.
//!
//! The lexicon keeps only the 14 letters with meaningful presence in the
//! source word list; every board cell and every graph edge is one of them.

use crate::error::{BogglerError, Result};

/// Number of letters in the reduced character set.
pub const ALPHABET_SIZE: usize = 14;

/// The character set, in graph order. A letter's position here is its
/// letter index throughout the crate.
pub const CHARACTER_SET: [u8; ALPHABET_SIZE] = *b"ACDEGILMNOPRST";

/// Longest word length represented in the lexicon (TWL06 caps at 15).
pub const MAX_WORD_LENGTH: usize = 15;

/// Boggle points for a word, indexed by word length.
pub const SCORE_CARD: [u32; MAX_WORD_LENGTH + 1] =
    [0, 0, 0, 1, 1, 2, 3, 5, 11, 11, 11, 11, 11, 11, 11, 11];

/// Map an uppercase ASCII letter to its index in [`CHARACTER_SET`].
///
/// Letters outside the character set are a caller contract violation and
/// are rejected, never substituted.
pub fn letter_index(letter: u8) -> Result<u8> {
    match CHARACTER_SET.iter().position(|&c| c == letter) {
        Some(index) => Ok(index as u8),
        None => Err(BogglerError::invalid_board(format!(
            "letter '{}' is not in the character set",
            letter as char
        ))),
    }
}

/// The letter at a given index.
#[inline]
pub fn letter_at(index: u8) -> u8 {
    CHARACTER_SET[index as usize]
}
