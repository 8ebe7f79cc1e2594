//! # boggler
//!
//! Deep search for high-scoring 5x5 Boggle boards over a 14-letter
//! reduced alphabet.
//!
//! ## Features
//!
//! - Compressed lexicon graph with O(1) child transitions
//! - Path-independent word markers for hash-free duplicate detection
//! - Concurrent round-based hill climbing with bounded top-K lists
//! - One-off board scoring

pub mod alphabet;
pub mod board;
pub mod candidate;
pub mod cli;
pub mod dedup;
pub mod error;
pub mod lexicon;
pub mod scorer;
pub mod search;
pub mod topk;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
