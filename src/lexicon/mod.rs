//! The compressed lexicon graph and its word-marker machinery.
//!
//! The graph is a four-part binary artifact produced offline (an ADTDAWG:
//! a DAWG with complete child-set information packed per node). At runtime
//! it is three read-only arrays: packed node records, deduplicated child
//! offset patterns, and per-node word counts that let a traversal derive a
//! dense, path-independent marker for every end-of-word node without a
//! hash table on the hot path.

pub mod graph;
pub mod marks;

pub use graph::LexiconGraph;
pub use marks::MarkTable;
