//! Loading and querying the four-part compressed lexicon graph.
//!
//! Layout (all little-endian):
//!
//! - Part 1: `u32` node count, then that many packed 32-bit node records.
//!   Bits 0..14 hold the first-child index (0 = leaf), bits 15..25 an index
//!   into the child offset table, bit 26 the end-of-word flag. Node 0 is
//!   the implicit null sentinel; the top-level node for letter index `i`
//!   is `i + 1`.
//! - Part 2: `u64` table size, then that many packed 64-bit child offset
//!   patterns. Each pattern stores, for every letter present as a child,
//!   that child's 1-based position among the node's children in a
//!   letter-specific bit field. Patterns are deduplicated across the
//!   graph; many nodes share an identical child set.
//! - Part 3: `u32` count, then that many 32-bit word-rank values for the
//!   leading nodes whose counts exceed a byte.
//! - Part 4: one byte per remaining node, ascending node index.
//!
//! The word rank of a node is the number of complete words reachable from
//! it through the end of its sibling list; the scorer combines these
//! incrementally into per-word markers (see [`crate::scorer`]).

use std::io::Cursor;
use std::path::Path;

use byteorder::{LittleEndian, ReadBytesExt};

use crate::alphabet::ALPHABET_SIZE;
use crate::error::{BogglerError, Result};

/// Standard file names of the four lexicon parts.
pub const PART_FILE_NAMES: [&str; 4] = [
    "Four_Part_1_DTDAWG_For_Lexicon_14.dat",
    "Four_Part_2_DTDAWG_For_Lexicon_14.dat",
    "Four_Part_3_DTDAWG_For_Lexicon_14.dat",
    "Four_Part_4_DTDAWG_For_Lexicon_14.dat",
];

const CHILD_START_MASK: u32 = 0x7FFF;
const OFFSET_SLOT_MASK: u32 = 0x3FF_8000;
const OFFSET_SLOT_SHIFT: u32 = 15;
const WORD_FLAG: u32 = 1 << 26;

/// Bit position of each letter's field inside an offset pattern.
const LETTER_FIELD_SHIFTS: [u32; ALPHABET_SIZE] =
    [0, 1, 3, 5, 8, 11, 14, 17, 21, 25, 29, 33, 37, 41];

/// Field widths, sized to each letter's maximum observed fan-out.
const LETTER_FIELD_WIDTHS: [u32; ALPHABET_SIZE] = [1, 2, 2, 3, 3, 3, 3, 4, 4, 4, 4, 4, 4, 4];

const LETTER_FIELD_MASKS: [u64; ALPHABET_SIZE] = build_letter_field_masks();

const fn build_letter_field_masks() -> [u64; ALPHABET_SIZE] {
    let mut masks = [0u64; ALPHABET_SIZE];
    let mut i = 0;
    while i < ALPHABET_SIZE {
        masks[i] = ((1u64 << LETTER_FIELD_WIDTHS[i]) - 1) << LETTER_FIELD_SHIFTS[i];
        i += 1;
    }
    masks
}

/// One packed node record.
#[derive(Debug, Clone, Copy)]
pub struct NodeRecord(u32);

impl NodeRecord {
    /// Index of this node's first child; 0 means leaf. A node's children
    /// occupy a contiguous index range starting here.
    #[inline]
    pub fn child_start(self) -> u32 {
        self.0 & CHILD_START_MASK
    }

    /// Index into the child offset table.
    #[inline]
    pub fn offset_slot(self) -> u32 {
        (self.0 & OFFSET_SLOT_MASK) >> OFFSET_SLOT_SHIFT
    }

    /// Whether a word ends at this node.
    #[inline]
    pub fn is_word(self) -> bool {
        self.0 & WORD_FLAG != 0
    }
}

/// The immutable, memory-resident lexicon graph.
#[derive(Debug)]
pub struct LexiconGraph {
    /// Packed node records; index 0 is the null sentinel.
    nodes: Vec<u32>,
    /// Deduplicated child offset patterns.
    offsets: Vec<u64>,
    /// Word rank per node; index 0 is the null sentinel.
    word_ranks: Vec<u32>,
    /// Total complete words in the lexicon.
    word_count: u32,
}

impl LexiconGraph {
    /// Load the graph from the four standard part files in a directory.
    pub fn load_dir<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref();
        let mut parts = Vec::with_capacity(4);
        for name in PART_FILE_NAMES {
            parts.push(std::fs::read(dir.join(name))?);
        }
        Self::from_parts(&parts[0], &parts[1], &parts[2], &parts[3])
    }

    /// Build the graph from the raw bytes of the four parts.
    ///
    /// Every section length is validated against its declared count before
    /// anything is kept; a mismatch fails with no partially loaded graph.
    pub fn from_parts(part1: &[u8], part2: &[u8], part3: &[u8], part4: &[u8]) -> Result<Self> {
        let node_count = read_section_count_u32(part1, "part 1")?;
        expect_len(part1, 4 + 4 * node_count as usize, "part 1")?;
        if (node_count as usize) < ALPHABET_SIZE {
            return Err(BogglerError::corrupt_lexicon(format!(
                "part 1 declares {node_count} nodes, fewer than the {ALPHABET_SIZE} top-level entries"
            )));
        }
        if node_count > CHILD_START_MASK {
            return Err(BogglerError::corrupt_lexicon(format!(
                "part 1 declares {node_count} nodes, beyond the addressable {CHILD_START_MASK}"
            )));
        }

        let table_size = {
            let mut cursor = Cursor::new(part2);
            cursor
                .read_u64::<LittleEndian>()
                .map_err(|_| BogglerError::corrupt_lexicon("part 2 is missing its size header"))?
        };
        expect_len(part2, 8 + 8 * table_size as usize, "part 2")?;

        let high_count = read_section_count_u32(part3, "part 3")?;
        if high_count > node_count {
            return Err(BogglerError::corrupt_lexicon(format!(
                "part 3 declares {high_count} entries for only {node_count} nodes"
            )));
        }
        expect_len(part3, 4 + 4 * high_count as usize, "part 3")?;
        expect_len(part4, (node_count - high_count) as usize, "part 4")?;

        let mut nodes = Vec::with_capacity(node_count as usize + 1);
        nodes.push(0);
        let mut cursor = Cursor::new(&part1[4..]);
        for _ in 0..node_count {
            nodes.push(cursor.read_u32::<LittleEndian>()?);
        }

        let mut offsets = Vec::with_capacity(table_size as usize);
        let mut cursor = Cursor::new(&part2[8..]);
        for _ in 0..table_size {
            offsets.push(cursor.read_u64::<LittleEndian>()?);
        }

        let mut word_ranks = Vec::with_capacity(node_count as usize + 1);
        word_ranks.push(0);
        let mut cursor = Cursor::new(&part3[4..]);
        for _ in 0..high_count {
            word_ranks.push(cursor.read_u32::<LittleEndian>()?);
        }
        for &byte in part4 {
            word_ranks.push(byte as u32);
        }

        // Index bounds, checked once here so traversal can stay unchecked
        // of everything but array length.
        for (index, &raw) in nodes.iter().enumerate().skip(1) {
            let record = NodeRecord(raw);
            if record.child_start() > node_count {
                return Err(BogglerError::corrupt_lexicon(format!(
                    "node {index} points at child {} beyond node count {node_count}",
                    record.child_start()
                )));
            }
            if record.child_start() != 0 && record.offset_slot() as u64 >= table_size {
                return Err(BogglerError::corrupt_lexicon(format!(
                    "node {index} references offset slot {} beyond table size {table_size}",
                    record.offset_slot()
                )));
            }
        }

        // Node 1 heads the full top-level sibling list, so its word rank
        // is the lexicon's total word count.
        let word_count = word_ranks[1];

        Ok(LexiconGraph {
            nodes,
            offsets,
            word_ranks,
            word_count,
        })
    }

    /// Number of nodes, excluding the null sentinel.
    pub fn node_count(&self) -> u32 {
        (self.nodes.len() - 1) as u32
    }

    /// Total complete words in the lexicon. Word markers are dense in
    /// `[1, word_count]`.
    pub fn word_count(&self) -> u32 {
        self.word_count
    }

    /// The top-level node for a letter index.
    #[inline]
    pub fn root(letter: u8) -> u32 {
        letter as u32 + 1
    }

    /// The packed record of a node.
    #[inline]
    pub fn node(&self, node: u32) -> NodeRecord {
        NodeRecord(self.nodes[node as usize])
    }

    /// A raw child offset pattern.
    #[inline]
    pub fn offset_pattern(&self, slot: u32) -> u64 {
        self.offsets[slot as usize]
    }

    /// The word rank (words to end of branch list) of a node.
    #[inline]
    pub fn word_rank(&self, node: u32) -> u32 {
        self.word_ranks[node as usize]
    }

    /// Offset of a letter within a child range, taken from a pattern.
    /// `None` means the letter is not a valid continuation. O(1) in the
    /// node's branching factor; this replaces a linear sibling scan.
    #[inline]
    pub fn child_offset(pattern: u64, letter: u8) -> Option<u32> {
        let field = pattern & LETTER_FIELD_MASKS[letter as usize];
        if field == 0 {
            None
        } else {
            Some((field >> LETTER_FIELD_SHIFTS[letter as usize]) as u32 - 1)
        }
    }

    /// The child of a node along a letter, if that continuation exists.
    #[inline]
    pub fn child(&self, node: u32, letter: u8) -> Option<u32> {
        let record = self.node(node);
        let start = record.child_start();
        if start == 0 {
            return None;
        }
        let pattern = self.offset_pattern(record.offset_slot());
        Self::child_offset(pattern, letter).map(|offset| start + offset)
    }
}

fn read_section_count_u32(bytes: &[u8], part: &str) -> Result<u32> {
    let mut cursor = Cursor::new(bytes);
    cursor
        .read_u32::<LittleEndian>()
        .map_err(|_| BogglerError::corrupt_lexicon(format!("{part} is missing its size header")))
}

fn expect_len(bytes: &[u8], expected: usize, part: &str) -> Result<()> {
    if bytes.len() != expected {
        return Err(BogglerError::corrupt_lexicon(format!(
            "{part} is {} bytes, expected {expected}",
            bytes.len()
        )));
    }
    Ok(())
}
