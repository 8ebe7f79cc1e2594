//! Shared test fixtures: build the four-part lexicon encoding from a
//! plain word list, in memory or on disk. Fixture-only; the crate itself
//! never constructs lexicons.

#![allow(dead_code)]

use std::collections::{BTreeMap, VecDeque};
use std::fs;
use std::io;
use std::path::Path;

use byteorder::{LittleEndian, WriteBytesExt};

use boggler::alphabet::{self, ALPHABET_SIZE};
use boggler::lexicon::graph::PART_FILE_NAMES;

// Bit positions of each letter's child-rank field inside a packed
// offset-pattern entry.
const FIELD_SHIFTS: [u32; ALPHABET_SIZE] = [0, 1, 3, 5, 8, 11, 14, 17, 21, 25, 29, 33, 37, 41];

#[derive(Default)]
struct TrieNode {
    children: BTreeMap<u8, usize>,
    is_word: bool,
}

fn subtree_words(nodes: &[TrieNode], id: usize) -> u32 {
    let mut total = u32::from(nodes[id].is_word);
    for &child in nodes[id].children.values() {
        total += subtree_words(nodes, child);
    }
    total
}

/// Encode a word list as the four binary part buffers.
pub fn build_parts(words: &[&str]) -> [Vec<u8>; 4] {
    // Trie with a child for every alphabet letter at the top level, so
    // letter i always maps to node i + 1 even when no word starts with it.
    let mut nodes: Vec<TrieNode> = vec![TrieNode::default()];
    for letter in 0..ALPHABET_SIZE as u8 {
        let id = nodes.len();
        nodes.push(TrieNode::default());
        nodes[0].children.insert(letter, id);
    }
    for word in words {
        let mut current = 0usize;
        for &b in word.as_bytes() {
            let letter = alphabet::letter_index(b).expect("fixture word letter in set");
            current = match nodes[current].children.get(&letter) {
                Some(&next) => next,
                None => {
                    let id = nodes.len();
                    nodes.push(TrieNode::default());
                    nodes[current].children.insert(letter, id);
                    id
                }
            };
        }
        nodes[current].is_word = true;
    }

    // Final ids breadth-first so every sibling group is contiguous and in
    // letter order; the trie root stands in for the null node 0.
    let mut final_id = vec![0u32; nodes.len()];
    let mut by_final: Vec<usize> = Vec::new();
    let mut queue = VecDeque::from([0usize]);
    let mut next = 0u32;
    while let Some(t) = queue.pop_front() {
        for &child in nodes[t].children.values() {
            next += 1;
            final_id[child] = next;
            by_final.push(child);
            queue.push_back(child);
        }
    }
    let node_count = next;

    // Words-to-end-of-sibling-group, accumulated right to left within
    // each group.
    let mut wteobl = vec![0u32; node_count as usize + 1];
    for node in &nodes {
        let mut acc = 0;
        for &child in node.children.values().rev() {
            acc += subtree_words(&nodes, child);
            wteobl[final_id[child] as usize] = acc;
        }
    }

    // Deduplicated offset patterns; slot 0 is the empty pattern so
    // childless nodes can point at it.
    let mut patterns: Vec<u64> = vec![0];
    let mut records: Vec<u32> = Vec::with_capacity(node_count as usize);
    for &t in &by_final {
        let node = &nodes[t];
        let child_start = node
            .children
            .values()
            .next()
            .map_or(0, |&child| final_id[child]);
        let mut pattern = 0u64;
        for (position, (&letter, _)) in node.children.iter().enumerate() {
            pattern |= ((position as u64) + 1) << FIELD_SHIFTS[letter as usize];
        }
        let slot = match patterns.iter().position(|&p| p == pattern) {
            Some(slot) => slot as u32,
            None => {
                patterns.push(pattern);
                (patterns.len() - 1) as u32
            }
        };
        records.push(child_start | (slot << 15) | if node.is_word { 1 << 26 } else { 0 });
    }

    // Values past `high_count` must fit in one byte.
    let high_count = (1..=node_count as usize)
        .rev()
        .find(|&id| wteobl[id] > 255)
        .unwrap_or(0) as u32;
    assert!(
        wteobl[high_count as usize + 1..].iter().all(|&v| v <= 255),
        "word-rank byte section overflow"
    );

    let mut part1 = Vec::new();
    part1.write_u32::<LittleEndian>(node_count).unwrap();
    for &record in &records {
        part1.write_u32::<LittleEndian>(record).unwrap();
    }
    let mut part2 = Vec::new();
    part2.write_u64::<LittleEndian>(patterns.len() as u64).unwrap();
    for &pattern in &patterns {
        part2.write_u64::<LittleEndian>(pattern).unwrap();
    }
    let mut part3 = Vec::new();
    part3.write_u32::<LittleEndian>(high_count).unwrap();
    for id in 1..=high_count as usize {
        part3.write_u32::<LittleEndian>(wteobl[id]).unwrap();
    }
    let part4: Vec<u8> = (high_count as usize + 1..=node_count as usize)
        .map(|id| wteobl[id] as u8)
        .collect();

    [part1, part2, part3, part4]
}

/// Write the four part files under `dir` with their standard names.
pub fn write_lexicon_dir(dir: &Path, words: &[&str]) -> io::Result<()> {
    let parts = build_parts(words);
    for (name, bytes) in PART_FILE_NAMES.iter().zip(parts.iter()) {
        fs::write(dir.join(name), bytes)?;
    }
    Ok(())
}

/// A word list exercising shared prefixes, nested words, and most of the
/// alphabet.
pub const SAMPLE_WORDS: &[&str] = &[
    "ACT", "CAT", "CATS", "DOG", "DOGS", "GOLD", "GRIND", "LEMON", "MELON", "PEARL", "PLATE",
    "PLATES", "SALT", "SAND", "STONE", "STONES", "TOAST",
];
