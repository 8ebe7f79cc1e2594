//! Criterion benchmarks for the boggler scoring path.

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};

use boggler::board::Board;
use boggler::candidate::{Candidate, sort_candidates_descending};
use boggler::lexicon::{LexiconGraph, MarkTable};
use boggler::scorer::Scorer;
use boggler::topk::TopKList;

#[path = "../tests/common/mod.rs"]
mod common;

fn fixture_graph() -> LexiconGraph {
    let parts = common::build_parts(common::SAMPLE_WORDS);
    LexiconGraph::from_parts(&parts[0], &parts[1], &parts[2], &parts[3]).unwrap()
}

/// One full-board scoring pass.
fn bench_score_board(c: &mut Criterion) {
    let graph = fixture_graph();
    let scorer = Scorer::new(&graph);
    let mut marks = MarkTable::new(graph.word_count());
    let board = Board::parse("AGRIMODAOLSTECETISMNGPART").unwrap();

    c.bench_function("score_board", |b| {
        b.iter(|| scorer.score(black_box(&board), &mut marks))
    });
}

/// Sorting a worker-sized batch of scored candidates.
fn bench_sort_batch(c: &mut Criterion) {
    let cells = Board::parse("AGRIMODAOLSTECETISMNGPART")
        .unwrap()
        .cells()
        .to_owned();
    let batch: Vec<Candidate> = (0..4096u32)
        .map(|i| Candidate::new(cells, None, i.wrapping_mul(2654435761) % 1000))
        .collect();

    c.bench_function("sort_batch_4096", |b| {
        b.iter(|| {
            let mut copy = batch.clone();
            sort_candidates_descending(black_box(&mut copy));
            copy
        })
    });
}

/// Master-list submission pressure with mostly-rejected scores.
fn bench_topk_insert(c: &mut Criterion) {
    let base = Board::parse("AGRIMODAOLSTECETISMNGPART")
        .unwrap()
        .cells()
        .to_owned();

    c.bench_function("topk_insert_1026", |b| {
        b.iter(|| {
            let mut list = TopKList::new(1026);
            for i in 0..4096u32 {
                let mut cells = base;
                cells[(i % 25) as usize] = (i % 14) as u8;
                cells[((i / 25) % 25) as usize] = ((i / 14) % 14) as u8;
                list.insert(Candidate::new(cells, None, i.wrapping_mul(2654435761) % 1000));
            }
            list
        })
    });
}

criterion_group!(
    benches,
    bench_score_board,
    bench_sort_batch,
    bench_topk_insert
);
criterion_main!(benches);
