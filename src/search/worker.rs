//! Scoring worker threads.
//!
//! Each worker owns (at most) one [`MarkTable`] and answers round jobs:
//! expand a slice of boards into their single-letter deviations, score
//! every deviation, and hand back the batch sorted best-first. Table
//! ownership moves over the channels themselves; a worker asked to score
//! without a table, or handed a second one, reports a fatal handoff
//! violation rather than guessing.

use std::sync::Arc;
use std::thread::JoinHandle;

use crossbeam_channel::{Receiver, Sender};

use crate::board::Board;
use crate::candidate::{Candidate, sort_candidates_descending};
use crate::error::{BogglerError, Result};
use crate::lexicon::{LexiconGraph, MarkTable};
use crate::scorer::Scorer;
use crate::search::for_each_deviation;

/// One unit of work sent to a worker.
pub(crate) enum Job {
    /// Expand and score one round's board slice. `marks` carries a mark
    /// table the worker should adopt; `hand_back` asks the worker to
    /// return its table with the results.
    Round {
        boards: Vec<Candidate>,
        marks: Option<MarkTable>,
        hand_back: bool,
    },
    /// Exit the worker loop.
    Shutdown,
}

/// A worker's answer to a round job.
#[derive(Debug)]
pub(crate) struct RoundDone {
    /// Index of the answering worker.
    pub worker: usize,
    /// Every scored deviation, sorted by score descending.
    pub batch: Vec<Candidate>,
    /// The worker's mark table, present only when the job asked for it.
    pub marks: Option<MarkTable>,
}

/// Spawn one worker thread. The thread runs until it receives
/// [`Job::Shutdown`], its job channel closes, or a handoff violation
/// makes further scoring meaningless.
pub(crate) fn spawn(
    index: usize,
    graph: Arc<LexiconGraph>,
    jobs: Receiver<Job>,
    done: Sender<Result<RoundDone>>,
) -> Result<JoinHandle<()>> {
    let handle = std::thread::Builder::new()
        .name(format!("boggler-worker-{index}"))
        .spawn(move || run(index, graph, jobs, done))?;
    Ok(handle)
}

fn run(index: usize, graph: Arc<LexiconGraph>, jobs: Receiver<Job>, done: Sender<Result<RoundDone>>) {
    let scorer = Scorer::new(&graph);
    let mut table: Option<MarkTable> = None;

    while let Ok(job) = jobs.recv() {
        let (boards, incoming, hand_back) = match job {
            Job::Round {
                boards,
                marks,
                hand_back,
            } => (boards, marks, hand_back),
            Job::Shutdown => break,
        };

        if let Some(marks) = incoming {
            if table.is_some() {
                let _ = done.send(Err(BogglerError::mark_handoff(format!(
                    "worker {index} was handed a second mark table"
                ))));
                break;
            }
            table = Some(marks);
        }
        let Some(marks) = table.as_mut() else {
            let _ = done.send(Err(BogglerError::mark_handoff(format!(
                "worker {index} asked to score without a mark table"
            ))));
            break;
        };

        let mut batch = expand_and_score(&scorer, marks, &boards);
        sort_candidates_descending(&mut batch);

        let marks = if hand_back { table.take() } else { None };
        if done
            .send(Ok(RoundDone {
                worker: index,
                batch,
                marks,
            }))
            .is_err()
        {
            break;
        }
    }
}

/// Score every single-letter deviation of every board in the slice. Each
/// result is tagged with the cell that changed, so the next round will
/// not immediately revert it.
fn expand_and_score(scorer: &Scorer<'_>, marks: &mut MarkTable, boards: &[Candidate]) -> Vec<Candidate> {
    let mut batch = Vec::new();
    for seed in boards {
        for_each_deviation(&seed.cells, seed.locked_cell, |cells, changed| {
            let score = scorer.score(&Board::from_cells(cells), marks);
            batch.push(Candidate::new(cells, Some(changed), score));
        });
    }
    batch
}
