//! The search coordinator.
//!
//! Owns the Master and Evaluate lists, the dedup sets, and the worker
//! pool. A run is a sequence of seeds; each seed is a fixed number of
//! deviation rounds. Every round is a strict two-phase barrier: one job
//! per worker out, exactly one completion per worker back, then a
//! single-threaded merge. Mark tables move between the coordinator and
//! the workers by value over the same channels; any routing violation is
//! fatal.

use std::sync::Arc;

use crossbeam_channel::{Receiver, Sender, unbounded};
use log::{debug, info};

use crate::board::Board;
use crate::candidate::Candidate;
use crate::dedup::DedupSet;
use crate::error::{BogglerError, Result};
use crate::lexicon::{LexiconGraph, MarkTable};
use crate::scorer::Scorer;
use crate::search::config::SearchConfig;
use crate::search::for_each_deviation;
use crate::search::worker::{self, Job, RoundDone};
use crate::topk::TopKList;

/// What a finished (or cleanly exhausted) run produced.
#[derive(Debug)]
pub struct SearchOutcome {
    /// The run's best boards, best-first.
    pub master: TopKList,
    /// Seeds actually expanded; less than the configured count when the
    /// Master list ran out of unseeded boards.
    pub seeds_run: usize,
    /// Total boards scored, across the coordinator and all workers.
    pub boards_scored: u64,
}

/// The hill-climbing search over a loaded lexicon.
pub struct SearchEngine {
    graph: Arc<LexiconGraph>,
    config: SearchConfig,
}

impl SearchEngine {
    /// Create an engine; the configuration is validated up front.
    pub fn new(graph: Arc<LexiconGraph>, config: SearchConfig) -> Result<Self> {
        config.validate()?;
        Ok(SearchEngine { graph, config })
    }

    /// Run the full search from the given starting boards. All starting
    /// boards are scored and placed on the Master list, then seeds are
    /// drawn from it best-first until the configured count is reached or
    /// no unseeded board remains.
    pub fn run(&self, starting_boards: &[Candidate]) -> Result<SearchOutcome> {
        if starting_boards.is_empty() {
            return Err(BogglerError::config("at least one starting board is required"));
        }
        info!(
            "search: {} seeds x {} rounds, {} boards/round on {} workers",
            self.config.seed_count,
            self.config.rounds,
            self.config.boards_per_round,
            self.config.workers
        );

        let mut job_senders = Vec::with_capacity(self.config.workers);
        let mut handles = Vec::with_capacity(self.config.workers);
        let (done_tx, done_rx) = unbounded();
        for index in 0..self.config.workers {
            let (job_tx, job_rx) = unbounded();
            handles.push(worker::spawn(
                index,
                Arc::clone(&self.graph),
                job_rx,
                done_tx.clone(),
            )?);
            job_senders.push(job_tx);
        }
        drop(done_tx);

        let outcome = self.drive(&job_senders, &done_rx, starting_boards);

        for sender in &job_senders {
            let _ = sender.send(Job::Shutdown);
        }
        drop(job_senders);
        for handle in handles {
            handle
                .join()
                .map_err(|_| BogglerError::internal("a worker thread panicked"))?;
        }
        outcome
    }

    /// The seed loop proper; workers are already running.
    fn drive(
        &self,
        jobs: &[Sender<Job>],
        done: &Receiver<Result<RoundDone>>,
        starting_boards: &[Candidate],
    ) -> Result<SearchOutcome> {
        let workers = self.config.workers;
        let scorer = Scorer::new(&self.graph);

        // All mark tables start with the coordinator and migrate to the
        // workers during each seed's first round.
        let mut held: Vec<Option<MarkTable>> = (0..workers)
            .map(|_| Some(MarkTable::new(self.graph.word_count())))
            .collect();

        let mut master = TopKList::new(self.config.master_capacity);
        let mut made_master = DedupSet::new();
        let mut seeded = DedupSet::new();
        let mut evaluated = DedupSet::new();
        let mut boards_scored: u64 = 0;

        {
            let marks = held[0]
                .as_mut()
                .ok_or_else(|| BogglerError::mark_handoff("startup table missing"))?;
            for board in starting_boards {
                let score = scorer.score(&board.board(), marks);
                boards_scored += 1;
                submit_master(
                    &mut master,
                    &mut made_master,
                    Candidate::new(board.cells, board.locked_cell, score),
                );
            }
        }

        let mut seeds_run = 0;
        for s in 0..self.config.seed_count {
            let Some(seed) = master.iter().find(|c| !seeded.contains(&c.cells)).copied()
            else {
                info!("seed list exhausted after {seeds_run} seeds, stopping early");
                break;
            };
            seeded.insert(seed.cells);
            evaluated.insert(seed.cells);
            debug!("seed {s}: {} (score {})", seed.board_string(), seed.score);

            let lender = s % workers;
            let next = (s + 1) % workers;
            let mut borrowed = Some(held[lender].take().ok_or_else(|| {
                BogglerError::mark_handoff(format!("table {lender} absent at seed start"))
            })?);

            // Pre-round: the seed's own full deviation neighborhood,
            // scored by the coordinator on the borrowed table.
            let mut evaluate = TopKList::new(self.config.evaluate_capacity);
            {
                let marks = borrowed.as_mut().ok_or_else(|| {
                    BogglerError::mark_handoff("borrowed table vanished before pre-round")
                })?;
                for_each_deviation(&seed.cells, None, |cells, changed| {
                    let score = scorer.score(&Board::from_cells(cells), marks);
                    boards_scored += 1;
                    let candidate = Candidate::new(cells, Some(changed), score);
                    submit_master(&mut master, &mut made_master, candidate);
                    if !evaluated.contains(&cells) {
                        evaluate.insert(candidate);
                    }
                });
            }

            for t in 0..self.config.rounds {
                let taken: Vec<Candidate> = evaluate
                    .iter()
                    .filter(|c| !evaluated.contains(&c.cells))
                    .take(self.config.boards_per_round)
                    .copied()
                    .collect();
                for c in &taken {
                    evaluated.insert(c.cells);
                }
                // The final round also happens when the Evaluate list has
                // nothing left; the dispatch still runs so the mark table
                // for the next seed comes home.
                let last = t + 1 == self.config.rounds || taken.is_empty();

                let mut slices: Vec<Vec<Candidate>> = vec![Vec::new(); workers];
                for (i, c) in taken.iter().enumerate() {
                    slices[i % workers].push(*c);
                }
                for (i, boards) in slices.into_iter().enumerate() {
                    let marks = if t == 0 {
                        if i == lender {
                            borrowed.take()
                        } else {
                            held[i].take()
                        }
                    } else {
                        None
                    };
                    jobs[i]
                        .send(Job::Round {
                            boards,
                            marks,
                            hand_back: last && i == next,
                        })
                        .map_err(|_| BogglerError::internal(format!("worker {i} is gone")))?;
                }

                let mut next_evaluate = TopKList::new(self.config.evaluate_capacity);
                let mut round_seen = DedupSet::new();
                let mut answered = vec![false; workers];
                for _ in 0..workers {
                    let round = done
                        .recv()
                        .map_err(|_| BogglerError::internal("completion channel closed"))??;
                    if std::mem::replace(&mut answered[round.worker], true) {
                        return Err(BogglerError::internal(format!(
                            "worker {} answered twice in one round",
                            round.worker
                        )));
                    }
                    if let Some(table) = round.marks {
                        if !(last && round.worker == next) {
                            return Err(BogglerError::mark_handoff(format!(
                                "unsolicited table from worker {}",
                                round.worker
                            )));
                        }
                        if held[next].replace(table).is_some() {
                            return Err(BogglerError::mark_handoff(format!(
                                "table {next} returned while already held"
                            )));
                        }
                    }
                    boards_scored += round.batch.len() as u64;
                    merge_batch(
                        &round.batch,
                        &mut master,
                        &mut made_master,
                        &mut next_evaluate,
                        &evaluated,
                        &mut round_seen,
                    );
                }
                if last && held[next].is_none() {
                    return Err(BogglerError::mark_handoff(format!(
                        "worker {next} kept its table past the final round"
                    )));
                }

                evaluate = next_evaluate;
                if taken.is_empty() {
                    break;
                }
            }

            seeds_run += 1;
        }

        info!(
            "search done: {} seeds, {} boards scored, best {}",
            seeds_run,
            boards_scored,
            master.get(0).map_or(0, |c| c.score)
        );
        Ok(SearchOutcome {
            master,
            seeds_run,
            boards_scored,
        })
    }
}

/// Submit a board to the Master list. A board that ever made the list is
/// never resubmitted, even after eviction; without this, evicted boards
/// near the cutoff churn back in round after round.
fn submit_master(master: &mut TopKList, made_master: &mut DedupSet, candidate: Candidate) {
    if made_master.contains(&candidate.cells) {
        return;
    }
    if master.insert(candidate) {
        made_master.insert(candidate.cells);
    }
}

/// Merge one worker's sorted batch. The batch is descending, so scanning
/// stops at the first score at or below both lists' cutoffs.
fn merge_batch(
    batch: &[Candidate],
    master: &mut TopKList,
    made_master: &mut DedupSet,
    evaluate: &mut TopKList,
    evaluated: &DedupSet,
    round_seen: &mut DedupSet,
) {
    for &candidate in batch {
        if candidate.score <= master.cutoff() && candidate.score <= evaluate.cutoff() {
            break;
        }
        if !round_seen.insert(candidate.cells) {
            continue;
        }
        submit_master(master, made_master, candidate);
        if !evaluated.contains(&candidate.cells) {
            evaluate.insert(candidate);
        }
    }
}
