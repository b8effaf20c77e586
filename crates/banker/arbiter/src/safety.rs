//! Safety Checker.
//!
//! A state is *safe* when some ordering of task completions exists in which
//! every task's remaining need can be met from the work pool, with each
//! finishing task returning its allocation to the pool.
//!
//! The primary algorithm simulates completions over a FIFO of pending tasks.
//! Each entry carries a tag: the number of finished tasks that must be reached
//! before the entry may be retried. A deferred task is re-queued with tag
//! `finished + 1`. If a task comes back to the front while `finished` is still
//! below its tag, nothing has finished since it was deferred. Every other
//! pending task has then been tried against the same work pool, so no task can
//! progress and the state is unsafe. Each task is deferred at most `n` times,
//! so the loop is bounded by `n²` steps.

use std::collections::VecDeque;

use banker_types::{vector_le, ResourceVector, VectorError};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// Verdict of a safety simulation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SafetyReport {
    /// Tasks in the order they were shown able to finish
    pub sequence: Vec<usize>,
    /// Tasks that could not finish (empty when safe)
    pub blocked: Vec<usize>,
    /// Need-versus-work comparisons the simulation performed
    pub steps: usize,
}

impl SafetyReport {
    pub fn is_safe(&self) -> bool {
        self.blocked.is_empty()
    }
}

/// Shape mismatches must have been rejected by the validator; reaching one
/// here is a programming error.
fn expect_shape<T>(result: Result<T, VectorError>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => panic!("safety check on malformed resource state: {err}"),
    }
}

/// Is the state safe?
///
/// # Panics
///
/// Panics if the rows of `allocation` and `need` do not all match the length
/// of `available`, or if `need` has fewer rows than `allocation`.
pub fn is_safe(
    available: &ResourceVector,
    allocation: &[ResourceVector],
    need: &[ResourceVector],
) -> bool {
    assess(available, allocation, need).is_safe()
}

/// Run the tagged-FIFO simulation and report the completion order.
///
/// # Panics
///
/// Same preconditions as [`is_safe`].
pub fn assess(
    available: &ResourceVector,
    allocation: &[ResourceVector],
    need: &[ResourceVector],
) -> SafetyReport {
    let mut work = available.clone();
    let mut pending: VecDeque<(usize, usize)> = (0..allocation.len()).map(|id| (id, 0)).collect();
    let mut sequence = Vec::with_capacity(allocation.len());
    let mut steps = 0;

    while let Some(&(id, tag)) = pending.front() {
        let finished = sequence.len();
        if finished < tag {
            let blocked: Vec<usize> = pending.iter().map(|&(id, _)| id).collect();
            debug!(
                finished,
                blocked = ?blocked,
                work = %work,
                "State is unsafe: no pending task can finish"
            );
            return SafetyReport {
                sequence,
                blocked,
                steps,
            };
        }
        pending.pop_front();
        steps += 1;

        if expect_shape(vector_le(&need[id], &work)) {
            work.saturating_add_assign(&allocation[id]);
            sequence.push(id);
            trace!(task = id, tag, finished = sequence.len(), work = %work, "Task can finish");
        } else {
            pending.push_back((id, finished + 1));
            trace!(task = id, tag = finished + 1, finished, "Task cannot finish yet, deferred");
        }
    }

    debug!(sequence = ?sequence, steps, "State is safe");
    SafetyReport {
        sequence,
        blocked: Vec::new(),
        steps,
    }
}

/// Classical formulation: repeatedly scan for an unfinished task whose need
/// fits in the work pool, until a full pass finds none.
///
/// Reaches the same verdict as [`assess`]. The completion order may differ.
///
/// # Panics
///
/// Same preconditions as [`is_safe`].
pub fn assess_exhaustive(
    available: &ResourceVector,
    allocation: &[ResourceVector],
    need: &[ResourceVector],
) -> SafetyReport {
    let mut work = available.clone();
    let mut finished = vec![false; allocation.len()];
    let mut sequence = Vec::with_capacity(allocation.len());
    let mut steps = 0;

    loop {
        let mut progressed = false;
        for id in 0..allocation.len() {
            if finished[id] {
                continue;
            }
            steps += 1;
            if !expect_shape(vector_le(&need[id], &work)) {
                continue;
            }
            work.saturating_add_assign(&allocation[id]);
            finished[id] = true;
            sequence.push(id);
            progressed = true;
        }
        if !progressed {
            break;
        }
    }

    let blocked: Vec<usize> = (0..allocation.len()).filter(|&id| !finished[id]).collect();
    debug!(
        safe = blocked.is_empty(),
        sequence = ?sequence,
        "Exhaustive safety scan complete"
    );
    SafetyReport {
        sequence,
        blocked,
        steps,
    }
}
