//! Splits one logical enumeration across a fixed pool of worker threads.
//!
//! Worker `i` of `W` owns the completions whose position in the deck's
//! combination order satisfies `pos % W == i`. Every worker re-derives that
//! order from its own immutable deck snapshot, so the partitions are
//! disjoint and exhaustive with zero runtime coordination, and the merged
//! tally is bit-identical to a single-worker run for any `W >= 1`.

use std::collections::VecDeque;
use std::sync::Mutex;
use std::thread;

use crate::enumerate::{enumerate_partition, Spot, Tally};
use crate::error::{EquityError, EquityResult};

/// Self-contained work unit: which slice of the enumeration to run, plus
/// everything needed to run it.
#[derive(Debug, Clone)]
pub struct PartitionTask {
    pub index: usize,
    pub of: usize,
    pub spot: Spot,
}

impl PartitionTask {
    pub fn run(&self) -> EquityResult<Tally> {
        enumerate_partition(&self.spot, self.index, self.of)
    }
}

/// Non-blocking pop. `None` both when the queue is empty and when it is
/// poisoned; either way the worker winds down cleanly.
fn try_pop(queue: &Mutex<VecDeque<PartitionTask>>) -> Option<PartitionTask> {
    queue.lock().ok()?.pop_front()
}

/// Run a spot's enumeration on `workers` threads and merge the tallies.
///
/// Each worker accumulates into a tally it exclusively owns; the merge
/// happens strictly after every worker has terminated, so the result is
/// independent of scheduling and thread interleaving.
pub fn partition_and_run(spot: &Spot, workers: usize) -> EquityResult<Tally> {
    if workers == 0 {
        return Err(EquityError::InvalidValue(
            "worker count must be at least 1".to_string(),
        ));
    }

    let queue: Mutex<VecDeque<PartitionTask>> = Mutex::new(
        (0..workers)
            .map(|index| PartitionTask {
                index,
                of: workers,
                spot: spot.clone(),
            })
            .collect(),
    );

    let tallies: Vec<EquityResult<Tally>> = thread::scope(|s| {
        let handles: Vec<_> = (0..workers)
            .map(|_| {
                s.spawn(|| -> EquityResult<Tally> {
                    let mut tally = Tally::default();
                    while let Some(task) = try_pop(&queue) {
                        tally += task.run()?;
                    }
                    Ok(tally)
                })
            })
            .collect();
        handles
            .into_iter()
            .map(|h| match h.join() {
                Ok(result) => result,
                // A worker panic (e.g. memory exhaustion mid-enumeration)
                // must abort the whole computation, never surface as an
                // under-counted tally.
                Err(payload) => std::panic::resume_unwind(payload),
            })
            .collect()
    });

    let mut merged = Tally::default();
    for tally in tallies {
        merged += tally?;
    }
    Ok(merged)
}
