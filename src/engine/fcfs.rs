//! First-Come, First-Served.
//!
//! # Algorithm
//!
//! 1. Stable-sort processes by `(arrival, original_index)`.
//! 2. For each process: idle until its arrival if the server is ahead
//!    of the clock, then run it to completion.
//!
//! # Complexity
//! O(n log n) for the sort, O(n) for the sweep.

use std::cmp::Ordering;

use super::trace::Trace;
use super::{Engine, Simulation};
use crate::models::CanonicalProcess;

/// First-Come, First-Served engine.
///
/// Dispatch order is arrival order; equal arrivals keep input order.
#[derive(Debug, Clone, Copy, Default)]
pub struct Fcfs;

impl Engine for Fcfs {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn run(&self, processes: &[CanonicalProcess]) -> Simulation {
        run_fcfs(processes)
    }

    fn description(&self) -> &'static str {
        "First-Come, First-Served"
    }
}

/// Runs a non-preemptive FCFS simulation.
pub fn run_fcfs(processes: &[CanonicalProcess]) -> Simulation {
    let mut order: Vec<&CanonicalProcess> = processes.iter().collect();
    order.sort_by(|a, b| arrival_order(a, b));

    let mut trace = Trace::with_capacity(processes.len());
    for process in order {
        trace.idle_until(process.arrival);
        trace.dispatch(process);
    }
    trace.finish()
}

/// `(arrival, original_index)` ascending.
pub(crate) fn arrival_order(a: &CanonicalProcess, b: &CanonicalProcess) -> Ordering {
    a.arrival
        .partial_cmp(&b.arrival)
        .unwrap_or(Ordering::Equal)
        .then(a.original_index.cmp(&b.original_index))
}
