//! Single-server execution recorder shared by all engines.
//!
//! Owns the simulation clock and appends rows and timeline blocks as
//! the engine dispatches processes. Idle gaps are only ever emitted
//! forward in time, so the recorded timeline is contiguous by
//! construction.
//!
//! # Precision
//! The clock is an `f64`. The normalizer drops any burst that does not
//! move the clock at its own arrival, but the clock may later run past
//! that arrival; once it is large enough a tiny burst rounds away and
//! its block has `start == end`. Keep time values well inside the
//! 2^53 integer range when exact accounting matters.

use tracing::{debug, trace};

use super::Simulation;
use crate::models::{CanonicalProcess, ResultRow, TimelineBlock};

/// Clock plus the rows and blocks recorded so far.
#[derive(Debug, Default)]
pub(crate) struct Trace {
    clock: f64,
    rows: Vec<ResultRow>,
    timeline: Vec<TimelineBlock>,
}

impl Trace {
    /// Starts an empty trace at t=0.
    pub(crate) fn with_capacity(processes: usize) -> Self {
        Self {
            clock: 0.0,
            rows: Vec::with_capacity(processes),
            // Worst case every dispatch is preceded by an idle gap
            timeline: Vec::with_capacity(processes * 2),
        }
    }

    /// Current clock.
    #[inline]
    pub(crate) fn now(&self) -> f64 {
        self.clock
    }

    /// Idles the server until `until`. No-op if the clock is already there.
    pub(crate) fn idle_until(&mut self, until: f64) {
        if until > self.clock {
            debug!(from = self.clock, to = until, "server idle");
            self.timeline.push(TimelineBlock::idle(self.clock, until));
            self.clock = until;
        }
    }

    /// Runs `process` to completion starting at the current clock.
    pub(crate) fn dispatch(&mut self, process: &CanonicalProcess) {
        let row = ResultRow::dispatched(
            process.pid.clone(),
            process.arrival,
            process.burst,
            self.clock,
        );
        trace!(pid = %row.pid, start = row.start, completion = row.completion, "dispatch");

        self.timeline.push(TimelineBlock::running(
            process.pid.clone(),
            row.start,
            row.completion,
        ));
        self.clock = row.completion;
        self.rows.push(row);
    }

    /// Finishes recording.
    pub(crate) fn finish(self) -> Simulation {
        Simulation {
            rows: self.rows,
            timeline: self.timeline,
        }
    }
}
