//! Simulation output model.
//!
//! A report holds one [`ResultRow`] per dispatched process, the
//! contiguous execution [`TimelineBlock`] sequence (idle gaps included),
//! and the aggregate statistics derived from both.
//!
//! # Invariants
//! - `completion = start + burst`, `waiting = start - arrival`,
//!   `turnaround = completion - arrival = waiting + burst`.
//! - Rows are in dispatch order; completions strictly increase.
//! - `timeline[i].end == timeline[i + 1].start` for every adjacent pair.

use serde::{Deserialize, Serialize};

use crate::engine::{Discipline, Simulation};
use crate::stats::ReportStats;

/// Pid marker carried by idle timeline blocks.
///
/// A caller may use the same string as a real pid. Check
/// the `idle` flag of [`TimelineBlock`] to tell the two apart, never the pid.
pub const IDLE_PID: &str = "IDLE";

/// Execution record for a single dispatched process.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultRow {
    /// Process identifier.
    pub pid: String,
    /// Arrival time.
    pub arrival: f64,
    /// Burst duration.
    pub burst: f64,
    /// Dispatch instant.
    pub start: f64,
    /// Completion instant.
    pub completion: f64,
    /// Time spent ready but not running.
    pub waiting: f64,
    /// Time from arrival to completion.
    pub turnaround: f64,
}

impl ResultRow {
    /// Builds a row for a process dispatched at `start`.
    pub fn dispatched(pid: impl Into<String>, arrival: f64, burst: f64, start: f64) -> Self {
        let completion = start + burst;
        Self {
            pid: pid.into(),
            arrival,
            burst,
            start,
            completion,
            waiting: start - arrival,
            turnaround: completion - arrival,
        }
    }
}

/// A contiguous segment of the server's timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineBlock {
    /// Running process, or [`IDLE_PID`] for idle blocks.
    pub pid: String,
    /// Segment start.
    pub start: f64,
    /// Segment end.
    pub end: f64,
    /// `end - start`.
    pub duration: f64,
    /// Whether the server was idle.
    pub idle: bool,
}

impl TimelineBlock {
    /// Creates a block for a running process.
    pub fn running(pid: impl Into<String>, start: f64, end: f64) -> Self {
        Self {
            pid: pid.into(),
            start,
            end,
            duration: end - start,
            idle: false,
        }
    }

    /// Creates an idle block.
    pub fn idle(start: f64, end: f64) -> Self {
        Self {
            pid: IDLE_PID.to_string(),
            start,
            end,
            duration: end - start,
            idle: true,
        }
    }

    /// Share of `makespan` covered by this block (0 when makespan is 0).
    ///
    /// Presentation layers use this to size timeline segments.
    pub fn fraction_of(&self, makespan: f64) -> f64 {
        if makespan <= 0.0 {
            0.0
        } else {
            self.duration / makespan
        }
    }
}

/// Final output of a simulation call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Discipline that produced this report.
    pub discipline: Discipline,
    /// Per-process results in dispatch order.
    pub rows: Vec<ResultRow>,
    /// Contiguous execution timeline.
    pub timeline: Vec<TimelineBlock>,
    /// Mean waiting time.
    pub avg_waiting: f64,
    /// Mean turnaround time.
    pub avg_turnaround: f64,
    /// `timeline.last.end - timeline.first.start`, 0 if empty.
    pub makespan: f64,
    /// Total running time.
    pub busy_time: f64,
    /// Total idle time.
    pub idle_time: f64,
    /// `busy_time / makespan` (0 when makespan is 0).
    pub utilization: f64,
    /// Completed processes per time unit (0 when makespan is 0).
    pub throughput: f64,
}

impl Report {
    /// Assembles a report from an engine run.
    pub fn new(discipline: Discipline, simulation: Simulation) -> Self {
        let stats = ReportStats::calculate(&simulation.rows, &simulation.timeline);
        Self {
            discipline,
            rows: simulation.rows,
            timeline: simulation.timeline,
            avg_waiting: stats.avg_waiting,
            avg_turnaround: stats.avg_turnaround,
            makespan: stats.makespan,
            busy_time: stats.busy_time,
            idle_time: stats.idle_time,
            utilization: stats.utilization,
            throughput: stats.throughput,
        }
    }

    /// Finds the row for a given pid.
    pub fn row(&self, pid: &str) -> Option<&ResultRow> {
        self.rows.iter().find(|r| r.pid == pid)
    }

    /// Pids in dispatch order.
    pub fn dispatch_order(&self) -> Vec<&str> {
        self.rows.iter().map(|r| r.pid.as_str()).collect()
    }

    /// Idle segments of the timeline.
    pub fn idle_blocks(&self) -> Vec<&TimelineBlock> {
        self.timeline.iter().filter(|b| b.idle).collect()
    }

    /// Whether no process was scheduled.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of scheduled processes.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}
