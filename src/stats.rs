//! Simulation statistics.
//!
//! Reduces result rows and the timeline into summary figures.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Avg Waiting | sum(waiting) / max(1, rows) |
//! | Avg Turnaround | sum(turnaround) / max(1, rows) |
//! | Makespan | last block end - first block start (0 if empty) |
//! | Busy / Idle | Summed durations of running / idle blocks |
//! | Utilization | busy / makespan |
//! | Throughput | rows / makespan |
//!
//! Empty input yields all zeros rather than a division error.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2: Scheduling Criteria

use serde::{Deserialize, Serialize};

use crate::models::{ResultRow, TimelineBlock};

/// Aggregate figures for one simulation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportStats {
    /// Mean waiting time.
    pub avg_waiting: f64,
    /// Mean turnaround time.
    pub avg_turnaround: f64,
    /// Span of the timeline, idle gaps included.
    pub makespan: f64,
    /// Time spent running processes.
    pub busy_time: f64,
    /// Time spent idle.
    pub idle_time: f64,
    /// Fraction of the makespan spent busy (0.0..=1.0).
    pub utilization: f64,
    /// Completed processes per time unit.
    pub throughput: f64,
}

impl ReportStats {
    /// Computes statistics from engine output.
    pub fn calculate(rows: &[ResultRow], timeline: &[TimelineBlock]) -> Self {
        let count = rows.len().max(1) as f64;
        let total_waiting: f64 = rows.iter().map(|r| r.waiting).sum();
        let total_turnaround: f64 = rows.iter().map(|r| r.turnaround).sum();

        let makespan = match (timeline.first(), timeline.last()) {
            (Some(first), Some(last)) => last.end - first.start,
            _ => 0.0,
        };

        let mut busy_time = 0.0;
        let mut idle_time = 0.0;
        for block in timeline {
            if block.idle {
                idle_time += block.duration;
            } else {
                busy_time += block.duration;
            }
        }

        let (utilization, throughput) = if makespan > 0.0 {
            (busy_time / makespan, rows.len() as f64 / makespan)
        } else {
            (0.0, 0.0)
        };

        Self {
            avg_waiting: total_waiting / count,
            avg_turnaround: total_turnaround / count,
            makespan,
            busy_time,
            idle_time,
            utilization,
            throughput,
        }
    }
}

/// Shorthand for [`ReportStats::calculate`].
pub fn aggregate(rows: &[ResultRow], timeline: &[TimelineBlock]) -> ReportStats {
    ReportStats::calculate(rows, timeline)
}
