//! Scheduling engines.
//!
//! Both engines share one shape: canonical processes in, a
//! [`Simulation`] (rows + timeline) out. Callers pick a [`Discipline`]
//! per call; nothing here remembers a "current" discipline.
//!
//! # Usage
//!
//! ```
//! use u_cpusched::engine::{simulate, Discipline};
//! use u_cpusched::models::ProcessDescriptor;
//!
//! let input = vec![
//!     ProcessDescriptor::new("P1", 0.0, 7.0),
//!     ProcessDescriptor::new("P2", 2.0, 4.0),
//!     ProcessDescriptor::new("P3", 4.0, 1.0),
//! ];
//! let report = simulate(Discipline::Sjf, &input);
//! assert_eq!(report.dispatch_order(), vec!["P1", "P3", "P2"]);
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

mod fcfs;
mod request;
mod sjf;
mod trace;

pub use fcfs::{run_fcfs, Fcfs};
pub use request::SimulationRequest;
pub use sjf::{run_sjf, Sjf};

use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug};
use std::str::FromStr;
use thiserror::Error;
use tracing::debug;

use crate::models::{CanonicalProcess, ProcessDescriptor, Report, ResultRow, TimelineBlock};
use crate::normalize::normalize;

/// Raw engine output, before statistics.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Simulation {
    /// Per-process results in dispatch order.
    pub rows: Vec<ResultRow>,
    /// Contiguous execution timeline.
    pub timeline: Vec<TimelineBlock>,
}

/// A non-preemptive, single-server scheduling discipline.
pub trait Engine: Send + Sync + Debug {
    /// Short name (e.g., "FCFS").
    fn name(&self) -> &'static str;

    /// Simulates the canonical process set.
    ///
    /// Pure: the same input always yields the same output.
    fn run(&self, processes: &[CanonicalProcess]) -> Simulation;

    /// Long name.
    fn description(&self) -> &'static str {
        self.name()
    }
}

/// Engine selector.
///
/// Serializes as `"fcfs"` / `"sjf"`; deserializes through [`FromStr`],
/// so JSON accepts the same names and aliases as `str::parse`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Discipline {
    /// First-Come, First-Served.
    #[default]
    Fcfs,
    /// Shortest Job First (non-preemptive).
    Sjf,
}

impl Discipline {
    /// Every supported discipline.
    pub const ALL: [Discipline; 2] = [Discipline::Fcfs, Discipline::Sjf];

    /// The engine implementing this discipline.
    pub fn engine(self) -> &'static dyn Engine {
        match self {
            Discipline::Fcfs => &Fcfs,
            Discipline::Sjf => &Sjf,
        }
    }

    /// Runs this discipline's engine.
    pub fn run(self, processes: &[CanonicalProcess]) -> Simulation {
        self.engine().run(processes)
    }
}

impl fmt::Display for Discipline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.engine().name())
    }
}

/// Returned by [`Discipline::from_str`] for unrecognized names.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown scheduling discipline '{0}' (expected fcfs or sjf)")]
pub struct UnknownDiscipline(pub String);

impl FromStr for Discipline {
    type Err = UnknownDiscipline;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fcfs" | "fifo" => Ok(Discipline::Fcfs),
            "sjf" | "spn" | "sjn" => Ok(Discipline::Sjf),
            _ => Err(UnknownDiscipline(s.to_string())),
        }
    }
}

impl TryFrom<String> for Discipline {
    type Error = UnknownDiscipline;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// Normalizes `descriptors`, runs `discipline`, and aggregates the result.
pub fn simulate(discipline: Discipline, descriptors: &[ProcessDescriptor]) -> Report {
    let processes = normalize(descriptors);
    simulate_canonical(discipline, &processes)
}

/// Runs `discipline` over an already-normalized process set.
pub fn simulate_canonical(discipline: Discipline, processes: &[CanonicalProcess]) -> Report {
    let report = Report::new(discipline, discipline.run(processes));
    debug!(
        %discipline,
        processes = report.row_count(),
        makespan = report.makespan,
        avg_waiting = report.avg_waiting,
        "simulation complete"
    );
    report
}

/// Both disciplines over the same input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    /// FCFS report.
    pub fcfs: Report,
    /// SJF report.
    pub sjf: Report,
}

impl Comparison {
    /// The discipline with the lower average waiting time (FCFS on ties).
    pub fn lower_avg_waiting(&self) -> Discipline {
        if self.sjf.avg_waiting < self.fcfs.avg_waiting {
            Discipline::Sjf
        } else {
            Discipline::Fcfs
        }
    }
}

/// Normalizes once and runs every discipline side by side.
pub fn compare(descriptors: &[ProcessDescriptor]) -> Comparison {
    let processes = normalize(descriptors);
    Comparison {
        fcfs: simulate_canonical(Discipline::Fcfs, &processes),
        sjf: simulate_canonical(Discipline::Sjf, &processes),
    }
}
