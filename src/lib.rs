//! Non-preemptive CPU scheduling simulator.
//!
//! Simulates a single server running a finite set of processes
//! (arrival time, burst duration) under FCFS or SJF, and reports per-process
//! start/completion/waiting/turnaround, a contiguous execution timeline
//! with idle gaps, and aggregate statistics.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `ProcessDescriptor`, `CanonicalProcess`,
//!   `ResultRow`, `TimelineBlock`, `Report`
//! - **`normalize`**: Filters raw descriptors into canonical processes
//! - **`engine`**: FCFS and SJF engines, discipline selection, requests
//! - **`stats`**: Average waiting/turnaround, makespan, utilization
//! - **`workload`**: Seeded synthetic workloads
//!
//! # Pipeline
//!
//! descriptors → `normalize` → engine → `stats` → `Report`
//!
//! Every call is a pure computation over its own input; engines hold no
//! state between calls and may run concurrently without coordination.
//!
//! # Logging
//!
//! Emits `tracing` events (dropped rows, idle gaps, dispatches,
//! per-simulation summaries). No subscriber is installed.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

pub mod engine;
pub mod models;
pub mod normalize;
pub mod stats;
pub mod workload;

pub use engine::{compare, simulate, Discipline, Engine, SimulationRequest};
pub use models::{ProcessDescriptor, Report};
