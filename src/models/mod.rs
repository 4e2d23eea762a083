//! CPU scheduling domain models.
//!
//! Input descriptors, their canonical (validated) form, and the
//! per-process rows and timeline blocks produced by the engines.
//!
//! # Domain Mappings
//!
//! | u-cpusched | OS textbook | Batch queue |
//! |------------|-------------|-------------|
//! | Process | Process / PCB | Job |
//! | Arrival | Arrival time | Submit time |
//! | Burst | CPU burst | Service time |
//! | Report | Gantt chart + table | Run log |

mod process;
mod report;

pub use process::{CanonicalProcess, FieldError, FieldValue, ProcessDescriptor};
pub use report::{Report, ResultRow, TimelineBlock, IDLE_PID};
