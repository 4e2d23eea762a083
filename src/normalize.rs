//! Input normalization for simulation requests.
//!
//! Filters raw descriptors down to the canonical set the engines
//! consume. Rows are dropped, never rejected:
//! - Blank (after trimming) pids
//! - Arrival or burst that does not parse to a finite number
//! - Non-positive bursts
//! - Bursts too small to move the `f64` clock at their arrival
//!   (`arrival + burst == arrival`, e.g. a burst of 1 at 1e16)
//!
//! Negative arrivals pass through unclamped. A process arriving before
//! t=0 is ready at t=0 and accrues waiting time from its arrival.
//!
//! Every drop is reported through [`normalize_with_diagnostics`] and
//! logged at `debug` level; [`normalize`] discards the diagnostics.

use thiserror::Error;
use tracing::debug;

use crate::models::{CanonicalProcess, FieldError, ProcessDescriptor};

/// Why a descriptor was excluded from the canonical set.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DropReason {
    /// Pid is empty after trimming.
    #[error("blank pid")]
    BlankPid,
    /// Arrival did not parse.
    #[error("invalid arrival: {0}")]
    InvalidArrival(FieldError),
    /// Burst did not parse.
    #[error("invalid burst: {0}")]
    InvalidBurst(FieldError),
    /// Burst parsed but is zero or negative.
    #[error("burst {0} is not positive")]
    NonPositiveBurst(f64),
    /// Burst vanishes when added to the arrival time.
    #[error("burst {burst} is below clock resolution at arrival {arrival}")]
    BurstBelowResolution {
        /// Parsed arrival.
        arrival: f64,
        /// Parsed burst.
        burst: f64,
    },
}

/// A descriptor excluded during normalization.
#[derive(Debug, Clone, PartialEq)]
pub struct DroppedRow {
    /// Position in the raw input.
    pub index: usize,
    /// Pid as supplied (untrimmed).
    pub pid: String,
    /// First rule the row failed.
    pub reason: DropReason,
}

/// Canonical processes plus the rows that were filtered out.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Normalized {
    /// Valid processes, in input order.
    pub processes: Vec<CanonicalProcess>,
    /// Excluded rows, in input order.
    pub dropped: Vec<DroppedRow>,
}

impl Normalized {
    /// Whether every input row survived.
    pub fn is_clean(&self) -> bool {
        self.dropped.is_empty()
    }
}

/// Canonicalizes raw descriptors, silently dropping invalid rows.
///
/// `original_index` of each output process is its position in
/// `descriptors`, not in the output.
pub fn normalize(descriptors: &[ProcessDescriptor]) -> Vec<CanonicalProcess> {
    normalize_with_diagnostics(descriptors).processes
}

/// Canonicalizes raw descriptors and reports every dropped row.
///
/// Checks, in order (first failure wins):
/// 1. Pid non-blank after trimming
/// 2. Arrival parses to a finite number
/// 3. Burst parses to a finite number
/// 4. Burst > 0
/// 5. `arrival + burst > arrival`
pub fn normalize_with_diagnostics(descriptors: &[ProcessDescriptor]) -> Normalized {
    let mut out = Normalized::default();

    for (index, descriptor) in descriptors.iter().enumerate() {
        match canonicalize(index, descriptor) {
            Ok(process) => out.processes.push(process),
            Err(reason) => {
                debug!(index, pid = %descriptor.pid, %reason, "dropping process row");
                out.dropped.push(DroppedRow {
                    index,
                    pid: descriptor.pid.clone(),
                    reason,
                });
            }
        }
    }

    out
}

fn canonicalize(
    index: usize,
    descriptor: &ProcessDescriptor,
) -> Result<CanonicalProcess, DropReason> {
    let pid = descriptor.pid.trim();
    if pid.is_empty() {
        return Err(DropReason::BlankPid);
    }

    let arrival = descriptor
        .arrival
        .parse()
        .map_err(DropReason::InvalidArrival)?;
    let burst = descriptor.burst.parse().map_err(DropReason::InvalidBurst)?;

    if burst <= 0.0 {
        return Err(DropReason::NonPositiveBurst(burst));
    }
    if arrival + burst <= arrival {
        return Err(DropReason::BurstBelowResolution { arrival, burst });
    }

    Ok(CanonicalProcess::new(pid, arrival, burst, index))
}
