//! Simulation request (input container).

use serde::{Deserialize, Serialize};

use super::{simulate_canonical, Discipline};
use crate::models::{ProcessDescriptor, Report};
use crate::normalize::{normalize_with_diagnostics, DroppedRow};

/// Input container for a single simulation call.
///
/// Deserializes from JSON; `discipline` defaults to FCFS when absent.
///
/// # Example
///
/// ```
/// use u_cpusched::engine::{Discipline, SimulationRequest};
/// use u_cpusched::models::ProcessDescriptor;
///
/// let report = SimulationRequest::new(vec![ProcessDescriptor::new("P1", 2.0, 3.0)])
///     .with_discipline(Discipline::Sjf)
///     .run();
/// assert_eq!(report.makespan, 5.0);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimulationRequest {
    /// Raw process descriptors.
    pub processes: Vec<ProcessDescriptor>,
    /// Discipline to simulate.
    #[serde(default)]
    pub discipline: Discipline,
}

impl SimulationRequest {
    /// Creates a FCFS request.
    pub fn new(processes: Vec<ProcessDescriptor>) -> Self {
        Self {
            processes,
            discipline: Discipline::default(),
        }
    }

    /// Sets the discipline.
    pub fn with_discipline(mut self, discipline: Discipline) -> Self {
        self.discipline = discipline;
        self
    }

    /// Appends a process.
    pub fn with_process(mut self, process: ProcessDescriptor) -> Self {
        self.processes.push(process);
        self
    }

    /// Runs the simulation.
    pub fn run(&self) -> Report {
        self.run_with_diagnostics().0
    }

    /// Runs the simulation and also returns the rows that were dropped.
    pub fn run_with_diagnostics(&self) -> (Report, Vec<DroppedRow>) {
        let normalized = normalize_with_diagnostics(&self.processes);
        let report = simulate_canonical(self.discipline, &normalized.processes);
        (report, normalized.dropped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FieldError;
    use crate::normalize::DropReason;

    #[test]
    fn test_request_builder() {
        let req = SimulationRequest::new(Vec::new())
            .with_process(ProcessDescriptor::new("P1", 0.0, 3.0))
            .with_process(ProcessDescriptor::new("P2", 0.0, 1.0))
            .with_discipline(Discipline::Sjf);

        let report = req.run();
        assert_eq!(report.discipline, Discipline::Sjf);
        assert_eq!(report.dispatch_order(), vec!["P2", "P1"]);
    }

    #[test]
    fn test_request_diagnostics() {
        let req = SimulationRequest::new(vec![
            ProcessDescriptor::new("P1", 0.0, 3.0),
            ProcessDescriptor::new(" ", 0.0, 3.0),
        ]);
        let (report, dropped) = req.run_with_diagnostics();
        assert_eq!(report.row_count(), 1);
        assert_eq!(dropped.len(), 1);
        assert_eq!(dropped[0].index, 1);
        assert_eq!(dropped[0].reason, DropReason::BlankPid);
    }

    #[test]
    fn test_request_from_json_defaults_to_fcfs() {
        let json = r#"{"processes": [
            {"pid": "P1", "arrival": 0, "burst": 5},
            {"pid": "P2", "arrival": "0", "burst": "1"}
        ]}"#;
        let req: SimulationRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.discipline, Discipline::Fcfs);
        assert_eq!(req.run().dispatch_order(), vec!["P1", "P2"]);
    }

    #[test]
    fn test_request_from_json_drops_incomplete_rows() {
        let json = r#"{"discipline": "sjf", "processes": [
            {"pid": "P1", "arrival": 0, "burst": 5},
            {"pid": "P2", "arrival": null, "burst": 1},
            {"pid": "P3", "burst": 1},
            {"pid": "P4", "arrival": 1, "burst": 2}
        ]}"#;
        let req: SimulationRequest = serde_json::from_str(json).unwrap();
        let (report, dropped) = req.run_with_diagnostics();

        assert_eq!(report.dispatch_order(), vec!["P1", "P4"]);
        assert_eq!(dropped.len(), 2);
        assert_eq!(dropped[0].pid, "P2");
        assert_eq!(dropped[1].index, 2);
        assert!(dropped
            .iter()
            .all(|d| d.reason == DropReason::InvalidArrival(FieldError::Missing)));
    }

    #[test]
    fn test_request_from_json_accepts_discipline_aliases() {
        for name in ["FCFS", "fifo", "SJF", "spn", "sjn"] {
            let json = format!(r#"{{"discipline": "{name}", "processes": []}}"#);
            let req: SimulationRequest = serde_json::from_str(&json).unwrap();
            assert_eq!(Ok(req.discipline), name.parse::<Discipline>());
        }
        let bad = serde_json::from_str::<SimulationRequest>(r#"{"discipline": "rr", "processes": []}"#);
        assert!(bad.unwrap_err().to_string().contains("unknown scheduling discipline"));
    }

    #[test]
    fn test_request_from_json_with_discipline() {
        let json = r#"{"discipline": "sjf", "processes": [
            {"pid": "P1", "arrival": 0, "burst": 5},
            {"pid": "P2", "arrival": 0, "burst": 1}
        ]}"#;
        let req: SimulationRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.run().dispatch_order(), vec!["P2", "P1"]);
    }
}
