//! Built-in dispatching rules.
//!
//! # Score Convention
//! All rules return lower scores for higher priority processes.

use super::{DispatchingRule, RuleScore};
use crate::models::ProcessRecord;

/// First-Come-First-Served.
///
/// Prioritizes processes that arrived earlier.
#[derive(Debug, Clone, Copy)]
pub struct Fcfs;

impl DispatchingRule for Fcfs {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn evaluate(&self, process: &ProcessRecord) -> RuleScore {
        process.arrival_time
    }

    fn description(&self) -> &'static str {
        "First-Come-First-Served"
    }
}

/// Shortest Job First.
///
/// Prioritizes processes with shorter CPU bursts. Minimizes mean waiting
/// time among simultaneously available jobs.
///
/// # Reference
/// Smith (1956), optimal for minimizing mean flow time on single machine.
#[derive(Debug, Clone, Copy)]
pub struct Sjf;

impl DispatchingRule for Sjf {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn evaluate(&self, process: &ProcessRecord) -> RuleScore {
        process.burst_time
    }

    fn description(&self) -> &'static str {
        "Shortest Job First"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProcessSpec;

    fn record(id: u32, arrival: u64, burst: u64) -> ProcessRecord {
        ProcessSpec::new(id, arrival, burst, 1).into()
    }

    #[test]
    fn test_fcfs_scores_arrival() {
        assert_eq!(Fcfs.evaluate(&record(1, 7, 3)), 7);
        assert_eq!(Fcfs.name(), "FCFS");
    }

    #[test]
    fn test_sjf_scores_burst() {
        assert_eq!(Sjf.evaluate(&record(1, 7, 3)), 3);
        assert_eq!(Sjf.description(), "Shortest Job First");
    }
}
