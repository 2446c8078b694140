//! Run performance metrics.
//!
//! Derives per-process timing rows and aggregate statistics from the
//! process records of a finished run.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Avg Waiting Time | sum(start - arrival) / divisor |
//! | Avg Turnaround Time | sum(completion - arrival) / divisor |
//! | CPU Utilization | 100 * busy / elapsed (%) |
//! | Throughput | completed / elapsed (processes per tick) |
//!
//! The averaging divisor is configurable, see [`AverageDivisor`].
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2: Scheduling Criteria

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Termination;
use crate::error::{SimError, SimResult};
use crate::models::{AllocationStrategy, ProcessId, ProcessRecord, SchedulingPolicy, Ticks};

/// Denominator used for average waiting and turnaround times.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AverageDivisor {
    /// Divide by the number of completed processes.
    #[default]
    Completed,
    /// Divide by the number of submitted processes, completed or not.
    /// Skews averages downward when processes fail to complete.
    Total,
}

impl fmt::Display for AverageDivisor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Completed => f.write_str("completed processes"),
            Self::Total => f.write_str("all processes"),
        }
    }
}

/// Timing row for one completed process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletedProcess {
    /// Process identifier.
    pub id: ProcessId,
    /// Arrival time.
    pub arrival_time: Ticks,
    /// CPU burst length.
    pub burst_time: Ticks,
    /// Dispatch time.
    pub start_time: Ticks,
    /// Completion time (`start_time + burst_time`).
    pub completion_time: Ticks,
    /// `start_time - arrival_time`.
    pub waiting_time: Ticks,
    /// `completion_time - arrival_time`.
    pub turnaround_time: Ticks,
}

impl CompletedProcess {
    /// Extracts the row from a completed record. `None` if the record was
    /// never dispatched.
    pub fn from_record(record: &ProcessRecord) -> Option<Self> {
        if !record.completed {
            return None;
        }
        Some(Self {
            id: record.id,
            arrival_time: record.arrival_time,
            burst_time: record.burst_time,
            start_time: record.start_time?,
            completion_time: record.completion_time?,
            waiting_time: record.waiting_time,
            turnaround_time: record.turnaround_time,
        })
    }
}

/// Result of a simulation run, ready for rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Policy that produced this report, when known.
    pub policy: Option<SchedulingPolicy>,
    /// Allocation strategy that produced this report, when known.
    pub strategy: Option<AllocationStrategy>,
    /// Completed processes in dispatch order.
    pub completed: Vec<CompletedProcess>,
    /// Ids of processes that never completed, ascending.
    pub incomplete: Vec<ProcessId>,
    /// Average waiting time.
    pub avg_waiting_time: f64,
    /// Average turnaround time.
    pub avg_turnaround_time: f64,
    /// CPU busy share of elapsed time (0.0..=100.0).
    pub cpu_utilization_percent: f64,
    /// Completed processes per tick.
    pub throughput: f64,
    /// Denominator used for the averages.
    pub average_divisor: AverageDivisor,
    /// Sum of burst times of completed processes.
    pub cpu_busy_time: Ticks,
    /// Simulated time at the end of the run.
    pub total_elapsed_time: Ticks,
    /// How the run ended.
    pub termination: Termination,
}

impl Report {
    /// Attaches the policy/strategy labels.
    pub fn with_run(mut self, policy: SchedulingPolicy, strategy: AllocationStrategy) -> Self {
        self.policy = Some(policy);
        self.strategy = Some(strategy);
        self
    }

    /// Attaches the run termination.
    pub fn with_termination(mut self, termination: Termination) -> Self {
        self.termination = termination;
        self
    }

    /// Number of completed processes.
    pub fn completed_count(&self) -> usize {
        self.completed.len()
    }

    /// Row for a given process, if it completed.
    pub fn row(&self, id: ProcessId) -> Option<&CompletedProcess> {
        self.completed.iter().find(|r| r.id == id)
    }

    /// Ids of completed processes in dispatch order.
    pub fn dispatch_order(&self) -> Vec<ProcessId> {
        self.completed.iter().map(|r| r.id).collect()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let (Some(policy), Some(strategy)) = (self.policy, self.strategy) {
            writeln!(f, "--- {policy} / {strategy} ---")?;
        }
        writeln!(f, "--- Process Info ---")?;
        for r in &self.completed {
            writeln!(
                f,
                "PID {} | AT:{} | BT:{} | ST:{} | CT:{} | WT:{} | TAT:{}",
                r.id,
                r.arrival_time,
                r.burst_time,
                r.start_time,
                r.completion_time,
                r.waiting_time,
                r.turnaround_time
            )?;
        }
        writeln!(f)?;
        writeln!(
            f,
            "Avg Waiting Time: {:.2} (over {})",
            self.avg_waiting_time, self.average_divisor
        )?;
        writeln!(
            f,
            "Avg Turnaround Time: {:.2} (over {})",
            self.avg_turnaround_time, self.average_divisor
        )?;
        writeln!(f, "CPU Usage: {:.2}%", self.cpu_utilization_percent)?;
        write!(f, "Throughput: {:.2} processes/unit time", self.throughput)?;
        if !self.incomplete.is_empty() {
            write!(f, "\nIncomplete: {:?}", self.incomplete)?;
        }
        if let Termination::Stalled { clock, pending } = &self.termination {
            write!(f, "\nStalled at t={clock}, pending: {pending:?}")?;
        }
        Ok(())
    }
}

/// Computes a [`Report`] from finished process records.
#[derive(Debug, Clone, Copy, Default)]
pub struct MetricsAggregator {
    divisor: AverageDivisor,
}

impl MetricsAggregator {
    /// Creates an aggregator averaging over `divisor`.
    pub fn new(divisor: AverageDivisor) -> Self {
        Self { divisor }
    }

    /// Divisor in use.
    pub fn divisor(&self) -> AverageDivisor {
        self.divisor
    }

    /// Summarizes a run.
    ///
    /// # Arguments
    /// * `processes` - All records of the run, completed or not.
    /// * `cpu_busy_time` - Total ticks the CPU spent running processes.
    /// * `total_elapsed_time` - Simulated clock at the end of the run.
    ///
    /// # Errors
    /// [`SimError::DegenerateRun`] if nothing completed or no time
    /// elapsed, since utilization and throughput are then undefined. The
    /// error still carries the incomplete ids.
    pub fn summarize(
        &self,
        processes: &[ProcessRecord],
        cpu_busy_time: Ticks,
        total_elapsed_time: Ticks,
    ) -> SimResult<Report> {
        let mut completed: Vec<CompletedProcess> = processes
            .iter()
            .filter_map(CompletedProcess::from_record)
            .collect();
        completed.sort_by_key(|r| (r.start_time, r.id));

        let mut incomplete: Vec<ProcessId> = processes
            .iter()
            .filter(|p| !p.completed)
            .map(|p| p.id)
            .collect();
        incomplete.sort_unstable();

        if completed.is_empty() || total_elapsed_time == 0 {
            return Err(SimError::DegenerateRun {
                completed: completed.len(),
                elapsed: total_elapsed_time,
                incomplete,
                termination: Termination::Completed,
            });
        }

        let divisor = match self.divisor {
            AverageDivisor::Completed => completed.len(),
            AverageDivisor::Total => processes.len(),
        } as f64;

        // Widened: per-process times fit in Ticks, their sums may not.
        let total_waiting: u128 = completed.iter().map(|r| u128::from(r.waiting_time)).sum();
        let total_turnaround: u128 = completed
            .iter()
            .map(|r| u128::from(r.turnaround_time))
            .sum();
        let elapsed = total_elapsed_time as f64;

        Ok(Report {
            policy: None,
            strategy: None,
            avg_waiting_time: total_waiting as f64 / divisor,
            avg_turnaround_time: total_turnaround as f64 / divisor,
            cpu_utilization_percent: 100.0 * cpu_busy_time as f64 / elapsed,
            throughput: completed.len() as f64 / elapsed,
            average_divisor: self.divisor,
            cpu_busy_time,
            total_elapsed_time,
            termination: Termination::Completed,
            completed,
            incomplete,
        })
    }
}
