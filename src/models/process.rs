//! Process model.
//!
//! A process is a unit of simulated CPU work with a fixed arrival time,
//! burst length, and memory demand. Its timing fields are filled in
//! once, when the scheduler dispatches it.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3

use serde::{Deserialize, Serialize};

/// Process identifier. Assigned in input order starting at 1.
pub type ProcessId = u32;

/// Simulated time unit.
pub type Ticks = u64;

/// Memory size unit.
pub type MemoryUnits = u64;

/// Input descriptor for one process.
///
/// This is what a front end hands to the simulator; it carries no
/// run-time state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessSpec {
    /// Unique process identifier.
    pub id: ProcessId,
    /// Time the process becomes eligible for dispatch.
    pub arrival_time: Ticks,
    /// Total CPU time required.
    pub burst_time: Ticks,
    /// Contiguous memory required while running.
    pub memory_required: MemoryUnits,
}

impl ProcessSpec {
    /// Creates a new process descriptor.
    pub fn new(
        id: ProcessId,
        arrival_time: Ticks,
        burst_time: Ticks,
        memory_required: MemoryUnits,
    ) -> Self {
        Self {
            id,
            arrival_time,
            burst_time,
            memory_required,
        }
    }

    /// Builds descriptors from `(arrival, burst, memory)` tuples,
    /// numbering them 1, 2, 3, ... in input order.
    pub fn numbered(rows: &[(Ticks, Ticks, MemoryUnits)]) -> Vec<Self> {
        rows.iter()
            .zip(1..)
            .map(|(&(arrival, burst, memory), id)| Self::new(id, arrival, burst, memory))
            .collect()
    }
}

/// One process as tracked through a simulation run.
///
/// # Invariants
/// Once `completed` is set:
/// - `waiting_time == start_time - arrival_time`
/// - `turnaround_time == completion_time - arrival_time == waiting_time + burst_time`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessRecord {
    /// Unique process identifier.
    pub id: ProcessId,
    /// Arrival time.
    pub arrival_time: Ticks,
    /// CPU burst length.
    pub burst_time: Ticks,
    /// Memory required.
    pub memory_required: MemoryUnits,
    /// Dispatch time. `None` until dispatched.
    pub start_time: Option<Ticks>,
    /// Completion time. `None` until dispatched.
    pub completion_time: Option<Ticks>,
    /// Time spent ready but not running.
    pub waiting_time: Ticks,
    /// Time from arrival to completion.
    pub turnaround_time: Ticks,
    /// Whether the process ran to completion.
    pub completed: bool,
}

impl ProcessRecord {
    /// Commits the dispatch of this process at `start`.
    ///
    /// Returns the completion time, saturating at `Ticks::MAX`. Timing
    /// fields are written exactly once; a second call on a completed
    /// record is ignored and returns the recorded completion.
    pub fn dispatch(&mut self, start: Ticks) -> Ticks {
        if let (true, Some(done)) = (self.completed, self.completion_time) {
            return done;
        }
        debug_assert!(
            start >= self.arrival_time,
            "process {} dispatched at {start} before arrival {}",
            self.id,
            self.arrival_time
        );
        let completion = start.saturating_add(self.burst_time);
        self.start_time = Some(start);
        self.completion_time = Some(completion);
        self.waiting_time = start - self.arrival_time;
        self.turnaround_time = completion - self.arrival_time;
        self.completed = true;
        completion
    }

    /// Whether the process has arrived by `clock`.
    #[inline]
    pub fn has_arrived(&self, clock: Ticks) -> bool {
        self.arrival_time <= clock
    }
}

impl From<ProcessSpec> for ProcessRecord {
    fn from(spec: ProcessSpec) -> Self {
        Self {
            id: spec.id,
            arrival_time: spec.arrival_time,
            burst_time: spec.burst_time,
            memory_required: spec.memory_required,
            start_time: None,
            completion_time: None,
            waiting_time: 0,
            turnaround_time: 0,
            completed: false,
        }
    }
}
