//! Simulation input container.

use serde::{Deserialize, Serialize};

use super::AverageDivisor;
use crate::error::SimResult;
use crate::models::{
    AllocationStrategy, MemoryLayout, MemoryUnits, ProcessSpec, SchedulingPolicy,
};

/// Everything a single run needs: memory size, the process batch, and the
/// strategy/policy selection.
///
/// # Example
///
/// ```
/// use u_procsim::models::{AllocationStrategy, ProcessSpec, SchedulingPolicy};
/// use u_procsim::scheduler::SimulationRequest;
///
/// let request = SimulationRequest::new(100, ProcessSpec::numbered(&[(0, 5, 50)]))
///     .with_strategy(AllocationStrategy::BestFit)
///     .with_policy(SchedulingPolicy::Sjf);
/// assert_eq!(request.processes.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationRequest {
    /// Total memory capacity.
    pub total_memory: MemoryUnits,
    /// Processes to simulate.
    pub processes: Vec<ProcessSpec>,
    /// Block selection strategy.
    #[serde(default)]
    pub strategy: AllocationStrategy,
    /// CPU scheduling policy.
    #[serde(default)]
    pub policy: SchedulingPolicy,
    /// Start-up block layout.
    #[serde(default)]
    pub layout: MemoryLayout,
    /// Denominator for average waiting/turnaround times.
    #[serde(default)]
    pub average_divisor: AverageDivisor,
}

impl SimulationRequest {
    /// Creates a request with default strategy (First-Fit), policy (FCFS),
    /// single-block layout, and completed-count averaging.
    pub fn new(total_memory: MemoryUnits, processes: Vec<ProcessSpec>) -> Self {
        Self {
            total_memory,
            processes,
            strategy: AllocationStrategy::default(),
            policy: SchedulingPolicy::default(),
            layout: MemoryLayout::default(),
            average_divisor: AverageDivisor::default(),
        }
    }

    /// Sets the allocation strategy.
    pub fn with_strategy(mut self, strategy: AllocationStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Sets the scheduling policy.
    pub fn with_policy(mut self, policy: SchedulingPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Sets the memory layout.
    pub fn with_layout(mut self, layout: MemoryLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Sets the averaging divisor.
    pub fn with_average_divisor(mut self, divisor: AverageDivisor) -> Self {
        self.average_divisor = divisor;
        self
    }

    /// Parses a request from JSON.
    ///
    /// Omitted selection fields take their defaults.
    pub fn from_json(json: &str) -> SimResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes the request to JSON.
    pub fn to_json(&self) -> SimResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}
