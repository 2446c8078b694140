//! Seeded random workload generation.
//!
//! Produces process batches for comparing policy/strategy combinations
//! and for stress-testing the simulator. The same seed always yields the
//! same batch.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::ops::RangeInclusive;

use crate::models::{MemoryUnits, ProcessId, ProcessSpec, Ticks};

/// Uniform random workload generator.
///
/// # Example
///
/// ```
/// use u_procsim::workload::WorkloadGenerator;
///
/// let batch = WorkloadGenerator::new(10).with_seed(7).generate();
/// assert_eq!(batch.len(), 10);
/// assert_eq!(batch[0].id, 1);
/// assert_eq!(batch, WorkloadGenerator::new(10).with_seed(7).generate());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkloadGenerator {
    count: usize,
    seed: u64,
    arrival: RangeInclusive<Ticks>,
    burst: RangeInclusive<Ticks>,
    memory: RangeInclusive<MemoryUnits>,
}

impl WorkloadGenerator {
    /// Creates a generator for `count` processes with default ranges:
    /// arrival 0..=20, burst 1..=10, memory 1..=100.
    pub fn new(count: usize) -> Self {
        Self {
            count,
            seed: 0,
            arrival: 0..=20,
            burst: 1..=10,
            memory: 1..=100,
        }
    }

    /// Sets the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Sets the arrival time range.
    pub fn with_arrival(mut self, range: RangeInclusive<Ticks>) -> Self {
        self.arrival = range;
        self
    }

    /// Sets the burst range. A zero lower bound is raised to 1.
    pub fn with_burst(mut self, range: RangeInclusive<Ticks>) -> Self {
        let (lo, hi) = range.into_inner();
        self.burst = lo.max(1)..=hi.max(1);
        self
    }

    /// Sets the memory demand range. A zero lower bound is raised to 1.
    pub fn with_memory(mut self, range: RangeInclusive<MemoryUnits>) -> Self {
        let (lo, hi) = range.into_inner();
        self.memory = lo.max(1)..=hi.max(1);
        self
    }

    /// Generates the batch, ids 1..=count in generation order.
    pub fn generate(&self) -> Vec<ProcessSpec> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        self.generate_with(&mut rng)
    }

    /// Generates a batch from a caller-supplied RNG.
    ///
    /// Empty ranges (`lo > hi`) collapse to their lower bound.
    pub fn generate_with<R: Rng>(&self, rng: &mut R) -> Vec<ProcessSpec> {
        (1..=self.count as ProcessId)
            .map(|id| {
                let arrival = draw(rng, &self.arrival);
                let burst = draw(rng, &self.burst);
                let memory = draw(rng, &self.memory);
                ProcessSpec::new(id, arrival, burst, memory)
            })
            .collect()
    }
}

fn draw<R: Rng>(rng: &mut R, range: &RangeInclusive<u64>) -> u64 {
    if range.is_empty() {
        *range.start()
    } else {
        rng.random_range(range.clone())
    }
}
