//! CPU scheduling and contiguous memory allocation simulator for the
//! U-Engine ecosystem.
//!
//! Simulates a fixed batch of processes under a non-preemptive scheduling
//! policy (FCFS or SJF) gated by a contiguous memory allocator (First-Fit
//! or Best-Fit), and reports waiting time, turnaround time, CPU
//! utilization, and throughput.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `ProcessSpec`, `ProcessRecord`,
//!   `MemoryBlock`, `MemoryLayout`, `AllocationStrategy`, `SchedulingPolicy`
//! - **`memory`**: Whole-block `MemoryAllocator`
//! - **`dispatching`**: Dispatching rules (FCFS, SJF) and `RuleEngine`
//! - **`scheduler`**: `ReadyQueueScheduler`, `SimulationRequest`,
//!   `MetricsAggregator`, `Report`
//! - **`validation`**: Input integrity checks
//! - **`workload`**: Seeded random process batches
//!
//! # Example
//!
//! ```
//! use u_procsim::models::{AllocationStrategy, ProcessSpec, SchedulingPolicy};
//! use u_procsim::scheduler::{ReadyQueueScheduler, SimulationRequest};
//!
//! let request = SimulationRequest::new(100, ProcessSpec::numbered(&[(0, 5, 50)]))
//!     .with_strategy(AllocationStrategy::FirstFit)
//!     .with_policy(SchedulingPolicy::Fcfs);
//!
//! let report = ReadyQueueScheduler::run(&request).unwrap();
//! assert!((report.cpu_utilization_percent - 100.0).abs() < 1e-10);
//! assert!((report.throughput - 0.2).abs() < 1e-10);
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts"
//! - Tanenbaum & Bos (2014), "Modern Operating Systems"

pub mod dispatching;
pub mod error;
pub mod memory;
pub mod models;
pub mod scheduler;
pub mod validation;
pub mod workload;

pub use error::{SimError, SimResult};
