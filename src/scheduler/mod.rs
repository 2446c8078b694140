//! Simulation driver and run metrics.
//!
//! # Algorithm
//!
//! [`ReadyQueueScheduler`] runs a fixed batch of processes under FCFS or
//! memory-gated SJF, consulting a [`MemoryAllocator`](crate::memory::MemoryAllocator)
//! before every dispatch. Both disciplines are non-preemptive.
//!
//! # KPI
//!
//! [`MetricsAggregator`] turns the finished records into a [`Report`]:
//! average waiting and turnaround time, CPU utilization, and throughput.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

mod kpi;
mod ready_queue;
mod request;

pub use kpi::{AverageDivisor, CompletedProcess, MetricsAggregator, Report};
pub use ready_queue::{Comparison, ReadyQueueScheduler, SimulationOutcome, Termination};
pub use request::SimulationRequest;
