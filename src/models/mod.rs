//! Simulation domain models.
//!
//! Value types shared by the allocator, the scheduler, and the metrics
//! layer. None of them carry behaviour beyond simple bookkeeping.
//!
//! # Domain Mappings
//!
//! | u-procsim | Textbook term |
//! |-----------|---------------|
//! | ProcessRecord | PCB (timing subset) |
//! | MemoryBlock | Partition / hole |
//! | AllocationStrategy | Placement algorithm |
//! | SchedulingPolicy | CPU scheduling algorithm |

mod memory;
mod policy;
mod process;

pub use memory::{AllocationStrategy, MemoryBlock, MemoryLayout};
pub use policy::SchedulingPolicy;
pub use process::{MemoryUnits, ProcessId, ProcessRecord, ProcessSpec, Ticks};
