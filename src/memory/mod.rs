//! Contiguous memory allocation.
//!
//! Provides [`MemoryAllocator`], which hands out whole blocks from a fixed
//! block list under a First-Fit or Best-Fit strategy.
//!
//! # References
//!
//! - Knuth (1997), "The Art of Computer Programming", Vol. 1, §2.5
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 9.2

mod allocator;

pub use allocator::MemoryAllocator;
