//! Whole-block contiguous allocator.
//!
//! # Algorithm
//!
//! - **First-Fit**: scan blocks by ascending `start`, take the first free
//!   block with `size >= request`.
//! - **Best-Fit**: scan all blocks, take the free block with the smallest
//!   `size >= request`; on equal sizes the lower `start` wins.
//!
//! The chosen block is marked owned in full. Blocks are never split,
//! merged, created, or destroyed after construction, so the block list
//! always spans `[0, total)` exactly.
//!
//! # Complexity
//! O(b) per allocate/deallocate where b = number of blocks.
//!
//! # Reference
//! Knuth (1997), "The Art of Computer Programming", Vol. 1, §2.5

use tracing::debug;

use crate::error::{SimError, SimResult};
use crate::models::{AllocationStrategy, MemoryBlock, MemoryLayout, MemoryUnits, ProcessId};

/// Contiguous memory allocator over a fixed block list.
///
/// # Example
///
/// ```
/// use u_procsim::memory::MemoryAllocator;
/// use u_procsim::models::AllocationStrategy;
///
/// let mut memory = MemoryAllocator::new(100, AllocationStrategy::FirstFit);
/// assert!(memory.allocate(1, 40));
/// assert!(!memory.allocate(2, 10)); // the single block is taken whole
/// memory.deallocate(1);
/// assert!(memory.allocate(2, 10));
/// ```
#[derive(Debug, Clone)]
pub struct MemoryAllocator {
    blocks: Vec<MemoryBlock>,
    strategy: AllocationStrategy,
    total: MemoryUnits,
}

impl MemoryAllocator {
    /// Creates an allocator seeded with one free block of `total` units.
    pub fn new(total: MemoryUnits, strategy: AllocationStrategy) -> Self {
        Self::with_layout(total, &MemoryLayout::Single, strategy)
    }

    /// Creates an allocator with the given start-up layout.
    pub fn with_layout(
        total: MemoryUnits,
        layout: &MemoryLayout,
        strategy: AllocationStrategy,
    ) -> Self {
        let mut blocks = layout.blocks(total);
        blocks.sort_by_key(|b| b.start);
        Self {
            blocks,
            strategy,
            total,
        }
    }

    /// Selection strategy in use.
    pub fn strategy(&self) -> AllocationStrategy {
        self.strategy
    }

    /// Total managed memory.
    pub fn total(&self) -> MemoryUnits {
        self.total
    }

    /// Current block list, ordered by `start`.
    pub fn blocks(&self) -> &[MemoryBlock] {
        &self.blocks
    }

    /// Size of the largest block, free or not.
    ///
    /// A request larger than this can never be satisfied.
    pub fn largest_block(&self) -> MemoryUnits {
        self.blocks.iter().map(|b| b.size).max().unwrap_or(0)
    }

    /// Size of the largest currently free block.
    pub fn largest_free_block(&self) -> MemoryUnits {
        self.blocks
            .iter()
            .filter(|b| b.free)
            .map(|b| b.size)
            .max()
            .unwrap_or(0)
    }

    /// Sum of the sizes of free blocks.
    pub fn free_memory(&self) -> MemoryUnits {
        self.blocks.iter().filter(|b| b.free).map(|b| b.size).sum()
    }

    /// Block currently owned by `pid`.
    pub fn block_of(&self, pid: ProcessId) -> Option<&MemoryBlock> {
        self.blocks.iter().find(|b| b.owner == Some(pid))
    }

    /// Attempts to allocate a block of at least `size` units to `pid`.
    ///
    /// Returns `false` and leaves state unchanged if no block qualifies.
    pub fn allocate(&mut self, pid: ProcessId, size: MemoryUnits) -> bool {
        self.try_allocate(pid, size).is_ok()
    }

    /// Like [`allocate`](Self::allocate), returning the chosen block's
    /// index on success.
    ///
    /// # Errors
    /// [`SimError::InsufficientMemory`] if no free block is large enough.
    pub fn try_allocate(&mut self, pid: ProcessId, size: MemoryUnits) -> SimResult<usize> {
        let Some(index) = self.select(size) else {
            return Err(SimError::InsufficientMemory {
                pid,
                required: size,
                largest_block: self.largest_free_block(),
            });
        };

        let block = &mut self.blocks[index];
        block.free = false;
        block.owner = Some(pid);
        debug!(
            pid,
            size,
            block_start = block.start,
            block_size = block.size,
            strategy = %self.strategy,
            "Allocated block"
        );
        Ok(index)
    }

    /// Frees the block owned by `pid`. No-op if `pid` owns nothing.
    pub fn deallocate(&mut self, pid: ProcessId) {
        if let Some(block) = self.blocks.iter_mut().find(|b| b.owner == Some(pid)) {
            block.free = true;
            block.owner = None;
            debug!(pid, block_start = block.start, "Released block");
        }
    }

    /// Picks a block index for `size` under the configured strategy.
    fn select(&self, size: MemoryUnits) -> Option<usize> {
        let mut candidates = self
            .blocks
            .iter()
            .enumerate()
            .filter(|(_, b)| b.fits(size));

        match self.strategy {
            AllocationStrategy::FirstFit => candidates.next().map(|(i, _)| i),
            AllocationStrategy::BestFit => {
                let mut best: Option<(usize, MemoryUnits)> = None;
                for (i, block) in candidates {
                    // Strict `<` keeps the lowest-start block on ties.
                    if best.map_or(true, |(_, best_size)| block.size < best_size) {
                        best = Some((i, block.size));
                    }
                }
                best.map(|(i, _)| i)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn partitioned(sizes: &[MemoryUnits], strategy: AllocationStrategy) -> MemoryAllocator {
        let total = sizes.iter().sum();
        MemoryAllocator::with_layout(total, &MemoryLayout::Partitions(sizes.to_vec()), strategy)
    }

    #[test]
    fn test_single_block_seed() {
        let memory = MemoryAllocator::new(100, AllocationStrategy::FirstFit);
        assert_eq!(memory.blocks().len(), 1);
        assert_eq!(memory.blocks()[0], MemoryBlock::new(0, 100));
        assert_eq!(memory.free_memory(), 100);
    }

    #[test]
    fn test_whole_block_is_taken() {
        let mut memory = MemoryAllocator::new(100, AllocationStrategy::FirstFit);
        assert!(memory.allocate(1, 10));
        let block = memory.block_of(1).unwrap();
        assert_eq!(block.size, 100);
        assert_eq!(memory.free_memory(), 0);
        assert!(!memory.allocate(2, 10));
    }

    #[test]
    fn test_first_fit_lowest_start() {
        let mut memory = partitioned(&[20, 60, 40], AllocationStrategy::FirstFit);
        assert_eq!(memory.try_allocate(1, 30).unwrap(), 1);
        assert_eq!(memory.try_allocate(2, 30).unwrap(), 2);
        assert_eq!(memory.try_allocate(3, 10).unwrap(), 0);
    }

    #[test]
    fn test_best_fit_smallest_qualifying() {
        let mut memory = partitioned(&[20, 60, 40], AllocationStrategy::BestFit);
        assert_eq!(memory.try_allocate(1, 30).unwrap(), 2); // 40 beats 60
        assert_eq!(memory.try_allocate(2, 10).unwrap(), 0); // 20 is tightest
        assert_eq!(memory.try_allocate(3, 10).unwrap(), 1);
    }

    #[test]
    fn test_best_fit_tie_goes_to_lowest_start() {
        let mut memory = partitioned(&[50, 30, 30], AllocationStrategy::BestFit);
        assert_eq!(memory.try_allocate(1, 25).unwrap(), 1);
        assert_eq!(memory.try_allocate(2, 25).unwrap(), 2);
    }

    #[test]
    fn test_failure_leaves_state_unchanged() {
        let mut memory = partitioned(&[20, 30], AllocationStrategy::BestFit);
        let before = memory.blocks().to_vec();
        let err = memory.try_allocate(7, 31).unwrap_err();
        assert_eq!(
            err,
            SimError::InsufficientMemory {
                pid: 7,
                required: 31,
                largest_block: 30,
            }
        );
        assert_eq!(memory.blocks(), before.as_slice());
    }

    #[test]
    fn test_deallocate_frees_owner_block() {
        let mut memory = partitioned(&[20, 30], AllocationStrategy::FirstFit);
        memory.allocate(1, 15);
        memory.allocate(2, 15);
        memory.deallocate(1);
        assert!(memory.blocks()[0].free);
        assert_eq!(memory.blocks()[0].owner, None);
        assert_eq!(memory.blocks()[1].owner, Some(2));
    }

    #[test]
    fn test_deallocate_unknown_is_noop() {
        let mut memory = MemoryAllocator::new(100, AllocationStrategy::FirstFit);
        memory.allocate(1, 10);
        memory.deallocate(42);
        assert_eq!(memory.block_of(1).map(|b| b.size), Some(100));
    }

    #[test]
    fn test_blocks_span_total_after_churn() {
        let mut memory = partitioned(&[10, 20, 30, 40], AllocationStrategy::BestFit);
        for pid in 1..=4 {
            memory.allocate(pid, 5 * pid as MemoryUnits);
        }
        memory.deallocate(2);
        memory.deallocate(4);
        memory.allocate(5, 35);

        let blocks = memory.blocks();
        assert_eq!(blocks[0].start, 0);
        for pair in blocks.windows(2) {
            assert_eq!(pair[0].end(), pair[1].start);
        }
        assert_eq!(blocks.last().unwrap().end(), memory.total());
    }

    #[test]
    fn test_repeated_sequences_are_deterministic() {
        let run = || {
            let mut memory = partitioned(&[25, 25, 50], AllocationStrategy::BestFit);
            let mut picks = Vec::new();
            for pid in 1..=3 {
                picks.push(memory.try_allocate(pid, 20).ok());
            }
            memory.deallocate(1);
            picks.push(memory.try_allocate(4, 20).ok());
            picks
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn test_largest_block_ignores_ownership() {
        let mut memory = partitioned(&[20, 80], AllocationStrategy::FirstFit);
        memory.allocate(1, 50);
        assert_eq!(memory.largest_block(), 80);
        assert_eq!(memory.largest_free_block(), 20);
    }
}
