//! Contiguous memory model.
//!
//! Memory is a list of blocks that together span `[0, total)`. Blocks are
//! laid out once, when the allocator is built, and are never split or
//! merged afterwards: an allocation takes a whole block even if the
//! request is smaller.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{MemoryUnits, ProcessId};
use crate::error::SimError;

/// A contiguous region of the simulated address space.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryBlock {
    /// Offset of the first unit.
    pub start: MemoryUnits,
    /// Block length.
    pub size: MemoryUnits,
    /// Whether the block is available.
    pub free: bool,
    /// Owning process while allocated.
    pub owner: Option<ProcessId>,
}

impl MemoryBlock {
    /// Creates a free block.
    pub fn new(start: MemoryUnits, size: MemoryUnits) -> Self {
        Self {
            start,
            size,
            free: true,
            owner: None,
        }
    }

    /// One past the last unit of the block.
    #[inline]
    pub fn end(&self) -> MemoryUnits {
        self.start + self.size
    }

    /// Whether this block is free and large enough for `size`.
    #[inline]
    pub fn fits(&self, size: MemoryUnits) -> bool {
        self.free && self.size >= size
    }
}

/// Block selection strategy. Fixed for the lifetime of an allocator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AllocationStrategy {
    /// Lowest-offset free block that fits.
    #[default]
    FirstFit,
    /// Smallest free block that fits; ties go to the lowest offset.
    BestFit,
}

impl AllocationStrategy {
    /// Both strategies, in menu order.
    pub const ALL: [Self; 2] = [Self::FirstFit, Self::BestFit];

    /// Canonical name.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::FirstFit => "first-fit",
            Self::BestFit => "best-fit",
        }
    }
}

impl fmt::Display for AllocationStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AllocationStrategy {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "first-fit" | "first_fit" | "firstfit" | "ff" | "1" => Ok(Self::FirstFit),
            "best-fit" | "best_fit" | "bestfit" | "bf" | "2" => Ok(Self::BestFit),
            _ => Err(SimError::UnknownStrategy(s.to_string())),
        }
    }
}

/// How the address space is carved into blocks at start-up.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MemoryLayout {
    /// One block covering all of memory.
    #[default]
    Single,
    /// Fixed partitions of the given sizes, laid out from offset 0.
    /// Sizes must sum to total memory.
    Partitions(Vec<MemoryUnits>),
}

impl MemoryLayout {
    /// Builds the initial, all-free block list for `total` units.
    ///
    /// For [`MemoryLayout::Partitions`], zero-sized entries are skipped;
    /// validation rejects them before a run.
    pub fn blocks(&self, total: MemoryUnits) -> Vec<MemoryBlock> {
        match self {
            Self::Single => vec![MemoryBlock::new(0, total)],
            Self::Partitions(sizes) => {
                let mut start = 0;
                sizes
                    .iter()
                    .filter(|&&size| size > 0)
                    .map(|&size| {
                        let block = MemoryBlock::new(start, size);
                        start += size;
                        block
                    })
                    .collect()
            }
        }
    }
}
