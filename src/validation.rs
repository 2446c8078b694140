//! Input validation for simulation requests.
//!
//! Checks structural integrity of a request before simulating. Detects:
//! - Zero total memory
//! - Zero burst or zero memory demand
//! - Duplicate process IDs
//! - Partition tables that do not tile total memory
//! - Batches whose timeline could run past the tick range

use std::collections::HashSet;
use thiserror::Error;

use crate::models::{MemoryLayout, MemoryUnits, Ticks};
use crate::scheduler::SimulationRequest;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Total memory is zero.
    ZeroMemoryCapacity,
    /// A process needs no CPU time.
    ZeroBurst,
    /// A process needs no memory.
    ZeroMemory,
    /// Two processes share the same ID.
    DuplicateId,
    /// A partition has size zero.
    EmptyPartition,
    /// Partition sizes do not sum to total memory.
    PartitionMismatch,
    /// Latest arrival plus total burst does not fit in `Ticks`.
    TimeOverflow,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a simulation request.
///
/// Checks:
/// 1. Total memory is positive
/// 2. Every process has a positive burst and memory demand
/// 3. No duplicate process IDs
/// 4. A partitioned layout has no empty partitions and tiles total memory
/// 5. Latest arrival plus the sum of all bursts fits in `Ticks`, which
///    bounds every completion time and the elapsed time of the run
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_request(request: &SimulationRequest) -> ValidationResult {
    let mut errors = Vec::new();

    if request.total_memory == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::ZeroMemoryCapacity,
            "Total memory must be positive",
        ));
    }

    let mut ids = HashSet::new();
    for p in &request.processes {
        if !ids.insert(p.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate process ID: {}", p.id),
            ));
        }
        if p.burst_time == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::ZeroBurst,
                format!("Process {} has zero burst time", p.id),
            ));
        }
        if p.memory_required == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::ZeroMemory,
                format!("Process {} requires zero memory", p.id),
            ));
        }
    }

    if let MemoryLayout::Partitions(sizes) = &request.layout {
        for (i, &size) in sizes.iter().enumerate() {
            if size == 0 {
                errors.push(ValidationError::new(
                    ValidationErrorKind::EmptyPartition,
                    format!("Partition {i} has size zero"),
                ));
            }
        }
        let sum = sizes
            .iter()
            .try_fold(0 as MemoryUnits, |acc, &size| acc.checked_add(size));
        if sum != Some(request.total_memory) {
            let sum = sum.map_or_else(|| "more than MemoryUnits::MAX".to_string(), |s| s.to_string());
            errors.push(ValidationError::new(
                ValidationErrorKind::PartitionMismatch,
                format!(
                    "Partitions sum to {sum} but total memory is {}",
                    request.total_memory
                ),
            ));
        }
    }

    if let Some(latest) = request.processes.iter().map(|p| p.arrival_time).max() {
        let horizon = request
            .processes
            .iter()
            .try_fold(latest, |acc: Ticks, p| acc.checked_add(p.burst_time));
        if horizon.is_none() {
            errors.push(ValidationError::new(
                ValidationErrorKind::TimeOverflow,
                format!("Latest arrival {latest} plus total burst time exceeds the tick range"),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
