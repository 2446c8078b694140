//! Crate error type.
//!
//! Per-process allocation failures are recoverable and handled inside the
//! scheduler; only aggregate conditions (degenerate runs, stalls, invalid
//! input) reach the caller.

use thiserror::Error;

use crate::models::{MemoryUnits, ProcessId, Ticks};
use crate::scheduler::Termination;
use crate::validation::ValidationError;

/// Simulation result.
pub type SimResult<T> = Result<T, SimError>;

/// Simulation errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimError {
    #[error("Insufficient memory for process {pid}: requires {required} units, largest free block {largest_block} units")]
    InsufficientMemory {
        pid: ProcessId,
        required: MemoryUnits,
        largest_block: MemoryUnits,
    },

    #[error("Degenerate run: {completed} completed process(es) over {elapsed} elapsed ticks, metrics are undefined (incomplete: {incomplete:?})")]
    DegenerateRun {
        completed: usize,
        elapsed: Ticks,
        /// Ids of processes that never completed, ascending.
        incomplete: Vec<ProcessId>,
        /// How the run ended.
        termination: Termination,
    },

    #[error("Run stalled at t={clock}: no remaining process fits in memory (pending: {pending:?})")]
    Stalled { clock: Ticks, pending: Vec<ProcessId> },

    #[error("Invalid input: {}", format_errors(.0))]
    InvalidInput(Vec<ValidationError>),

    #[error("Unknown allocation strategy '{0}'. Valid: first-fit, best-fit")]
    UnknownStrategy(String),

    #[error("Unknown scheduling policy '{0}'. Valid: fcfs, sjf")]
    UnknownPolicy(String),

    #[error("Malformed request: {0}")]
    Malformed(String),
}

fn format_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

impl From<serde_json::Error> for SimError {
    fn from(err: serde_json::Error) -> Self {
        Self::Malformed(err.to_string())
    }
}
