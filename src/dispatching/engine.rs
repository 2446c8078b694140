//! Rule engine for multi-criteria dispatching.
//!
//! Composes dispatching rules in sequence: the first rule decides, later
//! rules only break ties, and a final [`TieBreaker`] settles whatever is
//! left.

use std::cmp::Ordering;
use std::sync::Arc;

use super::DispatchingRule;
use crate::models::ProcessRecord;

/// How ties are broken after all rules are exhausted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TieBreaker {
    /// Keep the current queue order (stable sort).
    #[default]
    Insertion,
    /// Deterministic by process ID (ascending).
    ById,
}

/// A composable rule engine for process prioritization.
///
/// Sorting is stable: processes that tie on every rule keep their
/// relative order unless [`TieBreaker::ById`] is set.
///
/// # Example
/// ```
/// use u_procsim::dispatching::{rules, RuleEngine};
/// use u_procsim::models::{ProcessRecord, ProcessSpec};
///
/// let processes: Vec<ProcessRecord> = ProcessSpec::numbered(&[(0, 10, 50), (0, 3, 50)])
///     .into_iter()
///     .map(ProcessRecord::from)
///     .collect();
/// let engine = RuleEngine::new().with_rule(rules::Sjf);
/// assert_eq!(engine.sorted_indices(&processes), vec![1, 0]);
/// ```
#[derive(Clone)]
pub struct RuleEngine {
    rules: Vec<Arc<dyn DispatchingRule>>,
    tie_breaker: TieBreaker,
}

impl RuleEngine {
    /// Creates an empty rule engine.
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            tie_breaker: TieBreaker::Insertion,
        }
    }

    /// Adds a primary rule.
    pub fn with_rule<R: DispatchingRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Adds a tie-breaking rule, consulted only when earlier rules tie.
    pub fn with_tie_breaker<R: DispatchingRule + 'static>(self, rule: R) -> Self {
        self.with_rule(rule)
    }

    /// Sets the final tie-breaking strategy.
    pub fn with_final_tie_breaker(mut self, tie_breaker: TieBreaker) -> Self {
        self.tie_breaker = tie_breaker;
        self
    }

    /// Names of the configured rules, in evaluation order.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Returns indices of all `processes`, highest priority first.
    pub fn sorted_indices(&self, processes: &[ProcessRecord]) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..processes.len()).collect();
        self.sort_queue(&mut indices, processes);
        indices
    }

    /// Stably reorders a queue of indices into `processes`.
    pub fn sort_queue(&self, queue: &mut [usize], processes: &[ProcessRecord]) {
        queue.sort_by(|&a, &b| self.compare(&processes[a], &processes[b]));
    }

    /// Returns the index of the highest-priority process, if any.
    pub fn select_best(&self, processes: &[ProcessRecord]) -> Option<usize> {
        self.sorted_indices(processes).first().copied()
    }

    fn compare(&self, a: &ProcessRecord, b: &ProcessRecord) -> Ordering {
        for rule in &self.rules {
            let ordering = rule.evaluate(a).cmp(&rule.evaluate(b));
            if ordering != Ordering::Equal {
                return ordering;
            }
        }

        match self.tie_breaker {
            TieBreaker::Insertion => Ordering::Equal,
            TieBreaker::ById => a.id.cmp(&b.id),
        }
    }
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for RuleEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleEngine")
            .field("rules", &self.rule_names())
            .field("tie_breaker", &self.tie_breaker)
            .finish()
    }
}
