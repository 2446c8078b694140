//! Memory-gated, non-preemptive ready-queue scheduler.
//!
//! # Algorithm
//!
//! **FCFS**: sort by arrival (stable), walk once. Each process is evaluated
//! for memory at its arrival time; if no block fits it is skipped for good.
//! Otherwise it starts at `max(clock, arrival)` and runs to completion.
//!
//! **SJF**: at each decision point admit every arrived process into the
//! ready queue, order the queue by burst (stable), and dispatch the first
//! process that can be allocated. If none can, the clock advances to the
//! next arrival. The run stalls when the queue is non-empty, nothing in it
//! fits, and no remaining process could ever fit.
//!
//! # Memory Ownership
//! A dispatched process owns its block until the clock reaches its
//! completion time. Blocks are released lazily, right before the next
//! allocation decision at or after that time.
//!
//! # Complexity
//! FCFS: O(n log n + n·b). SJF: O(n² log n + n²·b) in the worst case,
//! where b = number of memory blocks.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::{MetricsAggregator, Report, SimulationRequest};
use crate::dispatching::{rules, RuleEngine};
use crate::error::{SimError, SimResult};
use crate::memory::MemoryAllocator;
use crate::models::{
    AllocationStrategy, ProcessId, ProcessRecord, ProcessSpec, SchedulingPolicy, Ticks,
};
use crate::validation::validate_request;

/// How a run ended.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Termination {
    /// The run reached its end. Every process was either dispatched or
    /// skipped; skipped processes show up as incomplete in the report.
    #[default]
    Completed,
    /// SJF could make no further progress: every remaining process needs
    /// more memory than the largest block.
    Stalled {
        /// Clock value when the stall was detected.
        clock: Ticks,
        /// Processes still waiting, ascending id.
        pending: Vec<ProcessId>,
    },
}

/// Raw result of one simulation run, before metrics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationOutcome {
    /// Policy used.
    pub policy: SchedulingPolicy,
    /// Allocation strategy used.
    pub strategy: AllocationStrategy,
    /// All process records, in input order.
    pub processes: Vec<ProcessRecord>,
    /// Ids in the order they were dispatched.
    pub dispatch_order: Vec<ProcessId>,
    /// Ids skipped because no block could hold them at evaluation time.
    pub skipped: Vec<ProcessId>,
    /// Sum of burst times of dispatched processes.
    pub cpu_busy_time: Ticks,
    /// Clock at the end of the run.
    pub total_elapsed_time: Ticks,
    /// How the run ended.
    pub termination: Termination,
}

impl SimulationOutcome {
    /// Whether the run ended in a stall.
    pub fn is_stalled(&self) -> bool {
        matches!(self.termination, Termination::Stalled { .. })
    }

    /// Converts a stalled termination into an error.
    ///
    /// # Errors
    /// [`SimError::Stalled`] if the run stalled.
    pub fn ensure_no_stall(&self) -> SimResult<()> {
        match &self.termination {
            Termination::Completed => Ok(()),
            Termination::Stalled { clock, pending } => Err(SimError::Stalled {
                clock: *clock,
                pending: pending.clone(),
            }),
        }
    }

    /// Computes the run's metrics.
    ///
    /// # Errors
    /// [`SimError::DegenerateRun`] if nothing completed. The error keeps
    /// the incomplete ids and this run's termination.
    pub fn summarize(&self, aggregator: &MetricsAggregator) -> SimResult<Report> {
        let report = aggregator
            .summarize(&self.processes, self.cpu_busy_time, self.total_elapsed_time)
            .map_err(|err| match err {
                SimError::DegenerateRun {
                    completed,
                    elapsed,
                    incomplete,
                    ..
                } => SimError::DegenerateRun {
                    completed,
                    elapsed,
                    incomplete,
                    termination: self.termination.clone(),
                },
                other => other,
            })?;
        Ok(report
            .with_run(self.policy, self.strategy)
            .with_termination(self.termination.clone()))
    }
}

/// One cell of a policy × strategy comparison.
#[derive(Debug, Clone)]
pub struct Comparison {
    /// Policy of this cell.
    pub policy: SchedulingPolicy,
    /// Allocation strategy of this cell.
    pub strategy: AllocationStrategy,
    /// Report of the run, or why it produced none.
    pub result: SimResult<Report>,
}

/// Blocks held by running processes, released once the clock passes
/// their owner's completion time.
#[derive(Debug, Default)]
struct Leases {
    held: Vec<(ProcessId, Ticks)>,
}

impl Leases {
    fn hold(&mut self, pid: ProcessId, until: Ticks) {
        self.held.push((pid, until));
    }

    /// Deallocates every block whose owner completed at or before `now`.
    fn release_until(&mut self, now: Ticks, memory: &mut MemoryAllocator) {
        self.held.retain(|&(pid, until)| {
            if until <= now {
                memory.deallocate(pid);
                debug!(pid, completed_at = until, now, "Process finished, memory released");
                false
            } else {
                true
            }
        });
    }
}

/// Mutable state of a single run.
struct Run<'a> {
    records: Vec<ProcessRecord>,
    memory: &'a mut MemoryAllocator,
    leases: Leases,
    clock: Ticks,
    cpu_busy_time: Ticks,
    dispatch_order: Vec<ProcessId>,
    skipped: Vec<ProcessId>,
}

impl<'a> Run<'a> {
    fn new(processes: &[ProcessSpec], memory: &'a mut MemoryAllocator) -> Self {
        Self {
            records: processes.iter().copied().map(ProcessRecord::from).collect(),
            memory,
            leases: Leases::default(),
            clock: 0,
            cpu_busy_time: 0,
            dispatch_order: Vec::new(),
            skipped: Vec::new(),
        }
    }

    /// Tries to give `records[idx]` a block, releasing finished leases as
    /// of `now` first.
    fn admit(&mut self, idx: usize, now: Ticks) -> SimResult<()> {
        self.leases.release_until(now, self.memory);
        let record = &self.records[idx];
        self.memory
            .try_allocate(record.id, record.memory_required)
            .map(|_| ())
    }

    /// Commits the dispatch of an admitted process at the current clock.
    fn dispatch(&mut self, idx: usize) {
        let record = &mut self.records[idx];
        let start = self.clock.max(record.arrival_time);
        let completion = record.dispatch(start);
        debug!(
            pid = record.id,
            start,
            completion,
            waiting = record.waiting_time,
            "Dispatched"
        );

        self.leases.hold(record.id, completion);
        self.cpu_busy_time = self.cpu_busy_time.saturating_add(record.burst_time);
        self.dispatch_order.push(record.id);
        self.clock = completion;
    }

    fn finish(
        mut self,
        policy: SchedulingPolicy,
        termination: Termination,
    ) -> SimulationOutcome {
        if termination == Termination::Completed {
            self.leases.release_until(self.clock, self.memory);
        }
        SimulationOutcome {
            policy,
            strategy: self.memory.strategy(),
            processes: self.records,
            dispatch_order: self.dispatch_order,
            skipped: self.skipped,
            cpu_busy_time: self.cpu_busy_time,
            total_elapsed_time: self.clock,
            termination,
        }
    }
}

/// Drives a simulation run under one scheduling policy.
///
/// # Example
///
/// ```
/// use u_procsim::memory::MemoryAllocator;
/// use u_procsim::models::{AllocationStrategy, ProcessSpec, SchedulingPolicy};
/// use u_procsim::scheduler::ReadyQueueScheduler;
///
/// let processes = ProcessSpec::numbered(&[(0, 10, 50), (0, 3, 50)]);
/// let mut memory = MemoryAllocator::new(100, AllocationStrategy::FirstFit);
///
/// let outcome = ReadyQueueScheduler::new(SchedulingPolicy::Sjf).simulate(&processes, &mut memory);
/// assert_eq!(outcome.dispatch_order, vec![2, 1]);
/// ```
#[derive(Debug, Clone)]
pub struct ReadyQueueScheduler {
    policy: SchedulingPolicy,
    engine: RuleEngine,
}

impl ReadyQueueScheduler {
    /// Creates a scheduler for `policy`.
    pub fn new(policy: SchedulingPolicy) -> Self {
        let engine = match policy {
            SchedulingPolicy::Fcfs => RuleEngine::new().with_rule(rules::Fcfs),
            SchedulingPolicy::Sjf => RuleEngine::new().with_rule(rules::Sjf),
        };
        Self { policy, engine }
    }

    /// Policy in use.
    pub fn policy(&self) -> SchedulingPolicy {
        self.policy
    }

    /// Validates `request`, runs it on a fresh allocator, and summarizes.
    ///
    /// # Errors
    /// - [`SimError::InvalidInput`] if the request fails validation.
    /// - [`SimError::DegenerateRun`] if no process completed. The error
    ///   still lists the incomplete ids and, for SJF, the stall marker.
    pub fn run(request: &SimulationRequest) -> SimResult<Report> {
        let outcome = Self::execute(request)?;
        outcome.summarize(&MetricsAggregator::new(request.average_divisor))
    }

    /// Validates `request` and runs it on a fresh allocator, without
    /// computing metrics.
    ///
    /// # Errors
    /// [`SimError::InvalidInput`] if the request fails validation.
    pub fn execute(request: &SimulationRequest) -> SimResult<SimulationOutcome> {
        validate_request(request).map_err(SimError::InvalidInput)?;
        let mut memory =
            MemoryAllocator::with_layout(request.total_memory, &request.layout, request.strategy);
        Ok(Self::new(request.policy).simulate(&request.processes, &mut memory))
    }

    /// Runs every policy × strategy combination of `request`, each on
    /// fresh state.
    pub fn compare(request: &SimulationRequest) -> Vec<Comparison> {
        SchedulingPolicy::ALL
            .iter()
            .flat_map(|&policy| {
                AllocationStrategy::ALL.iter().map(move |&strategy| {
                    let variant = request
                        .clone()
                        .with_policy(policy)
                        .with_strategy(strategy);
                    Comparison {
                        policy,
                        strategy,
                        result: Self::run(&variant),
                    }
                })
            })
            .collect()
    }

    /// Simulates `processes` against `memory`.
    ///
    /// Input is assumed valid; see [`validate_request`]. Timing arithmetic
    /// saturates at `Ticks::MAX` instead of panicking on batches that
    /// validation would reject.
    pub fn simulate(
        &self,
        processes: &[ProcessSpec],
        memory: &mut MemoryAllocator,
    ) -> SimulationOutcome {
        info!(
            policy = %self.policy,
            strategy = %memory.strategy(),
            processes = processes.len(),
            total_memory = memory.total(),
            "Starting simulation"
        );

        let run = Run::new(processes, memory);
        let outcome = match self.policy {
            SchedulingPolicy::Fcfs => self.run_fcfs(run),
            SchedulingPolicy::Sjf => self.run_sjf(run),
        };

        info!(
            dispatched = outcome.dispatch_order.len(),
            skipped = outcome.skipped.len(),
            elapsed = outcome.total_elapsed_time,
            busy = outcome.cpu_busy_time,
            stalled = outcome.is_stalled(),
            "Simulation finished"
        );
        outcome
    }

    fn run_fcfs(&self, mut run: Run<'_>) -> SimulationOutcome {
        let order = self.engine.sorted_indices(&run.records);

        for idx in order {
            let arrival = run.records[idx].arrival_time;
            if let Err(err) = run.admit(idx, arrival) {
                warn!(%err, "Skipping process");
                run.skipped.push(run.records[idx].id);
                continue;
            }
            run.dispatch(idx);
        }

        run.finish(self.policy, Termination::Completed)
    }

    fn run_sjf(&self, mut run: Run<'_>) -> SimulationOutcome {
        let n = run.records.len();
        let mut ready: Vec<usize> = Vec::new();
        let mut queued = vec![false; n];
        let mut completed = 0;

        while completed < n {
            for (idx, record) in run.records.iter().enumerate() {
                if !queued[idx] && !record.completed && record.has_arrived(run.clock) {
                    ready.push(idx);
                    queued[idx] = true;
                }
            }
            self.engine.sort_queue(&mut ready, &run.records);

            let now = run.clock;
            let picked = (0..ready.len()).find(|&pos| run.admit(ready[pos], now).is_ok());

            if let Some(pos) = picked {
                let idx = ready.remove(pos);
                run.dispatch(idx);
                completed += 1;
                continue;
            }

            if !ready.is_empty() && Self::nothing_fits(&run) {
                let pending = Self::pending_ids(&run);
                warn!(clock = run.clock, ?pending, "Simulation stalled");
                let termination = Termination::Stalled {
                    clock: run.clock,
                    pending,
                };
                return run.finish(self.policy, termination);
            }

            // Nothing changes until the next arrival, so jump straight there.
            let next_arrival = run
                .records
                .iter()
                .enumerate()
                .filter(|&(idx, r)| !queued[idx] && !r.completed)
                .map(|(_, r)| r.arrival_time)
                .min();
            match next_arrival {
                Some(t) if t > run.clock => run.clock = t,
                _ => run.clock = run.clock.saturating_add(1),
            }
        }

        run.finish(self.policy, Termination::Completed)
    }

    /// Whether every unfinished process needs more than the largest block.
    fn nothing_fits(run: &Run<'_>) -> bool {
        let largest = run.memory.largest_block();
        run.records
            .iter()
            .filter(|r| !r.completed)
            .all(|r| r.memory_required > largest)
    }

    fn pending_ids(run: &Run<'_>) -> Vec<ProcessId> {
        let mut ids: Vec<ProcessId> = run
            .records
            .iter()
            .filter(|r| !r.completed)
            .map(|r| r.id)
            .collect();
        ids.sort_unstable();
        ids
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MemoryLayout, MemoryUnits};

    fn simulate(
        policy: SchedulingPolicy,
        strategy: AllocationStrategy,
        total: MemoryUnits,
        rows: &[(Ticks, Ticks, MemoryUnits)],
    ) -> SimulationOutcome {
        let mut memory = MemoryAllocator::new(total, strategy);
        ReadyQueueScheduler::new(policy).simulate(&ProcessSpec::numbered(rows), &mut memory)
    }

    fn record(outcome: &SimulationOutcome, id: ProcessId) -> &ProcessRecord {
        outcome.processes.iter().find(|p| p.id == id).unwrap()
    }

    #[test]
    fn test_fcfs_single_process() {
        let outcome = simulate(
            SchedulingPolicy::Fcfs,
            AllocationStrategy::FirstFit,
            100,
            &[(0, 5, 50)],
        );
        let p = record(&outcome, 1);
        assert_eq!(p.start_time, Some(0));
        assert_eq!(p.completion_time, Some(5));
        assert_eq!(outcome.cpu_busy_time, 5);
        assert_eq!(outcome.total_elapsed_time, 5);
    }

    #[test]
    fn test_fcfs_arrival_order_and_idle_gap() {
        // Arrivals out of input order, second arrives after first finishes
        let outcome = simulate(
            SchedulingPolicy::Fcfs,
            AllocationStrategy::FirstFit,
            100,
            &[(10, 2, 10), (0, 4, 10)],
        );
        assert_eq!(outcome.dispatch_order, vec![2, 1]);
        assert_eq!(record(&outcome, 1).start_time, Some(10));
        assert_eq!(outcome.total_elapsed_time, 12);
        assert_eq!(outcome.cpu_busy_time, 6);
    }

    #[test]
    fn test_fcfs_stable_on_equal_arrival() {
        let outcome = simulate(
            SchedulingPolicy::Fcfs,
            AllocationStrategy::FirstFit,
            100,
            &[(3, 1, 10), (0, 9, 10), (3, 1, 10)],
        );
        // P2 runs 0..9; P1 and P3 arrive at 3 while P2 holds the only block
        assert_eq!(outcome.dispatch_order, vec![2]);
        assert_eq!(outcome.skipped, vec![1, 3]);
    }

    #[test]
    fn test_fcfs_block_held_until_completion() {
        let outcome = simulate(
            SchedulingPolicy::Fcfs,
            AllocationStrategy::FirstFit,
            100,
            &[(0, 5, 80), (5, 5, 80)],
        );
        // P2 arrives exactly when P1 completes: block is free again
        assert_eq!(outcome.dispatch_order, vec![1, 2]);
        assert_eq!(record(&outcome, 2).start_time, Some(5));
    }

    #[test]
    fn test_fcfs_skip_is_permanent() {
        let outcome = simulate(
            SchedulingPolicy::Fcfs,
            AllocationStrategy::FirstFit,
            50,
            &[(0, 5, 60), (1, 2, 10)],
        );
        assert_eq!(outcome.skipped, vec![1]);
        assert_eq!(outcome.dispatch_order, vec![2]);
        assert!(!record(&outcome, 1).completed);
        assert_eq!(record(&outcome, 1).start_time, None);
        assert_eq!(outcome.termination, Termination::Completed);
    }

    #[test]
    fn test_fcfs_partitions_run_concurrent_admission() {
        let mut memory = MemoryAllocator::with_layout(
            100,
            &MemoryLayout::Partitions(vec![50, 50]),
            AllocationStrategy::FirstFit,
        );
        let processes = ProcessSpec::numbered(&[(0, 5, 40), (0, 5, 40), (0, 5, 40)]);
        let outcome =
            ReadyQueueScheduler::new(SchedulingPolicy::Fcfs).simulate(&processes, &mut memory);
        // Two partitions → two admitted at t=0, the third finds none free
        assert_eq!(outcome.dispatch_order, vec![1, 2]);
        assert_eq!(outcome.skipped, vec![3]);
        assert_eq!(record(&outcome, 2).start_time, Some(5));
        assert!(memory.blocks().iter().all(|b| b.free));
    }

    #[test]
    fn test_sjf_shortest_first() {
        let outcome = simulate(
            SchedulingPolicy::Sjf,
            AllocationStrategy::FirstFit,
            100,
            &[(0, 10, 50), (0, 3, 50)],
        );
        assert_eq!(outcome.dispatch_order, vec![2, 1]);
        assert_eq!(record(&outcome, 2).start_time, Some(0));
        assert_eq!(record(&outcome, 1).start_time, Some(3));
    }

    #[test]
    fn test_sjf_only_arrived_are_eligible() {
        let outcome = simulate(
            SchedulingPolicy::Sjf,
            AllocationStrategy::FirstFit,
            100,
            &[(0, 8, 10), (1, 1, 10), (2, 4, 10)],
        );
        // At t=0 only P1 is ready; at t=8 P2 (1) beats P3 (4)
        assert_eq!(outcome.dispatch_order, vec![1, 2, 3]);
        assert_eq!(outcome.total_elapsed_time, 13);
    }

    #[test]
    fn test_sjf_equal_burst_keeps_admission_order() {
        let outcome = simulate(
            SchedulingPolicy::Sjf,
            AllocationStrategy::FirstFit,
            100,
            &[(0, 5, 10), (0, 2, 10), (1, 2, 10)],
        );
        // t=0: P2 (2) → t=2: P3 admitted after P1, P3 (2) beats P1 (5)
        assert_eq!(outcome.dispatch_order, vec![2, 3, 1]);
    }

    #[test]
    fn test_sjf_idle_until_first_arrival() {
        let outcome = simulate(
            SchedulingPolicy::Sjf,
            AllocationStrategy::BestFit,
            100,
            &[(7, 3, 10)],
        );
        assert_eq!(record(&outcome, 1).start_time, Some(7));
        assert_eq!(outcome.total_elapsed_time, 10);
        assert_eq!(outcome.cpu_busy_time, 3);
    }

    #[test]
    fn test_sjf_skips_unfit_shorter_job() {
        let outcome = simulate(
            SchedulingPolicy::Sjf,
            AllocationStrategy::FirstFit,
            100,
            &[(0, 1, 500), (0, 9, 50)],
        );
        // P1 is shorter but never fits; P2 runs, then the run stalls on P1
        assert_eq!(outcome.dispatch_order, vec![2]);
        assert_eq!(
            outcome.termination,
            Termination::Stalled {
                clock: 9,
                pending: vec![1]
            }
        );
    }

    #[test]
    fn test_sjf_waits_for_fitting_arrival() {
        let outcome = simulate(
            SchedulingPolicy::Sjf,
            AllocationStrategy::FirstFit,
            100,
            &[(0, 1, 500), (4, 2, 50)],
        );
        // P1 can never fit, but P2 still can once it arrives
        assert_eq!(outcome.dispatch_order, vec![2]);
        assert_eq!(record(&outcome, 2).start_time, Some(4));
        assert_eq!(
            outcome.termination,
            Termination::Stalled {
                clock: 6,
                pending: vec![1]
            }
        );
    }

    #[test]
    fn test_sjf_stall_with_nothing_completed() {
        let outcome = simulate(
            SchedulingPolicy::Sjf,
            AllocationStrategy::FirstFit,
            50,
            &[(0, 5, 60)],
        );
        assert!(outcome.is_stalled());
        assert!(outcome.dispatch_order.is_empty());
        assert_eq!(outcome.total_elapsed_time, 0);
        assert_eq!(
            outcome.ensure_no_stall(),
            Err(SimError::Stalled {
                clock: 0,
                pending: vec![1]
            })
        );
    }

    #[test]
    fn test_degenerate_run_keeps_incomplete_ids() {
        for policy in SchedulingPolicy::ALL {
            let request = SimulationRequest::new(50, ProcessSpec::numbered(&[(0, 5, 60)]))
                .with_policy(policy);
            match ReadyQueueScheduler::run(&request) {
                Err(SimError::DegenerateRun {
                    completed,
                    incomplete,
                    termination,
                    ..
                }) => {
                    assert_eq!(completed, 0);
                    assert_eq!(incomplete, vec![1]);
                    let stalled = matches!(termination, Termination::Stalled { .. });
                    assert_eq!(stalled, policy == SchedulingPolicy::Sjf);
                }
                other => panic!("expected degenerate run, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_late_arrival_near_tick_limit_saturates() {
        let outcome = simulate(
            SchedulingPolicy::Fcfs,
            AllocationStrategy::FirstFit,
            100,
            &[(Ticks::MAX - 2, 5, 10)],
        );
        assert_eq!(record(&outcome, 1).completion_time, Some(Ticks::MAX));
        assert_eq!(outcome.total_elapsed_time, Ticks::MAX);
    }

    #[test]
    fn test_run_rejects_timeline_overflow() {
        let request = SimulationRequest::new(100, ProcessSpec::numbered(&[(Ticks::MAX - 2, 5, 10)]));
        match ReadyQueueScheduler::run(&request) {
            Err(SimError::InvalidInput(errors)) => {
                assert!(errors
                    .iter()
                    .any(|e| e.kind == crate::validation::ValidationErrorKind::TimeOverflow));
            }
            other => panic!("expected invalid input, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_batch() {
        for policy in SchedulingPolicy::ALL {
            let outcome = simulate(policy, AllocationStrategy::FirstFit, 10, &[]);
            assert_eq!(outcome.termination, Termination::Completed);
            assert_eq!(outcome.total_elapsed_time, 0);
        }
    }

    #[test]
    fn test_memory_fully_released_after_run() {
        let mut memory = MemoryAllocator::new(100, AllocationStrategy::BestFit);
        let processes = ProcessSpec::numbered(&[(0, 3, 30), (1, 2, 60), (2, 1, 90)]);
        ReadyQueueScheduler::new(SchedulingPolicy::Sjf).simulate(&processes, &mut memory);
        assert_eq!(memory.free_memory(), 100);
    }

    #[test]
    fn test_run_validates_request() {
        let request = SimulationRequest::new(0, ProcessSpec::numbered(&[(0, 1, 1)]));
        assert!(matches!(
            ReadyQueueScheduler::run(&request),
            Err(SimError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_run_labels_report() {
        let request = SimulationRequest::new(100, ProcessSpec::numbered(&[(0, 5, 50)]))
            .with_policy(SchedulingPolicy::Sjf)
            .with_strategy(AllocationStrategy::BestFit);
        let report = ReadyQueueScheduler::run(&request).unwrap();
        assert_eq!(report.policy, Some(SchedulingPolicy::Sjf));
        assert_eq!(report.strategy, Some(AllocationStrategy::BestFit));
        assert_eq!(report.termination, Termination::Completed);
    }

    #[test]
    fn test_compare_covers_all_combinations() {
        let request = SimulationRequest::new(100, ProcessSpec::numbered(&[(0, 10, 50), (0, 3, 50)]));
        let cells = ReadyQueueScheduler::compare(&request);
        assert_eq!(cells.len(), 4);
        for cell in &cells {
            let report = cell.result.as_ref().unwrap();
            assert_eq!(report.policy, Some(cell.policy));
            assert_eq!(report.strategy, Some(cell.strategy));
        }
        let sjf = cells
            .iter()
            .find(|c| c.policy == SchedulingPolicy::Sjf)
            .unwrap();
        assert_eq!(sjf.result.as_ref().unwrap().dispatch_order(), vec![2, 1]);
    }
}
