//! Scheduling policies and schedule quality metrics.
//!
//! # Policies
//!
//! | Scheduler | Priority | Timeline | Feasibility check |
//! |-----------|----------|----------|-------------------|
//! | [`DeadlineAdaptiveScheduler`] | ascending deadline | scalar | start ≤ deadline while adaptive |
//! | [`HeftScheduler`] | descending upward rank | scalar | none |
//! | [`CpopScheduler`] | descending upward + downward rank | per-task slots | none |
//!
//! All three sit behind the [`Scheduler`] trait so they can be tested and
//! benchmarked uniformly. Each invocation receives its own processor pool
//! and produces a caller-owned [`ScheduleResult`]; pools are never reused
//! across runs.
//!
//! # References
//!
//! - Topcuoglu, Hariri & Wu (2002), "Performance-Effective and Low-Complexity
//!   Task Scheduling for Heterogeneous Computing"
//! - Liu & Layland (1973), "Scheduling Algorithms for Multiprogramming in a
//!   Hard-Real-Time Environment"

mod cpop;
mod deadline_adaptive;
mod heft;
mod metrics;

pub use cpop::CpopScheduler;
pub use deadline_adaptive::DeadlineAdaptiveScheduler;
pub use heft::HeftScheduler;
pub use metrics::ScheduleMetrics;

use crate::error::ScheduleError;
use crate::models::{ScheduleResult, TaskGraph};

/// A scheduling policy: task graph + processor count → assignment.
///
/// Implementations are total over well-formed graphs; the only failure mode
/// shared by all of them is an empty processor pool.
pub trait Scheduler {
    /// Short identifier (e.g. `"HEFT"`).
    fn name(&self) -> &'static str;

    /// One-line human-readable description.
    fn description(&self) -> &'static str;

    /// Maps every task of `graph` onto `processor_count` processors.
    ///
    /// # Errors
    /// [`ScheduleError::NoProcessorsAvailable`] when `processor_count == 0`.
    fn schedule(
        &self,
        graph: &TaskGraph,
        processor_count: usize,
    ) -> Result<ScheduleResult, ScheduleError>;
}

/// Index of the pool processor with the smallest next-free time.
/// Strict comparison, so the lowest index wins ties.
pub(crate) fn earliest_free(processors: &[crate::models::Processor]) -> usize {
    let mut best = 0;
    for (i, p) in processors.iter().enumerate().skip(1) {
        if p.next_free() < processors[best].next_free() {
            best = i;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Processor, Task};

    fn single_task_graph() -> TaskGraph {
        TaskGraph::new(vec![Task::new(1, 3, 10)]).unwrap()
    }

    #[test]
    fn test_zero_processors_is_an_error() {
        let graph = single_task_graph();
        let schedulers: Vec<Box<dyn Scheduler>> = vec![
            Box::new(DeadlineAdaptiveScheduler::new()),
            Box::new(HeftScheduler::new()),
            Box::new(CpopScheduler::new()),
        ];

        for scheduler in &schedulers {
            assert_eq!(
                scheduler.schedule(&graph, 0).unwrap_err(),
                ScheduleError::NoProcessorsAvailable,
                "{} accepted an empty pool",
                scheduler.name()
            );
        }
    }

    #[test]
    fn test_zero_tasks_yields_empty_result() {
        let graph = TaskGraph::new(Vec::new()).unwrap();
        let schedulers: Vec<Box<dyn Scheduler>> = vec![
            Box::new(DeadlineAdaptiveScheduler::new()),
            Box::new(HeftScheduler::new()),
            Box::new(CpopScheduler::new()),
        ];

        for scheduler in &schedulers {
            let result = scheduler.schedule(&graph, 2).unwrap();
            assert_eq!(result.scheduled_count, 0);
            assert!(result.assignments.is_empty());
            assert_eq!(result.processors.len(), 2);
            assert_eq!(result.makespan(), 0);
        }
    }

    #[test]
    fn test_single_task_lands_on_processor_zero() {
        let graph = single_task_graph();
        let schedulers: Vec<Box<dyn Scheduler>> = vec![
            Box::new(DeadlineAdaptiveScheduler::new()),
            Box::new(HeftScheduler::new()),
            Box::new(CpopScheduler::new()),
        ];

        for scheduler in &schedulers {
            let result = scheduler.schedule(&graph, 1).unwrap();
            assert_eq!(result.scheduled_count, 1, "{}", scheduler.name());
            assert_eq!(result.assignments[0].processor, 0);
        }
    }

    #[test]
    fn test_earliest_free_breaks_ties_low() {
        let pool = vec![Processor::scalar(0), Processor::scalar(1)];
        assert_eq!(earliest_free(&pool), 0);
    }
}
