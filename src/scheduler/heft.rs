//! HEFT-style list scheduler.
//!
//! Tasks are prioritized by strictly decreasing upward rank and each is
//! placed on the processor minimizing its candidate finish time
//! `max(next_free, upward_rank) + execution_time`. The task's own upward
//! rank stands in for the earliest-start estimate instead of the finish
//! times of its actual predecessors; this simplification of canonical HEFT
//! is preserved as documented. Every task is always placed — there is no
//! deadline or feasibility check.
//!
//! # Reference
//! Topcuoglu, Hariri & Wu (2002), §3.3 (the canonical algorithm this
//! variant simplifies).

use tracing::trace;

use super::Scheduler;
use crate::error::ScheduleError;
use crate::models::{Processor, ScheduleResult, TaskGraph, TimeStep};
use crate::ranking;

/// Upward-rank list scheduler.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeftScheduler;

impl HeftScheduler {
    /// Creates the scheduler.
    pub fn new() -> Self {
        Self
    }
}

impl Scheduler for HeftScheduler {
    fn name(&self) -> &'static str {
        "HEFT"
    }

    fn description(&self) -> &'static str {
        "Upward-rank priority with earliest-candidate-finish processor selection"
    }

    fn schedule(
        &self,
        graph: &TaskGraph,
        processor_count: usize,
    ) -> Result<ScheduleResult, ScheduleError> {
        if processor_count == 0 {
            return Err(ScheduleError::NoProcessorsAvailable);
        }

        let mut processors: Vec<Processor> = (0..processor_count).map(Processor::scalar).collect();
        let upward = ranking::upward_ranks(graph);

        // Stable descending sort: equal ranks keep index order.
        let mut order: Vec<usize> = (0..graph.len()).collect();
        order.sort_by(|&a, &b| upward[b].cmp(&upward[a]));

        let mut result = ScheduleResult::new(Vec::new());

        for &index in &order {
            let task = graph.task(index);
            let mut best = 0;
            let mut best_finish = TimeStep::MAX;
            for (p, processor) in processors.iter().enumerate() {
                let finish =
                    processor.next_free().max(upward[index]) + task.execution_time;
                if finish < best_finish {
                    best_finish = finish;
                    best = p;
                }
            }

            processors[best].record(0, best_finish, task.execution_time);
            result.assign(task.id, best, best_finish);
            trace!(task = task.id, processor = best, finish = best_finish, "assigned");
        }

        result.processors = processors;
        Ok(result)
    }
}
