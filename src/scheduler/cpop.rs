//! CPOP-style list scheduler.
//!
//! Tasks are prioritized by strictly decreasing upward + downward rank (the
//! critical-path priority) and placed on the processor minimizing
//! `next_free + upward_rank + execution_time`. Each processor keeps one
//! finish-time slot per task; a commit writes the finish time into the slot
//! at the task's own index, so the processor's load as seen by later tasks
//! is the maximum over previously written slots. Slots for tasks never
//! placed there stay at zero — a monotonic watermark, not a chronological
//! timeline; this is preserved as documented. Every task is always placed.
//!
//! # Reference
//! Topcuoglu, Hariri & Wu (2002), §4 (the canonical Critical-Path-on-a-
//! Processor heuristic this variant diverges from).

use tracing::trace;

use super::Scheduler;
use crate::error::ScheduleError;
use crate::models::{Processor, ScheduleResult, TaskGraph, TimeStep};
use crate::ranking;

/// Critical-path-priority list scheduler with per-task slot timelines.
#[derive(Debug, Clone, Copy, Default)]
pub struct CpopScheduler;

impl CpopScheduler {
    /// Creates the scheduler.
    pub fn new() -> Self {
        Self
    }
}

impl Scheduler for CpopScheduler {
    fn name(&self) -> &'static str {
        "CPOP"
    }

    fn description(&self) -> &'static str {
        "Combined upward/downward rank priority over per-task slot timelines"
    }

    fn schedule(
        &self,
        graph: &TaskGraph,
        processor_count: usize,
    ) -> Result<ScheduleResult, ScheduleError> {
        if processor_count == 0 {
            return Err(ScheduleError::NoProcessorsAvailable);
        }

        let mut processors: Vec<Processor> = (0..processor_count)
            .map(|id| Processor::per_task(id, graph.len()))
            .collect();

        let upward = ranking::upward_ranks(graph);
        let downward = ranking::downward_ranks(graph);

        // Stable descending sort on the critical-path priority.
        let mut order: Vec<usize> = (0..graph.len()).collect();
        order.sort_by(|&a, &b| (upward[b] + downward[b]).cmp(&(upward[a] + downward[a])));

        let mut result = ScheduleResult::new(Vec::new());

        for &index in &order {
            let task = graph.task(index);
            let mut best = 0;
            let mut best_finish = TimeStep::MAX;
            for (p, processor) in processors.iter().enumerate() {
                let finish = processor.next_free() + upward[index] + task.execution_time;
                if finish < best_finish {
                    best_finish = finish;
                    best = p;
                }
            }

            processors[best].record(index, best_finish, task.execution_time);
            result.assign(task.id, best, best_finish);
            trace!(task = task.id, processor = best, finish = best_finish, "assigned");
        }

        result.processors = processors;
        Ok(result)
    }
}
