//! Deadline-adaptive scheduler (EDF-style with a deadline-monotonic fallback).
//!
//! Tasks are sorted once by ascending deadline before placement — a static
//! deadline priority, not a dynamically re-evaluated ready queue. While the
//! scheduler is in its initial `Adaptive` mode, a task is only accepted if
//! the earliest-free processor can *start* it by its deadline; otherwise the
//! task is dropped for good. Two consecutive drops switch the scheduler
//! permanently into `DeadlineMonotonic` mode, where every remaining task is
//! accepted unconditionally. There is no transition back.
//!
//! # Reference
//! Liu & Layland (1973) for the EDF/DM priority policies.

use tracing::{debug, trace};

use super::{earliest_free, Scheduler};
use crate::error::ScheduleError;
use crate::models::{Processor, ScheduleResult, TaskGraph};

/// Consecutive misses tolerated before the permanent mode switch.
const MISS_THRESHOLD: u32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Adaptive,
    DeadlineMonotonic,
}

/// Deadline-driven list scheduler with a one-way adaptive fallback.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeadlineAdaptiveScheduler;

impl DeadlineAdaptiveScheduler {
    /// Creates the scheduler.
    pub fn new() -> Self {
        Self
    }
}

impl Scheduler for DeadlineAdaptiveScheduler {
    fn name(&self) -> &'static str {
        "D-EDF"
    }

    fn description(&self) -> &'static str {
        "Deadline-sorted placement with a permanent deadline-monotonic fallback after two consecutive misses"
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

        // One-time static sort; stable, so equal deadlines keep index order.
        let mut order: Vec<usize> = (0..graph.len()).collect();
        order.sort_by_key(|&i| graph.task(i).deadline);

        let mut result = ScheduleResult::new(Vec::new());
        let mut mode = Mode::Adaptive;
        let mut consecutive_misses = 0u32;

        for &index in &order {
            let task = graph.task(index);
            let chosen = earliest_free(&processors);
            let start = processors[chosen].next_free();

            if mode == Mode::Adaptive && start > task.deadline {
                result.miss(task.id);
                consecutive_misses += 1;
                trace!(task = task.id, start, deadline = task.deadline, "deadline miss");
                if consecutive_misses >= MISS_THRESHOLD {
                    mode = Mode::DeadlineMonotonic;
                    consecutive_misses = 0;
                    debug!(task = task.id, "switching to deadline-monotonic mode");
                }
                continue;
            }

            let finish = start + task.execution_time;
            processors[chosen].record(0, finish, task.execution_time);
            result.assign(task.id, chosen, finish);
            if mode == Mode::Adaptive {
                consecutive_misses = 0;
            }
            trace!(task = task.id, processor = chosen, finish, "assigned");
        }

        result.processors = processors;
        Ok(result)
    }
}
