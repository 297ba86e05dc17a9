//! Processor bookkeeping model.
//!
//! A processor here is a simulated timeline, not an execution unit. Its
//! timeline is a vector of finish-time slots: scalar-timeline schedulers
//! (deadline-adaptive, HEFT) use a single slot, while CPOP keeps one slot
//! per task and writes each task's finish time into the slot at the task's
//! own index. In the multi-slot case the effective load is the maximum over
//! all recorded slots — a monotonic watermark, since slots for tasks never
//! placed on this processor stay at zero.

use serde::{Deserialize, Serialize};

use super::TimeStep;

/// Per-processor mutable scheduling state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Processor {
    id: usize,
    slots: Vec<TimeStep>,
    busy_time: TimeStep,
}

impl Processor {
    /// Creates a processor with a single scalar next-free-time slot.
    pub fn scalar(id: usize) -> Self {
        Self {
            id,
            slots: vec![0],
            busy_time: 0,
        }
    }

    /// Creates a processor with one zero-initialized slot per task.
    pub fn per_task(id: usize, task_count: usize) -> Self {
        Self {
            id,
            slots: vec![0; task_count],
            busy_time: 0,
        }
    }

    /// Unique processor identifier (its pool index).
    pub fn id(&self) -> usize {
        self.id
    }

    /// The earliest time this processor is considered free: the maximum
    /// finish time recorded across all slots (0 when nothing is recorded).
    pub fn next_free(&self) -> TimeStep {
        self.slots.iter().copied().max().unwrap_or(0)
    }

    /// Cumulative execution time of every task assigned to this processor.
    pub fn busy_time(&self) -> TimeStep {
        self.busy_time
    }

    /// Commits an assignment: records `finish_time` in `slot` and adds
    /// `execution_time` to the busy accumulator.
    pub fn record(&mut self, slot: usize, finish_time: TimeStep, execution_time: TimeStep) {
        self.slots[slot] = finish_time;
        self.busy_time += execution_time;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_timeline_advances() {
        let mut p = Processor::scalar(0);
        assert_eq!(p.next_free(), 0);

        p.record(0, 5, 5);
        p.record(0, 9, 4);
        assert_eq!(p.next_free(), 9);
        assert_eq!(p.busy_time(), 9);
    }

    #[test]
    fn test_per_task_watermark() {
        let mut p = Processor::per_task(1, 4);
        p.record(2, 11, 3);
        p.record(0, 7, 2);

        // Unwritten slots stay at zero and never shrink the watermark.
        assert_eq!(p.next_free(), 11);
        assert_eq!(p.busy_time(), 5);
    }
}
