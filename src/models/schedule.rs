//! Scheduling result model.
//!
//! A [`ScheduleResult`] is produced per scheduler invocation, owned by the
//! caller, and discarded after metrics are derived. It carries the
//! task-to-processor bindings, the ids of any dropped tasks, and the final
//! processor pool for downstream metric computation.

use serde::{Deserialize, Serialize};

use super::{Processor, TimeStep};

/// A single task-to-processor binding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    /// Id of the assigned task.
    pub task_id: u32,
    /// Pool index of the chosen processor.
    pub processor: usize,
    /// Simulated completion time of the task on that processor.
    pub finish_time: TimeStep,
}

/// The outcome of one scheduling run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleResult {
    /// One entry per successfully placed task, in placement order.
    pub assignments: Vec<Assignment>,
    /// Ids of tasks dropped by a deadline miss (empty for HEFT/CPOP).
    pub missed: Vec<u32>,
    /// Number of successfully placed tasks.
    pub scheduled_count: usize,
    /// Final state of the processor pool.
    pub processors: Vec<Processor>,
}

impl ScheduleResult {
    /// Creates an empty result over the given pool.
    pub fn new(processors: Vec<Processor>) -> Self {
        Self {
            assignments: Vec::new(),
            missed: Vec::new(),
            scheduled_count: 0,
            processors,
        }
    }

    /// Records a successful placement.
    pub fn assign(&mut self, task_id: u32, processor: usize, finish_time: TimeStep) {
        self.assignments.push(Assignment {
            task_id,
            processor,
            finish_time,
        });
        self.scheduled_count += 1;
    }

    /// Records a dropped task.
    pub fn miss(&mut self, task_id: u32) {
        self.missed.push(task_id);
    }

    /// Latest next-free time across all processors (0 when nothing ran).
    pub fn makespan(&self) -> TimeStep {
        self.processors
            .iter()
            .map(Processor::next_free)
            .max()
            .unwrap_or(0)
    }

    /// The processor a task was bound to, if it was placed.
    pub fn processor_of(&self, task_id: u32) -> Option<usize> {
        self.assignments
            .iter()
            .find(|a| a.task_id == task_id)
            .map(|a| a.processor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_bookkeeping() {
        let mut pool = vec![Processor::scalar(0), Processor::scalar(1)];
        pool[0].record(0, 4, 4);
        pool[1].record(0, 6, 6);

        let mut result = ScheduleResult::new(pool);
        result.assign(1, 0, 4);
        result.assign(2, 1, 6);
        result.miss(3);

        assert_eq!(result.scheduled_count, 2);
        assert_eq!(result.makespan(), 6);
        assert_eq!(result.processor_of(2), Some(1));
        assert_eq!(result.processor_of(3), None);
        assert_eq!(result.missed, vec![3]);
    }
}
