//! Task model.
//!
//! A task is a unit of work with a fixed execution time, a deadline, and a
//! set of direct predecessors identified by index into the owning task list.

use serde::{Deserialize, Serialize};

use super::TimeStep;

/// A unit of work to be scheduled.
///
/// `dependencies` holds indices into the task list identifying direct
/// predecessors. A well-formed list keeps every dependency index strictly
/// below the task's own index — see [`TaskGraph`](super::TaskGraph).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique, stable task identifier.
    pub id: u32,
    /// Execution time (positive, in time units).
    pub execution_time: TimeStep,
    /// Latest acceptable start-feasibility bound, in time units.
    pub deadline: TimeStep,
    /// Indices of direct predecessors in the task list.
    pub dependencies: Vec<usize>,
}

impl Task {
    /// Creates a task with no dependencies.
    pub fn new(id: u32, execution_time: TimeStep, deadline: TimeStep) -> Self {
        Self {
            id,
            execution_time,
            deadline,
            dependencies: Vec::new(),
        }
    }

    /// Adds a single dependency.
    pub fn with_dependency(mut self, index: usize) -> Self {
        self.dependencies.push(index);
        self
    }

    /// Replaces the dependency set.
    pub fn with_dependencies(mut self, indices: Vec<usize>) -> Self {
        self.dependencies = indices;
        self
    }

    /// Whether this task has no predecessors.
    pub fn is_entry(&self) -> bool {
        self.dependencies.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_builder() {
        let task = Task::new(3, 7, 20).with_dependencies(vec![0, 1]);
        assert_eq!(task.id, 3);
        assert_eq!(task.execution_time, 7);
        assert_eq!(task.deadline, 20);
        assert_eq!(task.dependencies, vec![0, 1]);
        assert!(!task.is_entry());
    }

    #[test]
    fn test_task_serde_roundtrip() {
        let task = Task::new(1, 4, 10).with_dependency(0);
        let json = serde_json::to_string(&task).unwrap();
        let back: Task = serde_json::from_str(&json).unwrap();
        assert_eq!(back, task);
    }
}
