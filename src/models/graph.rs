//! Task graph model.
//!
//! An immutable DAG of tasks whose list order is a topological order. The
//! ordering invariant is validated once at construction; every rank
//! computation and scheduler relies on it and never re-derives it.
//!
//! # Reference
//! Cormen et al. (2009), "Introduction to Algorithms", Ch. 22.4 (Topological Sort)

use serde::Serialize;

use super::{Task, TimeStep};
use crate::error::ScheduleError;

/// An immutable, topologically ordered task dependency graph.
///
/// Construction enforces two invariants:
/// 1. Every dependency index is strictly less than the task's own index
///    (the list order is a topological order, which also rules out cycles).
/// 2. Every execution time is positive.
///
/// Successor adjacency is precomputed so reverse traversals (downward rank)
/// run in O(T·D) rather than scanning every task's dependency set.
///
/// Serializes but does not deserialize: round-tripping through serde would
/// bypass the construction-time validation. Rebuild via [`TaskGraph::new`].
#[derive(Debug, Clone, Serialize)]
pub struct TaskGraph {
    tasks: Vec<Task>,
    successors: Vec<Vec<usize>>,
}

impl TaskGraph {
    /// Builds a graph from a topologically ordered task list.
    ///
    /// # Errors
    /// [`ScheduleError::MalformedGraph`] if a dependency index is not
    /// strictly below its task's index; [`ScheduleError::NonPositiveExecutionTime`]
    /// if any execution time is zero or negative.
    pub fn new(tasks: Vec<Task>) -> Result<Self, ScheduleError> {
        let mut successors = vec![Vec::new(); tasks.len()];

        for (i, task) in tasks.iter().enumerate() {
            if task.execution_time <= 0 {
                return Err(ScheduleError::NonPositiveExecutionTime { task: i });
            }
            for &dep in &task.dependencies {
                if dep >= i {
                    return Err(ScheduleError::MalformedGraph {
                        task: i,
                        dependency: dep,
                    });
                }
                successors[dep].push(i);
            }
        }

        Ok(Self { tasks, successors })
    }

    /// Number of tasks.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether the graph holds no tasks.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// The task at `index`.
    pub fn task(&self, index: usize) -> &Task {
        &self.tasks[index]
    }

    /// All tasks in topological order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Indices of the direct successors of the task at `index`.
    pub fn successors(&self, index: usize) -> &[usize] {
        &self.successors[index]
    }

    /// Sum of all execution times (the sequential makespan).
    pub fn total_execution_time(&self) -> TimeStep {
        self.tasks.iter().map(|t| t.execution_time).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_topological_order() {
        let graph = TaskGraph::new(vec![
            Task::new(1, 2, 10),
            Task::new(2, 3, 10).with_dependency(0),
            Task::new(3, 1, 10).with_dependencies(vec![0, 1]),
        ])
        .unwrap();

        assert_eq!(graph.len(), 3);
        assert_eq!(graph.successors(0), &[1, 2]);
        assert_eq!(graph.successors(1), &[2]);
        assert!(graph.successors(2).is_empty());
        assert_eq!(graph.total_execution_time(), 6);
    }

    #[test]
    fn test_rejects_forward_dependency() {
        let result = TaskGraph::new(vec![
            Task::new(1, 2, 10).with_dependency(1),
            Task::new(2, 3, 10),
        ]);
        assert_eq!(
            result.unwrap_err(),
            ScheduleError::MalformedGraph {
                task: 0,
                dependency: 1
            }
        );
    }

    #[test]
    fn test_rejects_self_dependency() {
        let result = TaskGraph::new(vec![Task::new(1, 2, 10).with_dependency(0)]);
        assert!(matches!(
            result,
            Err(ScheduleError::MalformedGraph { task: 0, .. })
        ));
    }

    #[test]
    fn test_rejects_zero_execution_time() {
        let result = TaskGraph::new(vec![Task::new(1, 0, 10)]);
        assert_eq!(
            result.unwrap_err(),
            ScheduleError::NonPositiveExecutionTime { task: 0 }
        );
    }

    #[test]
    fn test_empty_graph_is_valid() {
        let graph = TaskGraph::new(Vec::new()).unwrap();
        assert!(graph.is_empty());
        assert_eq!(graph.total_execution_time(), 0);
    }
}
