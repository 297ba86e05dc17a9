//! Error types for graph construction and scheduling.
//!
//! All failures are local and non-retryable: the caller must supply a
//! corrected graph (or a non-empty processor pool) and re-invoke.

use thiserror::Error;

/// Errors raised when building a task graph or invoking a scheduler.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    /// A task references a dependency that does not precede it in the task
    /// list. The list order is required to be a topological order, so every
    /// dependency index must be strictly less than the task's own index;
    /// this also rules out cycles.
    #[error("task at index {task} depends on index {dependency}, which does not precede it")]
    MalformedGraph { task: usize, dependency: usize },

    /// A task has a zero or negative execution time.
    #[error("task at index {task} has a non-positive execution time")]
    NonPositiveExecutionTime { task: usize },

    /// A scheduler was invoked with an empty processor pool.
    #[error("no processors available to schedule onto")]
    NoProcessorsAvailable,
}
