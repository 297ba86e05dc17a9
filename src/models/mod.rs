//! Scheduling domain models.
//!
//! Provides the core data types for representing task graphs, processor
//! timelines, and scheduling results. Tasks carry integer execution times
//! and deadlines; the dependency relation is a DAG whose list order is a
//! topological order (validated at [`TaskGraph`] construction).

mod graph;
mod processor;
mod schedule;
mod task;

pub use graph::TaskGraph;
pub use processor::Processor;
pub use schedule::{Assignment, ScheduleResult};
pub use task::Task;

/// Discrete simulated time. All durations, deadlines, and finish times are
/// expressed in these units relative to t=0.
pub type TimeStep = i64;
