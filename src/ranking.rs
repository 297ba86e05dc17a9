//! Upward and downward rank computation.
//!
//! Both ranks are longest weighted paths over the dependency DAG, computed
//! by iterative dynamic programming in topological (index) order. No
//! recursion; O(T·D) with T tasks and maximum dependency degree D.
//!
//! # Reference
//! Topcuoglu, Hariri & Wu (2002), "Performance-Effective and Low-Complexity
//! Task Scheduling for Heterogeneous Computing", §3.1
//!
//! Note: `downward_ranks` uses the recurrence the CPOP priority actually
//! consumes here — each step contributes the successor's execution time —
//! which differs from the paper's downward rank. It is kept as-is.

use crate::models::{TaskGraph, TimeStep};

/// Longest weighted path ending at (and including) each task.
///
/// `ranks[i]` starts at the task's own execution time and is raised to
/// `ranks[p] + execution_time[i]` over every direct predecessor `p`.
/// Predecessors are always processed first thanks to the graph's
/// topological order, so one forward pass suffices.
pub fn upward_ranks(graph: &TaskGraph) -> Vec<TimeStep> {
    let mut ranks: Vec<TimeStep> = graph.tasks().iter().map(|t| t.execution_time).collect();

    for i in 0..graph.len() {
        for &pred in &graph.task(i).dependencies {
            ranks[i] = ranks[i].max(ranks[pred] + graph.task(i).execution_time);
        }
    }

    ranks
}

/// Longest weighted path from each task forward through its successors.
///
/// `ranks[i]` starts at the task's own execution time and is raised to
/// `ranks[j] + execution_time[j]` over every direct successor `j`, walking
/// tasks in reverse index order so successors are always processed first.
pub fn downward_ranks(graph: &TaskGraph) -> Vec<TimeStep> {
    let mut ranks: Vec<TimeStep> = graph.tasks().iter().map(|t| t.execution_time).collect();

    for i in (0..graph.len()).rev() {
        for &succ in graph.successors(i) {
            ranks[i] = ranks[i].max(ranks[succ] + graph.task(succ).execution_time);
        }
    }

    ranks
}
