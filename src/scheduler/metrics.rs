//! Schedule quality metrics.
//!
//! Computes the standard performance indicators from a completed scheduling
//! run and its input graph.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Efficiency | scheduled tasks / total tasks |
//! | Makespan | maximum next-free time across processors |
//! | Speedup | sequential execution time / makespan |
//! | Load balancing | population std-dev of per-processor busy time |
//!
//! # Reference
//! Pinedo (2016), "Scheduling", Ch. 1.2: Performance Measures

use crate::models::{ScheduleResult, TaskGraph, TimeStep};

/// Performance indicators for one scheduling run.
#[derive(Debug, Clone)]
pub struct ScheduleMetrics {
    /// Fraction of tasks successfully placed (0.0..=1.0).
    pub efficiency: f64,
    /// Latest finish time across all processors.
    pub makespan: TimeStep,
    /// Sequential-over-parallel execution time ratio (0.0 when nothing ran).
    pub speedup: f64,
    /// Population standard deviation of per-processor busy time.
    /// 0.0 exactly when the pool has a single processor.
    pub load_balancing: f64,
}

impl ScheduleMetrics {
    /// Computes metrics from a scheduling result and its input graph.
    pub fn calculate(result: &ScheduleResult, graph: &TaskGraph) -> Self {
        let efficiency = if graph.is_empty() {
            1.0
        } else {
            result.scheduled_count as f64 / graph.len() as f64
        };

        let makespan = result.makespan();
        let speedup = if makespan == 0 {
            0.0
        } else {
            graph.total_execution_time() as f64 / makespan as f64
        };

        Self {
            efficiency,
            makespan,
            speedup,
            load_balancing: busy_time_stddev(result),
        }
    }
}

fn busy_time_stddev(result: &ScheduleResult) -> f64 {
    let n = result.processors.len();
    if n == 0 {
        return 0.0;
    }

    let mean = result
        .processors
        .iter()
        .map(|p| p.busy_time() as f64)
        .sum::<f64>()
        / n as f64;

    let variance = result
        .processors
        .iter()
        .map(|p| {
            let d = p.busy_time() as f64 - mean;
            d * d
        })
        .sum::<f64>()
        / n as f64;

    variance.sqrt()
}
