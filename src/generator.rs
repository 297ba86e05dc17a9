//! Random task-set generation.
//!
//! Produces topologically ordered task graphs from a caller-supplied rng so
//! generated sets are reproducible: pass a seeded rng (e.g.
//! `SmallRng::seed_from_u64`) to regenerate the same graph. Dependencies are
//! drawn by an independent Bernoulli trial per earlier-indexed candidate
//! predecessor, so the list order is a topological order by construction.

use rand::Rng;

use crate::models::{Task, TaskGraph, TimeStep};

/// Parameters for random task-set generation.
#[derive(Debug, Clone)]
pub struct TaskSetConfig {
    /// Number of tasks to generate.
    pub task_count: usize,
    /// Inclusive execution-time range. The minimum must be positive.
    pub execution_time: (TimeStep, TimeStep),
    /// Inclusive deadline range.
    pub deadline: (TimeStep, TimeStep),
    /// Probability that any given earlier task becomes a dependency.
    pub dependency_probability: f64,
}

impl TaskSetConfig {
    /// Creates a config with the default ranges of the experiment suite:
    /// execution time 1..=10, deadline 5..=20, dependency probability 0.3.
    pub fn new(task_count: usize) -> Self {
        Self {
            task_count,
            execution_time: (1, 10),
            deadline: (5, 20),
            dependency_probability: 0.3,
        }
    }

    /// Sets the inclusive execution-time range.
    pub fn with_execution_time(mut self, min: TimeStep, max: TimeStep) -> Self {
        self.execution_time = (min, max);
        self
    }

    /// Sets the inclusive deadline range.
    pub fn with_deadline(mut self, min: TimeStep, max: TimeStep) -> Self {
        self.deadline = (min, max);
        self
    }

    /// Sets the per-candidate dependency probability.
    pub fn with_dependency_probability(mut self, p: f64) -> Self {
        self.dependency_probability = p;
        self
    }

    /// Generates a task graph. Ids are 1-based and match list positions.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> TaskGraph {
        let mut tasks = Vec::with_capacity(self.task_count);

        for i in 0..self.task_count {
            let execution_time = rng.random_range(self.execution_time.0..=self.execution_time.1);
            let deadline = rng.random_range(self.deadline.0..=self.deadline.1);
            let dependencies = (0..i)
                .filter(|_| rng.random_bool(self.dependency_probability))
                .collect();

            tasks.push(
                Task::new(i as u32 + 1, execution_time, deadline)
                    .with_dependencies(dependencies),
            );
        }

        TaskGraph::new(tasks).expect("generated dependencies always point backward")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_same_seed_same_graph() {
        let config = TaskSetConfig::new(20);
        let a = config.generate(&mut SmallRng::seed_from_u64(7));
        let b = config.generate(&mut SmallRng::seed_from_u64(7));

        assert_eq!(a.tasks(), b.tasks());
    }

    #[test]
    fn test_ranges_respected() {
        let config = TaskSetConfig::new(50)
            .with_execution_time(2, 5)
            .with_deadline(10, 12);
        let graph = config.generate(&mut SmallRng::seed_from_u64(1));

        assert_eq!(graph.len(), 50);
        for task in graph.tasks() {
            assert!((2..=5).contains(&task.execution_time));
            assert!((10..=12).contains(&task.deadline));
        }
    }

    #[test]
    fn test_dependency_probability_extremes() {
        let dense = TaskSetConfig::new(10)
            .with_dependency_probability(1.0)
            .generate(&mut SmallRng::seed_from_u64(3));
        for (i, task) in dense.tasks().iter().enumerate() {
            assert_eq!(task.dependencies.len(), i);
        }

        let sparse = TaskSetConfig::new(10)
            .with_dependency_probability(0.0)
            .generate(&mut SmallRng::seed_from_u64(3));
        assert!(sparse.tasks().iter().all(Task::is_entry));
    }
}
