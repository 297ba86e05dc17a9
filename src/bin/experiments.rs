//! Fixed experiment driver.
//!
//! Runs all three schedulers over a series of generated task-set sizes on
//! two processors and prints their quality metrics. Generation is seeded,
//! so the report is reproducible run to run. Set `RUST_LOG` to see
//! per-decision tracing from the schedulers.

use rand::rngs::SmallRng;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;

use dag_sched::generator::TaskSetConfig;
use dag_sched::scheduler::{
    CpopScheduler, DeadlineAdaptiveScheduler, HeftScheduler, ScheduleMetrics, Scheduler,
};

const SEED: u64 = 42;
const PROCESSOR_COUNT: usize = 2;
const TASK_SET_SIZES: [usize; 7] = [5, 10, 15, 20, 25, 30, 40];

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let schedulers: Vec<Box<dyn Scheduler>> = vec![
        Box::new(DeadlineAdaptiveScheduler::new()),
        Box::new(HeftScheduler::new()),
        Box::new(CpopScheduler::new()),
    ];

    let mut rng = SmallRng::seed_from_u64(SEED);

    for &size in &TASK_SET_SIZES {
        let graph = TaskSetConfig::new(size).generate(&mut rng);

        println!("Task set ({} tasks, {} processors):", size, PROCESSOR_COUNT);
        for task in graph.tasks() {
            print!("({}, {}, {}) ", task.id, task.execution_time, task.deadline);
        }
        println!();

        for scheduler in &schedulers {
            match scheduler.schedule(&graph, PROCESSOR_COUNT) {
                Ok(result) => {
                    let metrics = ScheduleMetrics::calculate(&result, &graph);
                    println!(
                        "  {:<6} efficiency {:.2}  makespan {:>4}  speedup {:.2}  load balancing {:.2}",
                        scheduler.name(),
                        metrics.efficiency,
                        metrics.makespan,
                        metrics.speedup,
                        metrics.load_balancing,
                    );
                }
                Err(e) => eprintln!("  {:<6} failed: {}", scheduler.name(), e),
            }
        }
        println!();
    }
}
