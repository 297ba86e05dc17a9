//! List-scheduling heuristics for dependent task graphs.
//!
//! Evaluates offline scheduling policies that map a set of dependent tasks
//! onto a fixed pool of identical processors, producing an assignment and
//! derived quality metrics.
//!
//! # Modules
//!
//! - **`models`**: Domain types — [`Task`](models::Task),
//!   [`TaskGraph`](models::TaskGraph), [`Processor`](models::Processor),
//!   [`Assignment`](models::Assignment), [`ScheduleResult`](models::ScheduleResult)
//! - **`ranking`**: Upward/downward rank computation over a task graph
//! - **`scheduler`**: The three policies — deadline-adaptive EDF/DM, HEFT,
//!   CPOP — behind one [`Scheduler`](scheduler::Scheduler) trait, plus
//!   [`ScheduleMetrics`](scheduler::ScheduleMetrics)
//! - **`generator`**: Reproducible random task-set generation
//!
//! # Architecture
//!
//! A [`models::TaskGraph`] is built (and validated) once, ranks are computed
//! fresh per scheduling run, and each scheduler consumes the graph plus a
//! processor count to produce a [`models::ScheduleResult`] owned by the
//! caller. Everything is single-threaded and synchronous; "processors" are
//! bookkeeping timelines, not execution units.
//!
//! # References
//!
//! - Topcuoglu, Hariri & Wu (2002), "Performance-Effective and Low-Complexity
//!   Task Scheduling for Heterogeneous Computing"
//! - Liu & Layland (1973), "Scheduling Algorithms for Multiprogramming in a
//!   Hard-Real-Time Environment"
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"

pub mod error;
pub mod generator;
pub mod models;
pub mod ranking;
pub mod scheduler;

pub use error::ScheduleError;
