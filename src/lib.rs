//! Exam Scheduler - constraint-based exam schedule optimizer
//!
//! Given a population of students, modules, proctor professors, and rooms, this crate
//! produces a complete exam timetable: a (day, slot) for every module, one or more rooms
//! per module partitioned by formation-group, and a set of proctor professors per room.
//!
//! # Algorithm overview
//!
//! The optimizer is a batch pipeline run once per invocation:
//! 1. **Loader**: read the input world from the database into in-memory indexes.
//! 2. **Conflict graph**: derive, per student, the modules they're enrolled in, and edge the
//!    module-conflict graph from shared enrollment.
//! 3. **Day/slot assigner**: color modules by day via largest-degree-first greedy coloring.
//! 4. **Room packer**: per (day, slot), bin-pack groups into rooms, largest group first.
//! 5. **Proctor assigner**: pick proctors per room, department-first, load-balanced.
//! 6. **Writer**: clear the previous schedule and persist the new one atomically.
//!
//! # Example
//!
//! ```no_run
//! use exam_scheduler::db::{connect, load_input, write_schedule};
//! use exam_scheduler::scheduler::generate_schedule;
//! use exam_scheduler::types::Config;
//!
//! let mut conn = connect()?;
//! let input = load_input(&mut conn, Config::default())?;
//! let schedule = generate_schedule(&input, false)?;
//! write_schedule(&mut conn, &schedule, &input.config)?;
//! println!("{} exams scheduled", schedule.exams.len());
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod db;
pub mod error;
pub mod reporter;
pub mod scheduler;
pub mod types;
pub mod validator;

pub use error::{OptimizerError, Result};
