//! Running robots against delivery tasks
//!
//! `run_robot` drives one strategy until every parcel is delivered.
//! `compare_robots` runs several strategies over the same batch of tasks.

pub mod compare;
pub mod runner;

pub use compare::{compare_kinds, compare_robots, generate_tasks, Comparison, RobotScore};
pub use runner::{run_robot, RunOutcome};
