//! Parcel Robots - delivery robot simulation on a village road graph
//!
//! A robot walks a fixed network of named places, picking up parcels and
//! dropping them at their addresses. Strategies range from a random walk to
//! a replanning route optimizer, and can be compared over identical batches
//! of random tasks.

pub mod core;
pub mod graph;
pub mod robot;
pub mod simulation;
pub mod world;

pub use crate::core::{Place, Result, RobotError, SimulationConfig};
pub use graph::{find_route, RoadGraph, Route};
pub use robot::{Action, Memory, Robot, RobotKind, Strategy};
pub use simulation::{compare_robots, run_robot, Comparison, RunOutcome};
pub use world::{Parcel, VillageState};
