//! Comparing robots over a shared batch of tasks

use std::fmt;

use rand::Rng;
use serde::Serialize;

use crate::core::config::SimulationConfig;
use crate::core::error::{Result, RobotError};
use crate::core::types::{Place, Turn};
use crate::graph::RoadGraph;
use crate::robot::{Robot, RobotKind, Strategy};
use crate::simulation::runner::run_robot;
use crate::world::{random_state, VillageState};

/// How one robot did across the batch
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RobotScore {
    pub robot: String,
    pub tasks: usize,
    pub total_turns: u64,
    pub average_turns: f64,
}

/// Scores for every robot, in the order they were given
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comparison {
    pub tasks: usize,
    pub scores: Vec<RobotScore>,
}

impl Comparison {
    pub fn score(&self, robot: &str) -> Option<&RobotScore> {
        self.scores.iter().find(|s| s.robot == robot)
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, score) in self.scores.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(
                f,
                "Average steps for {}: {:.2} over {} tasks",
                score.robot, score.average_turns, score.tasks
            )?;
        }
        Ok(())
    }
}

/// Generate `count` random tasks up front
pub fn generate_tasks<R: Rng + ?Sized>(
    graph: &RoadGraph,
    start: &Place,
    parcel_count: usize,
    count: usize,
    rng: &mut R,
) -> Result<Vec<VillageState>> {
    (0..count)
        .map(|_| random_state(graph, start, parcel_count, rng))
        .collect()
}

/// Run every robot on every task and report mean turns per robot.
///
/// Each robot sees exactly the same tasks, each starting from the robot's
/// initial memory.
pub fn compare_robots<S, R>(
    graph: &RoadGraph,
    robots: &[S],
    tasks: &[VillageState],
    max_turns: Option<Turn>,
    rng: &mut R,
) -> Result<Comparison>
where
    S: Strategy,
    R: Rng + ?Sized,
{
    if tasks.is_empty() {
        return Err(RobotError::InvalidConfig("cannot compare robots on zero tasks".into()));
    }

    let mut totals = vec![0u64; robots.len()];
    for task in tasks {
        for (robot, total) in robots.iter().zip(totals.iter_mut()) {
            let outcome = run_robot(graph, task.clone(), robot, robot.initial_memory(), max_turns, rng)?;
            *total += u64::from(outcome.turns);
        }
    }

    let scores: Vec<RobotScore> = robots
        .iter()
        .zip(totals)
        .map(|(robot, total_turns)| RobotScore {
            robot: robot.name().to_string(),
            tasks: tasks.len(),
            total_turns,
            average_turns: total_turns as f64 / tasks.len() as f64,
        })
        .collect();

    for score in &scores {
        tracing::info!("Average steps for {}: {:.2}", score.robot, score.average_turns);
    }

    Ok(Comparison {
        tasks: tasks.len(),
        scores,
    })
}

/// Compare built-in robots on a batch generated from `config`
pub fn compare_kinds<R: Rng + ?Sized>(
    config: &SimulationConfig,
    kinds: &[RobotKind],
    rng: &mut R,
) -> Result<Comparison> {
    let graph = config.graph()?;
    let tasks = generate_tasks(&graph, &config.start, config.parcel_count, config.tasks, rng)?;
    let robots: Vec<Robot> = kinds
        .iter()
        .map(|&kind| Robot::new(kind, &config.mail_route))
        .collect();

    compare_robots(&graph, &robots, &tasks, config.max_turns, rng)
}
