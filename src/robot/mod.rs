//! Delivery robots
//!
//! Architecture: closed set of strategies behind one trait
//! - `Strategy` is the capability the runner needs: (state, memory) -> action
//! - `Robot` is the catalogue of built-in strategies
//! - Memory is whatever route a strategy wants carried to its next turn

pub mod goal;
pub mod mail_route;
pub mod optimized;
pub mod random;

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::core::error::{Result, RobotError};
use crate::core::types::Place;
use crate::graph::{find_route, RoadGraph, Route};
use crate::world::VillageState;

/// Route a robot carries between turns
pub type Memory = Route;

/// A robot's decision for one turn
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    /// Place to move to
    pub direction: Place,
    /// Memory to hand back on the next turn
    pub memory: Memory,
}

/// Trait for anything that can drive the robot
pub trait Strategy {
    /// Name used in reports
    fn name(&self) -> &str;

    /// Memory to start a run with
    fn initial_memory(&self) -> Memory {
        Memory::new()
    }

    /// Pick the next move from the current state and carried memory
    fn decide<R: Rng + ?Sized>(
        &self,
        graph: &RoadGraph,
        state: &VillageState,
        memory: Memory,
        rng: &mut R,
    ) -> Result<Action>;
}

/// Built-in strategy names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RobotKind {
    Random,
    Route,
    Goal,
    Optimized,
}

impl RobotKind {
    pub const ALL: [RobotKind; 4] = [
        RobotKind::Random,
        RobotKind::Route,
        RobotKind::Goal,
        RobotKind::Optimized,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            RobotKind::Random => "random",
            RobotKind::Route => "route",
            RobotKind::Goal => "goal",
            RobotKind::Optimized => "optimized",
        }
    }
}

impl fmt::Display for RobotKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RobotKind {
    type Err = RobotError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "random" => Ok(RobotKind::Random),
            "route" | "mail-route" | "fixed" => Ok(RobotKind::Route),
            "goal" | "goal-oriented" => Ok(RobotKind::Goal),
            "optimized" | "fast" => Ok(RobotKind::Optimized),
            _ => Err(RobotError::UnknownRobot(s.to_string())),
        }
    }
}

/// The built-in robots
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Robot {
    /// Wander to a random neighbour every turn
    Random,
    /// Walk a fixed loop that passes every place
    MailRoute(Route),
    /// Finish one parcel at a time, following a stored route
    GoalOriented,
    /// Replan every turn, preferring pickups over deliveries
    Optimized,
}

impl Robot {
    /// Build a robot of `kind`. Only the route robot uses `mail_route`.
    pub fn new(kind: RobotKind, mail_route: &[Place]) -> Self {
        match kind {
            RobotKind::Random => Robot::Random,
            RobotKind::Route => Robot::MailRoute(mail_route.to_vec()),
            RobotKind::Goal => Robot::GoalOriented,
            RobotKind::Optimized => Robot::Optimized,
        }
    }

    pub fn kind(&self) -> RobotKind {
        match self {
            Robot::Random => RobotKind::Random,
            Robot::MailRoute(_) => RobotKind::Route,
            Robot::GoalOriented => RobotKind::Goal,
            Robot::Optimized => RobotKind::Optimized,
        }
    }
}

impl Strategy for Robot {
    fn name(&self) -> &str {
        self.kind().name()
    }

    fn decide<R: Rng + ?Sized>(
        &self,
        graph: &RoadGraph,
        state: &VillageState,
        memory: Memory,
        rng: &mut R,
    ) -> Result<Action> {
        match self {
            Robot::Random => random::decide(graph, state, rng),
            Robot::MailRoute(route) => mail_route::decide(route, memory),
            Robot::GoalOriented => goal::decide(graph, state, memory),
            Robot::Optimized => optimized::decide(graph, state),
        }
    }
}

/// Shortest route between two places, treating "no route" as an error
pub(crate) fn route_between(graph: &RoadGraph, from: &Place, to: &Place) -> Result<Route> {
    find_route(graph, from, to).ok_or_else(|| RobotError::NoRoute {
        from: from.clone(),
        to: to.clone(),
    })
}

/// Split a route into the next step and the remainder
pub(crate) fn step_along(route: Route, from: &Place) -> Result<Action> {
    let mut steps = route.into_iter();
    let Some(direction) = steps.next() else {
        return Err(RobotError::NoRoute {
            from: from.clone(),
            to: from.clone(),
        });
    };

    Ok(Action {
        direction,
        memory: steps.collect(),
    })
}
