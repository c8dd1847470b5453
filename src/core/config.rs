//! Simulation configuration
//!
//! The road network, mail route and batch settings are plain values passed
//! into the graph builder, robots and runner. Defaults describe the village;
//! a TOML file can replace any of them.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::error::{Result, RobotError};
use crate::core::types::Place;
use crate::graph::RoadGraph;

/// Roads of the village, as `"A-B"` pairs
pub const VILLAGE_ROADS: [&str; 14] = [
    "Alice's House-Bob's House",
    "Alice's House-Cabin",
    "Alice's House-Post Office",
    "Bob's House-Town Hall",
    "Daria's House-Ernie's House",
    "Daria's House-Town Hall",
    "Ernie's House-Grete's House",
    "Grete's House-Farm",
    "Grete's House-Shop",
    "Marketplace-Farm",
    "Marketplace-Post Office",
    "Marketplace-Shop",
    "Marketplace-Town Hall",
    "Shop-Town Hall",
];

/// The village mail loop, starting and ending at the post office
pub const VILLAGE_MAIL_ROUTE: [&str; 13] = [
    "Alice's House",
    "Cabin",
    "Alice's House",
    "Bob's House",
    "Town Hall",
    "Daria's House",
    "Ernie's House",
    "Grete's House",
    "Shop",
    "Grete's House",
    "Farm",
    "Marketplace",
    "Post Office",
];

/// Where the robot starts every generated task
pub const VILLAGE_START: &str = "Post Office";

pub fn village_mail_route() -> Vec<Place> {
    VILLAGE_MAIL_ROUTE.iter().map(|&name| Place::from(name)).collect()
}

/// Configuration for graph, robots and batches
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Road network as `"A-B"` strings
    pub roads: Vec<String>,

    /// Loop walked by the route robot
    pub mail_route: Vec<Place>,

    /// Starting place for generated tasks
    pub start: Place,

    /// Parcels per generated task
    pub parcel_count: usize,

    /// Tasks per comparison batch
    pub tasks: usize,

    /// Seed for the task generator. None draws a fresh seed.
    pub seed: Option<u64>,

    /// Turn ceiling per run. None runs until every parcel is delivered.
    pub max_turns: Option<u32>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            roads: VILLAGE_ROADS.iter().map(|r| r.to_string()).collect(),
            mail_route: village_mail_route(),
            start: Place::from(VILLAGE_START),
            parcel_count: 5,
            tasks: 100,
            seed: None,
            max_turns: Some(10_000),
        }
    }
}

impl SimulationConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a config from a TOML file. Missing fields take their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        let config: SimulationConfig = toml::from_str(contents)?;
        Ok(config)
    }

    /// Build the road graph described by `roads`
    pub fn graph(&self) -> Result<RoadGraph> {
        RoadGraph::build(&self.roads)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        let graph = self.graph()?;

        if !graph.contains(&self.start) {
            return Err(RobotError::InvalidConfig(format!(
                "start place {} is not on any road",
                self.start
            )));
        }

        if graph.place_count() < 2 {
            return Err(RobotError::InvalidConfig(
                "roads must connect at least two places".into(),
            ));
        }

        if self.parcel_count == 0 || self.tasks == 0 {
            return Err(RobotError::InvalidConfig(
                "parcel_count and tasks must be positive".into(),
            ));
        }

        if self.max_turns == Some(0) {
            return Err(RobotError::InvalidConfig("max_turns must be positive".into()));
        }

        // Walked as a loop: the last stop leads back to the first
        let mut at = self.mail_route.last().unwrap_or(&self.start);
        for stop in &self.mail_route {
            if !graph.is_adjacent(at, stop) {
                return Err(RobotError::InvalidConfig(format!(
                    "mail route has no road from {} to {}",
                    at, stop
                )));
            }
            at = stop;
        }

        Ok(())
    }
}
