use thiserror::Error;

use crate::core::types::Place;

#[derive(Error, Debug)]
pub enum RobotError {
    #[error("Malformed road {0:?}: expected exactly two places separated by '-'")]
    MalformedRoad(String),

    #[error("Unknown place: {0}")]
    UnknownPlace(Place),

    #[error("No route from {from} to {to}")]
    NoRoute { from: Place, to: Place },

    #[error("Robot asked to move with no parcels outstanding")]
    NothingToDeliver,

    #[error("Mail route is empty")]
    EmptyMailRoute,

    #[error("Dead end: {0} has no roads")]
    DeadEnd(Place),

    #[error("Simulation did not converge within {max_turns} turns")]
    DidNotConverge { max_turns: u32 },

    #[error("Unknown robot: {0}")]
    UnknownRobot(String),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RobotError>;
