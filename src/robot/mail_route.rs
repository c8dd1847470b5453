//! Fixed mail route
//!
//! Walks a predetermined loop, starting over when it runs out. Only
//! guaranteed to finish when the loop passes every pickup and address, as
//! the village route does from the post office.

use crate::core::error::{Result, RobotError};
use crate::core::types::Place;
use crate::robot::{Action, Memory};

/// Take the next stop from memory, reloading the full route when empty
pub fn decide(route: &[Place], memory: Memory) -> Result<Action> {
    let memory = if memory.is_empty() { route.to_vec() } else { memory };

    let Some((direction, rest)) = memory.split_first() else {
        return Err(RobotError::EmptyMailRoute);
    };

    Ok(Action {
        direction: direction.clone(),
        memory: rest.to_vec(),
    })
}
