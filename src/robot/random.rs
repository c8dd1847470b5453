//! Random walk

use rand::seq::SliceRandom;
use rand::Rng;

use crate::core::error::{Result, RobotError};
use crate::graph::RoadGraph;
use crate::robot::{Action, Memory};
use crate::world::VillageState;

/// Move to a uniformly random neighbour. Memory is not used.
pub fn decide<R: Rng + ?Sized>(graph: &RoadGraph, state: &VillageState, rng: &mut R) -> Result<Action> {
    let direction = graph
        .neighbors(state.place())
        .choose(rng)
        .cloned()
        .ok_or_else(|| RobotError::DeadEnd(state.place().clone()))?;

    Ok(Action {
        direction,
        memory: Memory::new(),
    })
}
