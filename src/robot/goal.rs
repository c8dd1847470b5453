//! Goal-oriented robot
//!
//! Works through parcels in order: route to the first parcel, pick it up,
//! route to its address. A route, once chosen, is followed to the end.

use crate::core::error::{Result, RobotError};
use crate::graph::RoadGraph;
use crate::robot::{route_between, step_along, Action, Memory};
use crate::world::VillageState;

pub fn decide(graph: &RoadGraph, state: &VillageState, memory: Memory) -> Result<Action> {
    let place = state.place();

    let route = if memory.is_empty() {
        let parcel = state.parcels().first().ok_or(RobotError::NothingToDeliver)?;
        let target = if &parcel.place != place {
            &parcel.place
        } else {
            &parcel.address
        };

        let route = route_between(graph, place, target)?;
        tracing::debug!("Goal robot at {} heading to {} ({} steps)", place, target, route.len());
        route
    } else {
        memory
    };

    step_along(route, place)
}
