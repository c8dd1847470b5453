//! Optimized robot
//!
//! Every turn, lists a candidate route per errand: a pickup route for each
//! parcel not at the robot, and a delivery route for every parcel. Pickups
//! always outrank deliveries; within a kind the shortest route wins, and
//! equal lengths keep parcel order. Only the first step is taken and nothing
//! is remembered, so the robot replans from scratch on the next turn.

use crate::core::error::{Result, RobotError};
use crate::graph::{RoadGraph, Route};
use crate::robot::{route_between, step_along, Action};
use crate::world::VillageState;

/// What a candidate route accomplishes. Ordering is priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Errand {
    PickUp,
    Delivery,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub errand: Errand,
    pub route: Route,
}

/// Candidate routes for the current state, best first
pub fn rank_candidates(graph: &RoadGraph, state: &VillageState) -> Result<Vec<Candidate>> {
    let place = state.place();
    let mut candidates = Vec::with_capacity(state.parcels().len() * 2);

    for parcel in state.parcels() {
        if &parcel.place != place {
            candidates.push(Candidate {
                errand: Errand::PickUp,
                route: route_between(graph, place, &parcel.place)?,
            });
        }

        // Measured from where the robot stands, not from the pickup
        candidates.push(Candidate {
            errand: Errand::Delivery,
            route: route_between(graph, place, &parcel.address)?,
        });
    }

    // Stable: equal keys keep parcel order
    candidates.sort_by_key(|c| (c.errand, c.route.len()));
    Ok(candidates)
}

pub fn decide(graph: &RoadGraph, state: &VillageState) -> Result<Action> {
    let best = rank_candidates(graph, state)?
        .into_iter()
        .next()
        .ok_or(RobotError::NothingToDeliver)?;

    tracing::trace!("Optimized robot chose {:?} over {} steps", best.errand, best.route.len());

    let mut action = step_along(best.route, state.place())?;
    // Replan every turn
    action.memory.clear();
    Ok(action)
}
