//! Immutable robot + parcel snapshot

use serde::{Deserialize, Serialize};

use crate::core::types::Place;
use crate::graph::RoadGraph;
use crate::world::parcel::Parcel;

/// Where the robot is and which parcels are still outstanding
///
/// Values are never mutated in place: [`VillageState::move_to`] returns a new
/// state and leaves the old one untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VillageState {
    place: Place,
    parcels: Vec<Parcel>,
}

impl VillageState {
    /// Create a state. Parcels already at their address are dropped.
    pub fn new(place: impl Into<Place>, parcels: Vec<Parcel>) -> Self {
        Self {
            place: place.into(),
            parcels: parcels.into_iter().filter(|p| !p.is_delivered()).collect(),
        }
    }

    pub fn place(&self) -> &Place {
        &self.place
    }

    pub fn parcels(&self) -> &[Parcel] {
        &self.parcels
    }

    /// All parcels delivered
    pub fn is_finished(&self) -> bool {
        self.parcels.is_empty()
    }

    /// Parcels currently lying at `place`
    pub fn parcels_at<'a>(&'a self, place: &'a Place) -> impl Iterator<Item = &'a Parcel> + 'a {
        self.parcels.iter().filter(move |p| &p.place == place)
    }

    /// Move the robot to `destination`.
    ///
    /// If there is no road from the current place to `destination` the move
    /// is rejected and an identical state is returned. Otherwise the robot
    /// carries every parcel at its current place along, and parcels that
    /// arrive at their address are dropped from the result.
    pub fn move_to(&self, graph: &RoadGraph, destination: &Place) -> VillageState {
        if !graph.is_adjacent(&self.place, destination) {
            return self.clone();
        }

        let parcels = self
            .parcels
            .iter()
            .map(|p| {
                if p.place != self.place {
                    return p.clone();
                }
                Parcel {
                    place: destination.clone(),
                    address: p.address.clone(),
                }
            })
            .filter(|p| !p.is_delivered())
            .collect();

        VillageState {
            place: destination.clone(),
            parcels,
        }
    }
}
