//! Random delivery tasks

use rand::Rng;

use crate::core::error::{Result, RobotError};
use crate::core::types::Place;
use crate::graph::RoadGraph;
use crate::world::parcel::Parcel;
use crate::world::state::VillageState;

/// Generate a task: the robot starts at `start` with `parcel_count` parcels,
/// each with a uniformly random address and a different, uniformly random
/// pickup place.
pub fn random_state<R: Rng + ?Sized>(
    graph: &RoadGraph,
    start: &Place,
    parcel_count: usize,
    rng: &mut R,
) -> Result<VillageState> {
    if !graph.contains(start) {
        return Err(RobotError::UnknownPlace(start.clone()));
    }
    let places = graph.places();
    if places.len() < 2 {
        return Err(RobotError::InvalidConfig(
            "need at least two places to generate parcels".into(),
        ));
    }

    let mut parcels = Vec::with_capacity(parcel_count);
    for _ in 0..parcel_count {
        let address = pick(places, rng);
        let place = loop {
            let candidate = pick(places, rng);
            if candidate != address {
                break candidate;
            }
        };
        parcels.push(Parcel {
            place: place.clone(),
            address: address.clone(),
        });
    }

    Ok(VillageState::new(start.clone(), parcels))
}

fn pick<'a, R: Rng + ?Sized>(places: &'a [Place], rng: &mut R) -> &'a Place {
    // Callers guarantee at least two places
    &places[rng.gen_range(0..places.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn test_graph() -> RoadGraph {
        RoadGraph::build(["A-B", "B-C", "C-D"]).unwrap()
    }

    #[test]
    fn test_random_state_shape() {
        let graph = test_graph();
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let state = random_state(&graph, &"A".into(), 5, &mut rng).unwrap();

        assert_eq!(state.place(), &Place::from("A"));
        assert_eq!(state.parcels().len(), 5);
        for parcel in state.parcels() {
            assert_ne!(parcel.place, parcel.address);
            assert!(graph.contains(&parcel.place));
            assert!(graph.contains(&parcel.address));
        }
    }

    #[test]
    fn test_random_state_is_reproducible() {
        let graph = test_graph();
        let a = random_state(&graph, &"A".into(), 8, &mut ChaCha8Rng::seed_from_u64(7)).unwrap();
        let b = random_state(&graph, &"A".into(), 8, &mut ChaCha8Rng::seed_from_u64(7)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_random_state_unknown_start() {
        let graph = test_graph();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let result = random_state(&graph, &"Z".into(), 3, &mut rng);
        assert!(matches!(result, Err(RobotError::UnknownPlace(_))));
    }

    #[test]
    fn test_random_state_needs_two_places() {
        let graph = RoadGraph::new();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert!(random_state(&graph, &"A".into(), 3, &mut rng).is_err());
    }
}
