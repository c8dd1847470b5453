//! Breadth-first route search over the road graph

use std::collections::VecDeque;

use ahash::AHashSet;

use crate::core::types::Place;
use crate::graph::road::RoadGraph;

/// Places to walk through in order, excluding the starting place
pub type Route = Vec<Place>;

/// Find a shortest route from `from` to `to`.
///
/// The result excludes `from` and ends with `to`. Neighbours are expanded in
/// graph order, so among equally short routes the one found first wins and
/// the same query always yields the same route.
///
/// The target is only recognised while expanding neighbours, so asking for a
/// route from a place to itself gives the shortest round trip out and back.
///
/// Returns None if `to` is unreachable.
pub fn find_route(graph: &RoadGraph, from: &Place, to: &Place) -> Option<Route> {
    let mut work: VecDeque<(&Place, Route)> = VecDeque::new();
    let mut queued: AHashSet<&Place> = AHashSet::new();

    work.push_back((from, Vec::new()));
    queued.insert(from);

    while let Some((at, route)) = work.pop_front() {
        for place in graph.neighbors(at) {
            if place == to {
                let mut found = route;
                found.push(place.clone());
                return Some(found);
            }

            if queued.insert(place) {
                let mut next = route.clone();
                next.push(place.clone());
                work.push_back((place, next));
            }
        }
    }

    None // No route found
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(route: &Route) -> Vec<&str> {
        route.iter().map(Place::as_str).collect()
    }

    #[test]
    fn test_route_straight_line() {
        let graph = RoadGraph::build(["A-B", "B-C", "C-D"]).unwrap();
        let route = find_route(&graph, &"A".into(), &"D".into()).unwrap();
        assert_eq!(names(&route), vec!["B", "C", "D"]);
    }

    #[test]
    fn test_route_to_neighbor() {
        let graph = RoadGraph::build(["A-B"]).unwrap();
        let route = find_route(&graph, &"A".into(), &"B".into()).unwrap();
        assert_eq!(names(&route), vec!["B"]);
    }

    #[test]
    fn test_route_takes_shortcut() {
        // Long way round A-B-C-D-E versus the shortcut A-X-E
        let graph = RoadGraph::build(["A-B", "B-C", "C-D", "D-E", "A-X", "X-E"]).unwrap();
        let route = find_route(&graph, &"A".into(), &"E".into()).unwrap();
        assert_eq!(names(&route), vec!["X", "E"]);
    }

    #[test]
    fn test_route_ties_follow_neighbor_order() {
        // Diamond: both A-B-D and A-C-D have length 2
        let graph = RoadGraph::build(["A-B", "A-C", "B-D", "C-D"]).unwrap();
        let route = find_route(&graph, &"A".into(), &"D".into()).unwrap();
        assert_eq!(names(&route), vec!["B", "D"]);

        let flipped = RoadGraph::build(["A-C", "A-B", "B-D", "C-D"]).unwrap();
        let route = find_route(&flipped, &"A".into(), &"D".into()).unwrap();
        assert_eq!(names(&route), vec!["C", "D"]);
    }

    #[test]
    fn test_route_is_deterministic() {
        let graph = RoadGraph::build(["A-B", "A-C", "B-D", "C-D", "D-E"]).unwrap();
        let first = find_route(&graph, &"A".into(), &"E".into());
        for _ in 0..10 {
            assert_eq!(find_route(&graph, &"A".into(), &"E".into()), first);
        }
    }

    #[test]
    fn test_route_handles_cycles() {
        let graph = RoadGraph::build(["A-B", "B-C", "C-A", "C-D"]).unwrap();
        let route = find_route(&graph, &"B".into(), &"D".into()).unwrap();
        assert_eq!(names(&route), vec!["C", "D"]);
    }

    #[test]
    fn test_route_unreachable() {
        let graph = RoadGraph::build(["A-B", "C-D"]).unwrap();
        assert!(find_route(&graph, &"A".into(), &"D".into()).is_none());
    }

    #[test]
    fn test_route_unknown_place() {
        let graph = RoadGraph::build(["A-B"]).unwrap();
        assert!(find_route(&graph, &"Z".into(), &"A".into()).is_none());
        assert!(find_route(&graph, &"A".into(), &"Z".into()).is_none());
    }

    #[test]
    fn test_route_to_self_is_round_trip() {
        let graph = RoadGraph::build(["A-B", "A-C"]).unwrap();
        let route = find_route(&graph, &"A".into(), &"A".into()).unwrap();
        assert_eq!(names(&route), vec!["B", "A"]);
    }
}
