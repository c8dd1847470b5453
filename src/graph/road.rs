//! Building the road graph from edge strings

use ahash::AHashMap;
use nom::bytes::complete::take_till1;
use nom::character::complete::char;
use nom::combinator::all_consuming;
use nom::sequence::separated_pair;
use nom::{IResult, Parser};

use crate::core::error::{Result, RobotError};
use crate::core::types::Place;

fn endpoint(input: &str) -> IResult<&str, &str> {
    take_till1(|c: char| c == '-').parse(input)
}

fn road(input: &str) -> IResult<&str, (&str, &str)> {
    all_consuming(separated_pair(endpoint, char('-'), endpoint)).parse(input)
}

/// Parse a road of the form `"A-B"` into its two endpoints.
///
/// Surrounding whitespace on each endpoint is trimmed. Anything that does not
/// split into exactly two non-empty names is rejected.
pub fn parse_road(text: &str) -> Result<(Place, Place)> {
    let malformed = || RobotError::MalformedRoad(text.to_string());

    let (_, (from, to)) = road(text).map_err(|_| malformed())?;
    let (from, to) = (from.trim(), to.trim());
    if from.is_empty() || to.is_empty() {
        return Err(malformed());
    }

    Ok((Place::from(from), Place::from(to)))
}

/// Undirected adjacency structure over places
///
/// Every road is stored in both directions, so if `b` is a neighbour of `a`
/// then `a` is a neighbour of `b`. Neighbours keep the order roads were added
/// in, which fixes tie-breaking in route search.
#[derive(Debug, Clone, Default)]
pub struct RoadGraph {
    /// Places in first-seen order
    places: Vec<Place>,
    roads: AHashMap<Place, Vec<Place>>,
    road_count: usize,
}

impl RoadGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from `"A-B"` road strings
    pub fn build<I, S>(roads: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut graph = Self::new();
        for text in roads {
            let (from, to) = parse_road(text.as_ref())?;
            graph.add_road(from, to);
        }

        tracing::debug!(
            "Built road graph: {} places, {} roads",
            graph.place_count(),
            graph.road_count()
        );
        Ok(graph)
    }

    /// Add a road in both directions. Duplicate roads are kept.
    pub fn add_road(&mut self, from: Place, to: Place) {
        self.add_edge(from.clone(), to.clone());
        self.add_edge(to, from);
        self.road_count += 1;
    }

    fn add_edge(&mut self, from: Place, to: Place) {
        match self.roads.get_mut(&from) {
            Some(neighbors) => neighbors.push(to),
            None => {
                self.places.push(from.clone());
                self.roads.insert(from, vec![to]);
            }
        }
    }

    /// Places reachable in one step, in the order their roads were added.
    ///
    /// Unknown places have no neighbours.
    pub fn neighbors(&self, place: &Place) -> &[Place] {
        self.roads.get(place).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, place: &Place) -> bool {
        self.roads.contains_key(place)
    }

    pub fn is_adjacent(&self, from: &Place, to: &Place) -> bool {
        self.neighbors(from).contains(to)
    }

    /// All places, in the order they first appeared in a road
    pub fn places(&self) -> &[Place] {
        &self.places
    }

    pub fn place_count(&self) -> usize {
        self.places.len()
    }

    pub fn road_count(&self) -> usize {
        self.road_count
    }
}
