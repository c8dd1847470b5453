//! Road network
//!
//! The village is an undirected graph of named places. Roads are parsed
//! once from `"A-B"` strings and the graph is read-only afterwards.

pub mod road;
pub mod route;

pub use road::{parse_road, RoadGraph};
pub use route::{find_route, Route};
