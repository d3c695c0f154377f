pub mod dijkstra;
pub mod a_star;
mod shortest_path;

use shortest_path::{route_ends, shortest_path};

use crate::errors::{MapError, UnknownAlgorithm};
use crate::model::Map;

use std::{fmt, str::FromStr};

pub use dijkstra::{dijkstra_original, dijkstra_priority_queue};
pub use a_star::a_star;


/// Result of a routing request
/// path: city names from origin to destination inclusive, empty if unreachable
/// cost: total length of the roads on the path, infinite if unreachable
#[derive(Clone, Debug, PartialEq)]
pub struct Route {
    pub path: Vec<String>,
    pub cost: f64,
}

impl Route {

    /// The route to a city no road leads to
    pub fn unreachable() -> Self {
        Self { path: Vec::new(), cost: f64::INFINITY }
    }

    pub fn is_reachable(&self) -> bool {
        !self.path.is_empty()
    }
}


/// Signature shared by every routing function: map, origin name, destination name
pub type RouteFn = fn(&Map, &str, &str) -> Result<Route, MapError>;


/// Registry of the routing algorithms, selectable by name
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    DijkstraOriginal,      // "dij-o"
    DijkstraPriorityQueue, // "dij-pq"
    AStar,                 // "a-star"
}

impl Algorithm {

    pub const ALL: [Algorithm; 3] = [
        Algorithm::DijkstraOriginal,
        Algorithm::DijkstraPriorityQueue,
        Algorithm::AStar,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::DijkstraOriginal => "dij-o",
            Algorithm::DijkstraPriorityQueue => "dij-pq",
            Algorithm::AStar => "a-star",
        }
    }

    pub fn route_fn(self) -> RouteFn {
        match self {
            Algorithm::DijkstraOriginal => dijkstra_original,
            Algorithm::DijkstraPriorityQueue => dijkstra_priority_queue,
            Algorithm::AStar => a_star,
        }
    }

    /// Find the shortest route between two cities of `map`
    pub fn route(self, map: &Map, origin: &str, destination: &str) -> Result<Route, MapError> {
        (self.route_fn())(map, origin, destination)
    }
}

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Algorithm::ALL
            .into_iter()
            .find(|algorithm| algorithm.name() == name)
            .ok_or_else(|| UnknownAlgorithm(name.to_string()))
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
