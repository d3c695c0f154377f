//! Shortest paths over maps of cities joined by roads
//!
//! Build a [`Map`] with [`Map::create_city`] and [`Map::create_road`], or load
//! one with the [`builders`], then route across it with any [`Algorithm`]:
//!
//! ```
//! use citymaps::{Algorithm, Map};
//!
//! let mut map = Map::new();
//! map.create_city("A", 0.0, 0.0)?;
//! map.create_city("B", 3.0, 4.0)?;
//! map.create_road("A", "B")?;
//!
//! let route = Algorithm::AStar.route(&map, "A", "B")?;
//! assert_eq!(route.path, ["A", "B"]);
//! assert_eq!(route.cost, 5.0);
//! # Ok::<(), citymaps::errors::MapError>(())
//! ```

pub mod builders;
pub mod collections;
pub mod errors;
pub mod geometry;
pub mod graph_algos;
pub mod model;

pub use graph_algos::{Algorithm, Route, RouteFn};
pub use model::{CityId, CityRef, Map, RoadId, RoadRef};
