//! Map model
//!
//! A `Map` owns every `City` and `Road` and is the only way to create them.
//! Cities live in a name keyed index map and roads in a creation ordered list,
//! they refer to each other through their index in those collections.
//! `CityRef` and `RoadRef` borrow the map to walk between the two.

use crate::errors::MapError;
use crate::collections::FxIndexMap;
use crate::geometry::Point;

use std::{fmt, hash::{Hash, Hasher}};


/// Index of a city in its map
pub type CityId = usize;

/// Index of a road in its map
pub type RoadId = usize;


/// A named location, keyed by name in the owning map
#[derive(Clone, Debug, PartialEq)]
struct City {
    location: Point,
    roads: Vec<RoadId>, // roads this city is an end of, in creation order
}

/// A bidirectional road, `city_1` and `city_2` are labels not a direction
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Road {
    city_1: CityId,
    city_2: CityId,
}


/// A map made of cities and bidirectional roads
#[derive(Clone, Debug, Default)]
pub struct Map {
    name: Option<String>,
    cities: FxIndexMap<String, City>,
    roads: Vec<Road>,
}

impl Map {

    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty map with a title
    pub fn with_name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Add a city at (x, y)
    /// Fails if the name is empty or taken, or if a coordinate is not a real number
    pub fn create_city(&mut self, name: &str, x: f64, y: f64) -> Result<CityId, MapError> {
        if name.is_empty() {
            return Err(MapError::InvalidArgument("empty name".to_string()));
        }
        if !x.is_finite() {
            return Err(MapError::InvalidArgument(format!("x of {name} is not a number: {x}")));
        }
        if !y.is_finite() {
            return Err(MapError::InvalidArgument(format!("y of {name} is not a number: {y}")));
        }
        if self.cities.contains_key(name) {
            return Err(MapError::DuplicateName(name.to_string()));
        }

        let (id, _) = self.cities.insert_full(name.to_string(), City {
            location: Point::new(x, y),
            roads: Vec::new(),
        });
        Ok(id)
    }

    /// Connect two existing cities with a road
    /// At most one road may join a pair of cities, whichever order they are given in
    pub fn create_road(&mut self, name_1: &str, name_2: &str) -> Result<RoadId, MapError> {
        let city_1 = self.city(name_1).ok_or_else(|| MapError::UnknownCity(name_1.to_string()))?;
        let city_2 = self.city(name_2).ok_or_else(|| MapError::UnknownCity(name_2.to_string()))?;

        if city_1 == city_2 {
            return Err(MapError::InvalidArgument(format!("cities cannot be the same: {name_1}")));
        }
        if city_1.has_road_to(&city_2) {
            return Err(MapError::DuplicateRoad(name_1.to_string(), name_2.to_string()));
        }

        let road = Road { city_1: city_1.id, city_2: city_2.id };
        let id = self.roads.len();
        self.roads.push(road);

        // register the road with both ends
        self.cities[road.city_1].roads.push(id);
        self.cities[road.city_2].roads.push(id);

        Ok(id)
    }

    /// Lookup a city by name
    pub fn city(&self, name: &str) -> Option<CityRef<'_>> {
        self.cities.get_index_of(name).map(|id| CityRef { map: self, id })
    }

    /// Lookup a city by id
    pub fn city_by_id(&self, id: CityId) -> Option<CityRef<'_>> {
        (id < self.cities.len()).then_some(CityRef { map: self, id })
    }

    /// Lookup a road by id
    pub fn road_by_id(&self, id: RoadId) -> Option<RoadRef<'_>> {
        (id < self.roads.len()).then_some(RoadRef { map: self, id })
    }

    /// All cities, in creation order
    pub fn cities(&self) -> impl ExactSizeIterator<Item = CityRef<'_>> + '_ {
        (0..self.cities.len()).map(move |id| CityRef { map: self, id })
    }

    /// All roads, in creation order
    pub fn roads(&self) -> impl ExactSizeIterator<Item = RoadRef<'_>> + '_ {
        (0..self.roads.len()).map(move |id| RoadRef { map: self, id })
    }

    pub fn city_count(&self) -> usize {
        self.cities.len()
    }

    pub fn road_count(&self) -> usize {
        self.roads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }
}


/// A city borrowed from its map
#[derive(Clone, Copy)]
pub struct CityRef<'a> {
    map: &'a Map,
    id: CityId,
}

impl<'a> CityRef<'a> {

    pub fn id(&self) -> CityId {
        self.id
    }

    pub fn name(&self) -> &'a str {
        self.map.cities.get_index(self.id).map(|(name, _)| name.as_str()).unwrap_or_default()
    }

    pub fn location(&self) -> Point {
        self.city().location
    }

    pub fn x(&self) -> f64 {
        self.city().location.x
    }

    pub fn y(&self) -> f64 {
        self.city().location.y
    }

    /// Roads this city is connected to
    pub fn roads(&self) -> impl ExactSizeIterator<Item = RoadRef<'a>> + use<'a> {
        let map = self.map;
        self.city().roads.iter().map(move |&id| RoadRef { map, id })
    }

    /// True if a road joins this city to `other`
    pub fn has_road_to(&self, other: &CityRef<'_>) -> bool {
        self.roads().any(|road| match road.other_end(self) {
            Ok(end) => end == *other,
            Err(_) => false,
        })
    }

    /// Straight line distance to another city
    pub fn distance_to(&self, other: &CityRef<'_>) -> f64 {
        self.location().distance(&other.location())
    }

    fn city(&self) -> &'a City {
        &self.map.cities[self.id]
    }
}

impl PartialEq for CityRef<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.map, other.map) && self.id == other.id
    }
}
impl Eq for CityRef<'_> {}

impl Hash for CityRef<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for CityRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("City")
            .field("name", &self.name())
            .field("x", &self.x())
            .field("y", &self.y())
            .finish()
    }
}


/// A road borrowed from its map
#[derive(Clone, Copy)]
pub struct RoadRef<'a> {
    map: &'a Map,
    id: RoadId,
}

impl<'a> RoadRef<'a> {

    pub fn id(&self) -> RoadId {
        self.id
    }

    pub fn city_1(&self) -> CityRef<'a> {
        CityRef { map: self.map, id: self.road().city_1 }
    }

    pub fn city_2(&self) -> CityRef<'a> {
        CityRef { map: self.map, id: self.road().city_2 }
    }

    /// Euclidean distance between the two ends
    pub fn length(&self) -> f64 {
        self.city_1().distance_to(&self.city_2())
    }

    /// The end of this road that is not `city`
    pub fn other_end(&self, city: &CityRef<'_>) -> Result<CityRef<'a>, MapError> {
        let (city_1, city_2) = (self.city_1(), self.city_2());
        if *city == city_1 {
            Ok(city_2)
        } else if *city == city_2 {
            Ok(city_1)
        } else {
            Err(MapError::NotAMember {
                city: city.name().to_string(),
                city_1: city_1.name().to_string(),
                city_2: city_2.name().to_string(),
            })
        }
    }

    fn road(&self) -> &'a Road {
        &self.map.roads[self.id]
    }
}

impl PartialEq for RoadRef<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.map, other.map) && self.id == other.id
    }
}
impl Eq for RoadRef<'_> {}

impl fmt::Debug for RoadRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Road")
            .field("city_1", &self.city_1().name())
            .field("city_2", &self.city_2().name())
            .finish()
    }
}
