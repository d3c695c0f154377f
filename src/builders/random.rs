use crate::errors::MapError;
use crate::model::Map;

use rand::{Rng, SeedableRng, rngs::StdRng};


/// Builds maps of randomly placed cities and roads
///
/// Cities `c0`, `c1`, ... are spread uniformly over the square
/// `[-extent, extent]²` and every pair of cities gets a road with probability
/// `road_probability`. The same seed always gives the same map.
#[derive(Clone, Copy, Debug)]
pub struct RandomMapBuilder {
    cities: usize,
    road_probability: f64,
    extent: f64,
    seed: Option<u64>,
}

impl RandomMapBuilder {

    pub fn new(cities: usize) -> Self {
        Self {
            cities,
            road_probability: 0.2,
            extent: 100.0,
            seed: None,
        }
    }

    /// Chance of a road between any two cities, clamped to [0, 1]
    pub fn road_probability(mut self, road_probability: f64) -> Self {
        self.road_probability = road_probability;
        self
    }

    /// Half the side of the square cities are placed in
    pub fn extent(mut self, extent: f64) -> Self {
        self.extent = extent;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn build(&self) -> Result<Map, MapError> {
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        let probability = if self.road_probability.is_nan() { 0.0 } else { self.road_probability.clamp(0.0, 1.0) };
        let extent = self.extent.abs();
        if !extent.is_finite() {
            return Err(MapError::InvalidArgument(format!("extent is not a number: {}", self.extent)));
        }

        let mut map = Map::new();
        for i in 0..self.cities {
            let x = rng.random_range(-extent..=extent);
            let y = rng.random_range(-extent..=extent);
            map.create_city(&city_name(i), x, y)?;
        }

        for i in 0..self.cities {
            for j in (i + 1)..self.cities {
                if rng.random_bool(probability) {
                    map.create_road(&city_name(i), &city_name(j))?;
                }
            }
        }

        tracing::debug!(
            format = "random",
            seed = ?self.seed,
            cities = map.city_count(),
            roads = map.road_count(),
            "map built"
        );
        Ok(map)
    }
}

fn city_name(index: usize) -> String {
    format!("c{index}")
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_map() {
        let first = RandomMapBuilder::new(12).road_probability(0.3).seed(7).build().unwrap();
        let second = RandomMapBuilder::new(12).road_probability(0.3).seed(7).build().unwrap();

        assert_eq!(first.city_count(), 12);
        let locations = |map: &Map| map.cities().map(|c| c.location()).collect::<Vec<_>>();
        assert_eq!(locations(&first), locations(&second));

        let roads = |map: &Map| map.roads().map(|r| (r.city_1().id(), r.city_2().id())).collect::<Vec<_>>();
        assert_eq!(roads(&first), roads(&second));
    }

    #[test]
    fn test_cities_stay_within_extent() {
        let map = RandomMapBuilder::new(50).extent(10.0).seed(1).build().unwrap();
        for city in map.cities() {
            assert!(city.x().abs() <= 10.0 && city.y().abs() <= 10.0, "{city:?}");
        }
    }

    #[test]
    fn test_road_probability_bounds() {
        let empty = RandomMapBuilder::new(10).road_probability(0.0).seed(3).build().unwrap();
        assert_eq!(empty.road_count(), 0);

        // out of range probabilities are clamped
        let full = RandomMapBuilder::new(10).road_probability(4.0).seed(3).build().unwrap();
        assert_eq!(full.road_count(), 45);
    }

    #[test]
    fn test_infinite_extent_fails() {
        let result = RandomMapBuilder::new(2).extent(f64::INFINITY).build();
        assert!(matches!(result, Err(MapError::InvalidArgument(_))));
    }

    #[test]
    fn test_no_cities() {
        let map = RandomMapBuilder::new(0).seed(0).build().unwrap();
        assert!(map.is_empty());
        assert_eq!(map.road_count(), 0);
    }
}
