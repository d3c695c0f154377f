use crate::errors::MapError;
use crate::model::{CityRef, Map};
use super::Route;


/// Resolve the origin and destination names of a route request
/// Fails on the first name missing from the map, before any search work
pub(crate) fn route_ends<'a>(map: &'a Map, origin: &str, destination: &str) -> Result<(CityRef<'a>, CityRef<'a>), MapError> {
    let origin_city = map.city(origin).ok_or_else(|| MapError::UnknownCity(origin.to_string()))?;
    let destination_city = map.city(destination).ok_or_else(|| MapError::UnknownCity(destination.to_string()))?;
    Ok((origin_city, destination_city))
}


/// Construct the shortest path from the destination back to the origin
/// previous: predecessor of each city on its cheapest known path, indexed by city id
/// cost: cost of reaching each city from the origin, indexed by city id
pub(crate) fn shortest_path(
    origin: CityRef<'_>,
    destination: CityRef<'_>,
    previous: &[Option<CityRef<'_>>],
    cost: &[f64],
) -> Route {

    if previous[destination.id()].is_none() {
        if origin == destination {
            return Route { path: vec![origin.name().to_string()], cost: 0.0 };
        }
        return Route::unreachable();
    }

    // Trace back from destination to origin
    let mut path = Vec::new();
    let mut current = Some(destination);
    while let Some(city) = current {
        path.push(city.name().to_string());
        current = previous[city.id()];
    }

    // The path is in reverse order, so reverse it
    path.reverse();

    Route { path, cost: cost[destination.id()] }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn line_map() -> Map {
        let mut map = Map::new();
        map.create_city("A", 0.0, 0.0).unwrap();
        map.create_city("B", 3.0, 4.0).unwrap();
        map.create_city("C", 3.0, 8.0).unwrap();
        map.create_city("D", 9.0, 9.0).unwrap();
        map
    }

    #[test]
    fn test_path_reconstruction() {
        let map = line_map();
        let a = map.city("A").unwrap();
        let b = map.city("B").unwrap();
        let c = map.city("C").unwrap();

        let previous = vec![None, Some(a), Some(b), None];
        let cost = vec![0.0, 5.0, 9.0, f64::INFINITY];

        let route = shortest_path(a, c, &previous, &cost);
        assert_eq!(route.path, vec!["A", "B", "C"]);
        assert_eq!(route.cost, 9.0);

        let route = shortest_path(a, b, &previous, &cost);
        assert_eq!(route.path, vec!["A", "B"]);
        assert_eq!(route.cost, 5.0);
    }

    #[test]
    fn test_reconstruction_without_predecessor() {
        let map = line_map();
        let a = map.city("A").unwrap();
        let d = map.city("D").unwrap();
        let previous = vec![None; 4];
        let cost = vec![0.0, f64::INFINITY, f64::INFINITY, f64::INFINITY];

        // same city: the trivial route
        assert_eq!(shortest_path(a, a, &previous, &cost), Route { path: vec!["A".to_string()], cost: 0.0 });

        // no predecessor: unreachable
        assert_eq!(shortest_path(a, d, &previous, &cost), Route::unreachable());
    }

    #[test]
    fn test_route_ends_reports_unknown_names() {
        let map = line_map();
        assert!(route_ends(&map, "A", "D").is_ok());
        assert_eq!(route_ends(&map, "Z", "A").unwrap_err(), MapError::UnknownCity("Z".to_string()));
        assert_eq!(route_ends(&map, "A", "Z").unwrap_err(), MapError::UnknownCity("Z".to_string()));
    }
}
