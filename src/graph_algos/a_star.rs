use crate::errors::MapError;
use crate::collections::PriorityQueue;
use crate::model::{CityRef, Map};
use super::{route_ends, shortest_path, Route};



/// A* Algorithm
/// https://en.wikipedia.org/wiki/A*_search_algorithm
/// From the origin, expand cities in order of f = g + h where
/// - g is the cost of the best known path from the origin
/// - h is the straight line distance to the destination
///
/// Roads are never shorter than the straight line between their ends, so h
/// never overestimates (admissible) and never drops by more than a road's
/// length (consistent): a city is final once it leaves the open list.
pub fn a_star(map: &Map, origin: &str, destination: &str) -> Result<Route, MapError> {
    let (origin, destination) = route_ends(map, origin, destination)?;

    let heuristic = |city: &CityRef<'_>| city.distance_to(&destination);

    // g score by city id, infinite until the city is first seen
    let mut cost = vec![f64::INFINITY; map.city_count()];
    let mut previous: Vec<Option<CityRef<'_>>> = vec![None; map.city_count()];
    cost[origin.id()] = 0.0;

    // Open list: cities to evaluate, sorted by f score
    // Closed list: cities whose cost is final
    let mut open_list = PriorityQueue::new();
    let mut closed_list = vec![false; map.city_count()];
    open_list.push(origin, heuristic(&origin));
    let mut settled = 0;

    while !open_list.is_empty() {
        let (current, _) = open_list.pop()?;
        closed_list[current.id()] = true;
        settled += 1;

        // Check if we've reached the destination
        if current == destination {
            break;
        }

        for road in current.roads() {
            let neighbor = road.other_end(&current)?;
            if closed_list[neighbor.id()] {
                continue;
            }

            // confirmed cost through current, not heuristic
            let tentative_cost = cost[current.id()] + road.length();

            // unseen neighbours have an infinite cost, so this also covers them
            if tentative_cost < cost[neighbor.id()] {
                previous[neighbor.id()] = Some(current);
                cost[neighbor.id()] = tentative_cost;
                open_list.push(neighbor, tentative_cost + heuristic(&neighbor));
            }
        }
    }

    let route = shortest_path(origin, destination, &previous, &cost);
    tracing::debug!(
        algorithm = "a-star",
        origin = origin.name(),
        destination = destination.name(),
        cost = route.cost,
        settled,
        "route"
    );
    Ok(route)
}
