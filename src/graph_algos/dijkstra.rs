use crate::errors::MapError;
use crate::collections::PriorityQueue;
use crate::model::{CityRef, Map};
use super::{route_ends, shortest_path, Route};




/// Identify the shortest path using Dijkstra's original algorithm
/// https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm
/// The next city to visit is found by scanning every unvisited city, O(V^2) overall
pub fn dijkstra_original(map: &Map, origin: &str, destination: &str) -> Result<Route, MapError> {
    let (origin, destination) = route_ends(map, origin, destination)?;

    // cost from the origin and predecessor on the cheapest known path, by city id
    let mut cost = vec![f64::INFINITY; map.city_count()];
    let mut previous: Vec<Option<CityRef<'_>>> = vec![None; map.city_count()];
    cost[origin.id()] = 0.0;

    // every city starts unvisited, kept in map order
    let mut unvisited: Vec<CityRef<'_>> = map.cities().collect();
    let mut settled = 0;

    while !unvisited.is_empty() {

        // get the unvisited city which costs the least, first one found wins ties
        let mut least = 0;
        for (position, city) in unvisited.iter().enumerate().skip(1) {
            if cost[city.id()] < cost[unvisited[least].id()] {
                least = position;
            }
        }
        let current = unvisited.remove(least);
        settled += 1;

        if current == destination {
            break;
        }

        // every city left is unreachable
        if cost[current.id()].is_infinite() {
            break;
        }

        // update neighbours' costs
        for road in current.roads() {
            let neighbor = road.other_end(&current)?;
            let new_cost = cost[current.id()] + road.length();
            if new_cost < cost[neighbor.id()] {
                cost[neighbor.id()] = new_cost;
                previous[neighbor.id()] = Some(current);
            }
        }
    }

    let route = shortest_path(origin, destination, &previous, &cost);
    tracing::debug!(
        algorithm = "dij-o",
        origin = origin.name(),
        destination = destination.name(),
        cost = route.cost,
        settled,
        "route"
    );
    Ok(route)
}


/// Identify the shortest path using Dijkstra's algorithm over a priority queue
/// Unvisited cities are queued by their current cost and moved up the queue
/// (decrease-key) whenever a cheaper path to them is found, O((V + E) log V)
pub fn dijkstra_priority_queue(map: &Map, origin: &str, destination: &str) -> Result<Route, MapError> {
    let (origin, destination) = route_ends(map, origin, destination)?;

    let mut cost = vec![f64::INFINITY; map.city_count()];
    let mut previous: Vec<Option<CityRef<'_>>> = vec![None; map.city_count()];
    cost[origin.id()] = 0.0;

    // Cities to visit, least costly first
    let mut unvisited = PriorityQueue::new();
    for city in map.cities() {
        unvisited.push(city, cost[city.id()]);
    }
    let mut settled = 0;

    while !unvisited.is_empty() {
        let (current, current_cost) = unvisited.pop()?;
        settled += 1;

        if current == destination {
            break;
        }

        // every city left is unreachable
        if current_cost.is_infinite() {
            break;
        }

        for road in current.roads() {
            let neighbor = road.other_end(&current)?;

            // visited cities already have their final cost
            if !unvisited.contains(&neighbor) {
                continue;
            }

            let new_cost = current_cost + road.length();
            if new_cost < cost[neighbor.id()] {
                cost[neighbor.id()] = new_cost;
                previous[neighbor.id()] = Some(current);
                unvisited.push(neighbor, new_cost);
            }
        }
    }

    let route = shortest_path(origin, destination, &previous, &cost);
    tracing::debug!(
        algorithm = "dij-pq",
        origin = origin.name(),
        destination = destination.name(),
        cost = route.cost,
        settled,
        "route"
    );
    Ok(route)
}
