//! Routing problems drawn as ret grids: every algorithm has to stay on the
//! marked shortest path

use std::path::PathBuf;

use citymaps::builders::{Format, LoadOptions, RetBuilder};
use citymaps::Algorithm;


fn data(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/data").join(name)
}

fn assert_on_expected_path(name: &str, cities: usize, roads: usize) {
    let (map, problem) = RetBuilder::new().build_file(data(name)).unwrap();
    assert_eq!(map.city_count(), cities);
    assert_eq!(map.road_count(), roads);

    let start = problem.start.as_deref().unwrap();
    let end = problem.end.as_deref().unwrap();
    for algorithm in Algorithm::ALL {
        let route = algorithm.route(&map, start, end).unwrap();
        assert!(route.is_reachable(), "{algorithm}: {name} unsolved");
        assert_eq!(route.path.first().map(String::as_str), Some(start));
        assert_eq!(route.path.last().map(String::as_str), Some(end));
        for city in &route.path {
            assert!(problem.expected.contains(city), "{algorithm}: {city} is off the expected path in {name}");
        }
    }
}

#[test]
fn test_valley() {
    assert_on_expected_path("valley.ret", 115, 380);
}

#[test]
fn test_walled() {
    assert_on_expected_path("walled.ret", 103, 301);
}

#[test]
fn test_algorithms_agree_on_cost() {
    for name in ["valley.ret", "walled.ret"] {
        let loaded = LoadOptions::new(Format::Ret).load_path(data(name)).unwrap();
        let problem = loaded.problem.unwrap();
        let (start, end) = (problem.start.unwrap(), problem.end.unwrap());

        let costs: Vec<f64> = Algorithm::ALL
            .iter()
            .map(|algorithm| algorithm.route(&loaded.map, &start, &end).unwrap().cost)
            .collect();
        for cost in &costs[1..] {
            assert!((cost - costs[0]).abs() < 1e-9, "{name}: {costs:?}");
        }
    }
}

#[test]
fn test_grid_without_diagonals() {
    let (map, problem) = RetBuilder::new().diagonal(false).build_file(data("valley.ret")).unwrap();
    let route = Algorithm::AStar
        .route(&map, problem.start.as_deref().unwrap(), problem.end.as_deref().unwrap())
        .unwrap();

    // only unit steps left: the cost is the number of roads taken
    assert_eq!(route.cost, (route.path.len() - 1) as f64);
}
