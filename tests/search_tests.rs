//! End-to-end tests of the public search API.

use std::time::Duration;

use knights_tour::board::{
    run_search_with_clock, verify_tour, Occupancy, Outcome, SearchConfig, Square, Strategy,
    VisitedScope,
};
use knights_tour::{run_search, ManualClock};

/// Test the 5x5 plain depth-first scenario against the real clock
#[test]
fn dfs_solves_five_by_five_from_corner() {
    let config = SearchConfig::new(5, Strategy::Dfs, Duration::from_secs(60));
    let result = run_search(&config).unwrap();

    let tour = result.tour().expect("Should find a tour");
    assert_eq!(tour.len(), 25);
    assert_eq!(tour[0], Square::new(0, 0));
    assert!(
        [Square::new(1, 2), Square::new(2, 1)].contains(&tour[1]),
        "First move should come from the offset table, got {}",
        tour[1]
    );
    assert_eq!(verify_tour(5, Square::ORIGIN, tour), Ok(()));
    assert_eq!(result.outcome.to_string(), "A solution was found.");
}

/// Test that BFS on 3x3 empties its frontier
#[test]
fn bfs_exhausts_three_by_three() {
    let config = SearchConfig::new(3, Strategy::Bfs, Duration::from_secs(5));
    let result = run_search(&config).unwrap();

    assert_eq!(result.outcome, Outcome::Exhausted);
    assert_eq!(result.nodes_expanded, 8, "Every square but the center is reachable");
    assert_eq!(result.outcome.to_string(), "No solution exists.");
}

/// Test that depth-first search proves small boards have no tour
#[test]
fn small_boards_are_exhausted() {
    let solved = run_search(&SearchConfig::new(1, Strategy::Dfs, Duration::from_secs(5))).unwrap();
    assert_eq!(solved.outcome, Outcome::Solved(vec![Square::ORIGIN]));

    for size in 2..=4 {
        let config = SearchConfig::new(size, Strategy::Dfs, Duration::from_secs(60));
        let result = run_search(&config).unwrap();
        assert_eq!(result.outcome, Outcome::Exhausted, "{size}x{size} has no tour");
    }
}

/// Test that each menu strategy gives the same answer twice
#[test]
fn runs_are_deterministic() {
    for strategy in Strategy::CLASSIC {
        let config = SearchConfig::new(5, strategy, Duration::from_secs(60));
        let clock = ManualClock::new();
        let a = run_search_with_clock(&config, &clock).unwrap();
        let b = run_search_with_clock(&config, &clock).unwrap();
        assert_eq!(a.outcome, b.outcome, "{strategy}");
        assert_eq!(a.nodes_expanded, b.nodes_expanded, "{strategy}");
    }
}

/// Test that the injected clock drives the timeout
#[test]
fn tiny_budget_times_out() {
    let clock = ManualClock::ticking(Duration::from_secs(1));
    let config = SearchConfig::new(8, Strategy::Dfs, Duration::from_nanos(1));
    let result = run_search_with_clock(&config, &clock).unwrap();

    assert_eq!(result.outcome, Outcome::TimedOut);
    assert!(result.tour().is_none());
    assert_eq!(result.outcome.to_string(), "Timeout.");
}

/// Test that the visit grid of a solved run matches its tour
#[test]
fn visit_order_matches_tour() {
    let config = SearchConfig::new(6, Strategy::DfsWarnsdorff, Duration::from_secs(60));
    let result = run_search(&config).unwrap();
    let tour = result.tour().expect("Should find a tour");
    let grid: Occupancy = result.visit_order().expect("Solved");

    for (step, &sq) in tour.iter().enumerate() {
        assert_eq!(grid.visit_index(sq), Some(step as u32 + 1));
    }
    assert_eq!(grid.visited_count(), 36);
}

/// Test strategies parsed from their names
#[test]
fn strategies_parse_from_menu_names() {
    let bfs: Strategy = "1".parse().unwrap();
    let h2: Strategy = "dfs-h2".parse().unwrap();
    assert_eq!(bfs, Strategy::Bfs);
    assert!(h2.ordering().is_informed());
    assert!("dijkstra".parse::<Strategy>().is_err());
}

/// Test that run-wide marking turns depth-first into a graph search
#[test]
fn run_scoped_dfs_expands_each_square_at_most_once() {
    let backtracking = SearchConfig::new(6, Strategy::DfsWarnsdorff, Duration::from_secs(60));
    let graph = backtracking.clone().with_visited_scope(VisitedScope::Run);
    assert_eq!(backtracking.visited_scope(), VisitedScope::Path);

    let result = run_search(&graph).unwrap();
    assert!(result.nodes_expanded <= 36);
    if let Some(tour) = result.tour() {
        assert_eq!(verify_tour(6, Square::ORIGIN, tour), Ok(()));
    }
}

#[cfg(feature = "serde")]
#[test]
fn result_serializes_to_json() {
    let config = SearchConfig::new(5, Strategy::DfsWarnsdorff, Duration::from_secs(60));
    let result = run_search_with_clock(&config, &ManualClock::new()).unwrap();

    let json = serde_json::to_string(&result).unwrap();
    let back: knights_tour::SearchResult = serde_json::from_str(&json).unwrap();
    assert_eq!(back, result);

    let config_json = serde_json::to_string(&config).unwrap();
    let config_back: SearchConfig = serde_json::from_str(&config_json).unwrap();
    assert_eq!(config_back, config);
}
