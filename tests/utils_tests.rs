//! Unit tests for utility functions.

use std::time::Duration;

use lk_tsp::problem::{Node, Problem};
use lk_tsp::tour::Tour;
use lk_tsp::utils::{format_duration, save_tour, SearchStatistics};

#[test]
fn test_format_duration() {
    assert_eq!(format_duration(Duration::from_secs(0)), "0h 00m 00s");
    assert_eq!(format_duration(Duration::from_secs(59)), "0h 00m 59s");
    assert_eq!(format_duration(Duration::from_secs(61)), "0h 01m 01s");
    assert_eq!(format_duration(Duration::from_secs(3661)), "1h 01m 01s");
}

#[test]
fn test_search_statistics_format() {
    let statistics = SearchStatistics {
        trials: 7,
        runtime: Duration::from_secs(61),
        best_tour_length: 320,
    };

    let formatted = statistics.format();
    assert!(formatted.contains("Trials: 7"));
    assert!(formatted.contains("0h 01m 01s"));
    assert!(formatted.contains("Best Tour Length: 320"));
}

#[test]
fn test_save_tour() {
    let mut nodes = Vec::new();
    nodes.push(Node::new(0, 0.0, 0.0));
    nodes.push(Node::new(1, 10.0, 0.0));
    nodes.push(Node::new(2, 10.0, 10.0));
    nodes.push(Node::new(3, 0.0, 10.0));
    let problem = Problem::new("SaveTest".to_string(), nodes);
    let tour = Tour::from_order(&[0, 1, 2, 3]);

    let path = std::env::temp_dir().join("lk_tsp_save_tour_test.tour");
    save_tour(&tour, &problem, &path).expect("saving should succeed");

    let contents = std::fs::read_to_string(&path).expect("file should exist");
    assert!(contents.contains("SaveTest"));
    assert!(contents.contains("Length: 40"));
    assert!(contents.contains("0 -> 1 -> 2 -> 3 -> 0"));

    std::fs::remove_file(&path).ok();
}
