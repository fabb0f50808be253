//! Unit tests for the Lin-Kernighan improvement search.

use lk_tsp::candidates::{CandidateEdgeType, CandidateEdges};
use lk_tsp::config::Config;
use lk_tsp::problem::{Node, Problem};
use lk_tsp::search::LkSearch;
use lk_tsp::tour::Tour;

/// Creates a test problem with four collinear cities at x = 0, 1, 2, 3.
/// The optimal tour walks the line and back, with length 6.
fn create_line_problem() -> Problem {
    let mut nodes = Vec::new();

    for i in 0..4 {
        nodes.push(Node::new(i, i as f64, 0.0));
    }

    Problem::new("Line4".to_string(), nodes)
}

/// Creates a simple test problem with six cities in a grid.
fn create_grid_problem() -> Problem {
    let mut nodes = Vec::new();

    nodes.push(Node::new(0, 0.0, 0.0));
    nodes.push(Node::new(1, 10.0, 0.0));
    nodes.push(Node::new(2, 0.0, 10.0));
    nodes.push(Node::new(3, 10.0, 10.0));
    nodes.push(Node::new(4, 20.0, 0.0));
    nodes.push(Node::new(5, 20.0, 10.0));

    Problem::new("Grid6".to_string(), nodes)
}

#[test]
fn test_improves_collinear_tour_to_optimum() {
    let problem = create_line_problem();
    let edges = CandidateEdges::create(&problem, CandidateEdgeType::AllNeighbors, 0)
        .expect("candidate set");
    let mut search = LkSearch::new(&Config::default());

    // 0 -> 2 -> 1 -> 3 -> 0 jumps back and forth, length 8
    let start = Tour::from_order(&[0, 2, 1, 3]);
    assert_eq!(problem.length(&start), 8);

    let improved = search
        .improve_tour(&problem, &edges, None, start)
        .expect("search should succeed");

    assert_eq!(problem.length(&improved), 6);
}

#[test]
fn test_never_worse_than_start() {
    let problem = create_grid_problem();
    let edges = CandidateEdges::create(&problem, CandidateEdgeType::NearestNeighbors, 3)
        .expect("candidate set");
    let mut search = LkSearch::new(&Config::default());

    let starts = [
        vec![0, 1, 2, 3, 4, 5],
        vec![0, 3, 1, 4, 2, 5],
        vec![5, 2, 4, 0, 3, 1],
        vec![0, 5, 1, 4, 2, 3],
    ];

    for order in starts {
        let start = Tour::from_order(&order);
        let start_length = problem.length(&start);

        let improved = search
            .improve_tour(&problem, &edges, None, start)
            .expect("search should succeed");

        assert!(problem.length(&improved) <= start_length);
    }
}

#[test]
fn test_idempotent_at_local_optimum() {
    let problem = create_grid_problem();
    let edges = CandidateEdges::create(&problem, CandidateEdgeType::AllNeighbors, 0)
        .expect("candidate set");
    let mut search = LkSearch::new(&Config::default());

    let start = Tour::from_order(&[0, 3, 1, 4, 2, 5]);
    let improved = search
        .improve_tour(&problem, &edges, None, start)
        .expect("search should succeed");
    let order_after_first = improved.vertex_order();

    // A second pass over a local optimum must not change the tour.
    let improved_again = search
        .improve_tour(&problem, &edges, None, improved)
        .expect("search should succeed");

    assert_eq!(improved_again.vertex_order(), order_after_first);
}

#[test]
fn test_all_distances_equal() {
    // Every Hamiltonian cycle has the same length, so any start tour is
    // already optimal and must come back unchanged in length.
    let n = 5;
    let matrix = (0..n)
        .map(|i| (0..n).map(|j| if i == j { 0 } else { 1 }).collect())
        .collect();
    let problem = Problem::from_matrix("Uniform5".to_string(), matrix).expect("valid matrix");
    let edges = CandidateEdges::create(&problem, CandidateEdgeType::AllNeighbors, 0)
        .expect("candidate set");
    let mut search = LkSearch::new(&Config::default());

    let start = Tour::from_order(&[2, 0, 4, 1, 3]);
    let improved = search
        .improve_tour(&problem, &edges, None, start)
        .expect("search should succeed");

    assert_eq!(problem.length(&improved), n as u64);
}

#[test]
fn test_sparse_candidates_still_improve() {
    // Ring instance where the candidate set is only the two ring
    // neighbors of every city; added edges are then ring edges only.
    let count = 10;
    let mut nodes = Vec::new();
    for i in 0..count {
        let angle = 2.0 * std::f64::consts::PI * i as f64 / count as f64;
        nodes.push(Node::new(i, 20.0 * angle.cos(), 20.0 * angle.sin()));
    }
    let problem = Problem::new("Ring10".to_string(), nodes);
    let edges = CandidateEdges::create(&problem, CandidateEdgeType::NearestNeighbors, 2)
        .expect("candidate set");
    let mut search = LkSearch::new(&Config::default());

    let start = Tour::from_order(&[0, 5, 2, 7, 4, 9, 6, 1, 8, 3]);
    let start_length = problem.length(&start);

    let improved = search
        .improve_tour(&problem, &edges, None, start)
        .expect("search should succeed");

    assert!(problem.length(&improved) < start_length);
}

#[test]
fn test_two_cities_terminate() {
    let problem = Problem::from_matrix("Pair".to_string(), vec![vec![0, 5], vec![5, 0]])
        .expect("valid matrix");
    let edges = CandidateEdges::create(&problem, CandidateEdgeType::AllNeighbors, 0)
        .expect("candidate set");
    let mut search = LkSearch::new(&Config::default());

    let start = Tour::from_order(&[0, 1]);
    let improved = search
        .improve_tour(&problem, &edges, None, start)
        .expect("search should succeed");

    assert_eq!(problem.length(&improved), 10);
}
