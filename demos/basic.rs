//! Basic example of using the LK-TSP library.

use lk_tsp::candidates::{CandidateEdgeType, CandidateEdges};
use lk_tsp::config::Config;
use lk_tsp::problem::{Node, Problem};
use lk_tsp::utils::{format_duration, save_tour, SearchStatistics};
use lk_tsp::LinKernighan;
use std::env;
use std::time::Instant;

/// Build a ring-with-detours instance when no file is given: cities on a
/// circle plus a few pulled toward the center.
fn build_default_problem() -> Problem {
    let mut nodes = Vec::new();

    let count = 40;
    for i in 0..count {
        let angle = 2.0 * std::f64::consts::PI * i as f64 / count as f64;
        let radius = if i % 7 == 0 { 70.0 } else { 100.0 };
        nodes.push(Node::new(i, radius * angle.cos(), radius * angle.sin()));
    }

    Problem::new("ring40".to_string(), nodes)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load the instance from the command line or fall back to a built-in
    let args: Vec<String> = env::args().collect();
    let problem = if args.len() > 1 {
        println!("Loading problem from: {}", &args[1]);
        Problem::from_file(&args[1])?
    } else {
        build_default_problem()
    };
    println!(
        "Problem: {} with {} cities",
        problem.name,
        problem.dimension()
    );

    // Build the candidate edge set
    let candidate_edges =
        CandidateEdges::create(&problem, CandidateEdgeType::AlphaNearestNeighbors, 8)?;

    // Create and run the solver
    let config = Config::new().with_seed(1);
    let number_of_trials = 25;
    let mut solver = LinKernighan::with_config(problem.clone(), candidate_edges, config);

    println!("Starting search ({} trials)", number_of_trials);
    let start_time = Instant::now();
    let best_tour = solver.find_best_tour(number_of_trials, 0, 0.0, true)?;
    let runtime = start_time.elapsed();

    // Print results
    let statistics = SearchStatistics {
        trials: number_of_trials,
        runtime,
        best_tour_length: problem.length(&best_tour),
    };
    println!("Search completed in {}", format_duration(runtime));
    println!("{}", statistics.format());

    // Save the tour
    let output_path = format!("{}.tour", problem.name);
    println!("Saving tour to: {}", output_path);
    save_tour(&best_tour, &problem, &output_path)?;

    Ok(())
}
