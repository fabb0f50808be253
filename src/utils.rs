//! Utility functions and structures for the solver.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use std::time::Duration;

use crate::problem::{Distance, Problem};
use crate::tour::Tour;

/// Format a duration as hours, minutes, and seconds.
pub fn format_duration(duration: Duration) -> String {
    let total_seconds = duration.as_secs();
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    format!("{}h {:02}m {:02}s", hours, minutes, seconds)
}

/// Save a tour to a file.
pub fn save_tour<P: AsRef<Path>>(tour: &Tour, problem: &Problem, path: P) -> io::Result<()> {
    let mut file = File::create(path)?;

    writeln!(file, "Tour for instance: {}", problem.name)?;
    writeln!(file, "Length: {}", problem.length(tour))?;
    writeln!(file, "Cities: {}", tour.dimension())?;
    writeln!(file)?;

    let order = tour.vertex_order();
    for &vertex in &order {
        write!(file, "{} -> ", vertex)?;
    }
    writeln!(file, "{}", order[0])?;

    Ok(())
}

/// Statistics about a solver run.
pub struct SearchStatistics {
    pub trials: usize,
    pub runtime: Duration,
    pub best_tour_length: Distance,
}

impl SearchStatistics {
    /// Format the statistics as a string.
    pub fn format(&self) -> String {
        format!(
            "Search Statistics:
- Trials: {}
- Runtime: {}
- Best Tour Length: {}",
            self.trials,
            format_duration(self.runtime),
            self.best_tour_length
        )
    }
}
