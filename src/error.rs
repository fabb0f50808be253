//! Error types for the solver.

use thiserror::Error;

/// Result type alias for solver operations.
pub type Result<T> = std::result::Result<T, SolverError>;

/// Errors reported by the solver.
///
/// Every error is fatal to the current `find_best_tour` call; the search
/// itself treats "cannot extend the walk" as a normal control outcome, not
/// an error.
#[derive(Error, Debug)]
pub enum SolverError {
    /// A caller-supplied argument is out of range.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// An edge exchange produced a non-Hamiltonian result even though the
    /// feasibility check accepted the walk. Indicates a bug in the tour
    /// bookkeeping.
    #[error("invariant violation: {0}")]
    InvariantViolation(String),
}
