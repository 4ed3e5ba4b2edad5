use thiserror::Error;
use twine_solvers::equation::bisection;

/// Errors that can occur while solving for a geometry parameter.
#[derive(Debug, Error)]
pub enum SolveGeometryError {
    /// The view factor does not pass through the target within the bracket.
    #[error("target view factor {target} is not reached over {bracket:?} m")]
    Infeasible {
        target: f64,
        /// Bracket searched, in metres.
        bracket: [f64; 2],
    },

    /// The bisection solver encountered an error.
    #[error("bisection solver error")]
    Bisection(#[from] bisection::Error),

    /// The solver reached the iteration limit without converging.
    #[error("solver hit iteration limit: residual={residual}")]
    MaxIters {
        /// Smallest view factor residual achieved.
        residual: f64,

        /// Iteration count performed by the solver.
        iters: usize,
    },
}
