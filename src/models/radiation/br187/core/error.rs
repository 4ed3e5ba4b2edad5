use thiserror::Error;

use crate::support::{
    constraint::ConstraintError,
    view_factor::{SolveGeometryError, ViewFactorError},
};

/// Errors that can occur during a BR 187 check.
#[derive(Debug, Error)]
pub enum Br187Error {
    /// An input or configuration value violated its constraint.
    #[error("invalid input")]
    Constraint(#[from] ConstraintError),

    /// The view factor could not be evaluated.
    #[error("view factor evaluation failed")]
    ViewFactor(#[from] ViewFactorError),

    /// The unprotected area calls for a view factor above one.
    ///
    /// The emitted heat flux scaled by the area fraction is below the
    /// critical heat flux, so no separation produces the critical value.
    #[error("required view factor {required} exceeds one")]
    Unreachable { required: f64 },

    /// No separation within the search bracket gives the required view factor.
    #[error("separation search failed")]
    Solve(#[from] SolveGeometryError),
}
