use thiserror::Error;

use crate::support::constraint::ConstraintError;

use super::decompose::DecomposeError;

/// Errors that can occur while evaluating a view factor.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ViewFactorError {
    /// The receiver could not be decomposed against the emitter.
    #[error("geometry decomposition failed")]
    Decompose(#[from] DecomposeError),

    /// A geometry input violated its constraint.
    #[error("invalid geometry")]
    Constraint(#[from] ConstraintError),

    /// The signed sum of the corner contributions fell outside [0, 1].
    ///
    /// This indicates inconsistent geometry and is never clamped away.
    #[error("view factor {value} lies outside [0, 1]")]
    OutOfRange { value: f64 },
}
