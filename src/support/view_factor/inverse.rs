//! Solving a geometry for a target view factor.
//!
//! One [`Parameter`] of a [`Geometry`] is varied by bisection until the view
//! factor matches the target. Either direction of change is accepted: the
//! solver only needs the view factor to cross the target inside the bracket.

mod error;
mod problem;

pub use error::SolveGeometryError;

use tracing::debug;
use twine_solvers::equation::bisection::{self, BracketError};
use uom::si::{f64::Length, length::meter};

use super::{CornerRelation, Geometry, Parameter, ViewFactor};

use problem::{VaryParameter, ViewFactorProblem};

/// Solve for the value of one geometric parameter that gives a target view factor.
///
/// All other parameters are taken from `geometry`. The search runs over
/// `bracket`, which may be given in either order.
///
/// # Errors
///
/// Returns [`SolveGeometryError::Infeasible`] if the view factors at the two
/// bracket ends lie on the same side of the target, and
/// [`SolveGeometryError::MaxIters`] if the iteration limit is reached first.
/// Invalid bracket values and evaluation errors are reported through
/// [`SolveGeometryError::Bisection`].
pub fn solve_geometry(
    relation: &impl CornerRelation,
    geometry: &Geometry,
    parameter: Parameter,
    target: ViewFactor,
    bracket: [Length; 2],
    config: &bisection::Config,
) -> Result<Length, SolveGeometryError> {
    let model = VaryParameter::new(relation, geometry, parameter);
    let problem = ViewFactorProblem::new(target);
    let bracket = bracket.map(|end| end.get::<meter>());

    let solution = bisection::solve_unobserved(&model, &problem, bracket, config).map_err(
        |error| match error {
            bisection::Error::InvalidBracket(BracketError::NoSignChange) => {
                debug!(
                    ?parameter,
                    target = target.value,
                    ?bracket,
                    "target view factor not bracketed"
                );
                SolveGeometryError::Infeasible {
                    target: target.value,
                    bracket,
                }
            }
            other => other.into(),
        },
    )?;

    if solution.status != bisection::Status::Converged {
        return Err(SolveGeometryError::MaxIters {
            residual: solution.residual,
            iters: solution.iters,
        });
    }

    debug!(
        ?parameter,
        value = solution.x,
        iters = solution.iters,
        "geometry solved for view factor"
    );

    Ok(Length::new::<meter>(solution.x))
}
