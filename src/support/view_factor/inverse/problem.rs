//! Problem formulation for view factor inversion.

use std::convert::Infallible;

use twine_core::{EquationProblem, Model};
use uom::si::{f64::Length, length::meter};

use crate::support::view_factor::{
    CornerRelation, Geometry, Parameter, ViewFactor, ViewFactorError, view_factor,
};

/// Model adapter for solving one geometry parameter.
///
/// Holds every other parameter fixed and exposes the varied one, in metres,
/// as the sole input.
pub(super) struct VaryParameter<'a, R> {
    relation: &'a R,
    geometry: &'a Geometry,
    parameter: Parameter,
}

impl<'a, R> VaryParameter<'a, R> {
    pub(super) fn new(relation: &'a R, geometry: &'a Geometry, parameter: Parameter) -> Self {
        Self {
            relation,
            geometry,
            parameter,
        }
    }
}

impl<R: CornerRelation> Model for VaryParameter<'_, R> {
    type Input = f64;
    type Output = ViewFactor;
    type Error = ViewFactorError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let geometry = self
            .geometry
            .with(self.parameter, Length::new::<meter>(*input))?;
        view_factor(self.relation, &geometry)
    }
}

/// Equation problem definition for view factor matching.
///
/// Computes the residual as `achieved - target`.
pub(super) struct ViewFactorProblem {
    target: ViewFactor,
}

impl ViewFactorProblem {
    pub(super) fn new(target: ViewFactor) -> Self {
        Self { target }
    }
}

impl EquationProblem<1> for ViewFactorProblem {
    type Input = f64;
    type Output = ViewFactor;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<Self::Input, Self::Error> {
        Ok(x[0])
    }

    fn residuals(
        &self,
        _input: &Self::Input,
        output: &Self::Output,
    ) -> Result<[f64; 1], Self::Error> {
        Ok([output.value - self.target.value])
    }
}
