//! Problem formulation for load matching.

use std::convert::Infallible;

use twine_core::{EquationProblem, Model};
use uom::si::{
    f64::{Force, Length},
    force::newton,
    length::meter,
};

use crate::models::wheel_rail::core::{
    results::NormalResults,
    solve::{self, SolveError},
};
use crate::support::profile::ContactGeometry;

use super::super::input::Material;

/// Model adapter for load-controlled solving.
///
/// Wraps the direct solve and exposes the virtual penetration as the sole
/// input variable to the model.
pub(super) struct GivenLoadModel<'a, G, const NY: usize> {
    geometry: &'a G,
    material: &'a Material,
}

impl<'a, G, const NY: usize> GivenLoadModel<'a, G, NY> {
    pub(super) fn new(geometry: &'a G, material: &'a Material) -> Self {
        Self { geometry, material }
    }
}

impl<G, const NY: usize> Model for GivenLoadModel<'_, G, NY>
where
    G: ContactGeometry,
{
    type Input = Length;
    type Output = NormalResults<NY>;
    type Error = SolveError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        solve::solve::<G, NY>(self.geometry, self.material, *input)
    }
}

/// Equation problem definition for load matching.
///
/// Computes the residual as `achieved_load − target_load`.
pub(super) struct GivenLoadProblem<const NY: usize> {
    target: Force,
}

impl<const NY: usize> GivenLoadProblem<NY> {
    pub(super) fn new(target: Force) -> Self {
        Self { target }
    }
}

impl<const NY: usize> EquationProblem<1> for GivenLoadProblem<NY> {
    type Input = Length;
    type Output = NormalResults<NY>;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<Self::Input, Self::Error> {
        Ok(Length::new::<meter>(x[0]))
    }

    fn residuals(
        &self,
        _input: &Self::Input,
        output: &Self::Output,
    ) -> Result<[f64; 1], Self::Error> {
        let achieved = output.normal_load.get::<newton>();
        let target = self.target.get::<newton>();
        Ok([achieved - target])
    }
}
