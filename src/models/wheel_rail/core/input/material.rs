use uom::si::{
    f64::{Pressure, Ratio},
    ratio::ratio,
};

use crate::support::constraint::{Constrained, ConstraintError, ConstraintResult, StrictlyPositive};

/// Elastic properties shared by wheel and rail.
///
/// The half-space contact theory used here assumes both bodies are made
/// of the same material; dissimilar pairs are out of scope.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    youngs_modulus: Pressure,
    poisson_ratio: Ratio,
}

impl Material {
    /// Constructs a validated material.
    ///
    /// # Errors
    ///
    /// Returns an error if the Young's modulus is not strictly positive or
    /// the Poisson ratio is outside `[0, 0.5)`.
    pub fn new(youngs_modulus: Pressure, poisson_ratio: Ratio) -> ConstraintResult<Self> {
        let youngs_modulus =
            Constrained::<Pressure, StrictlyPositive>::new(youngs_modulus)?.into_inner();

        let nu = poisson_ratio.get::<ratio>();
        if !nu.is_finite() {
            return Err(ConstraintError::NotANumber);
        }
        if nu < 0.0 {
            return Err(ConstraintError::Negative);
        }
        if nu >= 0.5 {
            return Err(ConstraintError::AboveMaximum);
        }

        Ok(Self {
            youngs_modulus,
            poisson_ratio,
        })
    }

    /// Young's modulus of both bodies.
    #[must_use]
    pub fn youngs_modulus(&self) -> Pressure {
        self.youngs_modulus
    }

    /// Poisson ratio of both bodies.
    #[must_use]
    pub fn poisson_ratio(&self) -> Ratio {
        self.poisson_ratio
    }

    /// Shear modulus `G = E / (2(1 + ν))`.
    #[must_use]
    pub fn shear_modulus(&self) -> Pressure {
        let one = Ratio::new::<ratio>(1.0);
        self.youngs_modulus / (2.0 * (one + self.poisson_ratio))
    }

    /// Plane contact modulus `E / (1 − ν²)` for identical bodies.
    ///
    /// Twice the composite modulus `E*` of Hertz theory.
    #[must_use]
    pub fn contact_modulus(&self) -> Pressure {
        let one = Ratio::new::<ratio>(1.0);
        self.youngs_modulus / (one - self.poisson_ratio * self.poisson_ratio)
    }
}
