use uom::si::f64::Ratio;

use crate::models::wheel_rail::core::tangential::Flexibility;
use crate::support::constraint::{Constrained, ConstraintResult, StrictlyPositive};

use super::Creepage;

/// Validated inputs for the tangential (creep-force) solve.
///
/// The friction coefficient is guaranteed strictly positive; creepage and
/// flexibility carry their own construction-time validation.
#[derive(Debug, Clone, Copy)]
pub struct TangentialInputs {
    creepage: Creepage,
    friction: Ratio,
    flexibility: Flexibility,
}

impl TangentialInputs {
    /// Constructs validated tangential inputs.
    ///
    /// # Errors
    ///
    /// Returns an error if the friction coefficient is not strictly
    /// positive and finite.
    pub fn new(
        creepage: Creepage,
        friction: Ratio,
        flexibility: Flexibility,
    ) -> ConstraintResult<Self> {
        let friction = Constrained::<Ratio, StrictlyPositive>::new(friction)?.into_inner();

        Ok(Self {
            creepage,
            friction,
            flexibility,
        })
    }

    /// The creepage triple.
    #[must_use]
    pub fn creepage(&self) -> Creepage {
        self.creepage
    }

    /// Coulomb friction coefficient.
    #[must_use]
    pub fn friction(&self) -> Ratio {
        self.friction
    }

    /// Tangential shear flexibilities.
    #[must_use]
    pub fn flexibility(&self) -> Flexibility {
        self.flexibility
    }
}
