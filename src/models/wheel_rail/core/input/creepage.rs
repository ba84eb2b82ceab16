use uom::si::{
    f64::{Length, Ratio},
    length::meter,
    ratio::ratio,
};

use crate::support::{
    constraint::{ConstraintError, ConstraintResult},
    units::SpinCreepage,
};

/// Rigid-body slip of the wheel surface relative to the rail, normalized
/// by rolling speed.
///
/// Conventions: `x` points along the rolling direction, `y` laterally,
/// `z` up. The longitudinal and lateral components are dimensionless
/// velocity ratios; spin is the angular slip about `z` per unit rolled
/// distance. At a point `(x, y)` of the patch the local rigid slip is
/// `(longitudinal − spin·y, lateral + spin·x)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Creepage {
    longitudinal: Ratio,
    lateral: Ratio,
    spin: SpinCreepage,
}

impl Creepage {
    /// Constructs a validated creepage triple.
    ///
    /// # Errors
    ///
    /// Returns an error if any component is NaN or infinite.
    pub fn new(longitudinal: Ratio, lateral: Ratio, spin: SpinCreepage) -> ConstraintResult<Self> {
        let finite = longitudinal.get::<ratio>().is_finite()
            && lateral.get::<ratio>().is_finite()
            && (spin * Length::new::<meter>(1.0)).get::<ratio>().is_finite();
        if !finite {
            return Err(ConstraintError::NotANumber);
        }

        Ok(Self {
            longitudinal,
            lateral,
            spin,
        })
    }

    /// Pure rolling: all components zero.
    #[must_use]
    pub fn zero() -> Self {
        let zero = Ratio::new::<ratio>(0.0);
        Self {
            longitudinal: zero,
            lateral: zero,
            spin: zero / Length::new::<meter>(1.0),
        }
    }

    /// Longitudinal creepage.
    #[must_use]
    pub fn longitudinal(&self) -> Ratio {
        self.longitudinal
    }

    /// Lateral creepage.
    #[must_use]
    pub fn lateral(&self) -> Ratio {
        self.lateral
    }

    /// Spin creepage.
    #[must_use]
    pub fn spin(&self) -> SpinCreepage {
        self.spin
    }
}
