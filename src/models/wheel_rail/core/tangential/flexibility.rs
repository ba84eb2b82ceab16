use std::f64::consts::PI;

use uom::si::{
    f64::{Length, Pressure, Ratio},
    ratio::ratio,
};

use crate::support::{
    constraint::{Constrained, ConstraintError, ConstraintResult, StrictlyPositive},
    units::ShearFlexibility,
};

/// Tangential shear flexibilities of the simplified rolling-contact theory.
///
/// Each component relates elastic tangential surface displacement to
/// traction, `u = L·t`, for the corresponding creepage mode. Separate
/// values per mode keep the model's linear range aligned with the exact
/// rolling-contact theory.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Flexibility {
    longitudinal: ShearFlexibility,
    lateral: ShearFlexibility,
    spin: ShearFlexibility,
}

impl Flexibility {
    /// Constructs validated flexibilities.
    ///
    /// # Errors
    ///
    /// Returns an error if any component is not strictly positive and finite.
    pub fn new(
        longitudinal: ShearFlexibility,
        lateral: ShearFlexibility,
        spin: ShearFlexibility,
    ) -> ConstraintResult<Self> {
        let longitudinal =
            Constrained::<ShearFlexibility, StrictlyPositive>::new(longitudinal)?.into_inner();
        let lateral =
            Constrained::<ShearFlexibility, StrictlyPositive>::new(lateral)?.into_inner();
        let spin = Constrained::<ShearFlexibility, StrictlyPositive>::new(spin)?.into_inner();

        Ok(Self {
            longitudinal,
            lateral,
            spin,
        })
    }

    /// Derives flexibilities from the creepage coefficients of the linear
    /// theory, using the equivalent-ellipse semi-axes of the patch:
    ///
    /// - `L1 = 8a / (3·c11·G)`
    /// - `L2 = 8a / (3·c22·G)`
    /// - `L3 = π·a·sqrt(a/b) / (4·c23·G)`
    ///
    /// where `a` and `b` are the rolling and lateral semi-axes and `G` is
    /// the shear modulus.
    ///
    /// # Errors
    ///
    /// Returns an error if the shear modulus or either semi-axis is not
    /// strictly positive and finite.
    pub fn from_kalker(
        shear_modulus: Pressure,
        coefficients: &KalkerCoefficients,
        rolling_semi_axis: Length,
        lateral_semi_axis: Length,
    ) -> ConstraintResult<Self> {
        let g = Constrained::<Pressure, StrictlyPositive>::new(shear_modulus)?.into_inner();
        let a = Constrained::<Length, StrictlyPositive>::new(rolling_semi_axis)?.into_inner();
        let b = Constrained::<Length, StrictlyPositive>::new(lateral_semi_axis)?.into_inner();

        let aspect: Ratio = a / b;
        let aspect = aspect.get::<ratio>();

        let longitudinal = 8.0 / (3.0 * coefficients.c11) * a / g;
        let lateral = 8.0 / (3.0 * coefficients.c22) * a / g;
        let spin = PI * aspect.sqrt() / (4.0 * coefficients.c23) * a / g;

        Self::new(longitudinal, lateral, spin)
    }

    /// Flexibility for the longitudinal creepage mode.
    #[must_use]
    pub fn longitudinal(&self) -> ShearFlexibility {
        self.longitudinal
    }

    /// Flexibility for the lateral creepage mode.
    #[must_use]
    pub fn lateral(&self) -> ShearFlexibility {
        self.lateral
    }

    /// Flexibility for the spin creepage mode.
    #[must_use]
    pub fn spin(&self) -> ShearFlexibility {
        self.spin
    }
}

/// Creepage coefficients of the linear rolling-contact theory.
///
/// Values depend on the patch aspect ratio and the Poisson ratio and are
/// normally read from the published tables; `c11` drives longitudinal
/// creepage, `c22` lateral creepage, and `c23` spin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KalkerCoefficients {
    c11: f64,
    c22: f64,
    c23: f64,
}

impl KalkerCoefficients {
    /// Constructs validated coefficients.
    ///
    /// # Errors
    ///
    /// Returns an error if any coefficient is not strictly positive and finite.
    pub fn new(c11: f64, c22: f64, c23: f64) -> ConstraintResult<Self> {
        for c in [c11, c22, c23] {
            let checked = Constrained::<f64, StrictlyPositive>::new(c)?.into_inner();
            if !checked.is_finite() {
                return Err(ConstraintError::NotANumber);
            }
        }

        Ok(Self { c11, c22, c23 })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{length::millimeter, pressure::gigapascal};

    #[test]
    fn kalker_formulas() {
        let g = Pressure::new::<gigapascal>(82.0);
        let coefficients = KalkerCoefficients::new(4.12, 3.67, 1.47).unwrap();
        let a = Length::new::<millimeter>(6.0);
        let b = Length::new::<millimeter>(4.0);

        let flexibility = Flexibility::from_kalker(g, &coefficients, a, b).unwrap();

        let g_si = 82.0e9;
        let a_si = 6.0e-3;
        let expected_l1 = 8.0 * a_si / (3.0 * 4.12 * g_si);
        let expected_l3 = PI * a_si * (6.0_f64 / 4.0).sqrt() / (4.0 * 1.47 * g_si);

        let one_pascal = Pressure::new::<uom::si::pressure::pascal>(1.0);
        assert_relative_eq!(
            (flexibility.longitudinal() * one_pascal).get::<uom::si::length::meter>(),
            expected_l1,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            (flexibility.spin() * one_pascal).get::<uom::si::length::meter>(),
            expected_l3,
            max_relative = 1e-12
        );
    }

    #[test]
    fn rejects_degenerate_axes() {
        let g = Pressure::new::<gigapascal>(82.0);
        let coefficients = KalkerCoefficients::new(4.12, 3.67, 1.47).unwrap();

        assert!(
            Flexibility::from_kalker(
                g,
                &coefficients,
                Length::new::<millimeter>(0.0),
                Length::new::<millimeter>(4.0),
            )
            .is_err()
        );
    }

    #[test]
    fn rejects_bad_coefficients() {
        assert!(KalkerCoefficients::new(0.0, 3.67, 1.47).is_err());
        assert!(KalkerCoefficients::new(4.12, -1.0, 1.47).is_err());
        assert!(KalkerCoefficients::new(4.12, 3.67, f64::NAN).is_err());
    }
}
