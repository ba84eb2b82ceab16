use uom::si::{
    f64::{Length, Pressure, Ratio},
    length::meter,
    pressure::gigapascal,
    ratio::ratio,
};

use crate::support::profile::ContactGeometry;

use super::{
    input::Material,
    tangential::{Flexibility, KalkerCoefficients},
};

/// Analytic geometry with constant curvatures: a crowned pair whose
/// separation is `y²/(2·ρ)` for a relative lateral radius `ρ`, rolled on
/// a constant rolling radius. With `ρ` equal to the rolling radius the
/// patch is circular and the classical point-contact formulas apply.
#[derive(Debug, Clone, Copy)]
pub(super) struct CrownedGeometry {
    lateral_radius: f64,
    rolling_radius: f64,
    half_span: f64,
}

impl CrownedGeometry {
    /// Builds a symmetric crowned geometry, all lengths in meters.
    pub(super) fn symmetric(lateral_radius: f64, rolling_radius: f64, half_span: f64) -> Self {
        Self {
            lateral_radius,
            rolling_radius,
            half_span,
        }
    }
}

impl ContactGeometry for CrownedGeometry {
    fn lateral_span(&self) -> (Length, Length) {
        (
            Length::new::<meter>(-self.half_span),
            Length::new::<meter>(self.half_span),
        )
    }

    fn separation(&self, lateral: Length) -> Length {
        let y = lateral.get::<meter>();
        Length::new::<meter>(y * y / (2.0 * self.lateral_radius))
    }

    fn rolling_radius(&self, _lateral: Length) -> Length {
        Length::new::<meter>(self.rolling_radius)
    }
}

/// Rail steel: E = 210 GPa, ν = 0.28.
pub(super) fn steel() -> Material {
    Material::new(
        Pressure::new::<gigapascal>(210.0),
        Ratio::new::<ratio>(0.28),
    )
    .expect("steel properties are valid")
}

/// Flexibilities for a roughly circular 6 mm patch in steel.
pub(super) fn steel_flexibility() -> Flexibility {
    Flexibility::from_kalker(
        steel().shear_modulus(),
        &KalkerCoefficients::new(4.12, 3.67, 1.47).expect("coefficients are valid"),
        Length::new::<meter>(6.0e-3),
        Length::new::<meter>(6.0e-3),
    )
    .expect("flexibilities are valid")
}
