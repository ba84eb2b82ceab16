//! Pressure normalization for contact regions.
//!
//! Each contact region carries a pressure field that is semi-elliptical
//! along the rolling direction, `p(x, y) = p_max·sqrt(a(y)² − x²)/a_ref`.
//! The scale `p_max` follows from the elastic half-space deflection
//! condition: the surface deflection at the region center, produced by
//! the whole region's pressure, must equal the rigid-body approach. That
//! condition fixes the region load in closed form; no iteration is
//! involved.

use std::f64::consts::FRAC_PI_2;

use uom::{
    ConstZero,
    si::{
        area::square_meter,
        f64::{Area, Force, Length, Pressure, Volume},
        length::meter,
        volume::cubic_meter,
    },
};

use super::{input::Material, solve::Sampled};

/// Normalized pressure scale for one contact region.
#[derive(Debug, Clone, Copy)]
pub(super) struct SpanPressure {
    /// Normal load carried by the region.
    pub load: Force,

    /// Peak pressure over the region.
    pub peak_pressure: Pressure,

    /// Half-width scale `sqrt(2·R·δ0)` at the region's deepest slice.
    pub reference_half_width: Length,
}

/// Panel count for the Simpson rule on the non-singular kernel remainder.
const SIMPSON_PANELS: usize = 64;

/// Evaluates the deflection condition for the region `span` (inclusive).
pub(super) fn normalize_span<const NY: usize>(
    sampled: &Sampled<NY>,
    interpenetration: &[Length; NY],
    half_width: &[Length; NY],
    span: (usize, usize),
    material: &Material,
    approach: Length,
    virtual_penetration: Length,
) -> SpanPressure {
    let (first, last) = span;

    // Deflection is evaluated at the deepest slice of the region.
    let mut center = first;
    for i in first..=last {
        if interpenetration[i] > interpenetration[center] {
            center = i;
        }
    }

    let reference_half_width: Length =
        (2.0 * sampled.radius[center] * virtual_penetration).sqrt();

    let dy = sampled.spacing.get::<meter>();
    let y_center = sampled.lateral[center].get::<meter>();

    // Deflection integral (m²) and pressure-shape integral (m³), built
    // slice by slice; the inner x-integral of the shape is exact,
    // (π/2)·a², while the deflection kernel needs quadrature.
    let mut deflection = 0.0;
    let mut shape = 0.0;
    for i in first..=last {
        let a = half_width[i].get::<meter>();
        if a <= 0.0 {
            continue;
        }
        let y = sampled.lateral[i].get::<meter>() - y_center;
        deflection += dy * deflection_kernel(y, a, dy);
        shape += dy * FRAC_PI_2 * a * a;
    }

    if deflection <= 0.0 || shape <= 0.0 {
        return SpanPressure {
            load: Force::ZERO,
            peak_pressure: Pressure::ZERO,
            reference_half_width,
        };
    }

    let deflection = Area::new::<square_meter>(deflection);
    let shape = Volume::new::<cubic_meter>(shape);

    // w(center) = 2(1−ν²)/(πE)·∫∫ p/r dA = approach, rearranged for the load.
    let coefficient = FRAC_PI_2 * material.contact_modulus() * approach;
    let load: Force = coefficient * shape / deflection;
    let peak_pressure: Pressure = load * reference_half_width / shape;

    SpanPressure {
        load,
        peak_pressure,
        reference_half_width,
    }
}

/// Inner deflection integral `∫ sqrt(a²−x²)/sqrt(x²+d²) dx` over `[-a, a]`.
///
/// `d² = y² + (dy/4)²` keeps the kernel finite on the slice that contains
/// the evaluation point; the offset plays the role of averaging the
/// `1/r` singularity over the strip width instead of sampling it at the
/// singular point.
///
/// The integral splits into a closed-form singular part,
/// `∫ a/sqrt(x²+d²) dx = 2a·asinh(a/d)`, and a smooth remainder
/// `(sqrt(a²−x²) − a)/sqrt(x²+d²)`, which the substitution `x = a·sinθ`
/// turns into an analytic integrand on `[0, π/2]` handled by a
/// fixed-panel Simpson rule (the remainder is even in `x`).
fn deflection_kernel(y: f64, a: f64, dy: f64) -> f64 {
    let d2 = y * y + (0.25 * dy).powi(2);
    let d = d2.sqrt();

    let singular = 2.0 * a * (a / d).asinh();

    let remainder = |theta: f64| {
        let (sin, cos) = theta.sin_cos();
        a * a * cos * (cos - 1.0) / ((a * sin).powi(2) + d2).sqrt()
    };

    let n = SIMPSON_PANELS;
    #[allow(clippy::cast_precision_loss)]
    let h = std::f64::consts::FRAC_PI_2 / n as f64;
    let mut sum = remainder(0.0) + remainder(std::f64::consts::FRAC_PI_2);
    for k in 1..n {
        #[allow(clippy::cast_precision_loss)]
        let theta = h * k as f64;
        sum += if k % 2 == 1 { 4.0 } else { 2.0 } * remainder(theta);
    }
    let smooth = h / 3.0 * sum;

    singular + 2.0 * smooth
}
