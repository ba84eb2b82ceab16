//! Core virtual-penetration contact solve.
//!
//! For a fixed virtual penetration the method is closed-form: each lateral
//! slice either clears the penetrated profile or carries a Hertz-like
//! strip of contact whose half-width follows from the local rolling
//! radius, and the pressure scale of each contact region follows from the
//! elastic half-space deflection condition evaluated at the region
//! center. No iteration happens here; matching a target load is layered
//! on top in `given_load`.

mod error;
mod sampled;

pub use error::SolveError;
pub(super) use sampled::Sampled;

use uom::{
    ConstZero,
    si::{
        f64::{Force, Length, Pressure},
        length::meter,
    },
};

use crate::support::profile::ContactGeometry;

use super::{
    input::Material,
    pressure,
    results::{ContactSpan, NormalResults, SliceState},
};

/// Ratio of virtual penetration to rigid-body approach.
///
/// Pressing the undeformed profiles together by the full elastic approach
/// overestimates the patch; the virtual-penetration method uses this
/// fraction of the approach instead, calibrated so constant-curvature
/// profiles reproduce the Hertz patch closely.
pub(super) const VIRTUAL_PENETRATION_RATIO: f64 = 0.55;

/// Solves the normal contact for a fixed virtual penetration.
pub(super) fn solve<G, const NY: usize>(
    geometry: &G,
    material: &Material,
    virtual_penetration: Length,
) -> Result<NormalResults<NY>, SolveError>
where
    G: ContactGeometry,
{
    const {
        assert!(NY >= 2, "a contact patch needs at least 2 lateral slices");
    };

    let delta0 = virtual_penetration.get::<meter>();
    if !delta0.is_finite() || delta0 < 0.0 {
        return Err(SolveError::InvalidPenetration {
            value: virtual_penetration,
        });
    }

    let sampled = Sampled::<NY>::new(geometry)?;
    let approach = virtual_penetration / VIRTUAL_PENETRATION_RATIO;

    let interpenetration: [Length; NY] = std::array::from_fn(|i| {
        (virtual_penetration - sampled.separation[i]).max(Length::ZERO)
    });
    let half_width: [Length; NY] = std::array::from_fn(|i| {
        if interpenetration[i] > Length::ZERO {
            (2.0 * sampled.radius[i] * interpenetration[i]).sqrt()
        } else {
            Length::ZERO
        }
    });

    let mut peak_pressure = [Pressure::ZERO; NY];
    let mut spans = Vec::new();
    let mut normal_load = Force::ZERO;

    for (first, last) in contact_spans(&interpenetration) {
        let span = pressure::normalize_span(
            &sampled,
            &interpenetration,
            &half_width,
            (first, last),
            material,
            approach,
            virtual_penetration,
        );

        for i in first..=last {
            peak_pressure[i] = span.peak_pressure * (half_width[i] / span.reference_half_width);
        }

        normal_load += span.load;
        spans.push(ContactSpan {
            first,
            last,
            load: span.load,
            peak_pressure: span.peak_pressure,
            reference_half_width: span.reference_half_width,
        });
    }

    let slices: [SliceState; NY] = std::array::from_fn(|i| SliceState {
        lateral_position: sampled.lateral[i],
        interpenetration: interpenetration[i],
        half_width: half_width[i],
        peak_pressure: peak_pressure[i],
    });

    Ok(NormalResults {
        slices,
        spans,
        virtual_penetration,
        approach,
        normal_load,
        slice_spacing: sampled.spacing,
        convergence: None,
    })
}

/// Maximal runs of in-contact slices, as inclusive index ranges.
fn contact_spans<const NY: usize>(interpenetration: &[Length; NY]) -> Vec<(usize, usize)> {
    let mut spans = Vec::new();
    let mut start = None;

    for (i, &g) in interpenetration.iter().enumerate() {
        if g > Length::ZERO {
            if start.is_none() {
                start = Some(i);
            }
        } else if let Some(first) = start.take() {
            spans.push((first, i - 1));
        }
    }
    if let Some(first) = start {
        spans.push((first, NY - 1));
    }

    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use std::f64::consts::SQRT_2;
    use uom::si::{force::newton, pressure::pascal};

    use crate::models::wheel_rail::core::test_support::{CrownedGeometry, steel};

    const NY: usize = 128;

    #[test]
    fn circular_case_matches_closed_form_load() {
        // Equal rolling and lateral relative radii make the patch a circle
        // of radius sqrt(2·R·δ0), for which the deflection integrals have
        // closed forms: N = (4/3)·E*·a·δ0/0.55.
        let geometry = CrownedGeometry::symmetric(0.5, 0.5, 0.03);
        let material = steel();

        let delta0 = 5.0e-5;
        let results = solve::<_, NY>(&geometry, &material, Length::new::<meter>(delta0))
            .expect("solve should succeed");

        let e_star = 0.5 * material.contact_modulus().get::<pascal>();
        let a_ref = (2.0 * 0.5 * delta0).sqrt();
        let expected = (4.0 / 3.0) * e_star * a_ref * delta0 / VIRTUAL_PENETRATION_RATIO;

        assert_relative_eq!(
            results.normal_load.get::<newton>(),
            expected,
            max_relative = 0.04
        );

        let peak = results.max_pressure().get::<pascal>();
        let expected_peak = 3.0 * expected / (2.0 * std::f64::consts::PI * a_ref * a_ref);
        assert_relative_eq!(peak, expected_peak, max_relative = 0.04);
    }

    #[test]
    fn circular_case_patch_is_round() {
        let geometry = CrownedGeometry::symmetric(0.5, 0.5, 0.03);
        let material = steel();

        let delta0 = 5.0e-5;
        let results = solve::<_, NY>(&geometry, &material, Length::new::<meter>(delta0))
            .expect("solve should succeed");

        let a_ref = (2.0 * 0.5 * delta0).sqrt();
        let (rolling, lateral) = results
            .equivalent_half_lengths()
            .expect("patch should not be empty");

        assert_relative_eq!(rolling.get::<meter>(), a_ref, max_relative = 0.02);
        assert_relative_eq!(lateral.get::<meter>(), a_ref, max_relative = 0.02);
    }

    #[test]
    fn slice_loads_sum_to_the_total() {
        let geometry = CrownedGeometry::symmetric(0.3, 0.46, 0.03);
        let material = steel();

        let results = solve::<_, NY>(&geometry, &material, Length::new::<meter>(4.0e-5))
            .expect("solve should succeed");

        // Each slice carries the 1-D integral of its semi-ellipse.
        let dy = results.slice_spacing.get::<meter>();
        let sum: f64 = results
            .slices
            .iter()
            .map(|s| {
                let a = s.half_width.get::<meter>();
                let p0 = s.peak_pressure.get::<pascal>();
                std::f64::consts::FRAC_PI_2 * p0 * a * dy
            })
            .sum();

        assert_relative_eq!(
            sum,
            results.normal_load.get::<newton>(),
            max_relative = 1e-9
        );
    }

    #[test]
    fn patch_is_symmetric_for_symmetric_geometry() {
        let geometry = CrownedGeometry::symmetric(0.3, 0.46, 0.03);
        let material = steel();

        let results = solve::<_, NY>(&geometry, &material, Length::new::<meter>(4.0e-5))
            .expect("solve should succeed");

        for i in 0..NY {
            let mirror = NY - 1 - i;
            assert_relative_eq!(
                results.slices[i].half_width.get::<meter>(),
                results.slices[mirror].half_width.get::<meter>(),
                max_relative = 1e-12,
                epsilon = 1e-15
            );
            assert_relative_eq!(
                results.slices[i].peak_pressure.get::<pascal>(),
                results.slices[mirror].peak_pressure.get::<pascal>(),
                max_relative = 1e-12,
                epsilon = 1e-9
            );
        }
    }

    #[test]
    fn detects_two_separate_regions() {
        // A double-well separation: minima at ±5 mm, quartic between.
        struct DoubleWell;

        impl ContactGeometry for DoubleWell {
            fn lateral_span(&self) -> (Length, Length) {
                (Length::new::<meter>(-0.02), Length::new::<meter>(0.02))
            }

            fn separation(&self, lateral: Length) -> Length {
                let y = lateral.get::<meter>();
                let c2 = 5.0e-3_f64.powi(2);
                let well = (y * y - c2).powi(2) / 3.0e-5;
                Length::new::<meter>(well)
            }

            fn rolling_radius(&self, _lateral: Length) -> Length {
                Length::new::<meter>(0.46)
            }
        }

        let results = solve::<_, NY>(&DoubleWell, &steel(), Length::new::<meter>(1.0e-5))
            .expect("solve should succeed");

        assert_eq!(results.spans.len(), 2);

        // Symmetric wells carry equal shares of the load.
        assert_relative_eq!(
            results.spans[0].load.get::<newton>(),
            results.spans[1].load.get::<newton>(),
            max_relative = 1e-6
        );
        assert_relative_eq!(
            results.spans[0].load.get::<newton>() + results.spans[1].load.get::<newton>(),
            results.normal_load.get::<newton>(),
            max_relative = 1e-12
        );
    }

    #[test]
    fn zero_penetration_is_an_empty_patch() {
        let geometry = CrownedGeometry::symmetric(0.3, 0.46, 0.03);
        let results =
            solve::<_, NY>(&geometry, &steel(), Length::ZERO).expect("solve should succeed");

        assert!(!results.is_contact());
        assert_eq!(results.normal_load, Force::ZERO);
        assert!(results.spans.is_empty());
    }

    #[test]
    fn rejects_non_finite_penetration() {
        let geometry = CrownedGeometry::symmetric(0.3, 0.46, 0.03);

        let err = solve::<_, NY>(&geometry, &steel(), Length::new::<meter>(f64::NAN)).unwrap_err();
        assert!(matches!(err, SolveError::InvalidPenetration { .. }));

        let err = solve::<_, NY>(&geometry, &steel(), Length::new::<meter>(-1.0e-6)).unwrap_err();
        assert!(matches!(err, SolveError::InvalidPenetration { .. }));
    }

    #[test]
    fn half_width_follows_the_local_interpenetration() {
        let geometry = CrownedGeometry::symmetric(0.3, 0.46, 0.03);
        let results = solve::<_, NY>(&geometry, &steel(), Length::new::<meter>(4.0e-5))
            .expect("solve should succeed");

        for slice in &results.slices {
            let g = slice.interpenetration.get::<meter>();
            let a = slice.half_width.get::<meter>();
            if g > 0.0 {
                assert_relative_eq!(a, SQRT_2 * (0.46 * g).sqrt(), max_relative = 1e-12);
            } else {
                assert_eq!(a, 0.0);
            }
        }
    }
}
