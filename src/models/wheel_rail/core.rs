//! Semi-Hertzian wheel-rail contact core.
//!
//! The normal problem uses the virtual-penetration method: the undeformed
//! profiles are pressed together by a trial depth, every lateral slice in
//! interpenetration carries a Hertz-like strip of contact, and each
//! contact region's pressure scale follows in closed form from the
//! elastic half-space deflection condition. Matching a target load is a
//! bounded scalar bisection on the penetration, the only iterative step
//! in a contact evaluation.
//!
//! The tangential problem sweeps each lateral row of the patch from the
//! leading to the trailing edge, accumulating elastic tangential traction
//! from the rigid slip and clamping it to the Coulomb bound, which
//! partitions the patch into adhesion and slip zones and yields the creep
//! forces and the spin moment.

mod given_load;
mod input;
mod pressure;
mod results;
mod solve;
mod tangential;

#[cfg(test)]
mod test_support;

pub use given_load::{GivenLoadConfig, GivenLoadError};
pub use input::{Creepage, Material, TangentialInputs};
pub use results::{ContactSpan, LoadConvergence, NormalResults, SliceState};
pub use solve::SolveError;
pub use tangential::{
    Flexibility, KalkerCoefficients, Regime, TangentialConfig, TangentialResults, TractionElement,
    TractionRow,
};

use uom::si::f64::{Force, Length};

use crate::support::{
    constraint::{Constrained, NonNegative},
    profile::ContactGeometry,
};

/// Entry point for solving a wheel-rail contact.
///
/// The lateral slice count `NY` is fixed by a const generic, like a grid
/// resolution chosen at compile time; it must be at least 2, which is
/// enforced by const assertions.
pub struct SemiHertzian<const NY: usize>;

impl<const NY: usize> SemiHertzian<NY> {
    /// Solves the normal contact for a fixed virtual penetration.
    ///
    /// This is the direct, non-iterative evaluation; the returned patch
    /// carries whatever load the penetration produces.
    ///
    /// # Errors
    ///
    /// Returns a [`SolveError`] on invalid geometry or a non-finite or
    /// negative penetration.
    pub fn solve(
        geometry: &impl ContactGeometry,
        material: &Material,
        virtual_penetration: Length,
    ) -> Result<NormalResults<NY>, SolveError> {
        solve::solve::<_, NY>(geometry, material, virtual_penetration)
    }

    /// Solves the normal contact so the patch carries a target load.
    ///
    /// Bisects on the virtual penetration until the integrated normal
    /// load matches `target` within the configured tolerances. A zero
    /// target returns the no-contact result state rather than an error.
    ///
    /// # Errors
    ///
    /// Returns a [`GivenLoadError`] on invalid geometry, a bracketing or
    /// bisection failure, or when the iteration limit is hit (in which
    /// case the best available estimate is included).
    pub fn given_load(
        geometry: &impl ContactGeometry,
        material: &Material,
        target: Constrained<Force, NonNegative>,
        config: GivenLoadConfig,
    ) -> Result<NormalResults<NY>, GivenLoadError<NY>> {
        given_load::given_load::<_, NY>(geometry, material, target, config)
    }

    /// Integrates tangential creep forces over a solved patch.
    ///
    /// Inputs are validated at construction, and an empty patch yields
    /// zero forces, so the sweep itself cannot fail.
    #[must_use]
    pub fn creep_forces(
        normal: &NormalResults<NY>,
        inputs: &TangentialInputs,
        config: &TangentialConfig,
    ) -> TangentialResults {
        tangential::creep_forces(normal, inputs, config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        f64::Ratio,
        force::{kilonewton, newton},
        length::meter,
        pressure::pascal,
        ratio::ratio,
    };

    use super::test_support::{CrownedGeometry, steel, steel_flexibility};

    const NY: usize = 128;

    #[test]
    fn load_controlled_circular_contact_matches_hertz() {
        // Equal curvature radii in both directions reduce the method to
        // classical point contact: the patch is a circle and the peak
        // pressure follows the closed-form Hertz value. The method's
        // virtual-penetration calibration reproduces Hertz within a few
        // percent, so the comparison tolerances are loose.
        let radius = 0.5;
        let geometry = CrownedGeometry::symmetric(radius, radius, 0.03);
        let material = steel();

        let target = Force::new::<kilonewton>(100.0);
        let results = SemiHertzian::<NY>::given_load(
            &geometry,
            &material,
            NonNegative::new(target).unwrap(),
            GivenLoadConfig::default(),
        )
        .expect("load solve should succeed");

        let n = target.get::<newton>();
        let e_star = 0.5 * material.contact_modulus().get::<pascal>();
        let hertz_radius = (3.0 * n * radius / (4.0 * e_star)).cbrt();
        let hertz_peak = 3.0 * n / (2.0 * std::f64::consts::PI * hertz_radius * hertz_radius);

        let (rolling, lateral) = results
            .equivalent_half_lengths()
            .expect("patch should not be empty");

        assert_relative_eq!(rolling.get::<meter>(), hertz_radius, max_relative = 0.05);
        assert_relative_eq!(lateral.get::<meter>(), hertz_radius, max_relative = 0.08);
        assert_relative_eq!(
            results.max_pressure().get::<pascal>(),
            hertz_peak,
            max_relative = 0.10
        );
    }

    #[test]
    fn pressure_vanishes_on_and_outside_the_patch_boundary() {
        let geometry = CrownedGeometry::symmetric(0.3, 0.46, 0.03);
        let results =
            SemiHertzian::<NY>::solve(&geometry, &steel(), Length::new::<meter>(4.0e-5))
                .expect("solve should succeed");

        for (i, slice) in results.slices.iter().enumerate() {
            let a = slice.half_width;
            if a > Length::new::<meter>(0.0) {
                assert_eq!(results.pressure_at(i, a).get::<pascal>(), 0.0);
                assert_eq!(results.pressure_at(i, -a).get::<pascal>(), 0.0);
                assert_eq!(results.pressure_at(i, 2.0 * a).get::<pascal>(), 0.0);
                assert!(results.pressure_at(i, 0.5 * a).get::<pascal>() > 0.0);
                assert!(results.pressure_at(i, Length::new::<meter>(0.0)) == slice.peak_pressure);
            } else {
                assert_eq!(
                    results.pressure_at(i, Length::new::<meter>(0.0)).get::<pascal>(),
                    0.0
                );
            }
        }
    }

    #[test]
    fn full_pipeline_produces_bounded_creep_forces() {
        let geometry = CrownedGeometry::symmetric(0.3, 0.46, 0.03);
        let material = steel();

        let normal = SemiHertzian::<NY>::given_load(
            &geometry,
            &material,
            NonNegative::new(Force::new::<kilonewton>(80.0)).unwrap(),
            GivenLoadConfig::default(),
        )
        .expect("load solve should succeed");

        let spin = Ratio::new::<ratio>(0.2) / Length::new::<meter>(1.0);
        let creepage = Creepage::new(
            Ratio::new::<ratio>(1.5e-3),
            Ratio::new::<ratio>(-0.5e-3),
            spin,
        )
        .unwrap();
        let mu = Ratio::new::<ratio>(0.3);
        let inputs = TangentialInputs::new(creepage, mu, steel_flexibility()).unwrap();

        let tangential = SemiHertzian::<NY>::creep_forces(
            &normal,
            &inputs,
            &TangentialConfig::default(),
        );

        let resultant = tangential
            .longitudinal_force
            .get::<newton>()
            .hypot(tangential.lateral_force.get::<newton>());
        let coulomb = 0.3 * normal.normal_load.get::<newton>();
        assert!(resultant > 0.0);
        assert!(resultant <= coulomb * (1.0 + 1e-9));

        // A mixed creepage at this level leaves both zones populated.
        let fraction = tangential
            .adhesion_fraction()
            .expect("patch is not empty")
            .get::<ratio>();
        assert!(fraction > 0.0 && fraction < 1.0);
    }

    #[test]
    fn results_echo_the_grid_geometry() {
        let geometry = CrownedGeometry::symmetric(0.3, 0.46, 0.03);
        let results =
            SemiHertzian::<NY>::solve(&geometry, &steel(), Length::new::<meter>(4.0e-5))
                .expect("solve should succeed");

        assert_relative_eq!(
            results.slice_spacing.get::<meter>(),
            0.06 / 128.0,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            results.approach.get::<meter>(),
            4.0e-5 / 0.55,
            max_relative = 1e-12
        );
    }
}
