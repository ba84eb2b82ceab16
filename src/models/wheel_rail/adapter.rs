//! [`twine_core::Model`] adapter over the contact core.

use thiserror::Error;
use twine_core::Model;
use uom::si::f64::{Force, Ratio};

use crate::support::{
    constraint::{ConstraintError, NonNegative},
    profile::ContactGeometry,
};

use super::core::{
    Creepage, Flexibility, GivenLoadConfig, GivenLoadError, Material, NormalResults, SemiHertzian,
    TangentialConfig, TangentialInputs, TangentialResults,
};

/// A wheel-rail contact as a [`Model`]: geometry, material, and solver
/// configuration are fixed per instance, while the load and creepage vary
/// per call.
///
/// This is the natural shape for a multibody loop: one instance per
/// wheel-rail pair, one `call` per time step. Evaluations share no
/// mutable state, so instances can be called concurrently.
#[derive(Debug, Clone)]
pub struct WheelRailContact<G, const NY: usize> {
    geometry: G,
    material: Material,
    load_config: GivenLoadConfig,
    tangential_config: TangentialConfig,
}

impl<G, const NY: usize> WheelRailContact<G, NY> {
    /// Builds a contact model with default solver configuration.
    pub fn new(geometry: G, material: Material) -> Self {
        Self {
            geometry,
            material,
            load_config: GivenLoadConfig::default(),
            tangential_config: TangentialConfig::default(),
        }
    }

    /// Replaces the load-matching configuration.
    #[must_use]
    pub fn with_load_config(mut self, config: GivenLoadConfig) -> Self {
        self.load_config = config;
        self
    }

    /// Replaces the tangential grid configuration.
    #[must_use]
    pub fn with_tangential_config(mut self, config: TangentialConfig) -> Self {
        self.tangential_config = config;
        self
    }
}

/// Per-time-step input of a [`WheelRailContact`] evaluation.
#[derive(Debug, Clone, Copy)]
pub struct StepInput {
    /// Normal load pressing the wheel onto the rail.
    pub normal_load: Force,

    /// Creepage triple for the tangential solve.
    pub creepage: Creepage,

    /// Coulomb friction coefficient.
    pub friction: Ratio,

    /// Tangential shear flexibilities.
    pub flexibility: Flexibility,
}

/// Aggregate result of one contact evaluation.
#[derive(Debug, Clone)]
pub struct ContactResults<const NY: usize> {
    /// Patch geometry, pressure, and convergence diagnostics.
    pub normal: NormalResults<NY>,

    /// Tractions, creep forces, and the adhesion/slip partition.
    pub tangential: TangentialResults,
}

/// Errors of a full contact evaluation.
#[derive(Debug, Error)]
pub enum ContactError<const NY: usize> {
    /// An input parameter was rejected before computation started.
    #[error("invalid contact parameter")]
    Parameter(#[from] ConstraintError),

    /// The load-matching solve failed.
    #[error("load-matching solve failed")]
    Load(#[from] GivenLoadError<NY>),
}

impl<G, const NY: usize> Model for WheelRailContact<G, NY>
where
    G: ContactGeometry,
{
    type Input = StepInput;
    type Output = ContactResults<NY>;
    type Error = ContactError<NY>;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let target = NonNegative::new(input.normal_load)?;
        let tangential_inputs =
            TangentialInputs::new(input.creepage, input.friction, input.flexibility)?;

        let normal =
            SemiHertzian::<NY>::given_load(&self.geometry, &self.material, target, self.load_config)?;
        let tangential =
            SemiHertzian::<NY>::creep_forces(&normal, &tangential_inputs, &self.tangential_config);

        Ok(ContactResults { normal, tangential })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        f64::{Length, Pressure},
        force::{kilonewton, newton},
        length::meter,
        pressure::gigapascal,
        ratio::ratio,
    };

    use crate::models::wheel_rail::core::KalkerCoefficients;

    /// Constant-curvature geometry for adapter-level tests.
    #[derive(Debug, Clone, Copy)]
    struct Crowned;

    impl ContactGeometry for Crowned {
        fn lateral_span(&self) -> (Length, Length) {
            (Length::new::<meter>(-0.03), Length::new::<meter>(0.03))
        }

        fn separation(&self, lateral: Length) -> Length {
            let y = lateral.get::<meter>();
            Length::new::<meter>(y * y / (2.0 * 0.3))
        }

        fn rolling_radius(&self, _lateral: Length) -> Length {
            Length::new::<meter>(0.46)
        }
    }

    fn model() -> WheelRailContact<Crowned, 128> {
        let material = Material::new(
            Pressure::new::<gigapascal>(210.0),
            Ratio::new::<ratio>(0.28),
        )
        .unwrap();
        WheelRailContact::new(Crowned, material)
    }

    fn step(normal_load: Force, friction: f64) -> StepInput {
        let spin = Ratio::new::<ratio>(0.0) / Length::new::<meter>(1.0);
        StepInput {
            normal_load,
            creepage: Creepage::new(
                Ratio::new::<ratio>(1.0e-3),
                Ratio::new::<ratio>(0.0),
                spin,
            )
            .unwrap(),
            friction: Ratio::new::<ratio>(friction),
            flexibility: Flexibility::from_kalker(
                Pressure::new::<gigapascal>(82.0),
                &KalkerCoefficients::new(4.12, 3.67, 1.47).unwrap(),
                Length::new::<meter>(6.0e-3),
                Length::new::<meter>(6.0e-3),
            )
            .unwrap(),
        }
    }

    #[test]
    fn evaluates_a_time_step() {
        let results = model()
            .call(&step(Force::new::<kilonewton>(80.0), 0.3))
            .expect("evaluation should succeed");

        assert_relative_eq!(
            results.normal.normal_load.get::<newton>(),
            80.0e3,
            max_relative = 1.0e-5
        );
        assert!(results.tangential.longitudinal_force.get::<newton>() < 0.0);
    }

    #[test]
    fn rejects_invalid_friction_before_solving() {
        let err = model()
            .call(&step(Force::new::<kilonewton>(80.0), -0.3))
            .expect_err("negative friction must be rejected");

        assert!(matches!(err, ContactError::Parameter(_)));
    }

    #[test]
    fn rejects_negative_load_before_solving() {
        let err = model()
            .call(&step(Force::new::<kilonewton>(-80.0), 0.3))
            .expect_err("negative load must be rejected");

        assert!(matches!(
            err,
            ContactError::Parameter(ConstraintError::Negative)
        ));
    }

    #[test]
    fn zero_load_is_a_valid_no_contact_step() {
        let results = model()
            .call(&step(Force::new::<kilonewton>(0.0), 0.3))
            .expect("zero load should evaluate");

        assert!(!results.normal.is_contact());
        assert_eq!(results.tangential.longitudinal_force.get::<newton>(), 0.0);
        assert!(results.tangential.rows.is_empty());
    }
}
