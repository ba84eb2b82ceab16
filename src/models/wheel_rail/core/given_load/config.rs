use twine_solvers::equation::bisection;
use uom::si::{
    f64::{Force, Length},
    force::newton,
    length::meter,
};

/// Solver configuration for the load-matching bisection.
#[derive(Debug, Clone, Copy)]
pub struct GivenLoadConfig {
    /// Maximum iteration count for the bisection solve.
    pub max_iters: usize,

    /// Absolute tolerance for the virtual-penetration search variable.
    pub penetration_tol: Length,

    /// Relative tolerance for the virtual-penetration search variable.
    pub penetration_rel_tol: f64,

    /// Absolute tolerance for the load residual (achieved − target).
    pub load_tol: Force,
}

impl Default for GivenLoadConfig {
    fn default() -> Self {
        Self {
            max_iters: 100,
            penetration_tol: Length::new::<meter>(1.0e-12),
            penetration_rel_tol: 1.0e-6,
            load_tol: Force::new::<newton>(1.0e-3),
        }
    }
}

impl GivenLoadConfig {
    /// Converts this configuration into a bisection solver configuration.
    pub(super) fn bisection(&self) -> bisection::Config {
        bisection::Config {
            max_iters: self.max_iters,
            x_abs_tol: self.penetration_tol.get::<meter>(),
            x_rel_tol: self.penetration_rel_tol,
            residual_tol: self.load_tol.get::<newton>(),
        }
    }
}
