use thiserror::Error;
use twine_solvers::equation::bisection;
use uom::si::f64::{Force, Length};

use crate::models::wheel_rail::core::{results::NormalResults, solve::SolveError};

/// Errors that can occur while matching a target normal load.
#[derive(Debug, Error)]
pub enum GivenLoadError<const NY: usize> {
    /// A normal contact solve failed.
    #[error("contact solve failed")]
    Solve(#[from] SolveError),

    /// The bisection solver encountered an error.
    #[error("bisection solver error")]
    Bisection(#[from] bisection::Error),

    /// No penetration in the search range carries the target load.
    #[error("could not bracket the target load: reached {reached:?} at {limit:?}")]
    Bracket {
        /// Largest virtual penetration that was evaluated.
        limit: Length,

        /// Load achieved at that penetration.
        reached: Force,
    },

    /// The solver reached the iteration limit without converging.
    ///
    /// The best available patch is included so the caller can decide
    /// whether to accept it, retry with relaxed tolerances, or abort.
    #[error("solver hit iteration limit: residual={residual:?}")]
    MaxIters {
        /// Achieved-minus-target load at the best iterate.
        residual: Force,

        /// Iteration count performed by the solver.
        iters: usize,

        /// Best available solution when the limit was hit.
        best: Box<NormalResults<NY>>,
    },
}
