//! Iterative solver for a target normal load.
//!
//! The direct solve maps a virtual penetration to a patch and its total
//! load; this module inverts that map. The load is monotone in the
//! penetration, so a bracketed bisection is guaranteed to converge: the
//! lower bound is zero (no contact, no load), the upper bound is found by
//! doubling the penetration until the evaluated load exceeds the target.

mod config;
mod error;
mod problem;

pub use config::GivenLoadConfig;
pub use error::GivenLoadError;

use twine_core::Model;
use twine_solvers::equation::bisection;
use uom::{
    ConstZero,
    si::{
        f64::{Force, Length},
        force::newton,
        length::meter,
    },
};

use crate::support::{
    constraint::{Constrained, NonNegative},
    profile::ContactGeometry,
};

use super::{
    input::Material,
    results::{LoadConvergence, NormalResults},
    solve::solve,
};

use problem::{GivenLoadModel, GivenLoadProblem};

/// Penetration where the upper-bound search starts; doubled until the
/// evaluated load exceeds the target.
const BRACKET_SEED: f64 = 1.0e-7;

/// Doubling steps before giving up on a bracket.
const BRACKET_STEPS: usize = 60;

/// Solves the normal contact so the patch carries `target` load.
///
/// A zero target returns the no-contact result state: an empty patch with
/// zero forces is a legitimate answer, not an error.
pub(super) fn given_load<G, const NY: usize>(
    geometry: &G,
    material: &Material,
    target: Constrained<Force, NonNegative>,
    config: GivenLoadConfig,
) -> Result<NormalResults<NY>, GivenLoadError<NY>>
where
    G: ContactGeometry,
{
    const {
        assert!(NY >= 2, "a contact patch needs at least 2 lateral slices");
    };

    let target = target.into_inner();

    if target == Force::ZERO {
        let mut results = solve::<G, NY>(geometry, material, Length::ZERO)?;
        results.convergence = Some(LoadConvergence {
            iters: 0,
            residual: Force::ZERO,
        });
        return Ok(results);
    }

    let model = GivenLoadModel::<G, NY>::new(geometry, material);

    // Bracket the monotone load curve from above.
    let mut upper = Length::new::<meter>(BRACKET_SEED);
    let mut reached = Force::ZERO;
    let mut bracketed = false;
    for _ in 0..BRACKET_STEPS {
        reached = model.call(&upper)?.normal_load;
        if reached >= target {
            bracketed = true;
            break;
        }
        upper = 2.0 * upper;
    }
    if !bracketed {
        return Err(GivenLoadError::Bracket {
            limit: upper,
            reached,
        });
    }

    let problem = GivenLoadProblem::<NY>::new(target);

    let solution = bisection::solve(
        &model,
        &problem,
        [0.0, upper.get::<meter>()],
        &config.bisection(),
        |_event: &bisection::Event<'_, _, _>| None,
    )?;

    let convergence = LoadConvergence {
        iters: solution.iters,
        residual: Force::new::<newton>(solution.residual),
    };

    if solution.status != bisection::Status::Converged {
        return Err(GivenLoadError::MaxIters {
            residual: convergence.residual,
            iters: convergence.iters,
            best: Box::new(solution.snapshot.output),
        });
    }

    let mut results = solution.snapshot.output;
    results.convergence = Some(convergence);
    Ok(results)
}
