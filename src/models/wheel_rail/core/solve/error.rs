use thiserror::Error;
use uom::si::f64::Length;

/// Errors that can occur while solving the normal contact problem.
#[derive(Debug, Clone, Error)]
pub enum SolveError {
    /// The supplied geometry cannot be pressed into contact.
    ///
    /// Raised for an empty or inverted lateral span, non-finite separation
    /// or radius samples, or a non-positive rolling radius. These are input
    /// defects, surfaced immediately and never retried.
    #[error("contact geometry is invalid: {context}")]
    InvalidGeometry {
        /// What was wrong with the geometry.
        context: String,

        /// Slice index where the defect was sampled, if localized.
        slice: Option<usize>,
    },

    /// The requested virtual penetration is negative or non-finite.
    #[error("virtual penetration must be finite and non-negative, got {value:?}")]
    InvalidPenetration {
        /// The rejected value.
        value: Length,
    },
}

impl SolveError {
    /// Creates an invalid-geometry error with context.
    pub(crate) fn invalid_geometry(context: impl Into<String>, slice: Option<usize>) -> Self {
        Self::InvalidGeometry {
            context: context.into(),
            slice,
        }
    }
}
