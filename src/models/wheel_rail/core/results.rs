//! Results types for the normal contact solve.

use uom::{
    ConstZero,
    si::f64::{Force, Length, Pressure, Ratio},
};

/// Contact patch geometry and pressure for one solved configuration.
///
/// The patch is described by `NY` lateral slices ordered from the low to
/// the high end of the sampled span, each a strip of width
/// [`slice_spacing`](Self::slice_spacing) centered at its lateral
/// position. Out-of-contact slices carry zero interpenetration,
/// half-width, and peak pressure. Contiguous runs of in-contact slices
/// are summarized in [`spans`](Self::spans); several spans at once model
/// simultaneous tread and flange contact.
#[derive(Debug, Clone)]
pub struct NormalResults<const NY: usize> {
    /// Per-slice patch state, ordered by lateral position.
    pub slices: [SliceState; NY],

    /// Contiguous in-contact slice runs, ordered by lateral position.
    pub spans: Vec<ContactSpan>,

    /// Virtual penetration depth that produced this patch.
    pub virtual_penetration: Length,

    /// Rigid-body approach of the two profiles.
    pub approach: Length,

    /// Total normal load carried by the patch.
    pub normal_load: Force,

    /// Lateral width of one slice strip.
    pub slice_spacing: Length,

    /// Load-matching diagnostics; `None` for a direct solve.
    pub convergence: Option<LoadConvergence>,
}

/// One lateral slice of the contact patch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliceState {
    /// Lateral position of the slice center.
    pub lateral_position: Length,

    /// Local interpenetration of the undeformed profiles.
    pub interpenetration: Length,

    /// Contact half-width along the rolling direction; zero out of contact.
    pub half_width: Length,

    /// Peak of the semi-elliptical pressure at the slice center line.
    pub peak_pressure: Pressure,
}

/// A contiguous run of in-contact slices.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContactSpan {
    /// Index of the first in-contact slice.
    pub first: usize,

    /// Index of the last in-contact slice (inclusive).
    pub last: usize,

    /// Normal load carried by this span.
    pub load: Force,

    /// Peak pressure over the span.
    pub peak_pressure: Pressure,

    /// Half-width scale `sqrt(2·R·δ0)` used to normalize the span.
    pub reference_half_width: Length,
}

/// Force-balance iteration diagnostics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoadConvergence {
    /// Iteration count performed by the bisection solver.
    pub iters: usize,

    /// Achieved-minus-target load at the accepted solution.
    pub residual: Force,
}

impl<const NY: usize> NormalResults<NY> {
    /// True if any slice is in contact.
    #[must_use]
    pub fn is_contact(&self) -> bool {
        !self.spans.is_empty()
    }

    /// Pressure at rolling-direction position `x` within slice `slice`.
    ///
    /// The distribution is semi-elliptical in `x`: zero at and beyond the
    /// local half-width, maximal on the slice center line.
    ///
    /// # Panics
    ///
    /// Panics if `slice >= NY`.
    #[must_use]
    pub fn pressure_at(&self, slice: usize, x: Length) -> Pressure {
        let state = &self.slices[slice];
        if state.half_width <= Length::ZERO {
            return Pressure::ZERO;
        }

        let xi: Ratio = x / state.half_width;
        let xi = xi.get::<uom::si::ratio::ratio>();
        if xi.abs() >= 1.0 {
            return Pressure::ZERO;
        }
        state.peak_pressure * (1.0 - xi * xi).sqrt()
    }

    /// Maximum pressure over the whole patch.
    #[must_use]
    pub fn max_pressure(&self) -> Pressure {
        self.slices
            .iter()
            .map(|slice| slice.peak_pressure)
            .fold(Pressure::ZERO, Pressure::max)
    }

    /// Semi-axes of the equivalent ellipse `(rolling, lateral)`.
    ///
    /// The rolling semi-axis is the largest slice half-width; the lateral
    /// semi-axis is half the total in-contact width. Returns `None` for an
    /// empty patch. Useful for deriving Kalker flexibilities for the
    /// tangential solve.
    #[must_use]
    pub fn equivalent_half_lengths(&self) -> Option<(Length, Length)> {
        if !self.is_contact() {
            return None;
        }

        let rolling = self
            .slices
            .iter()
            .map(|slice| slice.half_width)
            .fold(Length::ZERO, Length::max);

        let in_contact = self
            .slices
            .iter()
            .filter(|slice| slice.half_width > Length::ZERO)
            .count();
        #[allow(clippy::cast_precision_loss)]
        let lateral = 0.5 * (in_contact as f64) * self.slice_spacing;

        Some((rolling, lateral))
    }
}
