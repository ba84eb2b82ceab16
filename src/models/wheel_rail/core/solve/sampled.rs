//! Lateral sampling and validation of the contact geometry.

use uom::si::{f64::Length, length::meter};

use crate::support::profile::ContactGeometry;

use super::SolveError;

/// Validated geometry samples on the solver's lateral grid.
///
/// Slices are strips of width `spacing`, sampled at their midpoints across
/// the geometry's lateral span. The separation is shifted to a touching
/// datum: its minimum over the grid is zero, so a virtual penetration of
/// zero means the profiles just touch.
#[derive(Debug, Clone)]
pub struct Sampled<const NY: usize> {
    pub lateral: [Length; NY],
    pub separation: [Length; NY],
    pub radius: [Length; NY],
    pub spacing: Length,
}

impl<const NY: usize> Sampled<NY> {
    /// Samples and validates the geometry.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::InvalidGeometry`] if the lateral span is empty
    /// or non-finite, or any sampled separation or rolling radius is
    /// non-finite or (for the radius) non-positive.
    pub fn new(geometry: &impl ContactGeometry) -> Result<Self, SolveError> {
        let (lo, hi) = geometry.lateral_span();
        let (lo, hi) = (lo.get::<meter>(), hi.get::<meter>());
        if !lo.is_finite() || !hi.is_finite() {
            return Err(SolveError::invalid_geometry(
                "lateral span is not finite",
                None,
            ));
        }
        if lo >= hi {
            return Err(SolveError::invalid_geometry(
                "lateral span is empty; profiles do not overlap",
                None,
            ));
        }

        #[allow(clippy::cast_precision_loss)]
        let spacing = (hi - lo) / (NY as f64);

        #[allow(clippy::cast_precision_loss)]
        let lateral: [Length; NY] =
            std::array::from_fn(|i| Length::new::<meter>(lo + (i as f64 + 0.5) * spacing));

        let mut separation = [0.0_f64; NY];
        let mut radius = [0.0_f64; NY];
        for i in 0..NY {
            separation[i] = geometry.separation(lateral[i]).get::<meter>();
            if !separation[i].is_finite() {
                return Err(SolveError::invalid_geometry(
                    "separation sample is not finite",
                    Some(i),
                ));
            }

            radius[i] = geometry.rolling_radius(lateral[i]).get::<meter>();
            if !radius[i].is_finite() || radius[i] <= 0.0 {
                return Err(SolveError::invalid_geometry(
                    "rolling radius sample is not strictly positive",
                    Some(i),
                ));
            }
        }

        // Shift to the touching datum.
        let datum = separation.iter().copied().fold(f64::INFINITY, f64::min);

        Ok(Self {
            lateral,
            separation: std::array::from_fn(|i| Length::new::<meter>(separation[i] - datum)),
            radius: std::array::from_fn(|i| Length::new::<meter>(radius[i])),
            spacing: Length::new::<meter>(spacing),
        })
    }
}
