use thiserror::Error;
use uom::si::{f64::Length, length::meter};

/// Errors that can occur while constructing or combining profiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ProfileError {
    /// Fewer than two sample points were supplied.
    #[error("a profile needs at least two points, got {count}")]
    TooFewPoints { count: usize },

    /// A coordinate was NaN or infinite.
    #[error("profile point {index} is not finite")]
    NonFinite { index: usize },

    /// Lateral positions must be strictly increasing.
    #[error("profile point {index} does not increase the lateral position")]
    NotMonotonic { index: usize },

    /// The two profiles of a pair share no lateral window.
    #[error("wheel and rail profiles do not overlap laterally")]
    NoOverlap,

    /// The nominal rolling radius must be strictly positive and finite.
    #[error("rolling radius must be strictly positive")]
    InvalidRadius,
}

/// A measured cross-section as ordered `(lateral, height)` samples.
///
/// Heights between samples are linearly interpolated. The sample list is
/// validated once at construction and immutable afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    lateral: Vec<f64>,
    height: Vec<f64>,
}

impl Profile {
    /// Builds a profile from `(lateral, height)` sample pairs.
    ///
    /// # Errors
    ///
    /// Returns a [`ProfileError`] if fewer than two points are given, any
    /// coordinate is non-finite, or the lateral positions are not strictly
    /// increasing.
    pub fn new(points: impl IntoIterator<Item = (Length, Length)>) -> Result<Self, ProfileError> {
        let mut lateral = Vec::new();
        let mut height = Vec::new();

        for (index, (y, z)) in points.into_iter().enumerate() {
            let (y, z) = (y.get::<meter>(), z.get::<meter>());
            if !y.is_finite() || !z.is_finite() {
                return Err(ProfileError::NonFinite { index });
            }
            if let Some(&prev) = lateral.last() {
                if y <= prev {
                    return Err(ProfileError::NotMonotonic { index });
                }
            }
            lateral.push(y);
            height.push(z);
        }

        if lateral.len() < 2 {
            return Err(ProfileError::TooFewPoints {
                count: lateral.len(),
            });
        }

        Ok(Self { lateral, height })
    }

    /// Lateral window `(lo, hi)` covered by the samples.
    #[must_use]
    pub fn span(&self) -> (Length, Length) {
        (
            Length::new::<meter>(self.lateral[0]),
            Length::new::<meter>(self.lateral[self.lateral.len() - 1]),
        )
    }

    /// Linearly interpolated height at `lateral`, or `None` outside the span.
    #[must_use]
    pub fn height_at(&self, lateral: Length) -> Option<Length> {
        let y = lateral.get::<meter>();
        let (first, last) = (self.lateral[0], self.lateral[self.lateral.len() - 1]);
        if !(first..=last).contains(&y) {
            return None;
        }

        // Index of the first sample strictly to the right of y.
        let upper = self.lateral.partition_point(|&v| v <= y);
        if upper == self.lateral.len() {
            return Some(Length::new::<meter>(self.height[upper - 1]));
        }

        let (y0, y1) = (self.lateral[upper - 1], self.lateral[upper]);
        let (z0, z1) = (self.height[upper - 1], self.height[upper]);
        let t = (y - y0) / (y1 - y0);
        Some(Length::new::<meter>(z0 + t * (z1 - z0)))
    }
}
