use uom::si::{f64::Length, length::meter};

use super::{ContactGeometry, Profile, ProfileError};

/// A wheel profile positioned above a rail profile.
///
/// The wheel profile is shifted laterally by `wheel_offset` (positive
/// values move the wheel toward larger `y`), which is how a multibody
/// simulation positions the wheelset relative to the track for each
/// evaluation. The nominal rolling radius is taken as constant across the
/// contact, matching the usual tread-contact assumption.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfilePair {
    wheel: Profile,
    rail: Profile,
    wheel_offset: Length,
    rolling_radius: Length,
}

impl ProfilePair {
    /// Positions `wheel` above `rail` with the given lateral offset.
    ///
    /// # Errors
    ///
    /// Returns a [`ProfileError`] if the shifted wheel span and the rail
    /// span share no lateral window, or if the rolling radius is not
    /// strictly positive and finite.
    pub fn new(
        wheel: Profile,
        rail: Profile,
        wheel_offset: Length,
        rolling_radius: Length,
    ) -> Result<Self, ProfileError> {
        let radius = rolling_radius.get::<meter>();
        if !radius.is_finite() || radius <= 0.0 {
            return Err(ProfileError::InvalidRadius);
        }

        let pair = Self {
            wheel,
            rail,
            wheel_offset,
            rolling_radius,
        };
        let (lo, hi) = pair.lateral_span();
        if lo.get::<meter>() >= hi.get::<meter>() {
            return Err(ProfileError::NoOverlap);
        }

        Ok(pair)
    }

    /// The same pair with a different lateral wheel offset.
    ///
    /// # Errors
    ///
    /// Returns [`ProfileError::NoOverlap`] if the new offset leaves no
    /// shared lateral window.
    pub fn with_offset(&self, wheel_offset: Length) -> Result<Self, ProfileError> {
        Self::new(
            self.wheel.clone(),
            self.rail.clone(),
            wheel_offset,
            self.rolling_radius,
        )
    }
}

impl ContactGeometry for ProfilePair {
    fn lateral_span(&self) -> (Length, Length) {
        let (wheel_lo, wheel_hi) = self.wheel.span();
        let (rail_lo, rail_hi) = self.rail.span();

        let lo = (wheel_lo + self.wheel_offset).max(rail_lo);
        let hi = (wheel_hi + self.wheel_offset).min(rail_hi);
        (lo, hi)
    }

    fn separation(&self, lateral: Length) -> Length {
        let wheel = self.wheel.height_at(lateral - self.wheel_offset);
        let rail = self.rail.height_at(lateral);
        match (wheel, rail) {
            (Some(wheel), Some(rail)) => wheel - rail,
            // Outside either span; the solver rejects this as invalid geometry.
            _ => Length::new::<meter>(f64::NAN),
        }
    }

    fn rolling_radius(&self, _lateral: Length) -> Length {
        self.rolling_radius
    }
}
