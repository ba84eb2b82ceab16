//! Cross-section profile geometry for rolling contact.
//!
//! A contact solver needs three things from the bodies it presses
//! together: the lateral window where both cross-sections are defined,
//! the undeformed vertical gap between them as a function of lateral
//! position, and the in-situ rolling radius that sets the longitudinal
//! curvature. The [`ContactGeometry`] trait captures exactly that seam,
//! so solvers stay decoupled from where profiles come from.
//!
//! [`Profile`] and [`ProfilePair`] provide the common implementation:
//! measured cross-sections as ordered `(lateral, height)` samples with
//! linear interpolation, positioned wheel-above-rail with a lateral
//! offset. Reading profile files and rendering profiles are left to the
//! surrounding application.
//!
//! Conventions: the z-axis points up, both profiles share one lateral
//! coordinate, and the wheel sits above the rail, so the separation is
//! `wheel height − rail height`. Solvers shift the separation to a
//! touching datum themselves; implementations don't need to.

mod geometry;
mod pair;
mod sampled;

pub use geometry::ContactGeometry;
pub use pair::ProfilePair;
pub use sampled::{Profile, ProfileError};
