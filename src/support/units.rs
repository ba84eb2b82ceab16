//! Extensions to [`uom`].
//!
//! This crate uses [`uom`] for all physical units (e.g., length, force,
//! pressure). This module provides quantity aliases that are useful for
//! contact modeling but aren't named by [`uom`]:
//!
//! - [`SpinCreepage`], the rotational creepage of a rolling contact,
//!   normalized by rolling speed (1/m in SI);
//! - [`ShearFlexibility`], the compliance relating tangential surface
//!   displacement to tangential traction in the simplified rolling-contact
//!   theory (m/Pa in SI).
//!
//! Values of these quantities usually arise from arithmetic on named
//! quantities (e.g., a `Ratio` divided by a `Length` is a spin creepage);
//! the aliases exist so signatures and struct fields can spell out what
//! they hold.

mod quantities;

pub use quantities::{ShearFlexibility, SpinCreepage};
