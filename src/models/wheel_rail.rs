//! Wheel-rail contact models.
//!
//! This module provides [`twine_core::Model`] implementations for
//! wheel-rail contact. The computational core is in the internal
//! [`core`] module; [`WheelRailContact`] is the thin adapter that maps a
//! per-time-step input (normal load, creepage, friction) to a full
//! contact result.

pub(crate) mod core;

mod adapter;

pub use adapter::{ContactError, ContactResults, StepInput, WheelRailContact};
pub use self::core::{
    ContactSpan, Creepage, Flexibility, GivenLoadConfig, GivenLoadError, KalkerCoefficients,
    LoadConvergence, Material, NormalResults, Regime, SemiHertzian, SliceState, SolveError,
    TangentialConfig, TangentialInputs, TangentialResults, TractionElement, TractionRow,
};
