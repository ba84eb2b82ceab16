//! Results types for the tangential solve.

use uom::si::{
    f64::{Force, Length, Pressure, Ratio, Torque},
    ratio::ratio,
};

/// Tangential tractions and integrated creep forces for one patch.
#[derive(Debug, Clone)]
pub struct TangentialResults {
    /// Per-row traction grids, one row per in-contact slice.
    pub rows: Vec<TractionRow>,

    /// Creep force along the rolling direction.
    pub longitudinal_force: Force,

    /// Creep force along the lateral direction.
    pub lateral_force: Force,

    /// Spin moment about the vertical axis through the patch origin.
    pub spin_moment: Torque,
}

impl TangentialResults {
    /// Fraction of in-contact elements that adhere, or `None` for an
    /// empty patch.
    #[must_use]
    pub fn adhesion_fraction(&self) -> Option<Ratio> {
        let total: usize = self.rows.iter().map(|row| row.elements.len()).sum();
        if total == 0 {
            return None;
        }

        let adhering = self
            .rows
            .iter()
            .flat_map(|row| &row.elements)
            .filter(|element| element.regime == Regime::Adhesion)
            .count();

        #[allow(clippy::cast_precision_loss)]
        let fraction = adhering as f64 / total as f64;
        Some(Ratio::new::<ratio>(fraction))
    }
}

/// Traction elements along one lateral row of the patch.
#[derive(Debug, Clone)]
pub struct TractionRow {
    /// Index of the slice this row belongs to.
    pub slice: usize,

    /// Lateral position of the row.
    pub lateral_position: Length,

    /// Elements ordered from the leading edge to the trailing edge.
    pub elements: Vec<TractionElement>,
}

/// One discretized element of the traction field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TractionElement {
    /// Rolling-direction position of the element center.
    pub rolling_position: Length,

    /// Normal pressure at the element center.
    pub pressure: Pressure,

    /// Longitudinal component of the tangential traction.
    pub traction_x: Pressure,

    /// Lateral component of the tangential traction.
    pub traction_y: Pressure,

    /// Whether the element adheres or slips.
    pub regime: Regime,
}

/// Adhesion/slip state of a traction element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Regime {
    /// The elastic traction stays below the friction bound.
    Adhesion,

    /// The traction is clamped to the friction bound.
    Slip,
}
