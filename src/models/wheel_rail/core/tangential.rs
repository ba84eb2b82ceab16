//! Simplified rolling-contact (creep-force) solver.
//!
//! The tangential problem is solved row by row: each in-contact lateral
//! slice gets a grid of elements along the rolling direction, swept from
//! the leading edge to the trailing edge while accumulating elastic
//! tangential traction and clamping it to the local friction bound. Rows
//! are pure functions of the slice state and the shared inputs, so the
//! patch shape can be arbitrary and the rows could be mapped in parallel
//! without shared state.

mod flexibility;
mod results;
mod row;

pub use flexibility::{Flexibility, KalkerCoefficients};
pub use results::{Regime, TangentialResults, TractionElement, TractionRow};

use uom::si::{
    f64::{Force, Length, Pressure, Torque},
    force::newton,
    length::meter,
    pressure::pascal,
    ratio::ratio,
    torque::newton_meter,
};

use super::{input::TangentialInputs, results::NormalResults};

/// Grid configuration for the tangential solve.
#[derive(Debug, Clone, Copy)]
pub struct TangentialConfig {
    /// Element count along the rolling direction of each row.
    pub elements_per_row: usize,
}

impl Default for TangentialConfig {
    fn default() -> Self {
        Self {
            elements_per_row: 50,
        }
    }
}

/// Integrates creep forces over the patch of a normal solve.
///
/// An empty patch yields zero forces and no rows; zero-width rows
/// contribute nothing.
pub(super) fn creep_forces<const NY: usize>(
    normal: &NormalResults<NY>,
    inputs: &TangentialInputs,
    config: &TangentialConfig,
) -> TangentialResults {
    let elements = config.elements_per_row.max(1);

    let one_pascal = Pressure::new::<pascal>(1.0);
    let one_meter = Length::new::<meter>(1.0);

    let friction = inputs.friction().get::<ratio>();
    let creepage = inputs.creepage();
    let longitudinal_creepage = creepage.longitudinal().get::<ratio>();
    let lateral_creepage = creepage.lateral().get::<ratio>();
    let spin = (creepage.spin() * one_meter).get::<ratio>();

    let flexibility = inputs.flexibility();
    let flex_longitudinal = (flexibility.longitudinal() * one_pascal).get::<meter>();
    let flex_lateral = (flexibility.lateral() * one_pascal).get::<meter>();
    let flex_spin = (flexibility.spin() * one_pascal).get::<meter>();

    let dy = normal.slice_spacing.get::<meter>();

    let mut rows = Vec::new();
    let mut fx = 0.0;
    let mut fy = 0.0;
    let mut mz = 0.0;

    for (slice, state) in normal.slices.iter().enumerate() {
        let half_width = state.half_width.get::<meter>();
        let peak_pressure = state.peak_pressure.get::<pascal>();
        if half_width <= 0.0 || peak_pressure <= 0.0 {
            continue;
        }

        let lateral = state.lateral_position.get::<meter>();
        let swept = row::sweep(&row::RowParams {
            lateral,
            half_width,
            peak_pressure,
            elements,
            friction,
            longitudinal_creepage,
            lateral_creepage,
            spin,
            flex_longitudinal,
            flex_lateral,
            flex_spin,
        });

        #[allow(clippy::cast_precision_loss)]
        let dx = 2.0 * half_width / elements as f64;
        let area = dx * dy;

        let elements_typed = swept
            .iter()
            .map(|element| {
                fx += element.traction_x * area;
                fy += element.traction_y * area;
                mz += (element.x * element.traction_y - lateral * element.traction_x) * area;

                TractionElement {
                    rolling_position: Length::new::<meter>(element.x),
                    pressure: Pressure::new::<pascal>(element.pressure),
                    traction_x: Pressure::new::<pascal>(element.traction_x),
                    traction_y: Pressure::new::<pascal>(element.traction_y),
                    regime: if element.slipping {
                        Regime::Slip
                    } else {
                        Regime::Adhesion
                    },
                }
            })
            .collect();

        rows.push(TractionRow {
            slice,
            lateral_position: state.lateral_position,
            elements: elements_typed,
        });
    }

    TangentialResults {
        rows,
        longitudinal_force: Force::new::<newton>(fx),
        lateral_force: Force::new::<newton>(fy),
        spin_moment: Torque::new::<newton_meter>(mz),
    }
}
