//! The per-row traction sweep.
//!
//! Rows are independent of each other; all state lives inside one sweep.
//! Everything here is plain SI `f64`: the sweep is the innermost loop of
//! the solver and its callers convert to typed quantities once per patch.

/// Inputs for sweeping one lateral row, all in SI units.
#[derive(Debug, Clone, Copy)]
pub(super) struct RowParams {
    /// Lateral position of the row (m).
    pub lateral: f64,
    /// Contact half-width along the rolling direction (m).
    pub half_width: f64,
    /// Peak of the semi-elliptical pressure (Pa).
    pub peak_pressure: f64,
    /// Element count along the rolling direction.
    pub elements: usize,
    /// Friction coefficient.
    pub friction: f64,
    /// Longitudinal creepage.
    pub longitudinal_creepage: f64,
    /// Lateral creepage.
    pub lateral_creepage: f64,
    /// Spin creepage (1/m).
    pub spin: f64,
    /// Longitudinal flexibility (m/Pa).
    pub flex_longitudinal: f64,
    /// Lateral flexibility (m/Pa).
    pub flex_lateral: f64,
    /// Spin flexibility (m/Pa).
    pub flex_spin: f64,
}

/// One swept element, in SI units.
#[derive(Debug, Clone, Copy)]
pub(super) struct SweptElement {
    /// Rolling-direction position of the element center (m).
    pub x: f64,
    /// Normal pressure at the element center (Pa).
    pub pressure: f64,
    /// Longitudinal traction (Pa).
    pub traction_x: f64,
    /// Lateral traction (Pa).
    pub traction_y: f64,
    /// True if the element slips.
    pub slipping: bool,
}

/// Marches one row from the leading edge to the trailing edge.
///
/// Material enters the patch at `x = +a` carrying no elastic tangential
/// displacement. Each element adds the rigid-slip increment accumulated
/// over its length to the trial traction, with each creepage mode scaled
/// by its own flexibility; where the trial exceeds the friction bound
/// `μ·p`, the traction is clamped to the bound along the trial direction
/// and the element is marked slipping.
pub(super) fn sweep(params: &RowParams) -> Vec<SweptElement> {
    let a = params.half_width;
    let y = params.lateral;
    #[allow(clippy::cast_precision_loss)]
    let dx = 2.0 * a / params.elements as f64;

    // The longitudinal rigid slip (ξx − φ·y) is constant along a row.
    let step_x = dx
        * (params.longitudinal_creepage / params.flex_longitudinal
            - params.spin * y / params.flex_spin);

    let mut traction_x = 0.0;
    let mut traction_y = 0.0;
    let mut swept = Vec::with_capacity(params.elements);

    for i in 0..params.elements {
        #[allow(clippy::cast_precision_loss)]
        let x = a - (i as f64 + 0.5) * dx;

        let xi = x / a;
        let pressure = params.peak_pressure * (1.0 - xi * xi).max(0.0).sqrt();

        // The lateral rigid slip (ξy + φ·x) varies with x.
        let step_y = dx
            * (params.lateral_creepage / params.flex_lateral
                + params.spin * x / params.flex_spin);

        let trial_x = traction_x - step_x;
        let trial_y = traction_y - step_y;

        let bound = params.friction * pressure;
        let magnitude = trial_x.hypot(trial_y);

        let slipping = magnitude > bound;
        if slipping {
            let scale = if magnitude > 0.0 { bound / magnitude } else { 0.0 };
            traction_x = trial_x * scale;
            traction_y = trial_y * scale;
        } else {
            traction_x = trial_x;
            traction_y = trial_y;
        }

        swept.push(SweptElement {
            x,
            pressure,
            traction_x,
            traction_y,
            slipping,
        });
    }

    swept
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> RowParams {
        RowParams {
            lateral: 0.0,
            half_width: 6.0e-3,
            peak_pressure: 1.0e9,
            elements: 50,
            friction: 0.3,
            longitudinal_creepage: 0.0,
            lateral_creepage: 0.0,
            spin: 0.0,
            flex_longitudinal: 5.0e-11,
            flex_lateral: 5.5e-11,
            flex_spin: 8.0e-11,
        }
    }

    #[test]
    fn pure_rolling_leaves_the_row_traction_free() {
        let swept = sweep(&params());

        assert_eq!(swept.len(), 50);
        for element in swept {
            assert_eq!(element.traction_x, 0.0);
            assert_eq!(element.traction_y, 0.0);
            assert!(!element.slipping);
        }
    }

    #[test]
    fn traction_opposes_creepage_and_respects_the_bound() {
        let mut p = params();
        p.longitudinal_creepage = 1.0e-3;
        let swept = sweep(&p);

        for element in &swept {
            assert!(element.traction_x <= 0.0);
            let magnitude = element.traction_x.hypot(element.traction_y);
            let bound = p.friction * element.pressure;
            assert!(magnitude <= bound * (1.0 + 1e-12));
        }
    }

    #[test]
    fn large_creepage_saturates_every_element() {
        let mut p = params();
        p.longitudinal_creepage = 10.0;
        let swept = sweep(&p);

        for element in swept {
            assert!(element.slipping);
        }
    }

    #[test]
    fn elements_march_from_the_leading_edge() {
        let swept = sweep(&params());

        assert!(swept[0].x > swept[49].x);
        assert!(swept[0].x < params().half_width);
        assert!(swept[49].x > -params().half_width);
    }
}
