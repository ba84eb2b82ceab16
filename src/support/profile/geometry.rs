use uom::si::f64::Length;

/// Geometric inputs a wheel-rail contact solver needs from the two bodies.
///
/// Implementations describe an undeformed wheel-above-rail configuration
/// in a shared coordinate system: `y` is the lateral position across the
/// rail head, `z` points up, and rolling happens along `x`.
///
/// Solvers sample this interface on their own lateral grid and shift the
/// separation to a touching datum (minimum separation equal to zero), so
/// implementations may return a separation with any constant bias.
/// Returning non-finite values, or a non-positive rolling radius, makes
/// the solve fail with an invalid-geometry error rather than a panic.
pub trait ContactGeometry {
    /// Lateral window `(lo, hi)` on which both bodies are defined.
    fn lateral_span(&self) -> (Length, Length);

    /// Undeformed vertical gap between wheel and rail at `lateral`.
    fn separation(&self, lateral: Length) -> Length;

    /// In-situ wheel rolling radius at `lateral`.
    ///
    /// This sets the longitudinal curvature of the gap near the contact
    /// point: at lateral position `y` the gap grows as `x²/(2·R(y))`
    /// along the rolling direction.
    fn rolling_radius(&self, lateral: Length) -> Length;
}
