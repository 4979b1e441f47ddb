/// Radius of the linear blend band around the nearest control point.
///
/// Never negative or NaN: such inputs are clamped to `0.0` on construction.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct FalloffRadius(f64);

impl FalloffRadius {
    /// Zero radius: every vertex follows only its nearest control point(s).
    pub const ZERO: Self = Self(0.0);

    /// Creates a falloff radius, clamping negative and NaN values to zero.
    #[must_use]
    pub fn new(radius: f64) -> Self {
        // `f64::max` returns the non-NaN operand.
        Self(radius.max(0.0))
    }

    /// Returns the radius as a scalar.
    #[must_use]
    pub fn get(self) -> f64 {
        self.0
    }
}

impl From<f64> for FalloffRadius {
    fn from(radius: f64) -> Self {
        Self::new(radius)
    }
}

/// Width of the decay band for a vertex whose nearest control point is at
/// `min_dist`: `min(min_dist, falloff)`.
#[must_use]
pub fn blend_span(min_dist: f64, falloff: FalloffRadius) -> f64 {
    min_dist.min(falloff.get())
}

/// Unnormalized blend ratio of a control point at distance `dist` from a
/// vertex whose nearest control point is at `min_dist`.
///
/// Decays linearly from 1 at `min_dist` to 0 at `min_dist + span`. A zero
/// span (vertex on a control point, or zero falloff) degenerates to a step:
/// 1 for points at exactly `min_dist`, 0 for the rest.
#[must_use]
pub fn blend_ratio(dist: f64, min_dist: f64, span: f64) -> f64 {
    let excess = dist - min_dist;
    if span <= 0.0 {
        return if excess <= 0.0 { 1.0 } else { 0.0 };
    }
    (1.0 - excess / span).clamp(0.0, 1.0)
}
