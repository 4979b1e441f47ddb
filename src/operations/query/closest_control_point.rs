use crate::control::ControlPointSet;
use crate::math::Point3;

/// Finds the control point whose rest position is nearest to a point.
pub struct ClosestControlPoint {
    point: Point3,
}

impl ClosestControlPoint {
    /// Creates a new `ClosestControlPoint` query.
    #[must_use]
    pub fn new(point: Point3) -> Self {
        Self { point }
    }

    /// Executes the query, returning the index of the nearest control point
    /// and its distance. Ties resolve to the lowest index.
    ///
    /// Returns `None` for an empty set.
    #[must_use]
    pub fn execute(&self, controls: &ControlPointSet) -> Option<(usize, f64)> {
        let mut best = None;
        let mut best_dist = f64::INFINITY;
        for (index, base) in controls.base().iter().enumerate() {
            let dist = nalgebra::distance(&self.point, base);
            if dist < best_dist {
                best = Some((index, dist));
                best_dist = dist;
            }
        }
        best
    }
}
