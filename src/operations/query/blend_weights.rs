use crate::control::ControlPointSet;
use crate::math::{FalloffRadius, Point3};
use crate::operations::deform::blend::blend_ratios;

/// Computes the normalized blend weight of every control point at a point.
///
/// These are exactly the weights [`SurfaceDeform`](crate::operations::deform::SurfaceDeform)
/// applies to control-point displacements.
pub struct BlendWeights {
    point: Point3,
    falloff: FalloffRadius,
}

impl BlendWeights {
    /// Creates a new `BlendWeights` query.
    #[must_use]
    pub fn new(point: Point3, falloff: FalloffRadius) -> Self {
        Self { point, falloff }
    }

    /// Executes the query, returning one weight per control point in index
    /// order. Weights lie in `[0, 1]` and sum to 1; an empty set yields an
    /// empty vector.
    #[must_use]
    pub fn execute(&self, controls: &ControlPointSet) -> Vec<f64> {
        let mut weights = vec![0.0; controls.len()];
        if weights.is_empty() {
            return weights;
        }

        let sum = blend_ratios(&self.point, controls.base(), self.falloff, &mut weights);
        if sum > 0.0 {
            for w in &mut weights {
                *w /= sum;
            }
        }
        weights
    }
}
