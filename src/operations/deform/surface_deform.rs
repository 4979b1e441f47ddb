use rayon::prelude::*;
use tracing::debug;

use crate::control::ControlPointSet;
use crate::error::Result;
use crate::math::{FalloffRadius, Point3, Vector3};

use super::blend::blended_displacement;
use super::DeformParams;

/// Displaces mesh vertices by a smooth blend of control-point displacements.
///
/// Each vertex follows its nearest control point (by rest position) fully;
/// other control points contribute with a weight that decays linearly to
/// zero over `min(nearest distance, falloff)` beyond the nearest distance.
/// Weights are normalized per vertex, so vertices far from every control
/// point still move with their nearest one.
///
/// Vertices are independent of each other, so the result does not depend
/// on batch size or thread count.
pub struct SurfaceDeform {
    falloff: FalloffRadius,
    params: DeformParams,
}

impl SurfaceDeform {
    /// Creates a new `SurfaceDeform` operation with default scheduling.
    #[must_use]
    pub fn new(falloff: FalloffRadius) -> Self {
        Self {
            falloff,
            params: DeformParams::default(),
        }
    }

    /// Overrides the scheduling parameters.
    #[must_use]
    pub fn with_params(mut self, params: DeformParams) -> Self {
        self.params = params;
        self
    }

    /// Executes the deformation, displacing `vertices` in place.
    ///
    /// An empty control-point set leaves the vertices untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if the scheduling parameters are invalid.
    pub fn execute(&self, controls: &ControlPointSet, vertices: &mut [Point3]) -> Result<()> {
        self.params.validate()?;

        if controls.is_empty() || vertices.is_empty() {
            return Ok(());
        }

        let base = controls.base();
        let displacements = controls.displacements();
        let parallel = self.params.parallel && vertices.len() > self.params.batch_size;

        if parallel {
            vertices.par_chunks_mut(self.params.batch_size).for_each_init(
                || vec![0.0; base.len()],
                |ratios, chunk| deform_chunk(chunk, base, &displacements, self.falloff, ratios),
            );
        } else {
            let mut ratios = vec![0.0; base.len()];
            deform_chunk(vertices, base, &displacements, self.falloff, &mut ratios);
        }

        debug!(
            vertices = vertices.len(),
            control_points = base.len(),
            falloff = self.falloff.get(),
            parallel,
            "applied surface deformation"
        );
        Ok(())
    }
}

fn deform_chunk(
    chunk: &mut [Point3],
    base: &[Point3],
    displacements: &[Vector3],
    falloff: FalloffRadius,
    ratios: &mut [f64],
) {
    for vertex in chunk {
        *vertex += blended_displacement(vertex, base, displacements, falloff, ratios);
    }
}
