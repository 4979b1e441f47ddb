pub mod store;

pub use store::{DeformerId, DeformerStore};

use crate::control::ControlPointSet;
use crate::error::Result;
use crate::math::{FalloffRadius, Point3};
use crate::operations::deform::{DeformParams, SurfaceDeform};
use crate::operations::generate::GenerateControlPoints;

/// Non-destructive deformation of one mesh.
///
/// Holds the mesh's rest vertices, its control points, and the falloff
/// radius. The rest pose is never modified; each evaluation copies it and
/// deforms the copy. The falloff radius also serves as the spacing when
/// control points are regenerated from the mesh.
#[derive(Debug, Clone)]
pub struct Deformer {
    rest: Vec<Point3>,
    controls: ControlPointSet,
    falloff: FalloffRadius,
    params: DeformParams,
}

impl Deformer {
    /// Creates a deformer over `rest` with no control points.
    #[must_use]
    pub fn new(rest: Vec<Point3>, falloff: FalloffRadius) -> Self {
        Self {
            rest,
            controls: ControlPointSet::new(),
            falloff,
            params: DeformParams::default(),
        }
    }

    /// Overrides the kernel scheduling parameters.
    #[must_use]
    pub fn with_params(mut self, params: DeformParams) -> Self {
        self.params = params;
        self
    }

    /// Rest-pose vertices.
    #[must_use]
    pub fn rest(&self) -> &[Point3] {
        &self.rest
    }

    #[must_use]
    pub fn controls(&self) -> &ControlPointSet {
        &self.controls
    }

    /// Mutable access for editing control points between evaluations.
    pub fn controls_mut(&mut self) -> &mut ControlPointSet {
        &mut self.controls
    }

    #[must_use]
    pub fn falloff(&self) -> FalloffRadius {
        self.falloff
    }

    pub fn set_falloff(&mut self, falloff: FalloffRadius) {
        self.falloff = falloff;
    }

    /// Replaces all control points with a fresh set generated from the rest
    /// vertices, spaced by the falloff radius. Prior edits are discarded.
    pub fn regenerate_controls(&mut self) {
        self.controls = GenerateControlPoints::new(&self.rest, self.falloff.get()).execute();
    }

    /// Returns the deformed vertices.
    ///
    /// # Errors
    ///
    /// Returns an error if the kernel parameters are invalid.
    pub fn evaluate(&self) -> Result<Vec<Point3>> {
        let mut out = Vec::with_capacity(self.rest.len());
        self.evaluate_into(&mut out)?;
        Ok(out)
    }

    /// Writes the deformed vertices into `out`, reusing its allocation.
    ///
    /// # Errors
    ///
    /// Returns an error if the kernel parameters are invalid.
    pub fn evaluate_into(&self, out: &mut Vec<Point3>) -> Result<()> {
        out.clear();
        out.extend_from_slice(&self.rest);
        SurfaceDeform::new(self.falloff)
            .with_params(self.params)
            .execute(&self.controls, out)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Vector3;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    fn strip() -> Vec<Point3> {
        vec![p(0.0, 0.0, 0.0), p(0.01, 0.0, 0.0), p(1.0, 0.0, 0.0), p(2.0, 0.0, 0.0)]
    }

    #[test]
    fn without_controls_evaluates_to_rest() {
        let deformer = Deformer::new(strip(), FalloffRadius::new(0.1));
        assert_eq!(deformer.evaluate().unwrap(), strip());
    }

    #[test]
    fn regenerate_uses_falloff_as_spacing() {
        let mut deformer = Deformer::new(strip(), FalloffRadius::new(0.1));
        deformer.regenerate_controls();

        assert_eq!(
            deformer.controls().base(),
            &[p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(2.0, 0.0, 0.0)]
        );
    }

    #[test]
    fn evaluate_leaves_rest_untouched() {
        let mut deformer = Deformer::new(strip(), FalloffRadius::new(0.1));
        deformer.regenerate_controls();
        deformer
            .controls_mut()
            .translate(&[2], Vector3::new(0.0, 0.0, 1.0))
            .unwrap();

        let first = deformer.evaluate().unwrap();
        let second = deformer.evaluate().unwrap();

        assert_eq!(deformer.rest(), strip().as_slice());
        assert_eq!(first, second);
        assert_eq!(first[3], p(2.0, 0.0, 1.0));
        assert_eq!(first[0], p(0.0, 0.0, 0.0));
    }

    #[test]
    fn regenerate_discards_edits() {
        let mut deformer = Deformer::new(strip(), FalloffRadius::new(0.1));
        deformer.regenerate_controls();
        deformer.controls_mut().set_current(0, p(0.0, 5.0, 0.0)).unwrap();
        assert!(!deformer.controls().is_at_rest());

        deformer.regenerate_controls();
        assert!(deformer.controls().is_at_rest());
        assert_eq!(deformer.evaluate().unwrap(), strip());
    }

    #[test]
    fn evaluate_into_reuses_buffer() {
        let mut deformer = Deformer::new(strip(), FalloffRadius::new(0.1));
        deformer.regenerate_controls();
        let mut buffer = vec![p(9.0, 9.0, 9.0); 10];

        deformer.evaluate_into(&mut buffer).unwrap();
        assert_eq!(buffer, strip());
    }
}
