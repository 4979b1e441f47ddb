use crate::math::{Point3, Vector3};

/// An authored anchor that drives nearby mesh vertices.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlPoint {
    /// Rest-pose location, used for all distance and weight queries.
    pub base: Point3,
    /// User-edited location.
    pub current: Point3,
}

impl ControlPoint {
    /// Creates a control point at rest (`current == base`).
    #[must_use]
    pub fn at_rest(base: Point3) -> Self {
        Self {
            base,
            current: base,
        }
    }

    /// Returns `current - base`.
    #[must_use]
    pub fn displacement(&self) -> Vector3 {
        self.current - self.base
    }
}
