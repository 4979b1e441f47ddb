pub mod point;

pub use point::ControlPoint;

use crate::error::ControlError;
use crate::math::{Point3, Vector3};

/// Index-aligned rest and current positions of a deformer's control points.
///
/// Index `i` in [`base`](Self::base) and [`current`](Self::current) always
/// refers to the same logical point. Sets are built in bulk and replaced
/// wholesale; individual points are edited but never removed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ControlPointSet {
    base: Vec<Point3>,
    current: Vec<Point3>,
}

impl ControlPointSet {
    /// Creates an empty control-point set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a set from two index-aligned position arrays.
    ///
    /// # Errors
    ///
    /// Returns [`ControlError::LengthMismatch`] if the arrays differ in length.
    pub fn from_positions(base: Vec<Point3>, current: Vec<Point3>) -> Result<Self, ControlError> {
        if base.len() != current.len() {
            return Err(ControlError::LengthMismatch {
                base: base.len(),
                current: current.len(),
            });
        }
        Ok(Self { base, current })
    }

    /// Creates a set with every point at rest on the given positions.
    #[must_use]
    pub fn from_rest(points: Vec<Point3>) -> Self {
        Self {
            current: points.clone(),
            base: points,
        }
    }

    /// Number of control points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.base.len()
    }

    /// Returns `true` if the set has no control points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.base.is_empty()
    }

    /// Rest positions, index-aligned with [`current`](Self::current).
    #[must_use]
    pub fn base(&self) -> &[Point3] {
        &self.base
    }

    /// Current positions, index-aligned with [`base`](Self::base).
    #[must_use]
    pub fn current(&self) -> &[Point3] {
        &self.current
    }

    /// Returns the control point at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<ControlPoint> {
        Some(ControlPoint {
            base: *self.base.get(index)?,
            current: *self.current.get(index)?,
        })
    }

    /// Iterates over the control points in index order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = ControlPoint> + '_ {
        self.base
            .iter()
            .zip(&self.current)
            .map(|(&base, &current)| ControlPoint { base, current })
    }

    /// Per-point displacements (`current - base`) in index order.
    #[must_use]
    pub fn displacements(&self) -> Vec<Vector3> {
        self.iter().map(|cp| cp.displacement()).collect()
    }

    /// Returns `true` if no control point is displaced.
    #[must_use]
    pub fn is_at_rest(&self) -> bool {
        self.base == self.current
    }

    /// Moves one control point to a new current position.
    ///
    /// # Errors
    ///
    /// Returns [`ControlError::IndexOutOfRange`] if `index` is out of range.
    pub fn set_current(&mut self, index: usize, position: Point3) -> Result<(), ControlError> {
        let len = self.current.len();
        let slot = self
            .current
            .get_mut(index)
            .ok_or(ControlError::IndexOutOfRange { index, len })?;
        *slot = position;
        Ok(())
    }

    /// Offsets the current position of every listed control point.
    ///
    /// All indices are validated first; on error nothing is moved.
    ///
    /// # Errors
    ///
    /// Returns [`ControlError::IndexOutOfRange`] for the first invalid index.
    pub fn translate(&mut self, indices: &[usize], offset: Vector3) -> Result<(), ControlError> {
        let len = self.current.len();
        if let Some(&index) = indices.iter().find(|&&i| i >= len) {
            return Err(ControlError::IndexOutOfRange { index, len });
        }
        for &i in indices {
            self.current[i] += offset;
        }
        Ok(())
    }

    /// Returns every control point to its rest position.
    pub fn reset(&mut self) {
        self.current.clone_from(&self.base);
    }
}

impl FromIterator<ControlPoint> for ControlPointSet {
    fn from_iter<I: IntoIterator<Item = ControlPoint>>(iter: I) -> Self {
        let (base, current) = iter.into_iter().map(|cp| (cp.base, cp.current)).unzip();
        Self { base, current }
    }
}
