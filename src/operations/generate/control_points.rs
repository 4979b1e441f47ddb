use std::collections::HashMap;

use tracing::debug;

use crate::control::ControlPointSet;
use crate::math::Point3;

/// Builds a sparse control-point set from mesh vertices.
///
/// Vertices are visited in order and kept only if no previously kept
/// point lies strictly closer than `min_distance` (or exactly on top of
/// it). The result is therefore deterministic and order-sensitive. Every
/// generated control point starts at rest.
pub struct GenerateControlPoints<'a> {
    vertices: &'a [Point3],
    min_distance: f64,
}

impl<'a> GenerateControlPoints<'a> {
    /// Creates a new `GenerateControlPoints` operation.
    ///
    /// Negative and NaN spacings are treated as zero, which keeps every
    /// vertex except exact duplicates.
    #[must_use]
    pub fn new(vertices: &'a [Point3], min_distance: f64) -> Self {
        Self {
            vertices,
            min_distance: min_distance.max(0.0),
        }
    }

    /// Executes the operation, returning the generated control points.
    #[must_use]
    pub fn execute(&self) -> ControlPointSet {
        let kept: Vec<Point3> = if self.min_distance.is_finite() {
            let mut grid = SpacingGrid::new(self.min_distance);
            self.vertices
                .iter()
                .filter(|v| grid.try_insert(v))
                .copied()
                .collect()
        } else {
            self.vertices.first().copied().into_iter().collect()
        };

        debug!(
            vertices = self.vertices.len(),
            control_points = kept.len(),
            min_distance = self.min_distance,
            "generated control points"
        );
        ControlPointSet::from_rest(kept)
    }
}

/// Spatial hash of accepted points.
///
/// With a cell size of at least `min_distance`, every accepted point that
/// could reject a candidate lies in the candidate's cell or one of its 26
/// neighbours.
struct SpacingGrid {
    min_distance: f64,
    inv_cell: f64,
    map: HashMap<(i64, i64, i64), Vec<Point3>>,
}

impl SpacingGrid {
    fn new(min_distance: f64) -> Self {
        let cell_size = if min_distance > 0.0 { min_distance } else { 1.0 };
        Self {
            min_distance,
            inv_cell: 1.0 / cell_size,
            map: HashMap::new(),
        }
    }

    #[allow(clippy::cast_possible_truncation)]
    fn cell_key(&self, p: &Point3) -> (i64, i64, i64) {
        (
            (p.x * self.inv_cell).floor() as i64,
            (p.y * self.inv_cell).floor() as i64,
            (p.z * self.inv_cell).floor() as i64,
        )
    }

    /// Inserts `point` unless an accepted point is too close. Returns
    /// whether it was inserted.
    fn try_insert(&mut self, point: &Point3) -> bool {
        let key = self.cell_key(point);

        for dx in -1..=1 {
            for dy in -1..=1 {
                for dz in -1..=1 {
                    let neighbor = (
                        key.0.saturating_add(dx),
                        key.1.saturating_add(dy),
                        key.2.saturating_add(dz),
                    );
                    let Some(entries) = self.map.get(&neighbor) else {
                        continue;
                    };
                    for existing in entries {
                        let dist = nalgebra::distance(point, existing);
                        if dist < self.min_distance || dist <= 0.0 {
                            return false;
                        }
                    }
                }
            }
        }

        self.map.entry(key).or_default().push(*point);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    /// Reference O(N·K) greedy scan.
    fn greedy(vertices: &[Point3], min_distance: f64) -> Vec<Point3> {
        let mut kept: Vec<Point3> = Vec::new();
        for v in vertices {
            let blocked = kept.iter().any(|k| {
                let d = nalgebra::distance(v, k);
                d < min_distance || d <= 0.0
            });
            if !blocked {
                kept.push(*v);
            }
        }
        kept
    }

    #[test]
    fn drops_vertex_within_spacing() {
        let vertices = [p(0.0, 0.0, 0.0), p(0.01, 0.0, 0.0), p(5.0, 0.0, 0.0)];
        let set = GenerateControlPoints::new(&vertices, 0.1).execute();

        assert_eq!(set.base(), &[p(0.0, 0.0, 0.0), p(5.0, 0.0, 0.0)]);
        assert!(set.is_at_rest());
    }

    #[test]
    fn keeps_first_occurrence() {
        let vertices = [p(0.05, 0.0, 0.0), p(0.0, 0.0, 0.0), p(0.12, 0.0, 0.0)];
        let set = GenerateControlPoints::new(&vertices, 0.1).execute();

        // (0.12) is only 0.07 from the first kept point.
        assert_eq!(set.base(), &[p(0.05, 0.0, 0.0)]);
    }

    #[test]
    fn point_at_exact_spacing_is_kept() {
        let vertices = [p(0.0, 0.0, 0.0), p(0.5, 0.0, 0.0)];
        let set = GenerateControlPoints::new(&vertices, 0.5).execute();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn zero_spacing_merges_only_duplicates() {
        let vertices = [p(1.0, 1.0, 1.0), p(1.0, 1.0, 1.0), p(1.0, 1.0, 1.000_001)];
        let set = GenerateControlPoints::new(&vertices, 0.0).execute();
        assert_eq!(set.base(), &[p(1.0, 1.0, 1.0), p(1.0, 1.0, 1.000_001)]);
    }

    #[test]
    fn negative_spacing_behaves_like_zero() {
        let vertices = [p(0.0, 0.0, 0.0), p(0.0, 0.0, 0.0), p(0.1, 0.0, 0.0)];
        let a = GenerateControlPoints::new(&vertices, -1.0).execute();
        let b = GenerateControlPoints::new(&vertices, 0.0).execute();
        assert_eq!(a, b);
        assert_eq!(a.len(), 2);
    }

    #[test]
    fn infinite_spacing_keeps_one_point() {
        let vertices = [p(3.0, 0.0, 0.0), p(-100.0, 0.0, 0.0)];
        let set = GenerateControlPoints::new(&vertices, f64::INFINITY).execute();
        assert_eq!(set.base(), &[p(3.0, 0.0, 0.0)]);
    }

    #[test]
    fn empty_mesh_yields_empty_set() {
        let set = GenerateControlPoints::new(&[], 0.1).execute();
        assert!(set.is_empty());
    }

    #[test]
    #[allow(clippy::cast_precision_loss)]
    fn grid_matches_greedy_scan() {
        // Deterministic scatter, including negative coordinates and points
        // straddling cell boundaries.
        let vertices: Vec<Point3> = (0..400)
            .map(|i| {
                let t = i as f64;
                p(
                    (t * 0.618_034).fract() * 4.0 - 2.0,
                    (t * 0.414_214).fract() * 4.0 - 2.0,
                    (t * 0.732_051).fract() * 0.5,
                )
            })
            .collect();

        for spacing in [0.0, 0.05, 0.3, 1.0, 2.5] {
            let set = GenerateControlPoints::new(&vertices, spacing).execute();
            assert_eq!(set.base(), greedy(&vertices, spacing).as_slice(), "spacing={spacing}");
        }
    }
}
