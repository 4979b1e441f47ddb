use crate::math::{blend_ratio, blend_span, FalloffRadius, Point3, Vector3};

/// Writes the unnormalized blend ratio of every control point for `vertex`
/// into `ratios` and returns their sum.
///
/// `ratios` must have the same length as `base`; it doubles as distance
/// scratch so a worker can reuse one buffer for all of its vertices.
pub(crate) fn blend_ratios(
    vertex: &Point3,
    base: &[Point3],
    falloff: FalloffRadius,
    ratios: &mut [f64],
) -> f64 {
    let mut min_dist = f64::INFINITY;
    for (ratio, control) in ratios.iter_mut().zip(base) {
        let dist = nalgebra::distance(vertex, control);
        *ratio = dist;
        if dist < min_dist {
            min_dist = dist;
        }
    }

    let span = blend_span(min_dist, falloff);
    let mut sum = 0.0;
    for ratio in ratios.iter_mut() {
        *ratio = blend_ratio(*ratio, min_dist, span);
        sum += *ratio;
    }
    sum
}

/// Blended displacement of `vertex`: each control point's displacement
/// weighted by its normalized blend ratio.
///
/// Returns zero when no weight can be formed (non-finite vertex input).
pub(crate) fn blended_displacement(
    vertex: &Point3,
    base: &[Point3],
    displacements: &[Vector3],
    falloff: FalloffRadius,
    ratios: &mut [f64],
) -> Vector3 {
    let sum = blend_ratios(vertex, base, falloff, ratios);
    if sum.is_nan() || sum <= 0.0 {
        return Vector3::zeros();
    }

    let mut delta = Vector3::zeros();
    for (displacement, &ratio) in displacements.iter().zip(ratios.iter()) {
        delta += displacement * (ratio / sum);
    }
    delta
}
