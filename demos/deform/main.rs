//! Deformis demo: lifts one corner of a grid mesh with a control point.
//!
//! Usage:
//! ```text
//! cargo run --example deform
//! RUST_LOG=deformis=debug cargo run --example deform
//! ```

use deformis::deformer::{Deformer, DeformerStore};
use deformis::math::{FalloffRadius, Point3, Vector3};
use deformis::operations::query::ClosestControlPoint;

const GRID: usize = 32;
const STEP: f64 = 1.0 / 31.0;

#[allow(clippy::cast_precision_loss)]
fn grid_mesh() -> Vec<Point3> {
    (0..GRID * GRID)
        .map(|i| Point3::new((i % GRID) as f64 * STEP, (i / GRID) as f64 * STEP, 0.0))
        .collect()
}

fn main() -> deformis::Result<()> {
    // Default: WARN for everything, INFO for deformis.
    // Override with RUST_LOG env var (e.g. RUST_LOG=deformis=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("deform=info".parse().unwrap_or_default())
        .add_directive("deformis=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let mut store = DeformerStore::new();
    let mut deformer = Deformer::new(grid_mesh(), FalloffRadius::new(0.2));
    deformer.regenerate_controls();
    let id = store.add(deformer);

    let corner = Point3::new(1.0, 1.0, 0.0);
    let deformer = store.deformer_mut(id)?;
    if let Some((index, _)) = ClosestControlPoint::new(corner).execute(deformer.controls()) {
        deformer
            .controls_mut()
            .translate(&[index], Vector3::new(0.0, 0.0, 0.5))?;
    }

    let deformed = store.evaluate(id)?;
    let max_lift = deformed.iter().map(|p| p.z).fold(0.0_f64, f64::max);
    let moved = deformed.iter().filter(|p| p.z.abs() > 1e-9).count();

    tracing::info!(
        vertices = deformed.len(),
        control_points = store.deformer(id)?.controls().len(),
        moved,
        max_lift,
        "deformed grid"
    );
    Ok(())
}
