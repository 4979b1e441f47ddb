pub mod falloff;

pub use falloff::{blend_ratio, blend_span, FalloffRadius};

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;
