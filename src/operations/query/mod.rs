mod blend_weights;
mod closest_control_point;

pub use blend_weights::BlendWeights;
pub use closest_control_point::ClosestControlPoint;
