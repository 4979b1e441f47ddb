mod control_points;

pub use control_points::GenerateControlPoints;
