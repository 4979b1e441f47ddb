pub mod control;
pub mod deformer;
pub mod error;
pub mod math;
pub mod operations;

pub use error::{DeformisError, Result};
