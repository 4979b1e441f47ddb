use thiserror::Error;

/// Top-level error type for the Deformis kernel.
#[derive(Debug, Error)]
pub enum DeformisError {
    #[error(transparent)]
    Control(#[from] ControlError),

    #[error(transparent)]
    Operation(#[from] OperationError),

    #[error(transparent)]
    Deformer(#[from] DeformerError),
}

/// Errors related to control-point sets.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ControlError {
    #[error("control point arrays differ in length: {base} base vs {current} current")]
    LengthMismatch { base: usize, current: usize },

    #[error("control point index {index} is out of range (len {len})")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Errors related to deformation operations.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),
}

/// Errors related to the deformer store.
#[derive(Debug, Error)]
pub enum DeformerError {
    #[error("deformer not found")]
    NotFound,
}

/// Convenience type alias for results using [`DeformisError`].
pub type Result<T> = std::result::Result<T, DeformisError>;
