pub(crate) mod blend;
mod surface_deform;

pub use surface_deform::SurfaceDeform;

use crate::error::OperationError;

/// Parameters controlling how the deformation kernel is scheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeformParams {
    /// Number of vertices per parallel scheduling unit.
    pub batch_size: usize,
    /// Run batches on the rayon pool. When `false`, or when the mesh fits in
    /// a single batch, the kernel runs on the calling thread.
    pub parallel: bool,
}

impl Default for DeformParams {
    fn default() -> Self {
        Self {
            batch_size: 64,
            parallel: true,
        }
    }
}

impl DeformParams {
    /// Parameters that never leave the calling thread.
    #[must_use]
    pub fn sequential() -> Self {
        Self {
            parallel: false,
            ..Self::default()
        }
    }

    pub(crate) fn validate(&self) -> Result<(), OperationError> {
        if self.batch_size == 0 {
            return Err(OperationError::InvalidParameters(
                "batch_size must be at least 1".into(),
            ));
        }
        Ok(())
    }
}
