//! Pipeline error types

use thiserror::Error;

/// Pipeline-related errors
#[derive(Debug, Clone, Error)]
pub enum PipeError {
    #[error("Solid kernel error: {0}")]
    Kernel(#[from] vox_kernel::KernelError),

    #[error("Assembly phase violation: fuse after cut")]
    FuseAfterCut,
}

/// Result type for pipeline operations
pub type PipeResult<T> = Result<T, PipeError>;
