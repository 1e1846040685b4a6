use thiserror::Error;

/// Errors raised while building an [EquispacedLinear](crate::EquispacedLinear) or
/// populating its sample arrays. Queries never fail.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InterpolantError {
    /// Grid parameters that would produce a degenerate or non-increasing grid.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// An array whose length does not match the number of grid points.
    #[error("length mismatch: expected {expected}, got {got}")]
    LengthMismatch { expected: usize, got: usize },
}
