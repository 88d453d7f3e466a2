use thiserror::Error;

/// Validation failures surfaced by [`crate::LifeGrid`].
///
/// Every variant is detected before any mutation, so a failed call leaves
/// the grid exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GridError {
    /// Grid construction with a zero dimension.
    #[error("invalid grid dimensions: {width}x{height}")]
    InvalidDimension { width: usize, height: usize },
    /// A write to a coordinate outside the grid.
    #[error("cell ({x}, {y}) is out of bounds")]
    OutOfBounds { x: i64, y: i64 },
    /// Frame rendering with a zero magnification.
    #[error("render scale must be positive")]
    InvalidScale,
}
