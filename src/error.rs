//! Structured error types for tileview.

use crate::types::TileIndex;

/// All errors that can occur while configuring or driving the viewport.
///
/// Continuous inputs (pointer coordinates, wheel deltas, scrollbar values)
/// never produce errors; they are clamped at the call site. Errors are
/// reserved for configuration that would make the grid math undefined and
/// for explicit navigation targets outside the catalog.
#[derive(Debug, thiserror::Error)]
pub enum TileviewError {
    /// Tile size or viewport dimensions that leave no addressable grid.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Navigation target outside the catalog's index range.
    #[error("tile index {index} outside valid range [0, {max}]")]
    OutOfRange { index: i64, max: TileIndex },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, TileviewError>;
