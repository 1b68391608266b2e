//! Grid geometry: the pure mapping between pixels, cells, and tile indices.
//!
//! This module handles:
//! - Deriving rows/columns and scroll bounds from viewport size and tile size
//! - Pixel position to viewport cell conversion
//! - Viewport cell + scroll offset to absolute tile index conversion

mod geometry;

pub use geometry::GridGeometry;
