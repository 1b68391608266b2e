//! Derived grid geometry.
//!
//! Geometry is a pure function of (viewport pixel size, tile size, catalog
//! max index). It is recomputed whole on every resize or zoom, never
//! patched incrementally, so there is no drift between its fields.

use serde::Serialize;

use crate::catalog::TileCatalog;
use crate::error::{Result, TileviewError};
use crate::types::{CellCoord, TileIndex};

/// Derived grid geometry for one viewport configuration.
///
/// The linear catalog is folded into `tile_rows` rows of `tiles_per_row`
/// columns; the viewport shows a `visible_columns`-wide window into those
/// columns, positioned by the scroll offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GridGeometry {
    /// Viewport width in pixels.
    pub viewport_width: u32,
    /// Usable viewport height in pixels.
    pub viewport_height: u32,
    /// Edge length of one square tile in pixels.
    pub tile_size: u32,
    /// Exclusive upper bound of valid tile indices.
    pub max_tile_index: TileIndex,
    /// Full tile rows that fit in the viewport height.
    pub tile_rows: u32,
    /// Column stride of the folded catalog: `max_tile_index / tile_rows`,
    /// truncating. A catalog size that is not an exact multiple leaves a
    /// partial last row the row/column math cannot reach; that policy is
    /// deliberate and covered by tests.
    pub tiles_per_row: u32,
    /// Full tile columns that fit in the viewport width.
    pub visible_columns: u32,
}

impl GridGeometry {
    /// Compute geometry from viewport pixel size, tile size, and catalog.
    ///
    /// # Errors
    ///
    /// `InvalidConfiguration` when the tile size is zero, a viewport
    /// dimension is zero, or the viewport is smaller than a single tile
    /// (which would leave the scroll and navigation math dividing by
    /// zero).
    pub fn compute(
        viewport_width: u32,
        viewport_height: u32,
        tile_size: u32,
        catalog: &impl TileCatalog,
    ) -> Result<Self> {
        if tile_size == 0 {
            return Err(TileviewError::InvalidConfiguration(
                "tile size must be positive".to_string(),
            ));
        }
        if viewport_width == 0 || viewport_height == 0 {
            return Err(TileviewError::InvalidConfiguration(format!(
                "viewport dimensions must be positive (got {viewport_width}x{viewport_height})"
            )));
        }

        let tile_rows = viewport_height / tile_size;
        let visible_columns = viewport_width / tile_size;
        if tile_rows == 0 || visible_columns == 0 {
            return Err(TileviewError::InvalidConfiguration(format!(
                "viewport {viewport_width}x{viewport_height} smaller than one {tile_size}px tile"
            )));
        }

        let max_tile_index = catalog.max_tile_index();
        Ok(Self {
            viewport_width,
            viewport_height,
            tile_size,
            max_tile_index,
            tile_rows,
            tiles_per_row: max_tile_index / tile_rows,
            visible_columns,
        })
    }

    /// Upper bound of the scrollbar range: `tiles_per_row + visible_columns`.
    #[must_use]
    pub const fn scroll_maximum(&self) -> u32 {
        self.tiles_per_row + self.visible_columns
    }

    /// Scrollbar page size: one viewport width of columns.
    #[must_use]
    pub const fn scroll_page_size(&self) -> u32 {
        self.visible_columns
    }

    /// Upper bound for wheel scrolling: `scroll_maximum - visible_columns`.
    ///
    /// The scrollbar itself ranges up to `scroll_maximum`; wheel steps stop
    /// one page earlier so the window never scrolls past the last column.
    #[must_use]
    pub const fn wheel_scroll_max(&self) -> u32 {
        self.scroll_maximum() - self.visible_columns
    }

    /// Convert a pointer pixel position to a viewport cell.
    ///
    /// Negative coordinates are a caller contract violation and clamp to
    /// the origin; positions past the right/bottom edge clamp to the
    /// partial edge cell (the same inclusive bound the frame walk paints).
    #[must_use]
    pub fn cell_at_pixel(&self, pixel_x: i32, pixel_y: i32) -> CellCoord {
        let px = u32::try_from(pixel_x.max(0)).unwrap_or(0);
        let py = u32::try_from(pixel_y.max(0)).unwrap_or(0);
        CellCoord::new(
            (px / self.tile_size).min(self.visible_columns),
            (py / self.tile_size).min(self.tile_rows),
        )
    }

    /// Absolute tile index under a viewport cell at a given scroll offset.
    ///
    /// The result is unvalidated; callers that draw or select must check
    /// [`Self::is_valid_tile`].
    #[must_use]
    pub const fn tile_at(&self, scroll_offset: u32, cell: CellCoord) -> TileIndex {
        (scroll_offset + cell.col) + self.tiles_per_row * cell.row
    }

    /// Whether an index addresses an existing catalog tile.
    #[must_use]
    pub const fn is_valid_tile(&self, index: TileIndex) -> bool {
        index < self.max_tile_index
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::panic
)]
mod tests {
    use super::*;

    #[test]
    fn compute_folds_catalog_into_rows() {
        // 600px tall / 30px tiles = 20 rows; 1000 tiles / 20 rows = 50 per row
        let g = GridGeometry::compute(300, 600, 30, &1000u32).unwrap();
        assert_eq!(g.tile_rows, 20);
        assert_eq!(g.tiles_per_row, 50);
        assert_eq!(g.visible_columns, 10);
        assert_eq!(g.scroll_maximum(), 60);
        assert_eq!(g.wheel_scroll_max(), 50);
    }

    #[test]
    fn compute_rejects_zero_tile_size() {
        let err = GridGeometry::compute(300, 600, 0, &1000u32).unwrap_err();
        assert!(matches!(err, TileviewError::InvalidConfiguration(_)));
    }

    #[test]
    fn compute_rejects_subtile_viewport() {
        let err = GridGeometry::compute(20, 600, 30, &1000u32).unwrap_err();
        assert!(matches!(err, TileviewError::InvalidConfiguration(_)));
    }

    #[test]
    fn cell_at_pixel_clamps_negative_to_origin() {
        let g = GridGeometry::compute(300, 600, 30, &1000u32).unwrap();
        assert_eq!(g.cell_at_pixel(-5, -1), CellCoord::new(0, 0));
    }

    #[test]
    fn cell_at_pixel_clamps_to_edge_cell() {
        let g = GridGeometry::compute(300, 600, 30, &1000u32).unwrap();
        // Far past the right edge: clamps to the inclusive partial column
        assert_eq!(g.cell_at_pixel(5000, 0), CellCoord::new(10, 0));
    }
}
