//! Main `TileGridViewport` struct - the primary entry point.
//!
//! This module provides the viewport component that handles:
//! - Managing grid geometry, scroll offset, focus, and selection state
//! - Resize and zoom (tile size) lifecycle
//! - Navigation to an arbitrary tile index
//!
//! Pointer and click handlers live in `events.rs`; wheel and scrollbar
//! handling lives in `scroll.rs`. Every operation runs to completion on
//! the calling thread; the host owns the single instance and serializes
//! calls.

mod events;
mod scroll;

use crate::catalog::TileCatalog;
use crate::error::{Result, TileviewError};
use crate::layout::GridGeometry;
use crate::types::{CellCoord, GridConfig, NormalizedSelection, SelectionSet};

/// Viewport/windowing engine for a scrollable tile-grid picker.
///
/// Owns the mapping between the catalog's linear index space, the
/// scroll-windowed 2-D grid, and the user's multi-tile selection. The host
/// feeds it pixel-level input events and reads back cells, labels, and the
/// redraw flag; it never mutates state directly.
#[derive(Debug, Clone)]
pub struct TileGridViewport {
    pub(crate) geometry: GridGeometry,
    pub(crate) scroll_offset: u32,
    pub(crate) focused: Option<CellCoord>,
    pub(crate) focus_label: Option<String>,
    /// Last pointer position in pixels, kept so focus and label can be
    /// refreshed after a scroll moves the index under a stationary pointer.
    pub(crate) last_pointer: Option<(i32, i32)>,
    pub(crate) selection: SelectionSet,
    pub(crate) show_grid: bool,
    pub(crate) needs_render: bool,
}

impl TileGridViewport {
    /// Create a viewport at its first layout.
    ///
    /// # Errors
    ///
    /// `InvalidConfiguration` when the config's tile size is zero or the
    /// viewport cannot fit a single tile.
    pub fn new(
        viewport_width: u32,
        viewport_height: u32,
        config: GridConfig,
        catalog: &impl TileCatalog,
    ) -> Result<Self> {
        let geometry =
            GridGeometry::compute(viewport_width, viewport_height, config.tile_size, catalog)?;
        Ok(Self {
            geometry,
            scroll_offset: 0,
            focused: None,
            focus_label: None,
            last_pointer: None,
            selection: SelectionSet::new(),
            show_grid: config.show_grid,
            needs_render: true,
        })
    }

    /// Recompute geometry for a new viewport pixel size.
    ///
    /// Clears the selection and focus (viewport-relative coordinates are
    /// stale in the new geometry), clamps the scroll offset into the new
    /// bounds, and requests a redraw. Idempotent for unchanged inputs.
    ///
    /// # Errors
    ///
    /// `InvalidConfiguration` for zero dimensions or a viewport smaller
    /// than one tile; prior state is retained.
    pub fn resize(
        &mut self,
        viewport_width: u32,
        viewport_height: u32,
        catalog: &impl TileCatalog,
    ) -> Result<()> {
        let geometry = GridGeometry::compute(
            viewport_width,
            viewport_height,
            self.geometry.tile_size,
            catalog,
        )?;
        self.apply_geometry(geometry);
        Ok(())
    }

    /// Change the tile pixel size (zoom), keeping the viewport pixel size.
    ///
    /// # Errors
    ///
    /// `InvalidConfiguration` for a zero size or one larger than the
    /// viewport; prior state is retained.
    pub fn set_tile_size(&mut self, new_size: u32, catalog: &impl TileCatalog) -> Result<()> {
        let geometry = GridGeometry::compute(
            self.geometry.viewport_width,
            self.geometry.viewport_height,
            new_size,
            catalog,
        )?;
        self.apply_geometry(geometry);
        Ok(())
    }

    /// Scroll so the given tile is visible and make it the sole selection.
    ///
    /// The scroll offset snaps to a page boundary
    /// (`(index_in_row / visible_columns) * visible_columns`) rather than
    /// centering the target, so repeated navigations to nearby tiles keep
    /// a stable scroll position. Returns the fresh normalized selection.
    ///
    /// # Errors
    ///
    /// `OutOfRange` when `tile_index < 0 || tile_index > max_tile_index`;
    /// no state changes. Note the upper check is `>`, not `>=`: navigating
    /// to exactly `max_tile_index` is accepted even though no such tile
    /// renders. Known boundary, kept as-is.
    pub fn navigate_to_tile(&mut self, tile_index: i64) -> Result<NormalizedSelection> {
        let max = self.geometry.max_tile_index;
        let tile = u32::try_from(tile_index)
            .ok()
            .filter(|&t| t <= max)
            .ok_or(TileviewError::OutOfRange {
                index: tile_index,
                max,
            })?;

        // tiles_per_row is 0 when the catalog has fewer tiles than the
        // viewport has rows; the whole catalog is then a single row.
        let row = if self.geometry.tiles_per_row == 0 {
            0
        } else {
            tile / self.geometry.tiles_per_row
        };
        let index_in_row = tile - self.geometry.tiles_per_row * row;
        let page = (index_in_row / self.geometry.visible_columns) * self.geometry.visible_columns;
        let col = index_in_row - page;

        self.scroll_offset = page;
        self.selection.clear();
        self.selection.insert(CellCoord::new(col, row));
        self.needs_render = true;
        Ok(self.normalized_selection())
    }

    /// Toggle grid-line drawing.
    pub fn set_show_grid(&mut self, show: bool) {
        if self.show_grid != show {
            self.show_grid = show;
            self.needs_render = true;
        }
    }

    /// Current derived geometry (for the scrollbar's range and page size).
    #[must_use]
    pub const fn geometry(&self) -> &GridGeometry {
        &self.geometry
    }

    /// Current scroll offset: the absolute tile-column at the left edge.
    #[must_use]
    pub const fn scroll_offset(&self) -> u32 {
        self.scroll_offset
    }

    /// Focused cell, if the pointer is over the grid.
    #[must_use]
    pub const fn focused_cell(&self) -> Option<CellCoord> {
        self.focused
    }

    /// Current status label, if any.
    #[must_use]
    pub fn focus_label(&self) -> Option<&str> {
        self.focus_label.as_deref()
    }

    /// Currently selected cells.
    #[must_use]
    pub const fn selected_cells(&self) -> &SelectionSet {
        &self.selection
    }

    /// Whether grid lines are drawn.
    #[must_use]
    pub const fn show_grid(&self) -> bool {
        self.show_grid
    }

    /// Normalized form of the current selection, derived on demand.
    #[must_use]
    pub fn normalized_selection(&self) -> NormalizedSelection {
        NormalizedSelection::normalize(
            &self.selection,
            self.scroll_offset,
            self.geometry.tiles_per_row,
        )
    }

    /// Consume the redraw-needed signal. Returns true at most once per
    /// batch of state changes; the host calls this after each event it
    /// forwards.
    pub fn take_needs_render(&mut self) -> bool {
        std::mem::take(&mut self.needs_render)
    }

    fn apply_geometry(&mut self, geometry: GridGeometry) {
        self.geometry = geometry;
        self.selection.clear();
        self.focused = None;
        self.focus_label = None;
        self.scroll_offset = self.scroll_offset.min(geometry.scroll_maximum());
        self.needs_render = true;
    }
}
