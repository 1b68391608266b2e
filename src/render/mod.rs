//! Frame planning: what a redraw needs to draw, at index level.
//!
//! Actual compositing belongs to the host's renderer; this module only
//! enumerates the visible window — which tile goes in which cell, which
//! cells carry selection outlines, which carries the focus outline — in
//! paint order. Tile images are pulled through the [`TileSource`]
//! collaborator, one query per visible valid cell.

use serde::Serialize;

use crate::types::{CellCoord, TileIndex};
use crate::viewer::TileGridViewport;

/// Supplier of fixed-size tile images, queried by index during a redraw.
///
/// Implementations typically front an image cache; this crate never asks
/// for an index at or past the catalog maximum.
pub trait TileSource {
    /// Whatever the host renderer draws (a bitmap handle, a texture id).
    type Image;

    /// Image for one tile.
    fn tile_image(&self, index: TileIndex) -> Self::Image;
}

/// One tile placement: draw the image for `index` at `cell`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TileDraw {
    /// Viewport cell to draw into.
    pub cell: CellCoord,
    /// Catalog tile to draw there.
    pub index: TileIndex,
}

/// Everything one redraw needs, in paint order: tiles first, then grid
/// lines, then selection outlines, then the focus outline on top.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FramePlan {
    /// Visible tiles. Cells whose index falls past the catalog end are
    /// simply absent (drawn as background).
    pub tiles: Vec<TileDraw>,
    /// Whether to stroke grid lines between cells.
    pub grid_lines: bool,
    /// Cells to stroke with the selection outline.
    pub selected: Vec<CellCoord>,
    /// Cell to stroke with the focus outline, if any.
    pub focused: Option<CellCoord>,
}

impl FramePlan {
    /// Enumerate the visible window of a viewport.
    ///
    /// Walks columns then rows with inclusive upper bounds so the partial
    /// column/row at the right and bottom edges is painted, and skips any
    /// cell whose index reaches past the catalog.
    #[must_use]
    pub fn build(viewport: &TileGridViewport) -> Self {
        let g = viewport.geometry();
        let scroll = viewport.scroll_offset();

        let mut tiles = Vec::new();
        for col in 0..=g.visible_columns {
            for row in 0..=g.tile_rows {
                let cell = CellCoord::new(col, row);
                let index = g.tile_at(scroll, cell);
                if g.is_valid_tile(index) {
                    tiles.push(TileDraw { cell, index });
                }
            }
        }

        Self {
            tiles,
            grid_lines: viewport.show_grid(),
            selected: viewport.selected_cells().iter().collect(),
            focused: viewport.focused_cell(),
        }
    }

    /// Resolve the plan's tiles through a [`TileSource`].
    pub fn resolve<S: TileSource>(&self, source: &S) -> Vec<(CellCoord, S::Image)> {
        self.tiles
            .iter()
            .map(|draw| (draw.cell, source.tile_image(draw.index)))
            .collect()
    }
}
