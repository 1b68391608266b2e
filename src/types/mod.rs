//! Data types for the tile-grid viewport.

mod selection;

pub use selection::*;

use serde::{Deserialize, Serialize};

/// Canonical identity of a tile: its position in the catalog's linear
/// index space. Valid indices satisfy `0 <= index < max_tile_index`.
pub type TileIndex = u32;

/// A grid cell relative to the current viewport (not absolute).
///
/// `(0, 0)` is always the top-left visible cell; the absolute tile under a
/// cell depends on the scroll offset and geometry. Derived ordering is
/// column-major (`col`, then `row`), used only for deterministic output.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct CellCoord {
    /// Column within the viewport, counted from the left edge.
    pub col: u32,
    /// Row within the viewport, counted from the top edge.
    pub row: u32,
}

impl CellCoord {
    /// Create a cell coordinate.
    #[must_use]
    pub const fn new(col: u32, row: u32) -> Self {
        Self { col, row }
    }
}

/// Configuration for the tile grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridConfig {
    /// Edge length of one square tile in pixels.
    pub tile_size: u32,
    /// Whether grid lines are drawn between cells.
    pub show_grid: bool,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            tile_size: 36,
            show_grid: false,
        }
    }
}

/// Result of a pointer-move: what the host needs to decide on a redraw.
///
/// The label can change while the cell stays put (the index under a
/// stationary pointer moves when the viewport scrolls), so both flags are
/// reported independently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FocusChange {
    /// The focused cell differs from the previous one.
    pub cell_changed: bool,
    /// The status label text differs from the previous one.
    pub label_changed: bool,
    /// Current label text, e.g. `"Tile number: 42"`.
    pub label: String,
}
