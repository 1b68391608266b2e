//! tileview - viewport engine for a scrollable tile-grid picker
//!
//! Maps between a linear tile index space, a 2-D scroll-windowed pixel
//! grid, and a multi-tile selection:
//! - Grid geometry (rows/columns, scroll bounds) derived from viewport and
//!   tile pixel sizes
//! - Pointer pixel position ↔ viewport cell ↔ absolute tile index
//! - Focus tracking, click selection, and selection normalization into an
//!   origin-based stamp shape
//! - Index navigation with page-snapped scrolling
//!
//! The host UI, the tile renderer, and the tile catalog stay outside the
//! crate: the host forwards raw input events and reads back state plus a
//! redraw flag, the renderer is reached through [`TileSource`], and the
//! catalog through [`TileCatalog`].
//!
//! # Usage
//!
//! ```
//! use tileview::{FramePlan, GridConfig, TileGridViewport};
//!
//! // 10 visible columns, 20 rows, 1000-tile catalog
//! let mut viewport =
//!     TileGridViewport::new(300, 600, GridConfig { tile_size: 30, show_grid: false }, &1000u32)
//!         .unwrap();
//!
//! let focus = viewport.pointer_move(95, 35);
//! assert_eq!(focus.label, "Tile number: 53");
//!
//! let stamp = viewport.click(95, 35, false);
//! assert_eq!(stamp.len(), 1);
//!
//! let plan = FramePlan::build(&viewport);
//! assert!(plan.tiles.iter().all(|draw| draw.index < 1000));
//! ```

pub mod catalog;
pub mod error;
pub mod layout;
pub mod render;
pub mod types;
pub mod viewer;

pub use catalog::TileCatalog;
pub use error::{Result, TileviewError};
pub use layout::GridGeometry;
pub use render::{FramePlan, TileDraw, TileSource};
pub use types::*;
pub use viewer::TileGridViewport;

/// Get the library version
#[must_use]
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
