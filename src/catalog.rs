//! Tile catalog abstraction.
//!
//! The catalog is the injected read-only fact the grid math depends on:
//! how many tiles exist. Geometry computation takes it as a parameter so
//! the viewport never reaches into a global tile table.

use crate::types::TileIndex;

/// Source of the exclusive upper bound of valid tile indices.
pub trait TileCatalog {
    /// Exclusive upper bound: valid indices are `0..max_tile_index()`.
    fn max_tile_index(&self) -> TileIndex;
}

/// A bare count is a valid catalog; convenient for tests and simple hosts.
impl TileCatalog for TileIndex {
    fn max_tile_index(&self) -> TileIndex {
        *self
    }
}

impl<T: TileCatalog + ?Sized> TileCatalog for &T {
    fn max_tile_index(&self) -> TileIndex {
        (**self).max_tile_index()
    }
}
