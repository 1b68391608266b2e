//! Selection state and normalization.
//!
//! A selection is a duplicate-free set of viewport-relative cells.
//! Normalization re-bases the set so its minimum column and row become
//! `(0, 0)` and resolves each cell to its absolute tile index, producing a
//! compact stamp shape downstream consumers can reuse anywhere.

use std::collections::BTreeMap;

use serde::ser::SerializeSeq;
use serde::{Deserialize, Serialize, Serializer};

use super::{CellCoord, TileIndex};

/// A duplicate-free set of selected viewport cells.
///
/// Backed by an insertion-ordered list (selections are tiny — a handful of
/// clicked cells) so outline drawing order is stable; set semantics are
/// enforced on insert.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionSet {
    cells: Vec<CellCoord>,
}

impl SelectionSet {
    /// Create an empty selection.
    #[must_use]
    pub const fn new() -> Self {
        Self { cells: Vec::new() }
    }

    /// Add a cell if not already present. Returns whether it was added.
    ///
    /// There is no toggle: additive-clicking an already-selected cell is a
    /// no-op, never a removal.
    pub fn insert(&mut self, cell: CellCoord) -> bool {
        if self.cells.contains(&cell) {
            return false;
        }
        self.cells.push(cell);
        true
    }

    /// Replace the whole selection with a single cell.
    pub fn replace(&mut self, cell: CellCoord) {
        self.cells.clear();
        self.cells.push(cell);
    }

    /// Remove all cells.
    pub fn clear(&mut self) {
        self.cells.clear();
    }

    /// Whether no cells are selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of selected cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the given cell is selected.
    #[must_use]
    pub fn contains(&self, cell: CellCoord) -> bool {
        self.cells.contains(&cell)
    }

    /// Selected cells in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = CellCoord> + '_ {
        self.cells.iter().copied()
    }
}

/// A selection re-based to the origin and resolved to absolute tile
/// indices: the key is the cell offset within the stamp shape, the value
/// the tile to place there.
///
/// Serializes as a sequence of `(cell, index)` pairs in deterministic
/// (column, row) order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedSelection {
    entries: BTreeMap<CellCoord, TileIndex>,
}

impl NormalizedSelection {
    /// Normalize a selection against the current scroll offset and row
    /// stride.
    ///
    /// For every cell, the absolute index is
    /// `(scroll_offset + col) + tiles_per_row * row`; the output key is the
    /// cell shifted so the selection's minimum column and row land on
    /// `(0, 0)`. Rebasing a duplicate-free input is injective, so the
    /// output always has as many entries as the input.
    #[must_use]
    pub fn normalize(
        selection: &SelectionSet,
        scroll_offset: u32,
        tiles_per_row: u32,
    ) -> Self {
        let mut entries = BTreeMap::new();
        if selection.is_empty() {
            return Self { entries };
        }

        let col_min = selection.iter().map(|c| c.col).min().unwrap_or(0);
        let row_min = selection.iter().map(|c| c.row).min().unwrap_or(0);

        for cell in selection.iter() {
            let tile = (scroll_offset + cell.col) + tiles_per_row * cell.row;
            entries.insert(
                CellCoord::new(cell.col - col_min, cell.row - row_min),
                tile,
            );
        }
        Self { entries }
    }

    /// Tile index at a stamp offset, if that offset is part of the shape.
    #[must_use]
    pub fn get(&self, cell: CellCoord) -> Option<TileIndex> {
        self.entries.get(&cell).copied()
    }

    /// Whether the selection was empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of stamp cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Entries in (column, row) order.
    pub fn iter(&self) -> impl Iterator<Item = (CellCoord, TileIndex)> + '_ {
        self.entries.iter().map(|(cell, tile)| (*cell, *tile))
    }
}

impl Serialize for NormalizedSelection {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.entries.len()))?;
        for (cell, tile) in &self.entries {
            seq.serialize_element(&(cell, tile))?;
        }
        seq.end()
    }
}

impl FromIterator<(CellCoord, TileIndex)> for NormalizedSelection {
    fn from_iter<I: IntoIterator<Item = (CellCoord, TileIndex)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
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
    fn insert_rejects_duplicates() {
        let mut set = SelectionSet::new();
        assert!(set.insert(CellCoord::new(1, 2)));
        assert!(!set.insert(CellCoord::new(1, 2)));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn replace_drops_previous_cells() {
        let mut set = SelectionSet::new();
        set.insert(CellCoord::new(0, 0));
        set.insert(CellCoord::new(1, 0));
        set.replace(CellCoord::new(5, 5));
        assert_eq!(set.len(), 1);
        assert!(set.contains(CellCoord::new(5, 5)));
    }

    #[test]
    fn normalize_empty_is_empty() {
        let normalized = NormalizedSelection::normalize(&SelectionSet::new(), 7, 10);
        assert!(normalized.is_empty());
    }

    #[test]
    fn normalize_serializes_as_pair_sequence() {
        let mut set = SelectionSet::new();
        set.insert(CellCoord::new(3, 3));
        let normalized = NormalizedSelection::normalize(&set, 0, 10);
        let json = serde_json::to_string(&normalized).unwrap();
        assert_eq!(json, r#"[[{"col":0,"row":0},33]]"#);
    }
}
