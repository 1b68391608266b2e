//! Selection and normalization tests
//!
//! Tests for click selection semantics (replace vs. additive), selection
//! lifecycle across resize/zoom, and normalization of sparse selections
//! into origin-based stamp shapes.

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::panic
)]

use std::collections::HashSet;

use proptest::prelude::*;
use tileview::{
    CellCoord, GridConfig, NormalizedSelection, SelectionSet, TileGridViewport,
};

/// 10 visible columns, 20 rows, 1000-tile catalog, tiles_per_row = 50.
fn standard_viewport() -> TileGridViewport {
    TileGridViewport::new(
        300,
        600,
        GridConfig {
            tile_size: 30,
            show_grid: false,
        },
        &1000u32,
    )
    .unwrap()
}

/// Build a selection from cell coordinates.
fn selection_of(cells: &[(u32, u32)]) -> SelectionSet {
    let mut set = SelectionSet::new();
    for &(col, row) in cells {
        set.insert(CellCoord::new(col, row));
    }
    set
}

// =============================================================================
// CLICK SEMANTICS
// =============================================================================

#[test]
fn test_plain_click_replaces_selection() {
    let mut vp = standard_viewport();
    vp.click(0, 0, false);
    vp.click(65, 95, false);

    assert_eq!(vp.selected_cells().len(), 1);
    assert!(vp.selected_cells().contains(CellCoord::new(2, 3)));
}

#[test]
fn test_additive_click_accumulates() {
    let mut vp = standard_viewport();
    vp.click(0, 0, false);
    vp.click(65, 95, true);

    assert_eq!(vp.selected_cells().len(), 2);
    assert!(vp.selected_cells().contains(CellCoord::new(0, 0)));
    assert!(vp.selected_cells().contains(CellCoord::new(2, 3)));
}

#[test]
fn test_additive_click_on_selected_cell_is_not_a_toggle() {
    let mut vp = standard_viewport();
    vp.click(65, 95, false);
    vp.click(65, 95, true);
    vp.click(70, 100, true); // same cell, different pixel

    assert_eq!(vp.selected_cells().len(), 1, "no removal, no duplicate");
}

#[test]
fn test_click_publishes_normalized_selection() {
    let mut vp = standard_viewport();
    let stamp = vp.click(95, 35, false);
    // Cell (3,1) at scroll 0 is tile 53; sole cell rebases to the origin
    assert_eq!(stamp.get(CellCoord::new(0, 0)), Some(53));
    assert_eq!(stamp, vp.normalized_selection());
}

// =============================================================================
// SELECTION LIFECYCLE
// =============================================================================

#[test]
fn test_resize_clears_selection() {
    let mut vp = standard_viewport();
    vp.click(95, 35, false);
    assert!(!vp.selected_cells().is_empty());

    vp.resize(330, 600, &1000u32).unwrap();
    assert!(vp.selected_cells().is_empty());
    assert!(vp.normalized_selection().is_empty());
}

#[test]
fn test_zoom_clears_selection_and_focus() {
    let mut vp = standard_viewport();
    vp.pointer_move(95, 35);
    vp.click(95, 35, false);

    vp.set_tile_size(60, &1000u32).unwrap();
    assert!(vp.selected_cells().is_empty());
    assert_eq!(vp.focused_cell(), None);
    assert_eq!(vp.focus_label(), None);
}

#[test]
fn test_resize_with_unchanged_inputs_is_idempotent() {
    let mut vp = standard_viewport();
    vp.set_scroll_offset(12);
    let before = *vp.geometry();

    vp.resize(300, 600, &1000u32).unwrap();
    assert_eq!(*vp.geometry(), before);
    assert_eq!(vp.scroll_offset(), 12, "in-bounds offset survives");
}

#[test]
fn test_failed_resize_retains_selection() {
    let mut vp = standard_viewport();
    vp.click(95, 35, false);

    assert!(vp.resize(10, 10, &1000u32).is_err());
    assert_eq!(vp.selected_cells().len(), 1, "prior state retained on error");
    assert_eq!(vp.geometry().visible_columns, 10);
}

#[test]
fn test_zero_tile_size_rejected() {
    let mut vp = standard_viewport();
    assert!(vp.set_tile_size(0, &1000u32).is_err());
    assert_eq!(vp.geometry().tile_size, 30);
}

// =============================================================================
// NORMALIZATION
// =============================================================================

#[test]
fn test_normalize_single_cell() {
    let normalized = NormalizedSelection::normalize(&selection_of(&[(3, 3)]), 0, 10);
    assert_eq!(normalized.len(), 1);
    assert_eq!(normalized.get(CellCoord::new(0, 0)), Some(33));
}

#[test]
fn test_normalize_sparse_shape() {
    let normalized =
        NormalizedSelection::normalize(&selection_of(&[(2, 5), (4, 5), (2, 7)]), 0, 10);

    // xMin = 2, yMin = 5 rebase the shape to the origin
    assert_eq!(normalized.len(), 3);
    assert_eq!(normalized.get(CellCoord::new(0, 0)), Some(52));
    assert_eq!(normalized.get(CellCoord::new(2, 0)), Some(54));
    assert_eq!(normalized.get(CellCoord::new(0, 2)), Some(72));
    assert_eq!(normalized.get(CellCoord::new(2, 2)), None, "gap stays a gap");
}

#[test]
fn test_normalize_applies_scroll_offset() {
    let normalized = NormalizedSelection::normalize(&selection_of(&[(3, 3)]), 7, 10);
    assert_eq!(normalized.get(CellCoord::new(0, 0)), Some(40), "(7 + 3) + 10 * 3");
}

#[test]
fn test_normalize_empty_selection() {
    let normalized = NormalizedSelection::normalize(&SelectionSet::new(), 12, 10);
    assert!(normalized.is_empty());
}

// =============================================================================
// PROPERTIES
// =============================================================================

proptest! {
    /// Rebasing is injective: a duplicate-free selection never loses cells
    /// to key collisions.
    #[test]
    fn normalize_preserves_cell_count(
        cells in proptest::collection::hash_set((0u32..64, 0u32..64), 1..40),
        scroll in 0u32..128,
        tiles_per_row in 0u32..512,
    ) {
        let mut set = SelectionSet::new();
        for (col, row) in &cells {
            set.insert(CellCoord::new(*col, *row));
        }

        let normalized = NormalizedSelection::normalize(&set, scroll, tiles_per_row);
        prop_assert_eq!(normalized.len(), cells.len());
    }

    /// The rebased shape always touches both axes at the origin.
    #[test]
    fn normalize_anchors_at_origin(
        cells in proptest::collection::hash_set((0u32..64, 0u32..64), 1..40),
    ) {
        let mut set = SelectionSet::new();
        for (col, row) in &cells {
            set.insert(CellCoord::new(*col, *row));
        }

        let normalized = NormalizedSelection::normalize(&set, 0, 50);
        let keys: HashSet<CellCoord> = normalized.iter().map(|(cell, _)| cell).collect();
        prop_assert!(keys.iter().any(|c| c.col == 0));
        prop_assert!(keys.iter().any(|c| c.row == 0));
    }
}
