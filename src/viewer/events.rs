//! Pointer and click handlers for `TileGridViewport`.
//!
//! The host forwards raw pixel coordinates from its own event system;
//! nothing here knows about any particular UI toolkit. Non-left-button
//! clicks are filtered by the host before reaching `click`.

use crate::types::{FocusChange, NormalizedSelection};

use super::TileGridViewport;

impl TileGridViewport {
    /// Track the pointer and refresh the focused cell and status label.
    ///
    /// The focused cell only updates when the pointer crosses into a
    /// different cell, but the label is recomputed every call: the index
    /// under a stationary pointer changes when the viewport scrolls, so
    /// the two can change independently. The host re-renders when either
    /// flag in the returned [`FocusChange`] is set.
    pub fn pointer_move(&mut self, pixel_x: i32, pixel_y: i32) -> FocusChange {
        self.last_pointer = Some((pixel_x, pixel_y));
        self.refresh_focus(pixel_x, pixel_y)
    }

    /// Clear focus and label when the pointer leaves the viewport.
    pub fn pointer_leave(&mut self) {
        self.focused = None;
        self.focus_label = None;
        self.last_pointer = None;
        self.needs_render = true;
    }

    /// Select the cell under a left click.
    ///
    /// `additive` (ctrl-click) adds the cell if absent — re-clicking a
    /// selected cell is a no-op, not a toggle. A plain click replaces the
    /// selection with this single cell. Returns the fresh normalized
    /// selection for downstream consumers.
    pub fn click(&mut self, pixel_x: i32, pixel_y: i32, additive: bool) -> NormalizedSelection {
        let cell = self.geometry.cell_at_pixel(pixel_x, pixel_y);
        if additive {
            if self.selection.insert(cell) {
                self.needs_render = true;
            }
        } else {
            self.selection.replace(cell);
            self.needs_render = true;
        }
        self.normalized_selection()
    }

    /// Recompute focus state for a pointer position. Shared between
    /// `pointer_move` and the post-scroll refresh.
    pub(crate) fn refresh_focus(&mut self, pixel_x: i32, pixel_y: i32) -> FocusChange {
        let cell = self.geometry.cell_at_pixel(pixel_x, pixel_y);
        let cell_changed = self.focused != Some(cell);
        if cell_changed {
            self.focused = Some(cell);
        }

        let tile = self.geometry.tile_at(self.scroll_offset, cell);
        let label = format!("Tile number: {tile}");
        let label_changed = self.focus_label.as_deref() != Some(label.as_str());
        if label_changed {
            self.focus_label = Some(label.clone());
        }

        if cell_changed || label_changed {
            self.needs_render = true;
        }
        FocusChange {
            cell_changed,
            label_changed,
            label,
        }
    }
}
