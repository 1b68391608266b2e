//! Scroll handling for `TileGridViewport`.
//!
//! Two entry paths with different clamp ranges: wheel events step one
//! column at a time within `[0, wheel_scroll_max]`, while the scrollbar
//! sets an absolute offset within `[0, scroll_maximum]`. Either way the
//! selection's viewport-relative coordinates go stale and are dropped,
//! and the focus label is refreshed for the pointer that hasn't moved.

use super::TileGridViewport;

impl TileGridViewport {
    /// Apply one wheel event: positive delta scrolls up (offset decreases),
    /// negative scrolls down. One column per event regardless of the delta
    /// magnitude, clamped at the range ends. A zero delta is a no-op.
    pub fn scroll_wheel(&mut self, delta: i32) {
        let offset = match delta {
            d if d > 0 => self.scroll_offset.saturating_sub(1),
            d if d < 0 => (self.scroll_offset + 1).min(self.geometry.wheel_scroll_max()),
            _ => return,
        };
        // A clamped step that lands on the same offset still invalidates
        // the selection, same as the scrollbar path.
        self.after_scroll(offset);
    }

    /// Set the scroll offset directly (scrollbar drag), clamped to
    /// `[0, scroll_maximum]`.
    pub fn set_scroll_offset(&mut self, value: u32) {
        self.after_scroll(value.min(self.geometry.scroll_maximum()));
    }

    fn after_scroll(&mut self, offset: u32) {
        self.scroll_offset = offset;
        self.selection.clear();
        if let Some((px, py)) = self.last_pointer {
            // The cell under the pointer is unchanged but its index is not
            self.refresh_focus(px, py);
        }
        self.needs_render = true;
    }
}
