//! Cursor / viewport controller.
//!
//! A `View` owns the logical cursor `(row, col)` and the viewport origin
//! `(first_visible_row, first_visible_col)`. Editing code moves the cursor
//! freely; [`View::reclamp`] then restores the invariants before anything is
//! rendered.
//!
//! Invariants after `reclamp` (given `line_count >= 1`):
//! * `row < line_count` and `col <= line_len(row)`.
//! * `first_visible_row <= row <= first_visible_row + rows - 1`.
//! * `first_visible_col <= col < first_visible_col + usable_cols`, where
//!   `usable_cols = cols - gutter_width` (at least one).
//! * `gutter_width == 1 + digit_count(line_count)`.
//!
//! `reclamp` is idempotent: a second call with the same inputs changes nothing.
//!
//! Coordinates are `usize`. Motions that would go negative saturate at zero
//! in the dispatcher; the scroll reset that a negative position would have
//! triggered follows from the "cursor above / left of window" rules, which
//! pull the origin back to the cursor.

use std::ops::RangeInclusive;

mod frame;
mod layout;
pub use frame::{Frame, FrameRow};
pub use layout::{HEADER_ROWS, Layout, Viewport};

/// Width of the line-number gutter for a buffer of `line_count` lines:
/// one separator column plus the digits of the largest line number.
pub fn gutter_width(line_count: usize) -> usize {
    1 + line_count.max(1).ilog10() as usize + 1
}

/// New viewport origin along one axis so `pos` sits inside `[first, first + extent)`.
///
/// Scrolling toward the start reveals `pos` at the first slot; scrolling
/// toward the end advances by exactly the overshoot so `pos` lands on the
/// last slot. Returns `first` unchanged when `pos` is already visible.
pub fn compute_scroll_intent(first: usize, pos: usize, extent: usize) -> usize {
    let extent = extent.max(1);
    if pos < first {
        pos
    } else if pos >= first + extent {
        pos + 1 - extent
    } else {
        first
    }
}

/// Logical cursor plus viewport origin for one buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    pub row: usize,
    pub col: usize,
    pub first_visible_row: usize,
    pub first_visible_col: usize,
    viewport: Viewport,
    gutter_width: usize,
}

impl Default for View {
    fn default() -> Self {
        Self::new(Viewport::default())
    }
}

impl View {
    /// Cursor at the origin with zero scroll.
    pub fn new(viewport: Viewport) -> Self {
        Self {
            row: 0,
            col: 0,
            first_visible_row: 0,
            first_visible_col: 0,
            viewport,
            gutter_width: gutter_width(1),
        }
    }

    /// Set the logical position. Does not reclamp.
    pub fn move_to(&mut self, row: usize, col: usize) {
        self.row = row;
        self.col = col;
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Gutter width computed by the last reclamp.
    pub fn gutter_width(&self) -> usize {
        self.gutter_width
    }

    /// Restore cursor and viewport invariants.
    ///
    /// `line_len_of(row)` is the column ceiling of `row`; the cursor may sit
    /// on the append position `line_len(row)` in either mode. Returns true
    /// when the viewport origin moved.
    pub fn reclamp<F>(&mut self, viewport: Viewport, line_count: usize, line_len_of: F) -> bool
    where
        F: Fn(usize) -> usize,
    {
        debug_assert!(line_count >= 1, "line store must hold at least one line");
        let line_count = line_count.max(1);
        self.viewport = viewport;
        self.gutter_width = gutter_width(line_count);
        let before = (self.first_visible_row, self.first_visible_col);

        // Row bound, then vertical scroll.
        if self.row >= line_count {
            self.row = line_count - 1;
        }
        self.first_visible_row =
            compute_scroll_intent(self.first_visible_row, self.row, viewport.text_rows());

        // Column bound, then horizontal scroll inside the area right of the gutter.
        let max_col = line_len_of(self.row);
        if self.col > max_col {
            self.col = max_col;
        }
        let usable = viewport
            .text_cols()
            .saturating_sub(self.gutter_width)
            .max(1);
        self.first_visible_col = compute_scroll_intent(self.first_visible_col, self.col, usable);

        let scrolled = before != (self.first_visible_row, self.first_visible_col);
        if scrolled {
            tracing::trace!(
                target: "model.reclamp",
                row = self.row,
                col = self.col,
                first_row = self.first_visible_row,
                first_col = self.first_visible_col,
                "viewport_scrolled"
            );
        }
        scrolled
    }

    /// Inclusive range of buffer rows to render.
    pub fn visible_slice(&self, line_count: usize) -> RangeInclusive<usize> {
        let last_line = line_count.max(1) - 1;
        let last_visible = self.first_visible_row + self.viewport.text_rows() - 1;
        self.first_visible_row..=last_visible.min(last_line)
    }

    /// Cursor position on screen as `(col, row)`; row 0 is the header.
    pub fn screen_position(&self) -> (u16, u16) {
        let col = self.col.saturating_sub(self.first_visible_col) + self.gutter_width;
        let row = self.row.saturating_sub(self.first_visible_row) + usize::from(HEADER_ROWS);
        (
            u16::try_from(col).unwrap_or(u16::MAX),
            u16::try_from(row).unwrap_or(u16::MAX),
        )
    }
}
