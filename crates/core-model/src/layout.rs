//! Screen geometry: how a terminal area divides into header and text rows.
//!
//! The top row is reserved for the mode header; everything below it is the
//! text viewport the cursor controller scrolls over. Dimensions are terminal
//! cells. A degenerate terminal (0 or 1 rows) still yields a one-row text
//! viewport so scroll arithmetic never divides the window into nothing.

/// Rows reserved above the text area for the mode header.
pub const HEADER_ROWS: u16 = 1;

/// Size of the text area (header excluded), in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub cols: u16,
    pub rows: u16,
}

impl Viewport {
    pub fn new(cols: u16, rows: u16) -> Self {
        Self { cols, rows }
    }

    /// Text rows, never less than one.
    pub fn text_rows(&self) -> usize {
        usize::from(self.rows.max(1))
    }

    /// Text columns including the gutter, never less than one.
    pub fn text_cols(&self) -> usize {
        usize::from(self.cols.max(1))
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(80, 23)
    }
}

/// Full terminal area split into header and text viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub width: u16,
    pub height: u16,
}

impl Layout {
    /// Layout for a terminal of `width` x `height` cells.
    pub fn single(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// The text viewport below the header row.
    pub fn text_viewport(&self) -> Viewport {
        Viewport::new(self.width, self.height.saturating_sub(HEADER_ROWS))
    }
}
