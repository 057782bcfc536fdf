//! Frame painting over an abstract cell surface.
//!
//! [`paint_frame`] turns a [`Frame`] projection into cell writes on any
//! [`RenderSurface`]. Every cell of the surface is written exactly once per
//! frame (header row, then one row per visible line, then background fill),
//! so no separate clear pass is needed and stale text never survives a
//! shorter line.
//!
//! Surfaces:
//! - [`CrosstermSurface`]: batches terminal commands and flushes on `present`.
//! - [`GridSurface`]: in-memory grid for tests and headless runs.

use anyhow::Result;
use core_model::Frame;

mod grid;
pub mod style;
mod writer;

pub use grid::GridSurface;
pub use style::Style;
pub use writer::CrosstermSurface;

/// Cell-addressed drawing target.
pub trait RenderSurface {
    /// Surface size as `(cols, rows)`.
    fn viewport_size(&self) -> (u16, u16);
    fn paint(&mut self, col: u16, row: u16, ch: char, style: Style) -> Result<()>;
    fn set_cursor(&mut self, col: u16, row: u16) -> Result<()>;
    /// Make everything painted since the last call visible.
    fn present(&mut self) -> Result<()>;
    /// Adopt a new size after a terminal resize.
    fn resize(&mut self, _cols: u16, _rows: u16) {}
}

/// Paint `text` from `start` on `row`, clipped to `cols`; returns the next free column.
fn paint_run<S: RenderSurface + ?Sized>(
    surface: &mut S,
    row: u16,
    start: u16,
    cols: u16,
    text: &str,
    style: Style,
) -> Result<u16> {
    let mut col = start;
    for ch in text.chars() {
        if col >= cols {
            break;
        }
        surface.paint(col, row, ch, style)?;
        col += 1;
    }
    Ok(col)
}

fn fill<S: RenderSurface + ?Sized>(
    surface: &mut S,
    row: u16,
    from: u16,
    cols: u16,
    style: Style,
) -> Result<()> {
    for col in from..cols {
        surface.paint(col, row, ' ', style)?;
    }
    Ok(())
}

/// Paint one full frame and present it.
pub fn paint_frame<S: RenderSurface + ?Sized>(surface: &mut S, frame: &Frame) -> Result<()> {
    let (cols, rows) = surface.viewport_size();
    if cols == 0 || rows == 0 {
        return surface.present();
    }

    let end = paint_run(surface, 0, 0, cols, &frame.header, Style::Header)?;
    fill(surface, 0, end, cols, Style::Header)?;

    let mut y: u16 = 1;
    for line in &frame.rows {
        if y >= rows {
            break;
        }
        let label = frame.gutter_label(line.number);
        let end = paint_run(surface, y, 0, cols, &label, Style::Gutter)?;
        let end = paint_run(surface, y, end, cols, &line.text, Style::Text)?;
        fill(surface, y, end, cols, Style::Text)?;
        y += 1;
    }
    while y < rows {
        fill(surface, y, 0, cols, Style::Background)?;
        y += 1;
    }

    let (cx, cy) = frame.cursor;
    surface.set_cursor(cx.min(cols - 1), cy.min(rows - 1))?;
    tracing::trace!(target: "render", cols, rows, lines = frame.rows.len(), cursor_col = cx, cursor_row = cy, "frame_painted");
    surface.present()
}
