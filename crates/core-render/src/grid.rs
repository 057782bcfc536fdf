//! In-memory cell grid surface.

use crate::{RenderSurface, Style};
use anyhow::{Result, bail};

#[derive(Debug, Clone)]
pub struct GridSurface {
    cols: u16,
    rows: u16,
    cells: Vec<(char, Style)>,
    cursor: (u16, u16),
    presents: u64,
}

impl GridSurface {
    pub fn new(cols: u16, rows: u16) -> Self {
        Self {
            cols,
            rows,
            cells: vec![(' ', Style::Background); usize::from(cols) * usize::from(rows)],
            cursor: (0, 0),
            presents: 0,
        }
    }

    fn index(&self, col: u16, row: u16) -> Option<usize> {
        (col < self.cols && row < self.rows)
            .then(|| usize::from(row) * usize::from(self.cols) + usize::from(col))
    }

    /// Characters of `row` as a string; empty for rows outside the grid.
    pub fn row_text(&self, row: u16) -> String {
        if row >= self.rows {
            return String::new();
        }
        let start = usize::from(row) * usize::from(self.cols);
        self.cells[start..start + usize::from(self.cols)]
            .iter()
            .map(|(ch, _)| *ch)
            .collect()
    }

    pub fn style_at(&self, col: u16, row: u16) -> Option<Style> {
        self.index(col, row).map(|i| self.cells[i].1)
    }

    pub fn cursor(&self) -> (u16, u16) {
        self.cursor
    }

    /// Number of `present` calls so far.
    pub fn presents(&self) -> u64 {
        self.presents
    }
}

impl RenderSurface for GridSurface {
    fn viewport_size(&self) -> (u16, u16) {
        (self.cols, self.rows)
    }

    fn paint(&mut self, col: u16, row: u16, ch: char, style: Style) -> Result<()> {
        let Some(i) = self.index(col, row) else {
            bail!("cell ({col}, {row}) outside {}x{} grid", self.cols, self.rows);
        };
        self.cells[i] = (ch, style);
        Ok(())
    }

    fn set_cursor(&mut self, col: u16, row: u16) -> Result<()> {
        if self.index(col, row).is_none() {
            bail!("cursor ({col}, {row}) outside {}x{} grid", self.cols, self.rows);
        }
        self.cursor = (col, row);
        Ok(())
    }

    fn present(&mut self) -> Result<()> {
        self.presents += 1;
        Ok(())
    }

    fn resize(&mut self, cols: u16, rows: u16) {
        let presents = self.presents;
        *self = Self::new(cols, rows);
        self.presents = presents;
    }
}
