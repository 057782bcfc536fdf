//! Crossterm-backed render surface.
//!
//! Paints are recorded as commands and only written on `present`, so a frame
//! reaches the terminal in one flush. Consecutive cells on the same row with
//! the same style coalesce into a single `Print`.
//!
//! Invariants:
//! * Commands preserve ordering; nothing is written mid-frame.
//! * Positions are absolute with a (0,0) origin; `paint_frame` keeps them in bounds.
//! * The hardware cursor is hidden while a frame is written and shown at the
//!   frame cursor afterwards.

use crate::{RenderSurface, Style};
use anyhow::Result;
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    queue,
    style::{Attribute, Colors, Print, SetAttribute, SetColors},
};
use std::io::{Stdout, Write, stdout};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    MoveTo(u16, u16),
    SetStyle(Style),
    Print(String),
}

pub struct CrosstermSurface<W: Write = Stdout> {
    out: W,
    size: (u16, u16),
    cmds: Vec<Command>,
    /// Where the next coalesced char would land, plus the active style.
    pen: Option<(u16, u16, Style)>,
    cursor: (u16, u16),
}

impl CrosstermSurface<Stdout> {
    pub fn stdout(cols: u16, rows: u16) -> Self {
        Self::new(stdout(), cols, rows)
    }
}

impl<W: Write> CrosstermSurface<W> {
    pub fn new(out: W, cols: u16, rows: u16) -> Self {
        Self {
            out,
            size: (cols, rows),
            cmds: Vec::new(),
            pen: None,
            cursor: (0, 0),
        }
    }

    #[cfg(test)]
    fn pending_commands(&self) -> usize {
        self.cmds.len()
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self) -> Result<()> {
        queue!(self.out, Hide)?;
        for cmd in self.cmds.drain(..) {
            match cmd {
                Command::MoveTo(x, y) => queue!(self.out, MoveTo(x, y))?,
                Command::SetStyle(style) => {
                    let (fg, bg) = style.colors();
                    queue!(self.out, SetAttribute(Attribute::Reset), SetColors(Colors::new(fg, bg)))?;
                    if style.bold() {
                        queue!(self.out, SetAttribute(Attribute::Bold))?;
                    }
                }
                Command::Print(s) => queue!(self.out, Print(s))?,
            }
        }
        let (x, y) = self.cursor;
        queue!(self.out, SetAttribute(Attribute::Reset), MoveTo(x, y), Show)?;
        self.out.flush()?;
        Ok(())
    }
}

impl<W: Write> RenderSurface for CrosstermSurface<W> {
    fn viewport_size(&self) -> (u16, u16) {
        self.size
    }

    fn paint(&mut self, col: u16, row: u16, ch: char, style: Style) -> Result<()> {
        match self.pen {
            Some((x, y, s)) if x == col && y == row && s == style => {
                if let Some(Command::Print(run)) = self.cmds.last_mut() {
                    run.push(ch);
                } else {
                    self.cmds.push(Command::Print(ch.to_string()));
                }
            }
            pen => {
                if !matches!(pen, Some((x, y, _)) if x == col && y == row) {
                    self.cmds.push(Command::MoveTo(col, row));
                }
                if !matches!(pen, Some((_, _, s)) if s == style) {
                    self.cmds.push(Command::SetStyle(style));
                }
                self.cmds.push(Command::Print(ch.to_string()));
            }
        }
        self.pen = Some((col.saturating_add(1), row, style));
        Ok(())
    }

    fn set_cursor(&mut self, col: u16, row: u16) -> Result<()> {
        self.cursor = (col, row);
        Ok(())
    }

    fn present(&mut self) -> Result<()> {
        let queued = self.cmds.len();
        self.emit()?;
        self.pen = None;
        tracing::trace!(target: "render", queued, "present");
        Ok(())
    }

    fn resize(&mut self, cols: u16, rows: u16) {
        self.size = (cols, rows);
        self.cmds.clear();
        self.pen = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint_frame;
    use core_model::{Frame, FrameRow};

    #[test]
    fn same_style_run_coalesces() {
        let mut s = CrosstermSurface::new(Vec::new(), 10, 2);
        for (i, ch) in "abc".chars().enumerate() {
            s.paint(i as u16, 0, ch, Style::Text).unwrap();
        }
        // MoveTo + SetStyle + one Print
        assert_eq!(s.pending_commands(), 3);
        s.paint(5, 0, 'z', Style::Text).unwrap();
        assert_eq!(s.pending_commands(), 5);
        s.paint(6, 0, 'y', Style::Gutter).unwrap();
        assert_eq!(s.pending_commands(), 7);
    }

    #[test]
    fn present_writes_text_and_clears_queue() {
        let mut s = CrosstermSurface::new(Vec::new(), 12, 3);
        let frame = Frame {
            header: "INSERT".into(),
            gutter_width: 2,
            rows: vec![FrameRow {
                number: 1,
                text: "hello".into(),
            }],
            cursor: (7, 1),
        };
        paint_frame(&mut s, &frame).unwrap();
        assert_eq!(s.pending_commands(), 0);
        let bytes = s.into_inner();
        let out = String::from_utf8_lossy(&bytes);
        assert!(out.contains("INSERT"));
        assert!(out.contains("hello"));
        assert!(out.contains("1 "));
    }
}
