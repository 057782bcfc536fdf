//! Line store: the ordered, owned sequence of text lines behind a buffer.
//!
//! Columns are `char` indices into a line. A column `c` on a line of length
//! `n` addresses the character at `c` for `c < n`; `c == n` is the append
//! position. Byte offsets never leak out of this crate.
//!
//! Contract split:
//! * Mutating operations are strict. An index outside the valid range yields a
//!   [`LineError`] and leaves the store untouched.
//! * Read accessors (`line`, `line_len`) are defensive and return an empty
//!   string / zero for rows past the end, so a renderer or the reclamp pass
//!   can query a row before the cursor has been corrected.
//!
//! The store must never settle with zero lines. `remove_line` may transiently
//! empty it; the caller re-inserts an empty line before the keystroke ends.

use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Index contract violation on a mutating line operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LineError {
    #[error("row {row} out of range (line count {line_count})")]
    RowOutOfRange { row: usize, line_count: usize },
    #[error("column {col} out of range on row {row} (line length {line_len})")]
    ColumnOutOfRange {
        row: usize,
        col: usize,
        line_len: usize,
    },
}

pub type LineResult<T> = Result<T, LineError>;

/// Ordered, mutable sequence of text lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineStore {
    lines: Vec<String>,
    origin_path: Option<PathBuf>,
}

impl Default for LineStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Byte offset of char column `col` inside `line` (clamped to the line end).
fn byte_offset(line: &str, col: usize) -> usize {
    line.char_indices()
        .nth(col)
        .map(|(idx, _)| idx)
        .unwrap_or(line.len())
}

impl LineStore {
    /// A store holding a single empty line.
    pub fn new() -> Self {
        Self {
            lines: vec![String::new()],
            origin_path: None,
        }
    }

    /// Build a store from a text blob.
    ///
    /// `\n`, `\r\n` and a lone `\r` all terminate a line. A single trailing
    /// terminator does not produce an extra empty line; empty input yields
    /// one empty line.
    pub fn from_text(text: &str) -> Self {
        let mut lines = Vec::new();
        let mut current = String::new();
        let mut chars = text.chars().peekable();
        while let Some(ch) = chars.next() {
            match ch {
                '\r' => {
                    if chars.peek() == Some(&'\n') {
                        chars.next();
                    }
                    lines.push(std::mem::take(&mut current));
                }
                '\n' => lines.push(std::mem::take(&mut current)),
                _ => current.push(ch),
            }
        }
        if !current.is_empty() || lines.is_empty() {
            lines.push(current);
        }
        Self {
            lines,
            origin_path: None,
        }
    }

    /// Build a store from explicit lines; no lines gives `[""]`.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut lines: Vec<String> = lines.into_iter().map(Into::into).collect();
        if lines.is_empty() {
            lines.push(String::new());
        }
        Self {
            lines,
            origin_path: None,
        }
    }

    /// Attach the source file identity (informational only).
    pub fn with_origin(mut self, path: impl Into<PathBuf>) -> Self {
        self.origin_path = Some(path.into());
        self
    }

    pub fn origin_path(&self) -> Option<&Path> {
        self.origin_path.as_deref()
    }

    /// Current number of lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Number of chars on `row`; 0 when `row` is out of range.
    pub fn line_len(&self, row: usize) -> usize {
        self.lines.get(row).map_or(0, |l| l.chars().count())
    }

    /// Content of `row`; empty when `row` is out of range.
    pub fn line(&self, row: usize) -> &str {
        self.lines.get(row).map_or("", String::as_str)
    }

    /// `(row, text)` pairs for the rows in `range` that exist.
    pub fn rows(&self, range: RangeInclusive<usize>) -> impl Iterator<Item = (usize, &str)> {
        let (start, end) = range.into_inner();
        self.lines
            .iter()
            .enumerate()
            .skip(start)
            .take(end.saturating_add(1).saturating_sub(start))
            .map(|(row, line)| (row, line.as_str()))
    }

    /// Content joined with `\n`.
    pub fn to_text(&self) -> String {
        self.lines.join("\n")
    }

    fn check_row(&self, row: usize) -> LineResult<()> {
        if row < self.lines.len() {
            Ok(())
        } else {
            Err(LineError::RowOutOfRange {
                row,
                line_count: self.lines.len(),
            })
        }
    }

    fn check_col(&self, row: usize, col: usize) -> LineResult<()> {
        let line_len = self.line_len(row);
        if col <= line_len {
            Ok(())
        } else {
            Err(LineError::ColumnOutOfRange { row, col, line_len })
        }
    }

    /// Insert a new line at `row`; `row == line_count()` appends.
    pub fn insert_line(&mut self, row: usize, text: impl Into<String>) -> LineResult<()> {
        if row > self.lines.len() {
            return Err(LineError::RowOutOfRange {
                row,
                line_count: self.lines.len(),
            });
        }
        self.lines.insert(row, text.into());
        Ok(())
    }

    /// Overwrite line `row` wholesale.
    pub fn replace_line(&mut self, row: usize, text: impl Into<String>) -> LineResult<()> {
        self.check_row(row)?;
        self.lines[row] = text.into();
        Ok(())
    }

    /// Concatenate `text` onto the end of line `row`.
    pub fn append_to_line(&mut self, row: usize, text: &str) -> LineResult<()> {
        self.check_row(row)?;
        self.lines[row].push_str(text);
        Ok(())
    }

    /// Splice `text` into line `row` at char column `col`.
    ///
    /// An empty line takes `text` as its whole content whatever `col` is.
    pub fn insert_in_line(&mut self, row: usize, col: usize, text: &str) -> LineResult<()> {
        self.check_row(row)?;
        if self.lines[row].is_empty() {
            self.lines[row].push_str(text);
            return Ok(());
        }
        self.check_col(row, col)?;
        let line = &mut self.lines[row];
        let at = byte_offset(line, col);
        line.insert_str(at, text);
        Ok(())
    }

    /// Delete line `row` and return its content.
    ///
    /// Removing the only line leaves the store empty; the caller restores
    /// the one-line minimum.
    pub fn remove_line(&mut self, row: usize) -> LineResult<String> {
        self.check_row(row)?;
        Ok(self.lines.remove(row))
    }

    /// Delete up to `count` chars starting at `col` on `row`.
    ///
    /// Returns the removed text; a `col` outside `[0, line_len)` is a no-op
    /// returning an empty string.
    pub fn remove_range(&mut self, row: usize, col: usize, count: usize) -> LineResult<String> {
        self.check_row(row)?;
        let len = self.line_len(row);
        if col >= len || count == 0 {
            return Ok(String::new());
        }
        let end_col = col.saturating_add(count).min(len);
        let line = &mut self.lines[row];
        let start = byte_offset(line, col);
        let end = byte_offset(line, end_col);
        Ok(line.drain(start..end).collect())
    }

    /// Move the tail of `row` starting at `col` into a new line at `row + 1`.
    pub fn split_line(&mut self, row: usize, col: usize) -> LineResult<()> {
        self.check_row(row)?;
        self.check_col(row, col)?;
        let at = byte_offset(&self.lines[row], col);
        let tail = self.lines[row].split_off(at);
        self.lines.insert(row + 1, tail);
        Ok(())
    }

    /// Append line `row + 1` onto line `row`, removing it.
    ///
    /// Returns the length line `row` had before the join.
    pub fn join_with_next(&mut self, row: usize) -> LineResult<usize> {
        self.check_row(row)?;
        self.check_row(row + 1)?;
        let joined_at = self.line_len(row);
        let next = self.lines.remove(row + 1);
        self.lines[row].push_str(&next);
        Ok(joined_at)
    }
}
