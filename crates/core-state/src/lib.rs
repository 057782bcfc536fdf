//! Editor state: line store, mode, yank register and buffer metadata.
//!
//! The cursor and scroll offsets live in `core_model::View`. A `Session` owns
//! exactly one `EditorState` and one `View`; nothing here is process-global.

use core_text::LineStore;
use std::path::Path;

/// Current editor mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Keystrokes are navigation / structural commands.
    #[default]
    Command,
    /// Keystrokes are literal text entry.
    Insert,
}

impl Mode {
    /// Label painted in the header row.
    pub fn label(self) -> &'static str {
        match self {
            Mode::Command => "NORMAL",
            Mode::Insert => "INSERT",
        }
    }
}

/// Yank storage. Line deletes land in the unnamed slot; paste reads it back.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Registers {
    unnamed: String,
}

impl Registers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record deleted text, replacing the previous payload.
    pub fn record_delete<S: Into<String>>(&mut self, text: S) {
        self.unnamed = text.into();
    }

    /// Current paste payload (may be empty).
    pub fn unnamed(&self) -> &str {
        &self.unnamed
    }
}

/// Top-level editable state of a single buffer.
#[derive(Debug, Clone)]
pub struct EditorState {
    pub lines: LineStore,
    pub mode: Mode,
    pub registers: Registers,
    pub dirty: bool,
}

impl EditorState {
    /// Create state over `lines` in Command mode.
    pub fn new(lines: LineStore) -> Self {
        Self {
            lines,
            mode: Mode::Command,
            registers: Registers::new(),
            dirty: false,
        }
    }

    /// Switch mode, tracing the transition.
    pub fn set_mode(&mut self, mode: Mode) {
        if self.mode != mode {
            tracing::trace!(target: "state.mode", from = self.mode.label(), to = mode.label(), "mode_change");
            self.mode = mode;
        }
    }

    /// Mark the buffer modified.
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Source file of the buffer, if it was loaded from disk.
    pub fn file_name(&self) -> Option<&Path> {
        self.lines.origin_path()
    }
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new(LineStore::new())
    }
}
