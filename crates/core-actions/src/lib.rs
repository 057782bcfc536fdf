//! Key translation, action dispatch and the editing session.
//!
//! Flow per keystroke: [`translate_key`] maps a `KeyEvent` in the current
//! `Mode` to an [`Action`]; [`dispatcher::dispatch`] applies it to the
//! `EditorState` and `View`; [`Session`] wraps both steps and always finishes
//! with a reclamp so the cursor and viewport are valid before rendering.

pub mod dispatcher;
mod key_translator;
mod session;

pub use core_text::LineError;
pub use dispatcher::{DispatchResult, dispatch};
pub use key_translator::translate_key;
pub use session::Session;

/// Semantic editor action produced from a key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Motion(MotionKind),
    ModeChange(ModeChange),
    Edit(EditKind),
    /// Remove the cursor line into the yank register.
    DeleteLine,
    /// Insert the yank register into the cursor line.
    Paste,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionKind {
    Left,
    Right,
    Up,
    Down,
    BufferStart,
    BufferEnd,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeChange {
    /// `i`: insert at the cursor.
    EnterInsert,
    /// `I`: insert at column 0.
    EnterInsertLineStart,
    /// `a`: insert after the cursor.
    EnterInsertAfter,
    /// `A`: insert at the end of the line.
    EnterInsertLineEnd,
    /// `o`: open an empty line below.
    OpenBelow,
    /// `O`: open an empty line above.
    OpenAbove,
    LeaveInsert,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditKind {
    InsertChar(char),
    Newline,
    Backspace,
    /// Ctrl-W.
    DeleteWordBack,
    Tab,
}
