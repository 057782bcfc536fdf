//! Dispatcher applying `Action` to mutable editor state.
//!
//! Sub-modules:
//! * `motion` - cursor movement
//! * `mode`   - Command <-> Insert transitions, including `o` / `O`
//! * `edit`   - text mutation (insert, newline, backspace, word delete, tab,
//!   line delete, paste)
//!
//! Handlers move the cursor freely and may leave it past a line end; the
//! caller reclamps after every dispatch. Line store failures propagate as
//! `LineError` and abandon the rest of the action.

use crate::Action;
use core_config::EditorOptions;
use core_model::View;
use core_state::EditorState;
use core_text::LineError;

mod edit;
mod mode;
mod motion;

/// Result of dispatching a single `Action`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchResult {
    pub dirty: bool,
    pub quit: bool,
}

impl DispatchResult {
    pub fn dirty() -> Self {
        Self {
            dirty: true,
            quit: false,
        }
    }
    pub fn clean() -> Self {
        Self {
            dirty: false,
            quit: false,
        }
    }
    pub fn quit() -> Self {
        Self {
            dirty: true,
            quit: true,
        }
    }
}

/// Apply an action to editor state. Returns `DispatchResult` describing whether
/// a render is needed (`dirty`) or the editor should exit (`quit`).
pub fn dispatch(
    action: Action,
    state: &mut EditorState,
    view: &mut View,
    options: &EditorOptions,
) -> Result<DispatchResult, LineError> {
    match action {
        Action::Motion(kind) => Ok(motion::handle_motion(kind, state, view)),
        Action::ModeChange(mc) => mode::handle_mode_change(mc, state, view),
        Action::Edit(kind) => edit::handle_edit(kind, state, view, options),
        Action::DeleteLine => edit::delete_line(state, view),
        Action::Paste => edit::paste(state, view),
        Action::Quit => {
            tracing::debug!(target: "actions.dispatch", "quit_requested");
            Ok(DispatchResult::quit())
        }
    }
}
