//! Mode transition handling (Command <-> Insert).
//!
//! `o` and `O` live here because they are insert entries that happen to
//! open a line first.

use super::DispatchResult;
use crate::ModeChange;
use core_model::View;
use core_state::{EditorState, Mode};
use core_text::LineError;

pub(crate) fn handle_mode_change(
    mc: ModeChange,
    state: &mut EditorState,
    view: &mut View,
) -> Result<DispatchResult, LineError> {
    match mc {
        ModeChange::EnterInsert => {}
        ModeChange::EnterInsertLineStart => view.col = 0,
        ModeChange::EnterInsertAfter => view.col += 1,
        ModeChange::EnterInsertLineEnd => view.col = state.lines.line_len(view.row),
        ModeChange::OpenBelow => {
            state.lines.insert_line(view.row + 1, "")?;
            view.move_to(view.row + 1, 0);
            state.mark_dirty();
        }
        ModeChange::OpenAbove => {
            state.lines.insert_line(view.row, "")?;
            view.col = 0;
            state.mark_dirty();
        }
        ModeChange::LeaveInsert => {
            state.set_mode(Mode::Command);
            return Ok(DispatchResult::dirty());
        }
    }
    tracing::trace!(target: "actions.dispatch", op = ?mc, row = view.row, col = view.col, "enter_insert");
    state.set_mode(Mode::Insert);
    Ok(DispatchResult::dirty())
}
