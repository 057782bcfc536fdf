//! Motion sub-dispatch (cursor movement).
//!
//! Horizontal motions saturate at column 0 and may overshoot the line end;
//! the reclamp that follows every dispatch pulls the column back. Vertical
//! motions stop at the first / last line and clamp the column to the new
//! line immediately.

use super::DispatchResult;
use crate::MotionKind;
use core_model::View;
use core_state::EditorState;

pub(crate) fn handle_motion(
    kind: MotionKind,
    state: &EditorState,
    view: &mut View,
) -> DispatchResult {
    let before = (view.row, view.col);
    let lines = &state.lines;
    match kind {
        MotionKind::Left => view.col = view.col.saturating_sub(1),
        MotionKind::Right => view.col += 1,
        MotionKind::Down => {
            if view.row + 1 < lines.line_count() {
                view.row += 1;
                view.col = view.col.min(lines.line_len(view.row));
            }
        }
        MotionKind::Up => {
            if view.row > 0 {
                view.row -= 1;
                view.col = view.col.min(lines.line_len(view.row));
            }
        }
        MotionKind::BufferStart => view.move_to(0, 0),
        MotionKind::BufferEnd => {
            let last = lines.line_count().saturating_sub(1);
            view.move_to(last, lines.line_len(last));
        }
    }
    tracing::trace!(target: "actions.dispatch", op = ?kind, row = before.0, col = before.1, to_row = view.row, to_col = view.col, "motion");
    if before != (view.row, view.col) {
        DispatchResult::dirty()
    } else {
        DispatchResult::clean()
    }
}
