//! Text edit action handling.
//!
//! Insert-mode edits (char, newline, backspace, word delete, tab) and the
//! two structural Command-mode edits (`d` line delete, `p` paste). All
//! mutation goes through `LineStore` primitives so a bad index surfaces as a
//! `LineError` before anything is changed.

use super::DispatchResult;
use crate::EditKind;
use core_config::{EditorOptions, TabPolicy};
use core_model::View;
use core_state::EditorState;
use core_text::LineError;

pub(crate) fn handle_edit(
    kind: EditKind,
    state: &mut EditorState,
    view: &mut View,
    options: &EditorOptions,
) -> Result<DispatchResult, LineError> {
    let before = (view.row, view.col);
    let changed = match kind {
        EditKind::InsertChar(c) => {
            let mut buf = [0u8; 4];
            state.lines.insert_in_line(view.row, view.col, c.encode_utf8(&mut buf))?;
            view.col += 1;
            true
        }
        EditKind::Newline => {
            state.lines.insert_line(view.row + 1, "")?;
            view.move_to(view.row + 1, 0);
            true
        }
        EditKind::Backspace => backspace(state, view)?,
        EditKind::DeleteWordBack => delete_word_back(state, view)?,
        EditKind::Tab => {
            let tab = options.tab_text();
            match options.tab_policy {
                TabPolicy::Splice => state.lines.insert_in_line(view.row, view.col, &tab)?,
                TabPolicy::Append => state.lines.append_to_line(view.row, &tab)?,
            }
            view.col += options.tab_width;
            true
        }
    };
    tracing::trace!(target: "actions.dispatch", op = op_name(kind), row = before.0, col = before.1, to_row = view.row, to_col = view.col, "edit");
    Ok(finish(state, changed))
}

fn op_name(kind: EditKind) -> &'static str {
    match kind {
        EditKind::InsertChar(_) => "insert_char",
        EditKind::Newline => "insert_newline",
        EditKind::Backspace => "backspace",
        EditKind::DeleteWordBack => "delete_word_back",
        EditKind::Tab => "tab",
    }
}

fn finish(state: &mut EditorState, changed: bool) -> DispatchResult {
    if changed {
        state.mark_dirty();
        DispatchResult::dirty()
    } else {
        DispatchResult::clean()
    }
}

/// Join the cursor line onto the previous one, cursor at the seam.
fn join_with_previous(state: &mut EditorState, view: &mut View) -> Result<bool, LineError> {
    if view.row == 0 {
        return Ok(false);
    }
    let seam = state.lines.join_with_next(view.row - 1)?;
    view.move_to(view.row - 1, seam);
    Ok(true)
}

fn backspace(state: &mut EditorState, view: &mut View) -> Result<bool, LineError> {
    if view.col == 0 {
        return join_with_previous(state, view);
    }
    state.lines.remove_range(view.row, view.col - 1, 1)?;
    view.col -= 1;
    Ok(true)
}

/// Ctrl-W: delete back over trailing spaces and the word before them.
///
/// The cut lands just after the space that stops the backward scan, or at
/// column 0 when the scan reaches the line start. An empty line joins the
/// previous one instead; column 0 of a non-empty line is left alone.
fn delete_word_back(state: &mut EditorState, view: &mut View) -> Result<bool, LineError> {
    if state.lines.line_len(view.row) == 0 {
        return join_with_previous(state, view);
    }
    if view.col == 0 {
        return Ok(false);
    }
    let prefix: Vec<char> = state.lines.line(view.row).chars().take(view.col).collect();
    let mut cut = prefix.len();
    while cut > 0 && prefix[cut - 1] == ' ' {
        cut -= 1;
    }
    while cut > 0 && prefix[cut - 1] != ' ' {
        cut -= 1;
    }
    let removed = state.lines.remove_range(view.row, cut, prefix.len() - cut)?;
    view.col = cut;
    Ok(!removed.is_empty())
}

/// `d`: move the cursor line into the yank register.
pub(crate) fn delete_line(
    state: &mut EditorState,
    view: &mut View,
) -> Result<DispatchResult, LineError> {
    let removed = state.lines.remove_line(view.row)?;
    tracing::trace!(target: "actions.dispatch", op = "delete_line", row = view.row, len = removed.len(), "edit");
    state.registers.record_delete(removed);
    if state.lines.line_count() == 0 {
        state.lines.insert_line(0, "")?;
    }
    Ok(finish(state, true))
}

/// `p`: splice the yank register into the cursor line one column left of the cursor.
pub(crate) fn paste(state: &mut EditorState, view: &mut View) -> Result<DispatchResult, LineError> {
    if state.registers.unnamed().is_empty() {
        return Ok(DispatchResult::clean());
    }
    let at = view
        .col
        .saturating_sub(1)
        .min(state.lines.line_len(view.row));
    let payload = state.registers.unnamed().to_owned();
    state.lines.insert_in_line(view.row, at, &payload)?;
    tracing::trace!(target: "actions.dispatch", op = "paste", row = view.row, col = at, len = payload.len(), "edit");
    Ok(finish(state, true))
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_text::LineStore;

    fn state(lines: &[&str]) -> EditorState {
        EditorState::new(LineStore::from_lines(lines.iter().copied()))
    }

    fn at(row: usize, col: usize) -> View {
        let mut v = View::default();
        v.move_to(row, col);
        v
    }

    fn edit(kind: EditKind, st: &mut EditorState, v: &mut View) -> DispatchResult {
        handle_edit(kind, st, v, &EditorOptions::default()).unwrap()
    }

    #[test]
    fn insert_char_splices_and_advances() {
        let mut st = state(&["ac"]);
        let mut v = at(0, 1);
        edit(EditKind::InsertChar('b'), &mut st, &mut v);
        assert_eq!(st.lines.line(0), "abc");
        assert_eq!(v.col, 2);
        assert!(st.dirty);
    }

    #[test]
    fn newline_opens_empty_line_below() {
        let mut st = state(&["abcd", "z"]);
        let mut v = at(0, 1);
        edit(EditKind::Newline, &mut st, &mut v);
        assert_eq!(st.lines.to_text(), "abcd\n\nz");
        assert_eq!((v.row, v.col), (1, 0));
    }

    #[test]
    fn backspace_joins_at_line_start() {
        let mut st = state(&["ab", "cd"]);
        let mut v = at(1, 0);
        edit(EditKind::Backspace, &mut st, &mut v);
        assert_eq!(st.lines.to_text(), "abcd");
        assert_eq!((v.row, v.col), (0, 2));
    }

    #[test]
    fn backspace_at_origin_is_noop() {
        let mut st = state(&["ab"]);
        let mut v = at(0, 0);
        assert_eq!(edit(EditKind::Backspace, &mut st, &mut v), DispatchResult::clean());
        assert_eq!(st.lines.line(0), "ab");
        assert!(!st.dirty);
    }

    #[test]
    fn word_delete_steps() {
        let mut st = state(&["hello world"]);
        let mut v = at(0, 11);
        edit(EditKind::DeleteWordBack, &mut st, &mut v);
        assert_eq!(st.lines.line(0), "hello ");
        assert_eq!(v.col, 6);
        edit(EditKind::DeleteWordBack, &mut st, &mut v);
        assert_eq!(st.lines.line(0), "");
        assert_eq!(v.col, 0);
    }

    #[test]
    fn word_delete_only_cuts_left_of_cursor() {
        let mut st = state(&["one two three"]);
        let mut v = at(0, 7);
        edit(EditKind::DeleteWordBack, &mut st, &mut v);
        assert_eq!(st.lines.line(0), "one  three");
        assert_eq!(v.col, 4);
    }

    #[test]
    fn word_delete_single_word_clears() {
        let mut st = state(&["word"]);
        let mut v = at(0, 4);
        edit(EditKind::DeleteWordBack, &mut st, &mut v);
        assert_eq!(st.lines.line(0), "");
        assert_eq!(v.col, 0);
    }

    #[test]
    fn word_delete_clears_space_only_prefix() {
        let mut st = state(&["   "]);
        let mut v = at(0, 3);
        edit(EditKind::DeleteWordBack, &mut st, &mut v);
        assert_eq!(st.lines.line(0), "");
        assert_eq!(v.col, 0);
    }

    #[test]
    fn word_delete_keeps_leading_indent() {
        let mut st = state(&["  abc"]);
        let mut v = at(0, 5);
        edit(EditKind::DeleteWordBack, &mut st, &mut v);
        assert_eq!(st.lines.line(0), "  ");
        assert_eq!(v.col, 2);
    }

    #[test]
    fn word_delete_at_start_of_text_line_is_noop() {
        let mut st = state(&["abc", "def"]);
        let mut v = at(1, 0);
        assert_eq!(edit(EditKind::DeleteWordBack, &mut st, &mut v), DispatchResult::clean());
        assert_eq!(st.lines.to_text(), "abc\ndef");
        assert_eq!((v.row, v.col), (1, 0));
        assert!(!st.dirty);
    }

    #[test]
    fn word_delete_on_empty_line_joins_previous() {
        let mut st = state(&["abc", ""]);
        let mut v = at(1, 0);
        edit(EditKind::DeleteWordBack, &mut st, &mut v);
        assert_eq!(st.lines.to_text(), "abc");
        assert_eq!((v.row, v.col), (0, 3));
    }

    #[test]
    fn tab_policies() {
        let mut st = state(&["ab"]);
        let mut v = at(0, 1);
        edit(EditKind::Tab, &mut st, &mut v);
        assert_eq!(st.lines.line(0), "a    b");
        assert_eq!(v.col, 5);

        let append = EditorOptions {
            tab_width: 2,
            tab_policy: TabPolicy::Append,
        };
        let mut st = state(&["ab"]);
        let mut v = at(0, 0);
        handle_edit(EditKind::Tab, &mut st, &mut v, &append).unwrap();
        assert_eq!(st.lines.line(0), "ab  ");
        assert_eq!(v.col, 2);
    }

    #[test]
    fn delete_line_fills_register_and_keeps_one_line() {
        let mut st = state(&["only"]);
        let mut v = at(0, 2);
        delete_line(&mut st, &mut v).unwrap();
        assert_eq!(st.lines.line_count(), 1);
        assert_eq!(st.lines.line(0), "");
        assert_eq!(st.registers.unnamed(), "only");
    }

    #[test]
    fn paste_inserts_left_of_cursor() {
        let mut st = state(&["abc", "xyz"]);
        let mut v = at(1, 0);
        delete_line(&mut st, &mut v).unwrap();
        let mut v = at(0, 2);
        paste(&mut st, &mut v).unwrap();
        assert_eq!(st.lines.line(0), "axyzbc");
        let mut v = at(0, 0);
        paste(&mut st, &mut v).unwrap();
        assert_eq!(st.lines.line(0), "xyzaxyzbc");
    }

    #[test]
    fn paste_with_empty_register_is_clean() {
        let mut st = state(&["abc"]);
        let mut v = at(0, 1);
        assert_eq!(paste(&mut st, &mut v).unwrap(), DispatchResult::clean());
        assert_eq!(st.lines.line(0), "abc");
    }
}
