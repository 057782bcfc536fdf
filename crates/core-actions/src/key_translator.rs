//! Stateless key -> `Action` translation.
//!
//! Command mode maps single letters to motions, structural edits and insert
//! entry; Insert mode maps control keys to edits and passes every other
//! printable char through as literal text. Keys with no binding in the
//! current mode translate to `None` and the session still reclamps.

use crate::{Action, EditKind, ModeChange, MotionKind};
use core_events::{KeyCode, KeyEvent, KeyModifiers};
use core_state::Mode;

pub fn translate_key(mode: Mode, key: &KeyEvent) -> Option<Action> {
    let action = match mode {
        Mode::Command => command_map(key),
        Mode::Insert => insert_map(key),
    };
    if action.is_none() {
        tracing::trace!(target: "actions.dispatch", mode = mode.label(), key = %key, "unbound_key");
    }
    action
}

fn command_map(key: &KeyEvent) -> Option<Action> {
    if key.is_ctrl('c') {
        return Some(Action::Quit);
    }
    if key.mods.intersects(KeyModifiers::CTRL | KeyModifiers::ALT) {
        return None;
    }
    let KeyCode::Char(c) = key.code else {
        return None;
    };
    match c {
        'h' => Some(Action::Motion(MotionKind::Left)),
        'l' => Some(Action::Motion(MotionKind::Right)),
        'j' => Some(Action::Motion(MotionKind::Down)),
        'k' => Some(Action::Motion(MotionKind::Up)),
        'g' => Some(Action::Motion(MotionKind::BufferStart)),
        'G' => Some(Action::Motion(MotionKind::BufferEnd)),
        'd' => Some(Action::DeleteLine),
        'p' => Some(Action::Paste),
        'i' => Some(Action::ModeChange(ModeChange::EnterInsert)),
        'I' => Some(Action::ModeChange(ModeChange::EnterInsertLineStart)),
        'a' => Some(Action::ModeChange(ModeChange::EnterInsertAfter)),
        'A' => Some(Action::ModeChange(ModeChange::EnterInsertLineEnd)),
        'o' => Some(Action::ModeChange(ModeChange::OpenBelow)),
        'O' => Some(Action::ModeChange(ModeChange::OpenAbove)),
        _ => None,
    }
}

fn insert_map(key: &KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Esc => Some(Action::ModeChange(ModeChange::LeaveInsert)),
        KeyCode::Enter => Some(Action::Edit(EditKind::Newline)),
        KeyCode::Backspace => Some(Action::Edit(EditKind::Backspace)),
        KeyCode::Tab => Some(Action::Edit(EditKind::Tab)),
        KeyCode::Char(_) if key.is_ctrl('w') => Some(Action::Edit(EditKind::DeleteWordBack)),
        KeyCode::Char(_) if key.mods.intersects(KeyModifiers::CTRL | KeyModifiers::ALT) => None,
        KeyCode::Char(c) if !c.is_control() => Some(Action::Edit(EditKind::InsertChar(c))),
        KeyCode::Char(_) => None,
    }
}
