#![allow(dead_code)] // Shared across several integration tests; each test binary uses a subset of helpers.

use core_actions::{DispatchResult, Session};
use core_config::EditorOptions;
use core_events::{InputEvent, KeyCode, KeyEvent};
use core_model::Viewport;
use core_state::EditorState;
use core_text::LineStore;

pub fn session(lines: &[&str]) -> Session {
    session_with(lines, EditorOptions::default())
}

pub fn session_with(lines: &[&str], options: EditorOptions) -> Session {
    let state = EditorState::new(LineStore::from_lines(lines.iter().copied()));
    Session::new(state, options).with_viewport(Viewport::new(80, 20))
}

pub fn esc() -> KeyEvent {
    KeyEvent::plain(KeyCode::Esc)
}

pub fn enter() -> KeyEvent {
    KeyEvent::plain(KeyCode::Enter)
}

pub fn backspace() -> KeyEvent {
    KeyEvent::plain(KeyCode::Backspace)
}

pub fn tab() -> KeyEvent {
    KeyEvent::plain(KeyCode::Tab)
}

/// Feed one key, panicking on a line store error.
pub fn press(s: &mut Session, key: KeyEvent) -> DispatchResult {
    s.handle(&InputEvent::Key(key)).expect("dispatch failed")
}

/// Feed each char of `keys` as a plain key.
pub fn type_keys(s: &mut Session, keys: &str) {
    for c in keys.chars() {
        press(s, KeyEvent::char(c));
    }
}

pub fn lines(s: &Session) -> Vec<String> {
    let store = &s.state().lines;
    (0..store.line_count())
        .map(|row| store.line(row).to_string())
        .collect()
}
