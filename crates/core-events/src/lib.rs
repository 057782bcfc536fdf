//! Input event model for rivet.
//!
//! The editor core consumes a single blocking stream of [`InputEvent`]s.
//! Terminal backends translate their native events into this model so the
//! core crates never depend on a terminal library.

use std::collections::VecDeque;
use std::fmt;

/// One event delivered to the editing session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    Key(KeyEvent),
    /// Terminal resize (columns, rows), full terminal area.
    Resize(u16, u16),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyEvent {
    pub code: KeyCode,
    pub mods: KeyModifiers,
}

impl KeyEvent {
    pub fn new(code: KeyCode, mods: KeyModifiers) -> Self {
        Self { code, mods }
    }

    /// Unmodified key.
    pub fn plain(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::empty())
    }

    /// Literal character without modifiers.
    pub fn char(c: char) -> Self {
        Self::plain(KeyCode::Char(c))
    }

    /// Control chord such as Ctrl-C.
    pub fn ctrl(c: char) -> Self {
        Self::new(KeyCode::Char(c), KeyModifiers::CTRL)
    }

    /// True for `Char(c)` with CTRL held (case-insensitive).
    pub fn is_ctrl(&self, c: char) -> bool {
        self.mods.contains(KeyModifiers::CTRL)
            && matches!(self.code, KeyCode::Char(k) if k.eq_ignore_ascii_case(&c))
    }
}

impl From<KeyEvent> for InputEvent {
    fn from(k: KeyEvent) -> Self {
        InputEvent::Key(k)
    }
}

/// Logical keys the editor understands. Anything else is dropped by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    Char(char),
    Enter,
    Esc,
    Backspace,
    Tab,
}

bitflags::bitflags! {
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct KeyModifiers: u8 {
        const CTRL = 0b0000_0001;
        const ALT  = 0b0000_0010;
        const SHIFT= 0b0000_0100;
    }
}

impl fmt::Display for KeyEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}{:?}", self.code, self.mods)
    }
}

/// Blocking source of input events.
///
/// Implementations block until an event is available. An `Err` means the
/// source is unusable and the caller should stop reading.
pub trait InputSource {
    fn next_event(&mut self) -> anyhow::Result<InputEvent>;
}

/// Pre-recorded event queue, for driving a session without a terminal.
#[derive(Debug, Default, Clone)]
pub struct ScriptedInput {
    events: VecDeque<InputEvent>,
}

impl ScriptedInput {
    pub fn new<I>(events: I) -> Self
    where
        I: IntoIterator<Item = InputEvent>,
    {
        Self {
            events: events.into_iter().collect(),
        }
    }

    /// Script of plain keys, one per character; `\n` maps to Enter.
    pub fn from_keys(keys: &str) -> Self {
        Self::new(keys.chars().map(|c| {
            let code = if c == '\n' { KeyCode::Enter } else { KeyCode::Char(c) };
            InputEvent::Key(KeyEvent::plain(code))
        }))
    }

    pub fn push(&mut self, ev: impl Into<InputEvent>) {
        self.events.push_back(ev.into());
    }

    pub fn remaining(&self) -> usize {
        self.events.len()
    }
}

impl InputSource for ScriptedInput {
    fn next_event(&mut self) -> anyhow::Result<InputEvent> {
        match self.events.pop_front() {
            Some(ev) => {
                tracing::trace!(target: "input", remaining = self.events.len(), "scripted_event");
                Ok(ev)
            }
            None => anyhow::bail!("scripted input exhausted"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_event_display() {
        let k = KeyEvent {
            code: KeyCode::Char('x'),
            mods: KeyModifiers::CTRL,
        };
        let s = format!("{}", k);
        assert!(s.contains("Char"));
    }

    #[test]
    fn ctrl_matching_ignores_case() {
        assert!(KeyEvent::ctrl('c').is_ctrl('c'));
        assert!(KeyEvent::ctrl('C').is_ctrl('c'));
        assert!(!KeyEvent::char('c').is_ctrl('c'));
        assert!(!KeyEvent::ctrl('w').is_ctrl('c'));
    }

    #[test]
    fn scripted_input_drains_in_order() {
        let mut src = ScriptedInput::from_keys("a\n");
        src.push(InputEvent::Resize(10, 5));
        assert_eq!(src.remaining(), 3);
        assert_eq!(src.next_event().unwrap(), InputEvent::Key(KeyEvent::char('a')));
        assert_eq!(
            src.next_event().unwrap(),
            InputEvent::Key(KeyEvent::plain(KeyCode::Enter))
        );
        assert_eq!(src.next_event().unwrap(), InputEvent::Resize(10, 5));
        assert!(src.next_event().is_err());
    }
}
