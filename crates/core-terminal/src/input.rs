//! Blocking crossterm input source.

use anyhow::{Context, Result};
use core_events::{InputEvent, InputSource, KeyCode, KeyEvent, KeyModifiers};
use crossterm::event::{self, Event, KeyEventKind};

/// Translate a crossterm event; `None` for events the editor ignores
/// (key releases, mouse, focus, paste, unsupported keys).
pub fn map_event(ev: Event) -> Option<InputEvent> {
    match ev {
        Event::Key(key) => {
            if key.kind == KeyEventKind::Release {
                return None;
            }
            let code = match key.code {
                event::KeyCode::Char(c) => KeyCode::Char(c),
                event::KeyCode::Enter => KeyCode::Enter,
                event::KeyCode::Esc => KeyCode::Esc,
                event::KeyCode::Backspace => KeyCode::Backspace,
                event::KeyCode::Tab => KeyCode::Tab,
                _ => return None,
            };
            let mut mods = KeyModifiers::empty();
            if key.modifiers.contains(event::KeyModifiers::CONTROL) {
                mods |= KeyModifiers::CTRL;
            }
            if key.modifiers.contains(event::KeyModifiers::ALT) {
                mods |= KeyModifiers::ALT;
            }
            if key.modifiers.contains(event::KeyModifiers::SHIFT) {
                mods |= KeyModifiers::SHIFT;
            }
            Some(InputEvent::Key(KeyEvent::new(code, mods)))
        }
        Event::Resize(cols, rows) => Some(InputEvent::Resize(cols, rows)),
        _ => None,
    }
}

/// Reads the controlling terminal with `crossterm::event::read`.
#[derive(Debug, Default)]
pub struct CrosstermInput {
    skipped: u64,
}

impl CrosstermInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Events read and dropped because they have no editor meaning.
    pub fn skipped(&self) -> u64 {
        self.skipped
    }
}

impl InputSource for CrosstermInput {
    fn next_event(&mut self) -> Result<InputEvent> {
        loop {
            let raw = event::read().context("read terminal event")?;
            match map_event(raw) {
                Some(ev) => return Ok(ev),
                None => {
                    self.skipped += 1;
                    tracing::trace!(target: "input", skipped = self.skipped, "event_skipped");
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent as CtKey, KeyEventState};

    fn key(code: event::KeyCode, mods: event::KeyModifiers) -> Event {
        Event::Key(CtKey::new(code, mods))
    }

    #[test]
    fn maps_supported_keys() {
        assert_eq!(
            map_event(key(event::KeyCode::Char('x'), event::KeyModifiers::NONE)),
            Some(InputEvent::Key(KeyEvent::char('x')))
        );
        assert_eq!(
            map_event(key(event::KeyCode::Esc, event::KeyModifiers::NONE)),
            Some(InputEvent::Key(KeyEvent::plain(KeyCode::Esc)))
        );
        assert_eq!(
            map_event(key(event::KeyCode::Backspace, event::KeyModifiers::NONE)),
            Some(InputEvent::Key(KeyEvent::plain(KeyCode::Backspace)))
        );
    }

    #[test]
    fn maps_control_chords() {
        let ev = map_event(key(event::KeyCode::Char('c'), event::KeyModifiers::CONTROL));
        assert_eq!(ev, Some(InputEvent::Key(KeyEvent::ctrl('c'))));
        let ev = map_event(key(
            event::KeyCode::Char('W'),
            event::KeyModifiers::CONTROL | event::KeyModifiers::SHIFT,
        ));
        let Some(InputEvent::Key(k)) = ev else {
            panic!("expected key event");
        };
        assert!(k.is_ctrl('w'));
        assert!(k.mods.contains(KeyModifiers::SHIFT));
    }

    #[test]
    fn maps_resize() {
        assert_eq!(map_event(Event::Resize(100, 40)), Some(InputEvent::Resize(100, 40)));
    }

    #[test]
    fn ignores_releases_and_unsupported_keys() {
        let release = Event::Key(CtKey {
            code: event::KeyCode::Char('a'),
            modifiers: event::KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });
        assert_eq!(map_event(release), None);
        assert_eq!(map_event(key(event::KeyCode::F(1), event::KeyModifiers::NONE)), None);
        assert_eq!(map_event(key(event::KeyCode::Up, event::KeyModifiers::NONE)), None);
        assert_eq!(map_event(Event::FocusGained), None);
    }
}
