//! One editing unit: buffer state, cursor view and options.
//!
//! `Session::handle` is the per-event transaction. It translates and
//! dispatches key events, applies resizes, and reclamps the view before
//! returning, whether the dispatch succeeded, failed or matched no binding.

use crate::{DispatchResult, dispatch, translate_key};
use core_config::EditorOptions;
use core_events::InputEvent;
use core_model::{Frame, FrameRow, Layout, View, Viewport};
use core_state::{EditorState, Mode};
use core_text::LineError;

#[derive(Debug, Clone)]
pub struct Session {
    state: EditorState,
    view: View,
    options: EditorOptions,
}

impl Session {
    pub fn new(state: EditorState, options: EditorOptions) -> Self {
        let mut session = Self {
            state,
            view: View::default(),
            options,
        };
        session.settle();
        session
    }

    /// Replace the text viewport (header already excluded).
    pub fn with_viewport(mut self, viewport: Viewport) -> Self {
        self.set_viewport(viewport);
        self
    }

    /// Apply a full terminal size; one row goes to the header.
    pub fn resize(&mut self, cols: u16, rows: u16) {
        let viewport = Layout::single(cols, rows).text_viewport();
        tracing::debug!(target: "actions.session", cols, rows, text_rows = viewport.rows, "resize");
        self.set_viewport(viewport);
    }

    fn set_viewport(&mut self, viewport: Viewport) {
        let lines = &self.state.lines;
        self.view
            .reclamp(viewport, lines.line_count(), |row| lines.line_len(row));
    }

    fn settle(&mut self) {
        self.set_viewport(self.view.viewport());
    }

    /// Process one input event.
    ///
    /// A `LineError` abandons the rest of the keystroke; the view is still
    /// reclamped so the session stays consistent for the next event.
    pub fn handle(&mut self, event: &InputEvent) -> Result<DispatchResult, LineError> {
        let key = match event {
            InputEvent::Resize(cols, rows) => {
                self.resize(*cols, *rows);
                return Ok(DispatchResult::dirty());
            }
            InputEvent::Key(key) => key,
        };
        let result = match translate_key(self.state.mode, key) {
            Some(action) => dispatch(action, &mut self.state, &mut self.view, &self.options),
            None => Ok(DispatchResult::clean()),
        };
        self.settle();
        if let Err(e) = &result {
            tracing::debug!(target: "actions.session", error = %e, row = self.view.row, col = self.view.col, "dispatch_failed");
        }
        result
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    pub fn options(&self) -> &EditorOptions {
        &self.options
    }

    pub fn mode(&self) -> Mode {
        self.state.mode
    }

    pub fn cursor(&self) -> (usize, usize) {
        (self.view.row, self.view.col)
    }

    /// Move the cursor and reclamp.
    pub fn move_cursor(&mut self, row: usize, col: usize) {
        self.view.move_to(row, col);
        self.settle();
    }

    pub fn gutter_width(&self) -> usize {
        self.view.gutter_width()
    }

    pub fn screen_position(&self) -> (u16, u16) {
        self.view.screen_position()
    }

    /// `(row, text)` for each line inside the viewport.
    pub fn visible_lines(&self) -> impl Iterator<Item = (usize, &str)> {
        let lines = &self.state.lines;
        lines.rows(self.view.visible_slice(lines.line_count()))
    }

    /// Header text: mode label, then the file name when there is one.
    pub fn header(&self) -> String {
        let label = self.state.mode.label();
        match self.state.file_name() {
            Some(path) => format!("{label}  {}", path.display()),
            None => label.to_string(),
        }
    }

    /// Render projection of the current state.
    pub fn frame(&self) -> Frame {
        let skip = self.view.first_visible_col;
        let rows = self
            .visible_lines()
            .map(|(row, text)| FrameRow {
                number: row + 1,
                text: text.chars().skip(skip).collect(),
            })
            .collect();
        Frame {
            header: self.header(),
            gutter_width: self.gutter_width(),
            rows,
            cursor: self.screen_position(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_events::{KeyCode, KeyEvent};
    use core_text::LineStore;

    fn session(lines: &[&str]) -> Session {
        let state = EditorState::new(LineStore::from_lines(lines.iter().copied()));
        Session::new(state, EditorOptions::default()).with_viewport(Viewport::new(20, 5))
    }

    #[test]
    fn resize_reserves_header_row() {
        let mut s = session(&["a"]);
        s.resize(40, 10);
        assert_eq!(s.view().viewport(), Viewport::new(40, 9));
        let r = s.handle(&InputEvent::Resize(30, 4)).unwrap();
        assert!(r.dirty);
        assert_eq!(s.view().viewport(), Viewport::new(30, 3));
    }

    #[test]
    fn shrinking_resize_keeps_cursor_visible() {
        let lines: Vec<String> = (0..30).map(|i| i.to_string()).collect();
        let state = EditorState::new(LineStore::from_lines(lines));
        let mut s = Session::new(state, EditorOptions::default());
        s.move_cursor(20, 0);
        assert_eq!(s.view().first_visible_row, 0);
        s.resize(80, 6);
        assert_eq!(s.view().first_visible_row, 16);
        assert_eq!(s.screen_position().1, 5);
    }

    #[test]
    fn unbound_key_still_reclamps() {
        let mut s = session(&["abc"]);
        s.view.move_to(0, 50);
        let r = s.handle(&KeyEvent::char('z').into()).unwrap();
        assert_eq!(r, DispatchResult::clean());
        assert_eq!(s.cursor(), (0, 3));
    }

    #[test]
    fn header_includes_file_name() {
        let state = EditorState::new(LineStore::from_text("x").with_origin("notes.txt"));
        let mut s = Session::new(state, EditorOptions::default());
        assert_eq!(s.header(), "NORMAL  notes.txt");
        s.handle(&KeyEvent::char('i').into()).unwrap();
        assert_eq!(s.header(), "INSERT  notes.txt");
        s.handle(&KeyEvent::plain(KeyCode::Esc).into()).unwrap();
        assert_eq!(s.mode(), Mode::Command);
    }

    #[test]
    fn frame_projects_visible_rows() {
        let mut s = session(&["alpha", "beta", "gamma"]);
        s.move_cursor(2, 1);
        let f = s.frame();
        assert_eq!(f.header, "NORMAL");
        assert_eq!(f.gutter_width, 2);
        assert_eq!(f.rows.len(), 3);
        assert_eq!(f.rows[2], FrameRow { number: 3, text: "gamma".into() });
        assert_eq!(f.cursor, (3, 3));
    }

    #[test]
    fn frame_shifts_text_by_horizontal_scroll() {
        let mut s = session(&["0123456789abcdefghijklmnop"]);
        s.move_cursor(0, 25);
        let first_col = s.view().first_visible_col;
        assert!(first_col > 0);
        let f = s.frame();
        assert_eq!(f.rows[0].text, &"0123456789abcdefghijklmnop"[first_col..]);
        assert_eq!(usize::from(f.cursor.0), 25 - first_col + 2);
    }
}
