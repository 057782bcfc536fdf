//! Cell styles painted by the frame renderer.
//!
//! Styles are semantic; each surface decides how to show them. The crossterm
//! surface maps them to the colour pairs below.

use crossterm::style::Color;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Style {
    /// Empty area below the last buffer line.
    #[default]
    Background,
    /// Mode header row.
    Header,
    /// Line-number gutter.
    Gutter,
    /// Buffer text.
    Text,
}

impl Style {
    /// `(foreground, background)` colours.
    pub fn colors(self) -> (Color, Color) {
        match self {
            Style::Background | Style::Text => (Color::White, Color::Black),
            Style::Header => (Color::Black, Color::White),
            Style::Gutter => (Color::Blue, Color::Black),
        }
    }

    pub fn bold(self) -> bool {
        matches!(self, Style::Header)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_is_inverted_and_bold() {
        assert_eq!(Style::Header.colors(), (Color::Black, Color::White));
        assert!(Style::Header.bold());
        assert!(!Style::Text.bold());
    }
}
