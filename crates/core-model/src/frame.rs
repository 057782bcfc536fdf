//! Render projection of a session: everything a painter needs, nothing it
//! can mutate.

/// One visible buffer row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameRow {
    /// 1-based line number shown in the gutter.
    pub number: usize,
    /// Line content with the first `first_visible_col` chars already dropped.
    pub text: String,
}

/// Snapshot of one screen: header, gutter, visible rows and cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub header: String,
    pub gutter_width: usize,
    pub rows: Vec<FrameRow>,
    /// Cursor cell as `(col, row)` in terminal coordinates.
    pub cursor: (u16, u16),
}

impl Frame {
    /// Gutter label for `number`, right-aligned with one trailing separator column.
    pub fn gutter_label(&self, number: usize) -> String {
        let digits = self.gutter_width.saturating_sub(1);
        format!("{number:>digits$} ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gutter_label_right_aligns() {
        let f = Frame {
            header: String::new(),
            gutter_width: 4,
            rows: Vec::new(),
            cursor: (0, 0),
        };
        assert_eq!(f.gutter_label(7), "  7 ");
        assert_eq!(f.gutter_label(123), "123 ");
    }
}
