//! Property tests for line store structural operations.

use core_text::LineStore;
use proptest::prelude::*;

fn line_strategy() -> impl Strategy<Value = String> {
    "[a-z é]{0,12}"
}

proptest! {
    // insert_line followed by remove_line at the same row restores the store.
    #[test]
    fn insert_then_remove_restores(
        lines in prop::collection::vec(line_strategy(), 1..8),
        text in line_strategy(),
        pick in 0usize..16,
    ) {
        let original = LineStore::from_text(&lines.join("\n"));
        let mut store = original.clone();
        let row = pick % (store.line_count() + 1);
        store.insert_line(row, text.clone()).unwrap();
        prop_assert_eq!(store.line(row), text.as_str());
        let removed = store.remove_line(row).unwrap();
        prop_assert_eq!(removed, text);
        prop_assert_eq!(store, original);
    }

    // split at any column then join restores the line.
    #[test]
    fn split_then_join_restores(line in line_strategy(), pick in 0usize..16) {
        let original = LineStore::from_text(&line);
        let mut store = original.clone();
        let col = pick % (store.line_len(0) + 1);
        store.split_line(0, col).unwrap();
        prop_assert_eq!(store.line_count(), 2);
        prop_assert_eq!(store.line_len(0), col);
        let joined_at = store.join_with_next(0).unwrap();
        prop_assert_eq!(joined_at, col);
        prop_assert_eq!(store, original);
    }
}
