//! Mode transition handling (View <-> Insert).
//!
//! `a`, `o` and `O` adjust the cursor (and for `o`/`O` the document) before
//! switching to Insert. Leaving Insert re-applies the View mode caret rule.

use crate::ModeChange;
use core_model::CursorViewport;
use core_state::{EditorState, Mode};
use core_text::Position;

pub(crate) fn handle_mode_change(
    mc: ModeChange,
    state: &mut EditorState,
    view: &mut CursorViewport,
) {
    let doc = &mut state.document;
    match mc {
        ModeChange::EnterInsert => {}
        ModeChange::AppendInsert => {
            view.cursor.col = (view.cursor.col + 1).min(doc.row_len(view.cursor.row));
        }
        ModeChange::OpenBelow => {
            let at = (view.cursor.row + 1).min(doc.row_count());
            doc.insert_row(at, b"");
            view.cursor = Position::new(at, 0);
        }
        ModeChange::OpenAbove => {
            let at = view.cursor.row.min(doc.row_count());
            doc.insert_row(at, b"");
            view.cursor = Position::new(at, 0);
        }
        ModeChange::LeaveInsert => {
            view.clamp_to_character(doc);
            state.mode = Mode::View;
            tracing::debug!(target: "actions.dispatch", "leave_insert");
            return;
        }
    }
    state.mode = Mode::Insert;
    tracing::debug!(
        target: "actions.dispatch",
        change = ?mc,
        row = view.cursor.row,
        col = view.cursor.col,
        "enter_insert"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_text::Document;
    use pretty_assertions::assert_eq;

    fn setup(lines: &[&str]) -> (EditorState, CursorViewport) {
        (
            EditorState::new(Document::from_lines(lines)),
            CursorViewport::new(10, 40),
        )
    }

    #[test]
    fn append_moves_past_cursor_character() {
        let (mut st, mut v) = setup(&["abc"]);
        v.cursor.col = 2;
        handle_mode_change(ModeChange::AppendInsert, &mut st, &mut v);
        assert_eq!(st.mode, Mode::Insert);
        assert_eq!(v.cursor.col, 3);
    }

    #[test]
    fn open_below_and_above() {
        let (mut st, mut v) = setup(&["a", "b"]);
        handle_mode_change(ModeChange::OpenBelow, &mut st, &mut v);
        assert_eq!(v.cursor, Position::new(1, 0));
        assert_eq!(st.document.row_count(), 3);
        assert_eq!(st.document.row_len(1), 0);
        assert!(st.document.is_dirty());

        let (mut st, mut v) = setup(&["a", "b"]);
        v.cursor.row = 1;
        handle_mode_change(ModeChange::OpenAbove, &mut st, &mut v);
        assert_eq!(v.cursor, Position::new(1, 0));
        assert_eq!(st.document.row(2).map(|r| r.as_bytes()), Some(&b"b"[..]));
    }

    #[test]
    fn open_below_on_empty_document() {
        let (mut st, mut v) = setup(&[]);
        handle_mode_change(ModeChange::OpenBelow, &mut st, &mut v);
        assert_eq!(st.document.row_count(), 1);
        assert_eq!(v.cursor, Position::new(0, 0));
    }

    #[test]
    fn leave_insert_rests_on_last_character() {
        let (mut st, mut v) = setup(&["abc"]);
        st.mode = Mode::Insert;
        v.cursor.col = 3;
        handle_mode_change(ModeChange::LeaveInsert, &mut st, &mut v);
        assert_eq!(st.mode, Mode::View);
        assert_eq!(v.cursor.col, 2);
    }
}
