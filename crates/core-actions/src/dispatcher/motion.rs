//! Motion sub-dispatch (cursor movement).
//!
//! Motions run only in View mode, where the cursor rests on a character:
//! after every motion the column is re-clamped to `row_len - 1` (0 for an
//! empty row). Row motions stay inside `[0, row_count - 1]`.

use crate::MotionKind;
use core_model::CursorViewport;
use core_state::EditorState;
use core_text::motion;

pub(crate) fn handle_motion(kind: MotionKind, state: &mut EditorState, view: &mut CursorViewport) {
    let doc = &state.document;
    let before = view.cursor;
    let last_row = doc.row_count().saturating_sub(1);
    let cursor = &mut view.cursor;
    match kind {
        MotionKind::Left => cursor.col = cursor.col.saturating_sub(1),
        MotionKind::Right => {
            if cursor.col + 1 < doc.row_len(cursor.row) {
                cursor.col += 1;
            }
        }
        MotionKind::Down => {
            if cursor.row < last_row {
                cursor.row += 1;
            }
        }
        MotionKind::Up => cursor.row = cursor.row.saturating_sub(1),
        MotionKind::LineStart => cursor.col = 0,
        MotionKind::LineEnd => cursor.col = doc.row_len(cursor.row).saturating_sub(1),
        MotionKind::WordForward => {
            if let Some(col) = doc
                .row(cursor.row)
                .and_then(|r| motion::word_forward(r.as_bytes(), cursor.col))
            {
                cursor.col = col;
            }
        }
        MotionKind::WordBackward => {
            if let Some(col) = doc
                .row(cursor.row)
                .and_then(|r| motion::word_backward(r.as_bytes(), cursor.col))
            {
                cursor.col = col;
            }
        }
        MotionKind::DocumentStart => cursor.row = 0,
        MotionKind::DocumentEnd => cursor.row = last_row,
        MotionKind::PageDown => {
            cursor.row = cursor.row.saturating_add(state.page_rows).min(last_row);
        }
        MotionKind::PageUp => cursor.row = cursor.row.saturating_sub(state.page_rows),
    }
    view.clamp_to_character(doc);
    if before != view.cursor {
        tracing::trace!(
            target: "actions.dispatch",
            motion = ?kind,
            row = before.row,
            col = before.col,
            to_row = view.cursor.row,
            to_col = view.cursor.col,
            "motion"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_text::{Document, Position};

    fn setup(lines: &[&str]) -> (EditorState, CursorViewport) {
        (
            EditorState::new(Document::from_lines(lines)),
            CursorViewport::new(10, 40),
        )
    }

    #[test]
    fn vertical_motion_reclamps_column() {
        let (mut st, mut v) = setup(&["long line", "ab"]);
        v.cursor = Position::new(0, 7);
        handle_motion(MotionKind::Down, &mut st, &mut v);
        assert_eq!(v.cursor, Position::new(1, 1));
        handle_motion(MotionKind::Down, &mut st, &mut v);
        assert_eq!(v.cursor.row, 1, "j stops on the last row");
    }

    #[test]
    fn line_start_and_end() {
        let (mut st, mut v) = setup(&["hello"]);
        handle_motion(MotionKind::LineEnd, &mut st, &mut v);
        assert_eq!(v.cursor.col, 4);
        handle_motion(MotionKind::LineStart, &mut st, &mut v);
        assert_eq!(v.cursor.col, 0);
    }

    #[test]
    fn word_motions_stay_in_row() {
        let (mut st, mut v) = setup(&["foo bar.baz"]);
        handle_motion(MotionKind::WordForward, &mut st, &mut v);
        assert_eq!(v.cursor.col, 4);
        handle_motion(MotionKind::WordForward, &mut st, &mut v);
        assert_eq!(v.cursor.col, 7);
        handle_motion(MotionKind::WordForward, &mut st, &mut v);
        assert_eq!(v.cursor.col, 8);
        handle_motion(MotionKind::WordForward, &mut st, &mut v);
        assert_eq!(v.cursor.col, 8, "no further word start");
        handle_motion(MotionKind::WordBackward, &mut st, &mut v);
        assert_eq!(v.cursor.col, 7);
    }

    #[test]
    fn page_motions_use_configured_rows() {
        let lines: Vec<String> = (0..30).map(|i| i.to_string()).collect();
        let refs: Vec<&str> = lines.iter().map(String::as_str).collect();
        let (mut st, mut v) = setup(&refs);
        st.page_rows = 7;
        handle_motion(MotionKind::PageDown, &mut st, &mut v);
        assert_eq!(v.cursor.row, 7);
        for _ in 0..10 {
            handle_motion(MotionKind::PageDown, &mut st, &mut v);
        }
        assert_eq!(v.cursor.row, 29);
        handle_motion(MotionKind::PageUp, &mut st, &mut v);
        assert_eq!(v.cursor.row, 22);
    }

    #[test]
    fn motions_on_empty_document_are_noops() {
        let (mut st, mut v) = setup(&[]);
        for kind in [
            MotionKind::Down,
            MotionKind::Right,
            MotionKind::DocumentEnd,
            MotionKind::WordForward,
            MotionKind::PageDown,
        ] {
            handle_motion(kind, &mut st, &mut v);
            assert_eq!(v.cursor, Position::origin());
        }
    }
}
