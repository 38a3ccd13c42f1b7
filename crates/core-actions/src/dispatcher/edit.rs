//! Text edit action handling (insert/backspace/delete/newline/row delete).
//!
//! Insert-side edits only apply in Insert mode and View-side deletes only in
//! View mode; a mismatched edit is a no-op. All mutation goes through
//! `core_text::Document`, which owns the dirty flag.

use crate::EditKind;
use core_model::CursorViewport;
use core_state::{EditorState, Mode};

pub(crate) fn handle_edit(kind: EditKind, state: &mut EditorState, view: &mut CursorViewport) {
    let before = view.cursor;
    let doc = &mut state.document;
    let changed = match (kind, state.mode) {
        (EditKind::InsertByte(b), Mode::Insert) => {
            doc.insert_char(&mut view.cursor, b);
            true
        }
        (EditKind::InsertNewline, Mode::Insert) => {
            doc.insert_newline(&mut view.cursor);
            true
        }
        (EditKind::Backspace, Mode::Insert) => doc.delete_char(&mut view.cursor),
        (EditKind::DeleteUnder, Mode::View) => {
            let removed = doc.delete_char_at(&view.cursor);
            view.clamp_to_character(doc);
            removed
        }
        (EditKind::DeleteLeft, Mode::View) => {
            // Column 0 never joins rows here, unlike Backspace.
            let removed = view.cursor.col > 0 && doc.delete_char(&mut view.cursor);
            view.clamp_to_character(doc);
            removed
        }
        (EditKind::DeleteRow, Mode::View) => {
            let removed = doc.delete_row(view.cursor.row);
            if view.cursor.row >= doc.row_count() {
                view.cursor.row = doc.row_count().saturating_sub(1);
            }
            view.clamp_to_character(doc);
            removed
        }
        _ => false,
    };
    if changed {
        tracing::trace!(
            target: "actions.dispatch",
            op = ?kind,
            row = before.row,
            col = before.col,
            to_row = view.cursor.row,
            to_col = view.cursor.col,
            "edit"
        );
    }
}
