//! Editor session model: state plus cursor/viewport.
//!
//! `CursorViewport` owns presentation state that does not belong to the
//! document itself: the logical cursor, the scroll offsets and the size of the
//! text area it scrolls within. `EditorModel` pairs it with `EditorState` so
//! dispatch code can borrow both mutably through [`EditorModel::split`].
//!
//! Invariants (must hold after every dispatcher call):
//! * `cursor.row <= document.row_count()`.
//! * `cursor.col <= row_len(cursor.row)` outside of active insertion.
//! * After [`CursorViewport::scroll`] the cursor lies inside
//!   `[row_offset, row_offset + height)` x `[col_offset, col_offset + width)`
//!   whenever both dimensions are non-zero.

use core_state::EditorState;
use core_text::{Document, Position};
use tracing::trace;

mod layout;
pub use layout::{Layout, RESERVED_ROWS};

#[derive(Debug, Clone, Default)]
pub struct CursorViewport {
    pub cursor: Position,
    pub row_offset: usize,
    pub col_offset: usize,
    /// Text rows available (status bands excluded).
    pub height: usize,
    pub width: usize,
}

impl CursorViewport {
    pub fn new(height: usize, width: usize) -> Self {
        Self {
            cursor: Position::origin(),
            row_offset: 0,
            col_offset: 0,
            height,
            width,
        }
    }

    pub fn set_size(&mut self, height: usize, width: usize) {
        self.height = height;
        self.width = width;
    }

    /// Adopt the text area of `layout`.
    pub fn apply_layout(&mut self, layout: &Layout) {
        self.set_size(layout.text_rows as usize, layout.width as usize);
    }

    /// Reduce the column to the active row's length (0 for an empty or
    /// missing row) and keep the row within `[0, row_count]`.
    pub fn clamp_to_document(&mut self, doc: &Document) {
        self.cursor
            .clamp_to(doc.row_count(), |r| doc.row_len(r));
    }

    /// View-mode caret convention: the cursor rests on a character, so the
    /// column never exceeds `row_len - 1`.
    pub fn clamp_to_character(&mut self, doc: &Document) {
        self.clamp_to_document(doc);
        let len = doc.row_len(self.cursor.row);
        if len > 0 && self.cursor.col >= len {
            self.cursor.col = len - 1;
        }
    }

    /// Adjust offsets with minimal movement so the cursor is visible. Returns
    /// true if either offset changed.
    pub fn scroll(&mut self) -> bool {
        let before = (self.row_offset, self.col_offset);
        if let Some(first) = scroll_axis(self.row_offset, self.cursor.row, self.height) {
            self.row_offset = first;
        }
        if let Some(first) = scroll_axis(self.col_offset, self.cursor.col, self.width) {
            self.col_offset = first;
        }
        let changed = before != (self.row_offset, self.col_offset);
        if changed {
            trace!(
                target: "model.viewport",
                row_offset = self.row_offset,
                col_offset = self.col_offset,
                "scrolled"
            );
        }
        changed
    }

    /// Cursor coordinate relative to the visible window `(row, col)`.
    pub fn screen_cursor(&self) -> (usize, usize) {
        (
            self.cursor.row.saturating_sub(self.row_offset),
            self.cursor.col.saturating_sub(self.col_offset),
        )
    }
}

/// New first visible index keeping `cursor` inside `[first, first + extent)`,
/// or `None` when no change is needed. A zero extent never scrolls.
pub fn scroll_axis(first: usize, cursor: usize, extent: usize) -> Option<usize> {
    if extent == 0 {
        return None;
    }
    if cursor < first {
        Some(cursor)
    } else if cursor >= first + extent {
        Some(cursor + 1 - extent)
    } else {
        None
    }
}

/// The whole editor session.
#[derive(Debug)]
pub struct EditorModel {
    state: EditorState,
    view: CursorViewport,
}

impl EditorModel {
    pub fn new(state: EditorState) -> Self {
        Self {
            state,
            view: CursorViewport::default(),
        }
    }

    /// Test/helper constructor injecting a prepared cursor/viewport.
    pub fn with_view(view: CursorViewport, state: EditorState) -> Self {
        Self { state, view }
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn view(&self) -> &CursorViewport {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut CursorViewport {
        &mut self.view
    }

    /// Disjoint mutable borrows of the state and the cursor/viewport.
    pub fn split(&mut self) -> (&mut EditorState, &mut CursorViewport) {
        (&mut self.state, &mut self.view)
    }
}
