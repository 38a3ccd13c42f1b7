//! RenderEngine: turns session state into one frame of terminal bytes.
//!
//! Every frame is a full repaint; the terminal only ever receives a single
//! buffer per frame, so there is no flicker from partial output. Frame order:
//! hide cursor, home, text rows, status line, message line, command line,
//! cursor placement, show cursor.

use crate::status::{StatusContext, build_status};
use crate::writer::Writer;
use anyhow::Result;
use core_model::{CursorViewport, Layout};
use core_state::{EditorState, Mode};
use std::time::Instant;

/// Marker drawn on screen rows past the end of the document.
pub const FILLER: &[u8] = b"~";

#[derive(Debug, Default)]
pub struct RenderEngine {
    frames: u64,
}

impl RenderEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of frames produced so far.
    pub fn frame_count(&self) -> u64 {
        self.frames
    }

    /// Build and encode a frame. `now` decides whether the status message is
    /// still visible.
    pub fn render(
        &mut self,
        state: &EditorState,
        view: &CursorViewport,
        layout: &Layout,
        now: Instant,
    ) -> Result<Vec<u8>> {
        let writer = build_frame(state, view, layout, now);
        let bytes = writer.encode()?;
        self.frames += 1;
        tracing::trace!(
            target: "render.engine",
            frame = self.frames,
            bytes = bytes.len(),
            "frame_built"
        );
        Ok(bytes)
    }
}

/// Assemble the logical commands for one frame.
pub fn build_frame(
    state: &EditorState,
    view: &CursorViewport,
    layout: &Layout,
    now: Instant,
) -> Writer {
    let width = layout.width as usize;
    let doc = &state.document;
    let mut w = Writer::new();
    w.hide_cursor();
    w.move_to(0, 0);

    for y in 0..layout.text_rows as usize {
        let file_row = y + view.row_offset;
        match doc.row(file_row) {
            Some(row) => w.print(row.visible(view.col_offset, width)),
            None => w.print(&FILLER[..FILLER.len().min(width)]),
        }
        w.clear_to_eol();
        w.newline();
    }

    if layout.is_on_screen(layout.status_row()) {
        let ctx = StatusContext {
            mode: state.mode,
            file_name: doc.file_name(),
            row_count: doc.row_count(),
            dirty: doc.is_dirty(),
            row: view.cursor.row,
            col: view.cursor.col,
        };
        w.reverse();
        w.print(build_status(&ctx, width).as_bytes());
        w.reset_attr();
    }

    if layout.is_on_screen(layout.message_row()) {
        w.move_to(0, layout.message_row());
        if let Some(msg) = state.visible_status(now) {
            w.print(clip(msg.as_bytes(), width));
        }
        w.clear_to_eol();
    }

    if layout.is_on_screen(layout.command_row()) {
        w.move_to(0, layout.command_row());
        if state.mode == Mode::CommandLine {
            w.print(clip(state.command_line.buffer().as_bytes(), width));
        }
        w.clear_to_eol();
    }

    let (row, col) = view.screen_cursor();
    w.move_to(to_cell(col), to_cell(row));
    w.show_cursor();
    w
}

fn clip(bytes: &[u8], width: usize) -> &[u8] {
    &bytes[..bytes.len().min(width)]
}

fn to_cell(v: usize) -> u16 {
    u16::try_from(v).unwrap_or(u16::MAX)
}
