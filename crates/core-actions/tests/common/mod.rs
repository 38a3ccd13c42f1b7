#![allow(dead_code)] // Shared across integration tests; each test binary uses a subset of helpers.

use core_actions::{DispatchResult, ModeController};
use core_model::{CursorViewport, EditorModel};
use core_state::EditorState;
use core_text::Document;

pub const ESC: u8 = 0x1b;
pub const ENTER: u8 = b'\r';

pub fn model_from(lines: &[&str]) -> EditorModel {
    let state = EditorState::new(Document::from_lines(lines));
    EditorModel::with_view(CursorViewport::new(5, 40), state)
}

/// Feed `keys` through a controller, stopping at the first quit. Returns the
/// last dispatch result.
pub fn replay(ctl: &mut ModeController, model: &mut EditorModel, keys: &[u8]) -> DispatchResult {
    let mut last = DispatchResult::Continue;
    for &k in keys {
        last = ctl.handle(k, model);
        if last.is_quit() {
            break;
        }
    }
    last
}

pub fn lines(model: &EditorModel) -> Vec<String> {
    model
        .state()
        .document
        .rows()
        .iter()
        .map(|r| String::from_utf8_lossy(r.as_bytes()).into_owned())
        .collect()
}

pub fn status(model: &EditorModel) -> Option<&str> {
    model.state().status.as_ref().map(|s| s.text.as_str())
}
