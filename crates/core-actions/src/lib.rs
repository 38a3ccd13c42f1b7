//! core-actions: key translation, mode control and action dispatch.
//!
//! Flow for one input byte:
//! `ModeController::handle` -> `KeyTranslator::translate` (mode aware, owns the
//! View mode pending buffer) -> `dispatch` (mutates `EditorModel`) -> scroll
//! pass. Recoverable failures never leave this crate as errors; they become
//! status messages.

pub mod dispatcher;
mod io_ops;
mod key_translator;

pub use dispatcher::{DispatchResult, dispatch};
pub use io_ops::{SaveError, save_document};
pub use key_translator::KeyTranslator;

use core_model::EditorModel;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionKind {
    Left,
    Right,
    Up,
    Down,
    LineStart,
    LineEnd,
    WordForward,
    WordBackward,
    DocumentStart,
    DocumentEnd,
    PageDown,
    PageUp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditKind {
    /// Literal byte typed in Insert mode.
    InsertByte(u8),
    InsertNewline,
    /// Delete before the cursor, joining rows at column 0.
    Backspace,
    DeleteUnder,
    DeleteLeft,
    DeleteRow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeChange {
    EnterInsert,
    AppendInsert,
    OpenBelow,
    OpenAbove,
    LeaveInsert,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Motion(MotionKind),
    Edit(EditKind),
    ModeChange(ModeChange),
    CommandStart,
    CommandChar(char),
    CommandBackspace,
    CommandCancel,
    /// Run the buffered command line.
    CommandExecute,
    /// Save to the associated file.
    Save,
    /// Quit without checking the dirty flag.
    ForceQuit,
}

/// Owns the translator and applies each key to the model.
#[derive(Debug, Default)]
pub struct ModeController {
    translator: KeyTranslator,
}

impl ModeController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn translator(&self) -> &KeyTranslator {
        &self.translator
    }

    /// Handle one input byte. Keys without a meaning in the current mode
    /// (including partial multi-key commands) leave the editor running.
    pub fn handle(&mut self, key: u8, model: &mut EditorModel) -> DispatchResult {
        let mode = model.state().mode;
        match self.translator.translate(mode, key) {
            Some(action) => {
                tracing::trace!(
                    target: "actions.dispatch",
                    ?mode,
                    key,
                    action = ?action,
                    "key_translated"
                );
                dispatch(action, model)
            }
            None => DispatchResult::Continue,
        }
    }
}
