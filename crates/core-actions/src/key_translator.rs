//! KeyTranslator: stateful byte -> Action translation.
//!
//! View mode keys go through the `core_keymap::Keymap` binding table, which
//! owns the pending buffer for `dd` / `gg`. Insert and CommandLine keys map
//! directly. The pending buffer is reset whenever the translator sees a mode
//! other than View so a half typed `d` never leaks across an Insert session.

use crate::{Action, EditKind, ModeChange, MotionKind};
use core_keymap::{KeyOutcome, Keymap, ViewCommand, keys};
use core_state::Mode;

#[derive(Debug, Default)]
pub struct KeyTranslator {
    keymap: Keymap,
}

impl KeyTranslator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop any half typed View command.
    pub fn reset(&mut self) {
        self.keymap.reset();
    }

    /// Keys buffered toward a multi-key View command.
    pub fn pending(&self) -> &[u8] {
        self.keymap.pending().as_slice()
    }

    pub fn translate(&mut self, mode: Mode, key: u8) -> Option<Action> {
        tracing::trace!(
            target: "actions.translate",
            ?mode,
            key,
            pending_len = self.pending().len(),
            "translate_key_attempt"
        );
        match mode {
            Mode::View => match self.keymap.feed(key) {
                KeyOutcome::Command(cmd) => Some(view_action(cmd)),
                KeyOutcome::Pending | KeyOutcome::Rejected => None,
            },
            Mode::Insert => {
                self.reset();
                insert_action(key)
            }
            Mode::CommandLine => {
                self.reset();
                command_line_action(key)
            }
        }
    }
}

fn view_action(cmd: ViewCommand) -> Action {
    use ViewCommand as C;
    match cmd {
        C::MoveLeft => Action::Motion(MotionKind::Left),
        C::MoveRight => Action::Motion(MotionKind::Right),
        C::MoveDown => Action::Motion(MotionKind::Down),
        C::MoveUp => Action::Motion(MotionKind::Up),
        C::LineStart => Action::Motion(MotionKind::LineStart),
        C::LineEnd => Action::Motion(MotionKind::LineEnd),
        C::WordForward => Action::Motion(MotionKind::WordForward),
        C::WordBackward => Action::Motion(MotionKind::WordBackward),
        C::DocumentStart => Action::Motion(MotionKind::DocumentStart),
        C::DocumentEnd => Action::Motion(MotionKind::DocumentEnd),
        C::PageDown => Action::Motion(MotionKind::PageDown),
        C::PageUp => Action::Motion(MotionKind::PageUp),
        C::DeleteUnder => Action::Edit(EditKind::DeleteUnder),
        C::DeleteLeft => Action::Edit(EditKind::DeleteLeft),
        C::DeleteRow => Action::Edit(EditKind::DeleteRow),
        C::Save => Action::Save,
        C::ForceQuit => Action::ForceQuit,
        C::InsertBefore => Action::ModeChange(ModeChange::EnterInsert),
        C::Append => Action::ModeChange(ModeChange::AppendInsert),
        C::OpenBelow => Action::ModeChange(ModeChange::OpenBelow),
        C::OpenAbove => Action::ModeChange(ModeChange::OpenAbove),
        C::CommandLine => Action::CommandStart,
    }
}

fn insert_action(key: u8) -> Option<Action> {
    match key {
        keys::ESC => Some(Action::ModeChange(ModeChange::LeaveInsert)),
        k if k == keys::ctrl(b'c') => Some(Action::ModeChange(ModeChange::LeaveInsert)),
        keys::ENTER => Some(Action::Edit(EditKind::InsertNewline)),
        keys::BACKSPACE => Some(Action::Edit(EditKind::Backspace)),
        keys::TAB => Some(Action::Edit(EditKind::InsertByte(key))),
        // Remaining control bytes (including a bare '\n') are dropped so a
        // row never receives a terminator.
        k if k < 0x20 => None,
        k => Some(Action::Edit(EditKind::InsertByte(k))),
    }
}

fn command_line_action(key: u8) -> Option<Action> {
    match key {
        keys::ESC => Some(Action::CommandCancel),
        keys::ENTER => Some(Action::CommandExecute),
        keys::BACKSPACE => Some(Action::CommandBackspace),
        k if k.is_ascii_graphic() || k == b' ' => Some(Action::CommandChar(k as char)),
        _ => None,
    }
}
