//! Dispatcher applying `Action` to mutable editor state.
//!
//! Sub-modules:
//! * `motion`  - cursor movement semantics
//! * `mode`    - mode transitions (View <-> Insert, entering the command line)
//! * `command` - command line editing & execution (:w, :q, :q!, :wq)
//! * `edit`    - text mutation (insert/backspace/delete/newline/row delete)
//!
//! Every dispatch ends with a scroll pass so the cursor is on screen before
//! the next frame is built.

use crate::Action;
use core_model::EditorModel;

mod command;
mod command_parser;
mod edit;
mod mode;
mod motion;

pub use command_parser::{CommandParser, ParsedCommand};

/// Whether the editor keeps running after an `Action`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DispatchResult {
    #[default]
    Continue,
    Quit,
}

impl DispatchResult {
    pub fn is_quit(self) -> bool {
        self == DispatchResult::Quit
    }
}

/// Apply an action to editor state, then bring the cursor into view.
pub fn dispatch(action: Action, model: &mut EditorModel) -> DispatchResult {
    let (state, view) = model.split();
    let result = match action {
        Action::Motion(kind) => {
            motion::handle_motion(kind, state, view);
            DispatchResult::Continue
        }
        Action::ModeChange(mc) => {
            mode::handle_mode_change(mc, state, view);
            DispatchResult::Continue
        }
        Action::Edit(kind) => {
            edit::handle_edit(kind, state, view);
            DispatchResult::Continue
        }
        Action::CommandStart
        | Action::CommandChar(_)
        | Action::CommandBackspace
        | Action::CommandCancel
        | Action::CommandExecute => command::handle_command_action(action, state),
        Action::Save => {
            command::handle_write(state, None);
            DispatchResult::Continue
        }
        Action::ForceQuit => {
            tracing::info!(
                target: "actions.dispatch",
                dirty = state.document.is_dirty(),
                "force_quit"
            );
            DispatchResult::Quit
        }
    };
    view.scroll();
    result
}
