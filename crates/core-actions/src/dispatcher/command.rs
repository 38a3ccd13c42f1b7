//! Command line editing & execution (:w, :w <file>, :q, :q!, :wq).
//!
//! Every outcome the user should see (saved, refused quit, unknown command)
//! is reported through the status message; nothing here returns an error.

use super::DispatchResult;
use super::command_parser::{CommandParser, ParsedCommand};
use crate::Action;
use crate::io_ops::save_document;
use core_state::{EditorState, Mode};
use std::path::PathBuf;

pub(crate) fn handle_command_action(action: Action, state: &mut EditorState) -> DispatchResult {
    match action {
        Action::CommandStart => {
            state.command_line.begin();
            state.mode = Mode::CommandLine;
            DispatchResult::Continue
        }
        Action::CommandChar(ch) => {
            state.command_line.push_char(ch);
            DispatchResult::Continue
        }
        Action::CommandBackspace => {
            if !state.command_line.backspace() {
                state.mode = Mode::View;
            }
            DispatchResult::Continue
        }
        Action::CommandCancel => {
            state.command_line.clear();
            state.mode = Mode::View;
            DispatchResult::Continue
        }
        Action::CommandExecute => {
            let raw = state.command_line.take();
            state.mode = Mode::View;
            execute_command(&raw, state)
        }
        other => {
            tracing::warn!(
                target: "actions.command",
                action = ?other,
                "non_command_action_ignored"
            );
            DispatchResult::Continue
        }
    }
}

fn execute_command(raw: &str, state: &mut EditorState) -> DispatchResult {
    let parsed = CommandParser::parse(raw);
    tracing::debug!(target: "actions.command", raw, parsed = ?parsed, "execute");
    match parsed {
        ParsedCommand::Empty => DispatchResult::Continue,
        ParsedCommand::Write(target) => {
            handle_write(state, target);
            DispatchResult::Continue
        }
        ParsedCommand::Quit => {
            if state.document.is_dirty() {
                state.set_status("save file before or q!");
                DispatchResult::Continue
            } else {
                DispatchResult::Quit
            }
        }
        ParsedCommand::ForceQuit => DispatchResult::Quit,
        ParsedCommand::WriteQuit => {
            if write_with_status(state, None) {
                DispatchResult::Quit
            } else {
                DispatchResult::Continue
            }
        }
        ParsedCommand::Unknown(text) => {
            state.set_status(format!("Undefined cmd: {text}"));
            DispatchResult::Continue
        }
    }
}

pub(crate) fn handle_write(state: &mut EditorState, target: Option<PathBuf>) {
    write_with_status(state, target);
}

/// Save and report the outcome in the status line. Returns true on success.
fn write_with_status(state: &mut EditorState, target: Option<PathBuf>) -> bool {
    match save_document(&mut state.document, target) {
        Ok(bytes) => {
            state.set_status(format!("{bytes} bytes written to disk"));
            true
        }
        Err(e) => {
            tracing::error!(target: "actions.command", error = %e, "write_failed");
            state.set_status(e.to_string());
            false
        }
    }
}
