//! Structured command line parsing.
//!
//! Converts the raw command buffer (beginning with ':') into a
//! `ParsedCommand`. Pure classification; no side effects.

use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedCommand {
    /// Bare `:`; commits without effect.
    Empty,
    Write(Option<PathBuf>),
    Quit,
    ForceQuit,
    WriteQuit,
    Unknown(String),
}

pub struct CommandParser;

impl CommandParser {
    pub fn parse(raw: &str) -> ParsedCommand {
        let body = raw.strip_prefix(':').unwrap_or(raw).trim();
        match body {
            "" => return ParsedCommand::Empty,
            "w" => return ParsedCommand::Write(None),
            "q" => return ParsedCommand::Quit,
            "q!" => return ParsedCommand::ForceQuit,
            "wq" => return ParsedCommand::WriteQuit,
            _ => {}
        }
        // Accept forms: "w path", "w    path"
        if let Some(rest) = body.strip_prefix("w ") {
            let path_part = rest.trim();
            if !path_part.is_empty() {
                return ParsedCommand::Write(Some(PathBuf::from(path_part)));
            }
        }
        ParsedCommand::Unknown(body.to_string())
    }
}
