//! Terminal writer abstraction.
//!
//! Frames are assembled as an ordered list of logical `Command`s and only then
//! encoded into escape sequences. Encoding is the single place that knows the
//! byte-level terminal protocol; everything above it deals in rows, columns
//! and attributes.
//!
//! Design invariants:
//! * Commands preserve ordering; nothing is flushed mid-frame.
//! * All positions are absolute (0,0) origin; caller ensures bounds.
//! * Text payloads are raw document bytes and are copied through untouched.
//! * Writer owns no global state; it is a short-lived object per frame.

use anyhow::Result;
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    queue,
    style::{Attribute, SetAttribute},
    terminal::{Clear, ClearType},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    HideCursor,
    ShowCursor,
    MoveTo(u16, u16),
    Print(Vec<u8>),
    /// Clear from the cursor to the end of the current line.
    ClearToEol,
    Reverse,
    ResetAttr,
    Newline,
}

#[derive(Debug, Default)]
pub struct Writer {
    cmds: Vec<Command>,
}

impl Writer {
    pub fn new() -> Self {
        Self { cmds: Vec::new() }
    }
    pub fn commands(&self) -> &[Command] {
        &self.cmds
    }
    pub fn hide_cursor(&mut self) {
        self.cmds.push(Command::HideCursor);
    }
    pub fn show_cursor(&mut self) {
        self.cmds.push(Command::ShowCursor);
    }
    pub fn move_to(&mut self, x: u16, y: u16) {
        self.cmds.push(Command::MoveTo(x, y));
    }
    pub fn print(&mut self, bytes: &[u8]) {
        if !bytes.is_empty() {
            self.cmds.push(Command::Print(bytes.to_vec()));
        }
    }
    pub fn clear_to_eol(&mut self) {
        self.cmds.push(Command::ClearToEol);
    }
    pub fn reverse(&mut self) {
        self.cmds.push(Command::Reverse);
    }
    pub fn reset_attr(&mut self) {
        self.cmds.push(Command::ResetAttr);
    }
    pub fn newline(&mut self) {
        self.cmds.push(Command::Newline);
    }

    /// Encode all commands into one byte buffer.
    pub fn encode(&self) -> Result<Vec<u8>> {
        let mut out: Vec<u8> = Vec::with_capacity(self.cmds.len() * 8);
        for c in &self.cmds {
            match c {
                Command::HideCursor => queue!(out, Hide)?,
                Command::ShowCursor => queue!(out, Show)?,
                Command::MoveTo(x, y) => queue!(out, MoveTo(*x, *y))?,
                Command::Print(bytes) => out.extend_from_slice(bytes),
                Command::ClearToEol => queue!(out, Clear(ClearType::UntilNewLine))?,
                Command::Reverse => queue!(out, SetAttribute(Attribute::Reverse))?,
                Command::ResetAttr => queue!(out, SetAttribute(Attribute::Reset))?,
                Command::Newline => out.extend_from_slice(b"\r\n"),
            }
        }
        Ok(out)
    }
}
