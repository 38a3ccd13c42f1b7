//! Terminal backend abstraction and crossterm implementation.
//!
//! The editor core needs exactly four things from the terminal: raw mode
//! enter/leave, the current size, a blocking read of one input byte and a
//! single write per frame. `TerminalBackend` names those; `CrosstermBackend`
//! provides them for a real tty.

use anyhow::{Result, bail};
use crossterm::{
    cursor::Show,
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use std::io::{ErrorKind, Read, Write, stdin, stdout};
use std::ops::{Deref, DerefMut};

pub trait TerminalBackend {
    fn enter(&mut self) -> Result<()>;
    fn leave(&mut self) -> Result<()>;
    /// Current size as `(rows, cols)`.
    fn size(&self) -> Result<(u16, u16)>;
    /// Block until one input byte is available.
    fn read_key(&mut self) -> Result<u8>;
    /// Write a complete frame and flush it.
    fn write_frame(&mut self, frame: &[u8]) -> Result<()>;
}

pub struct CrosstermBackend {
    entered: bool,
}

/// RAII guard ensuring terminal state restoration even if caller early-returns or panics.
pub struct TerminalGuard<'a> {
    backend: &'a mut CrosstermBackend,
}

impl Default for CrosstermBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl CrosstermBackend {
    pub fn new() -> Self {
        Self { entered: false }
    }

    pub fn is_entered(&self) -> bool {
        self.entered
    }

    /// Enter and return a guard that will leave on drop.
    pub fn enter_guard(&mut self) -> Result<TerminalGuard<'_>> {
        self.enter()?;
        Ok(TerminalGuard { backend: self })
    }
}

impl TerminalBackend for CrosstermBackend {
    fn enter(&mut self) -> Result<()> {
        if !self.entered {
            enable_raw_mode()?;
            execute!(stdout(), EnterAlternateScreen)?;
            self.entered = true;
            tracing::debug!(target: "terminal", "raw_mode_entered");
        }
        Ok(())
    }

    fn leave(&mut self) -> Result<()> {
        if self.entered {
            execute!(stdout(), LeaveAlternateScreen, Show)?;
            disable_raw_mode()?;
            self.entered = false;
            tracing::debug!(target: "terminal", "raw_mode_left");
        }
        Ok(())
    }

    fn size(&self) -> Result<(u16, u16)> {
        let (cols, rows) = crossterm::terminal::size()?;
        Ok((rows, cols))
    }

    fn read_key(&mut self) -> Result<u8> {
        let mut buf = [0u8; 1];
        let mut input = stdin().lock();
        loop {
            match input.read(&mut buf) {
                Ok(0) => bail!("terminal input closed"),
                Ok(_) => return Ok(buf[0]),
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }
    }

    fn write_frame(&mut self, frame: &[u8]) -> Result<()> {
        let mut out = stdout().lock();
        out.write_all(frame)?;
        out.flush()?;
        Ok(())
    }
}

impl Drop for CrosstermBackend {
    fn drop(&mut self) {
        let _ = self.leave();
    }
}

impl Deref for TerminalGuard<'_> {
    type Target = CrosstermBackend;

    fn deref(&self) -> &CrosstermBackend {
        self.backend
    }
}

impl DerefMut for TerminalGuard<'_> {
    fn deref_mut(&mut self) -> &mut CrosstermBackend {
        self.backend
    }
}

impl Drop for TerminalGuard<'_> {
    fn drop(&mut self) {
        if let Err(e) = self.backend.leave() {
            tracing::error!(target: "terminal", error = %e, "restore_failed");
        }
    }
}
