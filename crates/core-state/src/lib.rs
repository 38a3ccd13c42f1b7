//! Editor session state: document, mode, command line and status message.
//!
//! One `EditorState` exists per process. It is owned by `core-model`'s
//! `EditorModel` next to the cursor/viewport and handed by `&mut` into every
//! dispatcher call; nothing here is global.
//!
//! Time-based behavior is limited to the status message. Expiry is never
//! scheduled: renderers ask [`EditorState::visible_status`] with the frame's
//! `Instant` and an expired message simply stops showing.

use std::time::{Duration, Instant};

use core_text::Document;
use tracing::debug;

/// Default lifetime of a status message.
pub const DEFAULT_MESSAGE_TTL: Duration = Duration::from_secs(3);
/// Default Ctrl-d / Ctrl-u jump in rows.
pub const DEFAULT_PAGE_ROWS: usize = 10;

/// Current editor mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Navigation and single/multi-key commands.
    #[default]
    View,
    /// Literal text entry into the document.
    Insert,
    /// `:`-prefixed command entry.
    CommandLine,
}

impl Mode {
    /// Label shown in the status line.
    pub fn label(self) -> &'static str {
        match self {
            Mode::View => "VIEW",
            Mode::Insert => "INSERT",
            Mode::CommandLine => "COMMAND",
        }
    }
}

/// Text typed after `:`. The stored buffer keeps the leading `:` sentinel
/// while active and is empty otherwise.
#[derive(Debug, Default, Clone)]
pub struct CommandLineState {
    buf: String,
}

impl CommandLineState {
    pub fn is_active(&self) -> bool {
        self.buf.starts_with(':')
    }

    pub fn buffer(&self) -> &str {
        &self.buf
    }

    pub fn clear(&mut self) {
        self.buf.clear();
    }

    /// Begin a new command, discarding any previous content.
    pub fn begin(&mut self) {
        self.buf.clear();
        self.buf.push(':');
    }

    pub fn push_char(&mut self, ch: char) {
        if self.buf.is_empty() && ch != ':' {
            self.buf.push(':');
        }
        self.buf.push(ch);
    }

    /// Remove the last character. Returns false once the `:` sentinel itself
    /// was removed, i.e. the command line is no longer active.
    pub fn backspace(&mut self) -> bool {
        if self.buf.len() > 1 {
            self.buf.pop();
            true
        } else {
            self.buf.clear();
            false
        }
    }

    /// Take the buffer for execution, leaving the command line inactive.
    pub fn take(&mut self) -> String {
        std::mem::take(&mut self.buf)
    }
}

/// Transient one-line notice.
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub set_at: Instant,
}

impl StatusMessage {
    /// Visible while strictly less than `ttl` has elapsed since `set_at`.
    pub fn is_visible_at(&self, now: Instant, ttl: Duration) -> bool {
        now.saturating_duration_since(self.set_at) < ttl
    }
}

/// Top-level session state (single buffer).
#[derive(Debug)]
pub struct EditorState {
    pub document: Document,
    pub mode: Mode,
    pub command_line: CommandLineState,
    pub status: Option<StatusMessage>,
    pub message_ttl: Duration,
    pub page_rows: usize,
}

impl EditorState {
    pub fn new(document: Document) -> Self {
        Self {
            document,
            mode: Mode::View,
            command_line: CommandLineState::default(),
            status: None,
            message_ttl: DEFAULT_MESSAGE_TTL,
            page_rows: DEFAULT_PAGE_ROWS,
        }
    }

    /// Replace the status message, stamping it with the current time.
    pub fn set_status<S: Into<String>>(&mut self, msg: S) {
        self.set_status_at(msg, Instant::now());
    }

    pub fn set_status_at<S: Into<String>>(&mut self, msg: S, at: Instant) {
        let text = msg.into();
        debug!(target: "state.status", text = text.as_str(), "status_set");
        self.status = Some(StatusMessage { text, set_at: at });
    }

    /// Status text if a message exists and has not expired at `now`.
    pub fn visible_status(&self, now: Instant) -> Option<&str> {
        self.status
            .as_ref()
            .filter(|m| m.is_visible_at(now, self.message_ttl))
            .map(|m| m.text.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn initial_mode_is_view() {
        let st = EditorState::new(Document::new());
        assert_eq!(st.mode, Mode::View);
        assert!(!st.command_line.is_active());
        assert!(st.status.is_none());
    }

    #[test]
    fn command_line_backspace_past_sentinel_deactivates() {
        let mut cl = CommandLineState::default();
        cl.begin();
        cl.push_char('w');
        assert_eq!(cl.buffer(), ":w");
        assert!(cl.backspace());
        assert_eq!(cl.buffer(), ":");
        assert!(!cl.backspace());
        assert!(!cl.is_active());
    }

    #[test]
    fn command_line_take_leaves_inactive() {
        let mut cl = CommandLineState::default();
        cl.push_char('q');
        assert_eq!(cl.take(), ":q");
        assert!(!cl.is_active());
    }

    #[test]
    fn status_expires_exactly_at_ttl() {
        let mut st = EditorState::new(Document::new());
        let t0 = Instant::now();
        st.set_status_at("hello", t0);
        let ttl = st.message_ttl;
        assert_eq!(st.visible_status(t0), Some("hello"));
        assert_eq!(
            st.visible_status(t0 + ttl - Duration::from_millis(1)),
            Some("hello")
        );
        assert_eq!(st.visible_status(t0 + ttl), None);
        assert_eq!(st.visible_status(t0 + ttl * 2), None);
    }

    #[test]
    fn newer_status_replaces_older() {
        let mut st = EditorState::new(Document::new());
        let t0 = Instant::now();
        st.set_status_at("first", t0);
        st.set_status_at("second", t0 + Duration::from_secs(2));
        assert_eq!(
            st.visible_status(t0 + Duration::from_secs(4)),
            Some("second")
        );
    }

    #[test]
    fn mode_labels() {
        assert_eq!(Mode::View.label(), "VIEW");
        assert_eq!(Mode::Insert.label(), "INSERT");
        assert_eq!(Mode::CommandLine.label(), "COMMAND");
    }
}
