//! Screen geometry.
//!
//! The terminal is split top to bottom into the text area followed by three
//! single-row bands: status line, message line and command line. All values
//! are terminal cell units.
//!
//! Invariants:
//! * `text_rows + RESERVED_ROWS <= rows` unless the terminal is smaller than
//!   the reserved bands, in which case `text_rows == 0`.
//! * Band rows are consecutive and follow the text area.

/// Rows taken by the status, message and command lines.
pub const RESERVED_ROWS: u16 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub rows: u16,
    pub width: u16,
    pub text_rows: u16,
}

impl Layout {
    /// Derive the layout from the terminal size `(rows, cols)`.
    pub fn from_terminal(rows: u16, cols: u16) -> Self {
        Self {
            rows,
            width: cols,
            text_rows: rows.saturating_sub(RESERVED_ROWS),
        }
    }

    pub fn status_row(&self) -> u16 {
        self.text_rows
    }

    pub fn message_row(&self) -> u16 {
        self.text_rows + 1
    }

    pub fn command_row(&self) -> u16 {
        self.text_rows + 2
    }

    /// False for band rows that fall off a terminal shorter than the
    /// reserved bands.
    pub fn is_on_screen(&self, row: u16) -> bool {
        row < self.rows
    }
}
