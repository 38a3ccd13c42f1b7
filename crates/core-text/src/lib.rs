//! Row based text document.
//!
//! The document is an ordered `Vec<Row>` plus a dirty flag and an optional
//! associated file path. All positions are `(row, col)` byte coordinates.
//! `row` may legally equal `row_count()` (the cursor parked just past the last
//! line); every mutator treats that sentinel explicitly instead of indexing
//! out of bounds.
//!
//! Mutators never fail loudly: out of range requests are clamped or ignored
//! and report what happened through their `bool` return value. Only file IO
//! produces errors.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, warn};

pub mod motion;
mod row;

pub use row::Row;

/// A position inside a document expressed as (row index, byte column).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub fn origin() -> Self {
        Self { row: 0, col: 0 }
    }

    /// Clamp into `[0, row_count]` rows and `[0, row_len]` columns. The row
    /// sentinel `row_count` is preserved; its length is reported as 0.
    pub fn clamp_to<F>(&mut self, row_count: usize, mut row_len_fn: F)
    where
        F: FnMut(usize) -> usize,
    {
        if self.row > row_count {
            self.row = row_count;
        }
        let max_len = if self.row < row_count {
            row_len_fn(self.row)
        } else {
            0
        };
        if self.col > max_len {
            self.col = max_len;
        }
    }
}

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("cannot open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("read failed: {0}")]
    Read(#[from] io::Error),
}

/// In-memory text document (single buffer).
#[derive(Debug, Clone, Default)]
pub struct Document {
    rows: Vec<Row>,
    dirty: bool,
    file_name: Option<PathBuf>,
}

impl Document {
    /// Empty, unnamed, clean document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a clean document from in-memory lines. Lines must not contain
    /// line terminators.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<[u8]>,
    {
        Self {
            rows: lines
                .into_iter()
                .map(|l| Row::from_bytes(l.as_ref()))
                .collect(),
            dirty: false,
            file_name: None,
        }
    }

    /// Read `source` line by line, one row per line. Trailing `\n` / `\r`
    /// bytes are stripped so both LF and CRLF files load identically.
    pub fn load<R: BufRead>(mut source: R) -> Result<Self, DocumentError> {
        let mut doc = Self::new();
        let mut line = Vec::new();
        loop {
            line.clear();
            let read = source.read_until(b'\n', &mut line)?;
            if read == 0 {
                break;
            }
            while matches!(line.last(), Some(b'\n' | b'\r')) {
                line.pop();
            }
            if line.contains(&b'\r') {
                warn!(target: "io", row = doc.rows.len(), "stray_carriage_return_dropped");
                line.retain(|b| *b != b'\r');
            }
            doc.rows.push(Row::from_bytes(&line));
        }
        doc.dirty = false;
        Ok(doc)
    }

    /// Load a file and adopt its path as the associated file name.
    pub fn open(path: &Path) -> Result<Self, DocumentError> {
        let file = File::open(path).map_err(|source| DocumentError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let mut doc = Self::load(BufReader::new(file))?;
        doc.file_name = Some(path.to_path_buf());
        debug!(target: "io", file = %path.display(), rows = doc.rows.len(), "file_read_ok");
        Ok(doc)
    }

    /// Every row followed by a single `\n`, concatenated in order.
    pub fn serialize(&self) -> Vec<u8> {
        let total: usize = self.rows.iter().map(|r| r.len() + 1).sum();
        let mut out = Vec::with_capacity(total);
        for row in &self.rows {
            out.extend_from_slice(row.as_bytes());
            out.push(b'\n');
        }
        out
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn row(&self, idx: usize) -> Option<&Row> {
        self.rows.get(idx)
    }

    /// Byte length of a row; 0 for the past-the-end sentinel.
    pub fn row_len(&self, idx: usize) -> usize {
        self.rows.get(idx).map_or(0, Row::len)
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Called after a successful save.
    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }

    pub fn file_name(&self) -> Option<&Path> {
        self.file_name.as_deref()
    }

    pub fn set_file_name(&mut self, path: impl Into<PathBuf>) {
        self.file_name = Some(path.into());
    }

    /// Insert a new row at `at` (`0..=row_count`). Returns false for an out of
    /// range index.
    pub fn insert_row(&mut self, at: usize, text: &[u8]) -> bool {
        if at > self.rows.len() {
            return false;
        }
        self.rows.insert(at, Row::from_bytes(text));
        self.dirty = true;
        true
    }

    /// Remove the row at `at` (`0..row_count`). The past-the-end sentinel is
    /// rejected.
    pub fn delete_row(&mut self, at: usize) -> bool {
        if at >= self.rows.len() {
            return false;
        }
        self.rows.remove(at);
        self.dirty = true;
        true
    }

    /// Concatenate `text` onto the end of row `row`.
    pub fn append_string(&mut self, row: usize, text: &[u8]) -> bool {
        match self.rows.get_mut(row) {
            Some(r) => {
                r.append(text);
                self.dirty = true;
                true
            }
            None => false,
        }
    }

    /// Insert `ch` at `pos` and advance `pos` past it. Typing on the
    /// past-the-end row first creates it. The column is clamped to the row
    /// length.
    pub fn insert_char(&mut self, pos: &mut Position, ch: u8) {
        if pos.row > self.rows.len() {
            return;
        }
        if pos.row == self.rows.len() {
            self.rows.push(Row::new());
        }
        let row = &mut self.rows[pos.row];
        let col = pos.col.min(row.len());
        row.insert(col, ch);
        pos.col = col + 1;
        self.dirty = true;
    }

    /// Backspace: delete the byte before `pos`. At column 0 the row is joined
    /// onto the previous row and `pos` moves to the join point. No-op at the
    /// document start or on the past-the-end row.
    pub fn delete_char(&mut self, pos: &mut Position) -> bool {
        if pos.row >= self.rows.len() || (pos.row == 0 && pos.col == 0) {
            return false;
        }
        if pos.col == 0 {
            let prev = pos.row - 1;
            let prev_len = self.rows[prev].len();
            let moved = self.rows[pos.row].as_bytes().to_vec();
            self.append_string(prev, &moved);
            self.delete_row(pos.row);
            *pos = Position::new(prev, prev_len);
            return true;
        }
        let col = pos.col.min(self.rows[pos.row].len());
        if col == 0 {
            pos.col = 0;
            return false;
        }
        self.rows[pos.row].remove(col - 1);
        pos.col = col - 1;
        self.dirty = true;
        true
    }

    /// Delete the byte under `pos` (View mode `x`). No-op at or past the end
    /// of the row.
    pub fn delete_char_at(&mut self, pos: &Position) -> bool {
        let removed = self
            .rows
            .get_mut(pos.row)
            .is_some_and(|r| r.remove(pos.col));
        if removed {
            self.dirty = true;
        }
        removed
    }

    /// Split the row at `pos`, moving the tail onto a new row below. `pos`
    /// moves to the start of the new row. On the past-the-end row an empty
    /// row is appended instead.
    pub fn insert_newline(&mut self, pos: &mut Position) {
        if pos.row > self.rows.len() {
            return;
        }
        if pos.row == self.rows.len() {
            self.insert_row(pos.row, b"");
        } else {
            let tail = self.rows[pos.row].split_off(pos.col);
            self.insert_row(pos.row + 1, tail.as_bytes());
        }
        *pos = Position::new(pos.row + 1, 0);
    }
}
