//! Status line composition.
//!
//! Format (left part, then right part flush against the last column):
//! `<MODE> <name> - <n> lines[ (modified)]` ... `<row>:<col>`
//! * `<name>` is the file name as given (first 20 bytes) or `No name`.
//! * Row and column are 1-based.
//!
//! Two stages: `compose_status` produces ordered `StatusSegment`s and
//! `format_status` lays them out into exactly `width` bytes.

use core_state::Mode;
use std::borrow::Cow;
use std::path::Path;

/// Longest file name prefix shown, in bytes.
pub const FILE_NAME_MAX: usize = 20;
const NO_NAME: &str = "No name";

/// What the status line needs from the session.
pub struct StatusContext<'a> {
    pub mode: Mode,
    pub file_name: Option<&'a Path>,
    pub row_count: usize,
    pub dirty: bool,
    /// 0-based cursor row.
    pub row: usize,
    /// 0-based cursor column.
    pub col: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusSegment<'a> {
    Mode(&'static str),
    FileName(Cow<'a, str>),
    RowCount(usize),
    Modified,
    /// 1-based cursor position, right aligned.
    Position { row_1: usize, col_1: usize },
}

pub fn compose_status<'a>(ctx: &StatusContext<'a>) -> Vec<StatusSegment<'a>> {
    let name: Cow<'a, str> = match ctx.file_name {
        Some(p) => truncate_name(p.to_string_lossy()),
        None => Cow::Borrowed(NO_NAME),
    };
    let mut out = Vec::with_capacity(5);
    out.push(StatusSegment::Mode(ctx.mode.label()));
    out.push(StatusSegment::FileName(name));
    out.push(StatusSegment::RowCount(ctx.row_count));
    if ctx.dirty {
        out.push(StatusSegment::Modified);
    }
    out.push(StatusSegment::Position {
        row_1: ctx.row + 1,
        col_1: ctx.col + 1,
    });
    out
}

fn truncate_name(name: Cow<'_, str>) -> Cow<'_, str> {
    if name.len() <= FILE_NAME_MAX {
        return name;
    }
    let mut end = FILE_NAME_MAX;
    while !name.is_char_boundary(end) {
        end -= 1;
    }
    match name {
        Cow::Borrowed(s) => Cow::Borrowed(&s[..end]),
        Cow::Owned(mut s) => {
            s.truncate(end);
            Cow::Owned(s)
        }
    }
}

/// Render segments into a line of exactly `width` bytes. The right part is
/// dropped first when space runs out; the left part is truncated last.
pub fn format_status(segments: &[StatusSegment<'_>], width: usize) -> String {
    use std::fmt::Write as _;
    let mut left = String::with_capacity(48);
    let mut right = String::new();
    for seg in segments {
        match seg {
            StatusSegment::Mode(m) => left.push_str(m),
            StatusSegment::FileName(name) => {
                let _ = write!(left, " {name}");
            }
            StatusSegment::RowCount(n) => {
                let _ = write!(left, " - {n} lines");
            }
            StatusSegment::Modified => left.push_str(" (modified)"),
            StatusSegment::Position { row_1, col_1 } => {
                let _ = write!(right, "{row_1}:{col_1}");
            }
        }
    }
    let mut line = left;
    if line.len() + 1 + right.len() <= width {
        let pad = width - line.len() - right.len();
        line.extend(std::iter::repeat_n(' ', pad));
        line.push_str(&right);
    } else {
        let mut end = width.min(line.len());
        while !line.is_char_boundary(end) {
            end -= 1;
        }
        line.truncate(end);
        let pad = width - line.len();
        line.extend(std::iter::repeat_n(' ', pad));
    }
    line
}

pub fn build_status(ctx: &StatusContext<'_>, width: usize) -> String {
    format_status(&compose_status(ctx), width)
}
