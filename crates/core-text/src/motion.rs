//! Word boundary scanning for `w` / `b`.
//!
//! A boundary is a run of spaces or a single punctuation byte in the ASCII
//! range 33..=46 (`!` through `.`). A word start is a non-space byte that is
//! either punctuation itself or follows a boundary. Scans stay inside the row
//! slice; there is no look-ahead past the last byte.

const PUNCT_START: u8 = 33;
const PUNCT_END: u8 = 46;

pub fn is_punctuation(b: u8) -> bool {
    (PUNCT_START..=PUNCT_END).contains(&b)
}

pub fn is_boundary(b: u8) -> bool {
    b == b' ' || is_punctuation(b)
}

fn is_word_start(row: &[u8], idx: usize) -> bool {
    let b = row[idx];
    if b == b' ' {
        return false;
    }
    if is_punctuation(b) {
        return true;
    }
    idx == 0 || is_boundary(row[idx - 1])
}

/// Column of the next word start after `col`, or `None` when the row edge is
/// reached first.
pub fn word_forward(row: &[u8], col: usize) -> Option<usize> {
    (col.saturating_add(1)..row.len()).find(|&i| is_word_start(row, i))
}

/// Column of the closest word start before `col`, or `None` at the row start.
pub fn word_backward(row: &[u8], col: usize) -> Option<usize> {
    let end = col.min(row.len());
    (0..end).rev().find(|&i| is_word_start(row, i))
}
