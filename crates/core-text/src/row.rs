//! Single line storage.

/// One line of document text as raw bytes, without any line terminator.
///
/// Invariant: never contains `\n` or `\r`. Callers inside this crate strip
/// terminators before constructing a row; bytes handed in through
/// [`Row::insert`] are filtered by the input layer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    chars: Vec<u8>,
}

impl Row {
    pub fn new() -> Self {
        Self { chars: Vec::new() }
    }

    pub fn from_bytes(bytes: &[u8]) -> Self {
        debug_assert!(!bytes.iter().any(|b| *b == b'\n' || *b == b'\r'));
        Self {
            chars: bytes.to_vec(),
        }
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.chars
    }

    /// Insert `ch` at `at`; an out of range index appends.
    pub fn insert(&mut self, at: usize, ch: u8) {
        let at = at.min(self.chars.len());
        self.chars.insert(at, ch);
    }

    /// Remove the byte at `at`. Returns false when `at` is past the end.
    pub fn remove(&mut self, at: usize) -> bool {
        if at >= self.chars.len() {
            return false;
        }
        self.chars.remove(at);
        true
    }

    pub fn append(&mut self, bytes: &[u8]) {
        self.chars.extend_from_slice(bytes);
    }

    /// Split off everything from `at` onwards, leaving `[0, at)` in place.
    pub fn split_off(&mut self, at: usize) -> Row {
        let at = at.min(self.chars.len());
        Row {
            chars: self.chars.split_off(at),
        }
    }

    /// Visible slice starting at `offset`, at most `width` bytes long.
    pub fn visible(&self, offset: usize, width: usize) -> &[u8] {
        if offset >= self.chars.len() {
            return &[];
        }
        let end = offset.saturating_add(width).min(self.chars.len());
        &self.chars[offset..end]
    }
}
