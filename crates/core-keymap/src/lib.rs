//! core-keymap: View mode key binding engine.
//!
//! Design principles:
//! - Pure and deterministic: resolution depends only on the pending buffer.
//! - Bindings compiled into a small trie so multi-key commands (`dd`, `gg`)
//!   and single keys share one lookup path.
//! - A strict prefix of a binding is reported as `NeedMore`; anything that
//!   neither matches nor extends a binding is `NoMatch` and the caller clears
//!   the pending buffer (silent rejection).
//! - No side effects beyond TRACE/DEBUG logging.

use smallvec::SmallVec;
use tracing::{debug, trace};

/// Raw input byte constants.
pub mod keys {
    pub const ESC: u8 = 0x1b;
    pub const ENTER: u8 = b'\r';
    pub const TAB: u8 = b'\t';
    /// Terminals send DEL for the backspace key.
    pub const BACKSPACE: u8 = 127;

    /// Byte produced by Ctrl + `c` (the letter with the top three bits
    /// cleared).
    pub const fn ctrl(c: u8) -> u8 {
        c & 0x1f
    }
}

/// Upper bound on buffered keystrokes.
pub const PENDING_CAPACITY: usize = 10;

// -------------------------------------------------------------------------------------------------
// Symbolic output
// -------------------------------------------------------------------------------------------------
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewCommand {
    MoveLeft,       // h
    MoveRight,      // l
    MoveDown,       // j
    MoveUp,         // k
    LineStart,      // 0
    LineEnd,        // $
    WordForward,    // w
    WordBackward,   // b
    DocumentStart,  // gg
    DocumentEnd,    // G
    PageDown,       // <C-d>
    PageUp,         // <C-u>
    DeleteUnder,    // x
    DeleteLeft,     // X
    DeleteRow,      // dd
    Save,           // Z, <C-s>
    ForceQuit,      // <C-q>
    InsertBefore,   // i
    Append,         // a
    OpenBelow,      // o
    OpenAbove,      // O
    CommandLine,    // :
}

#[derive(Debug, Clone)]
pub struct Binding {
    pub sequence: SmallVec<[u8; 2]>,
    pub output: ViewCommand,
}

impl Binding {
    pub fn new(sequence: &[u8], output: ViewCommand) -> Self {
        Self {
            sequence: SmallVec::from_slice(sequence),
            output,
        }
    }
}

// -------------------------------------------------------------------------------------------------
// Trie representation
// -------------------------------------------------------------------------------------------------
#[derive(Debug, Clone)]
struct Edge {
    key: u8,
    next: usize,
}

#[derive(Debug, Clone)]
struct Node {
    terminal: Option<ViewCommand>,
    edges: SmallVec<[Edge; 4]>,
}

impl Node {
    fn new() -> Self {
        Self {
            terminal: None,
            edges: SmallVec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Matched(ViewCommand),
    /// Strict prefix of at least one binding.
    NeedMore,
    NoMatch,
}

#[derive(Debug)]
pub struct BindingTable {
    nodes: Vec<Node>,
}

impl BindingTable {
    pub fn build(bindings: Vec<Binding>) -> Self {
        let mut table = BindingTable {
            nodes: vec![Node::new()],
        };
        for (idx, b) in bindings.iter().enumerate() {
            let mut cur = 0usize;
            for &key in &b.sequence {
                let next = if let Some(e) = table.nodes[cur].edges.iter().find(|e| e.key == key) {
                    e.next
                } else {
                    let new_idx = table.nodes.len();
                    table.nodes.push(Node::new());
                    table.nodes[cur].edges.push(Edge { key, next: new_idx });
                    new_idx
                };
                cur = next;
            }
            if table.nodes[cur].terminal.is_some() {
                // Later binding wins.
                trace!(
                    target: "input.keymap",
                    binding_index = idx,
                    node = cur,
                    "terminal_override"
                );
            }
            table.nodes[cur].terminal = Some(b.output);
        }
        table
    }

    pub fn resolve(&self, buffer: &[u8]) -> Resolution {
        if buffer.is_empty() {
            return Resolution::NeedMore;
        }
        let mut node_idx = 0usize;
        for (i, &key) in buffer.iter().enumerate() {
            match self.nodes[node_idx].edges.iter().find(|e| e.key == key) {
                Some(edge) => {
                    node_idx = edge.next;
                    trace!(target: "input.keymap", step = i, key, node = node_idx, "advance");
                }
                None => return Resolution::NoMatch,
            }
        }
        let node = &self.nodes[node_idx];
        match node.terminal {
            Some(cmd) => Resolution::Matched(cmd),
            None if !node.edges.is_empty() => Resolution::NeedMore,
            None => Resolution::NoMatch,
        }
    }
}

/// Bindings active in View mode.
pub fn default_view_bindings() -> Vec<Binding> {
    use ViewCommand as C;
    use keys::ctrl;
    vec![
        Binding::new(b"h", C::MoveLeft),
        Binding::new(b"l", C::MoveRight),
        Binding::new(b"j", C::MoveDown),
        Binding::new(b"k", C::MoveUp),
        Binding::new(b"0", C::LineStart),
        Binding::new(b"$", C::LineEnd),
        Binding::new(b"w", C::WordForward),
        Binding::new(b"b", C::WordBackward),
        Binding::new(b"gg", C::DocumentStart),
        Binding::new(b"G", C::DocumentEnd),
        Binding::new(&[ctrl(b'd')], C::PageDown),
        Binding::new(&[ctrl(b'u')], C::PageUp),
        Binding::new(b"x", C::DeleteUnder),
        Binding::new(b"X", C::DeleteLeft),
        Binding::new(b"dd", C::DeleteRow),
        Binding::new(b"Z", C::Save),
        Binding::new(&[ctrl(b's')], C::Save),
        Binding::new(&[ctrl(b'q')], C::ForceQuit),
        Binding::new(b"i", C::InsertBefore),
        Binding::new(b"a", C::Append),
        Binding::new(b"o", C::OpenBelow),
        Binding::new(b"O", C::OpenAbove),
        Binding::new(b":", C::CommandLine),
    ]
}

// -------------------------------------------------------------------------------------------------
// Pending command buffer
// -------------------------------------------------------------------------------------------------

/// Keystrokes accumulated toward a multi-key command.
#[derive(Debug, Default, Clone)]
pub struct PendingCommand {
    keys: SmallVec<[u8; PENDING_CAPACITY]>,
}

impl PendingCommand {
    pub fn as_slice(&self) -> &[u8] {
        &self.keys
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn clear(&mut self) {
        self.keys.clear();
    }

    /// Append a key. Returns false (and leaves the buffer untouched) when the
    /// buffer is full.
    pub fn push(&mut self, key: u8) -> bool {
        if self.keys.len() >= PENDING_CAPACITY {
            return false;
        }
        self.keys.push(key);
        true
    }
}

/// Result of feeding one key into [`Keymap`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    Command(ViewCommand),
    Pending,
    Rejected,
}

/// Binding table plus pending state.
#[derive(Debug)]
pub struct Keymap {
    table: BindingTable,
    pending: PendingCommand,
}

impl Default for Keymap {
    fn default() -> Self {
        Self::new(BindingTable::build(default_view_bindings()))
    }
}

impl Keymap {
    pub fn new(table: BindingTable) -> Self {
        Self {
            table,
            pending: PendingCommand::default(),
        }
    }

    pub fn pending(&self) -> &PendingCommand {
        &self.pending
    }

    pub fn reset(&mut self) {
        self.pending.clear();
    }

    /// Feed one key. The pending buffer is cleared after every committed or
    /// rejected command.
    pub fn feed(&mut self, key: u8) -> KeyOutcome {
        if !self.pending.push(key) {
            debug!(target: "input.keymap", "pending_overflow");
            self.pending.clear();
            return KeyOutcome::Rejected;
        }
        match self.table.resolve(self.pending.as_slice()) {
            Resolution::Matched(cmd) => {
                debug!(target: "input.keymap", command = ?cmd, "command_matched");
                self.pending.clear();
                KeyOutcome::Command(cmd)
            }
            Resolution::NeedMore => {
                trace!(target: "input.keymap", pending = ?self.pending.as_slice(), "need_more");
                KeyOutcome::Pending
            }
            Resolution::NoMatch => {
                debug!(
                    target: "input.keymap",
                    pending = ?self.pending.as_slice(),
                    "sequence_rejected"
                );
                self.pending.clear();
                KeyOutcome::Rejected
            }
        }
    }
}
