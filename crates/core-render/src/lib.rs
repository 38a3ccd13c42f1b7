//! Frame assembly for the terminal.
//!
//! Exposed components:
//! - `render_engine`: builds one full frame from `EditorState` +
//!   `CursorViewport` + `Layout` and encodes it into a single byte buffer.
//! - `status`: builds the status line string (mode, file, row count, dirty
//!   marker, cursor position).
//! - `writer`: logical terminal commands (MoveTo, ClearToEol, Print, ...) and
//!   their escape sequence encoding.
//!
//! The renderer never writes to the terminal itself; the binary hands the
//! returned bytes to the terminal backend.

pub mod render_engine;
pub mod status;
pub mod writer;

pub use render_engine::RenderEngine;
