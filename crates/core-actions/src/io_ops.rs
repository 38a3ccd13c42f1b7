//! File IO helpers used by the dispatcher.
//!
//! Synchronous and minimal: serialize the document, write it with a single
//! call, clear the dirty flag on success. Failures are typed so the command
//! layer can turn them into status text.

use std::path::PathBuf;

use core_text::Document;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SaveError {
    #[error("No file name")]
    NoFileName,
    #[error("Can't save {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Write `doc` to `target` when given, else to its associated file. A target
/// becomes the document's file name only once the write succeeded; on failure
/// the document is left untouched. Returns the number of bytes written.
pub fn save_document(doc: &mut Document, target: Option<PathBuf>) -> Result<usize, SaveError> {
    let path = target
        .or_else(|| doc.file_name().map(|p| p.to_path_buf()))
        .ok_or(SaveError::NoFileName)?;
    let content = doc.serialize();
    match std::fs::write(&path, &content) {
        Ok(()) => {
            tracing::info!(
                target: "io",
                file = %path.display(),
                bytes = content.len(),
                "file_write_ok"
            );
            doc.set_file_name(path);
            doc.mark_clean();
            Ok(content.len())
        }
        Err(source) => {
            tracing::error!(
                target: "io",
                file = %path.display(),
                error = %source,
                "file_write_error"
            );
            Err(SaveError::Io { path, source })
        }
    }
}
