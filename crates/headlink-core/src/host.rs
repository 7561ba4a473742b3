//! Abstract interfaces to the host editor surface.
//!
//! The core never owns UI; it consumes document snapshots from a
//! [`DocumentSource`] and pushes outcomes through the sink traits. Hosts
//! (an LSP server, a plugin shim, tests) implement these.

use crate::model::{ActiveDocument, DocumentContent};

/// Provider of the document collection and the focused document.
pub trait DocumentSource: Send + Sync {
    /// Snapshot of the host's focused document, `None` when no document
    /// has focus.
    fn active_document(&self) -> Option<ActiveDocument>;

    /// Enumerate every document in the collection, in stable order.
    fn list_documents(&self) -> Vec<DocumentContent>;
}

/// External clipboard. Writes may fail; the caller logs and moves on.
pub trait ClipboardSink {
    fn write(&self, text: &str) -> std::io::Result<()>;
}

/// Text replacement surface of the host editor.
pub trait EditorSink {
    /// The currently selected text ("" when the selection is empty).
    fn selection_text(&self) -> String;

    /// Replace the current selection with `text`.
    fn replace_selection(&mut self, text: &str);
}

/// User-facing notices. Every user-visible outcome of the flows goes here.
pub trait NotificationSink {
    fn notify(&self, message: &str);
}
