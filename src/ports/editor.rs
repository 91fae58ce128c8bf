//! Host-editor port for opening folders and documents.

use std::path::{Path, PathBuf};

use super::PortError;

/// A document opened by the host editor, to be shown with [`EditorHost::show_document`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentHandle {
    /// Absolute path of the opened document.
    pub path: PathBuf,
}

/// A line selection inside a document. Lines are zero-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    /// Zero-based line at which the view is positioned.
    pub start_line: u32,
}

/// Surface of the host editor.
///
/// Abstracting the editor keeps the reconciliation logic free of
/// host-specific calls and independently testable.
pub trait EditorHost: Send + Sync {
    /// Opens the given directory as a workspace folder.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor cannot be invoked.
    fn open_folder(&self, path: &Path) -> Result<(), PortError>;

    /// Opens the file at `path` and returns a handle to it.
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be opened.
    fn open_document(&self, path: &Path) -> Result<DocumentHandle, PortError>;

    /// Brings a previously opened document into view, optionally positioned
    /// at a selection.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor cannot show the document.
    fn show_document(
        &self,
        document: &DocumentHandle,
        selection: Option<Selection>,
    ) -> Result<(), PortError>;

    /// Shows an informational notification to the user.
    fn notify_info(&self, message: &str);

    /// Shows an error notification to the user.
    fn notify_error(&self, message: &str);
}
