//! Session state for a docchat run
//!
//! Tracks which document (if any) has been selected for upload and
//! whether an upload has completed successfully. The session lives for
//! the duration of the process; a successful upload is never reset.

use std::path::{Path, PathBuf};

/// A document chosen for upload
///
/// The display name is derived from the final path component so status
/// lines show `report.pdf` rather than the full path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    /// Path to the document on disk
    pub path: PathBuf,
    /// Display name (final path component)
    pub name: String,
}

impl SelectedFile {
    /// Create a selection from a path
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the document
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.to_string_lossy().to_string());
        Self { path, name }
    }
}

/// Per-process session state
///
/// Two facts are tracked: the current file selection and whether a
/// document has been uploaded. Questions may only be sent once
/// `has_uploaded_document` is true.
#[derive(Debug, Clone, Default)]
pub struct Session {
    /// True once a document has been uploaded successfully
    pub has_uploaded_document: bool,
    /// The document currently selected for upload, if any
    pub selected_file: Option<SelectedFile>,
}

impl Session {
    /// Create a fresh session with no selection and no uploaded document
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a file selection
    ///
    /// Replaces any previous selection. Selecting a file does not affect
    /// the uploaded-document flag.
    pub fn select_file(&mut self, path: impl AsRef<Path>) -> &SelectedFile {
        self.selected_file.insert(SelectedFile::new(path))
    }

    /// Whether a file has been selected for upload
    pub fn has_selection(&self) -> bool {
        self.selected_file.is_some()
    }

    /// Display name of the selected file, if any
    pub fn selected_name(&self) -> Option<&str> {
        self.selected_file.as_ref().map(|f| f.name.as_str())
    }

    /// Mark the selected document as uploaded
    ///
    /// Called only after the upload endpoint reports success.
    pub fn mark_uploaded(&mut self) {
        self.has_uploaded_document = true;
    }
}
