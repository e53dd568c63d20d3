// SPDX-License-Identifier: MPL-2.0
//! File-type validation and EXIF metadata extraction.

pub mod metadata;
pub mod mime;

use std::path::{Path, PathBuf};

/// The currently selected file: name, declared MIME type, and path.
///
/// Byte content is only read inside the asynchronous load; the selection
/// itself is cheap and is replaced wholesale on the next pick or drop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    /// File name without directory components (e.g. `photo.jpg`).
    pub name: String,
    /// Declared MIME type derived from the extension (e.g. `image/jpeg`).
    pub mime: &'static str,
    /// Full path used for the buffered read.
    pub path: PathBuf,
}

impl SelectedFile {
    /// Builds a selection from a path picked in the dialog or dropped on
    /// the window. The declared type is not verified against content.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        let name = path
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self {
            name,
            mime: mime::from_path(path),
            path: path.to_path_buf(),
        }
    }

    /// Whether the declared type matches `image/*`.
    pub fn is_image(&self) -> bool {
        mime::is_image(self.mime)
    }
}
