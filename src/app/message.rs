// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::MetadataError;
use crate::media::metadata::MetadataEntry;
use crate::ui::viewer;
use std::path::PathBuf;

/// Top-level messages consumed by `App::update`. The variants forward the
/// viewer's widget messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Viewer(viewer::Message),
    /// Result from the open file dialog (`None` = cancelled).
    OpenFileDialogResult(Option<PathBuf>),
    /// A file was dropped on the window.
    FileDropped(PathBuf),
    /// Completion of an asynchronous read+decode. The token identifies the
    /// selection that issued it; stale completions are discarded.
    MetadataLoaded {
        token: viewer::RequestToken,
        result: Result<Vec<MetadataEntry>, MetadataError>,
    },
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional image path to preload on startup.
    pub file_path: Option<String>,
    /// Optional directory containing Fluent `.ftl` files for custom builds.
    pub i18n_dir: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over the `EXIF_LENS_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
