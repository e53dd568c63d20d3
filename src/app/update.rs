// SPDX-License-Identifier: MPL-2.0
//! Message dispatch for the application.
//!
//! Selection handling follows a strict order: validate the declared type
//! first, and only then spawn the asynchronous read+decode. A rejected file
//! never reaches the decoder. Completions carry the request token issued at
//! load start; the viewer state discards any that were superseded.

use super::{App, Message};
use crate::error::MetadataError;
use crate::media::{self, SelectedFile};
use crate::ui::viewer;
use iced::Task;
use std::path::PathBuf;

pub fn update(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::Viewer(viewer::Message::OpenFileRequested) => handle_open_file_dialog(),
        Message::Viewer(viewer::Message::ResetRequested) => {
            app.viewer.reset();
            Task::none()
        }
        Message::OpenFileDialogResult(path) => match path {
            Some(path) => select_file(app, path),
            // User cancelled the dialog
            None => Task::none(),
        },
        Message::FileDropped(path) => select_file(app, path),
        Message::MetadataLoaded { token, result } => {
            app.viewer.complete(token, result);
            Task::none()
        }
    }
}

/// Opens the system file picker.
fn handle_open_file_dialog() -> Task<Message> {
    Task::perform(
        async move {
            rfd::AsyncFileDialog::new()
                .add_filter("Images", media::mime::IMAGE_EXTENSIONS)
                .add_filter("All files", &["*"])
                .pick_file()
                .await
                .map(|handle| handle.path().to_path_buf())
        },
        Message::OpenFileDialogResult,
    )
}

/// Handles a selection from either the dialog or a window drop.
///
/// The new selection replaces the previous one wholesale; an in-flight load
/// for the old selection is not cancelled, its completion is simply ignored.
fn select_file(app: &mut App, path: PathBuf) -> Task<Message> {
    let file = SelectedFile::from_path(&path);

    if !file.is_image() {
        app.viewer.reject(MetadataError::NotAnImage {
            mime: file.mime.to_string(),
        });
        return Task::none();
    }

    let token = app.viewer.begin_load(file);
    Task::perform(
        async move { media::metadata::load_entries(&path) },
        move |result| Message::MetadataLoaded { token, result },
    )
}
