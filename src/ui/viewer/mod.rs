// SPDX-License-Identifier: MPL-2.0
//! Metadata viewer: selection state machine and screen rendering.

pub mod state;
pub mod view;

pub use state::{Phase, RequestToken, State};

/// Messages emitted by the viewer's widgets.
#[derive(Debug, Clone)]
pub enum Message {
    /// The drop zone or its button was clicked.
    OpenFileRequested,
    /// The reset control was clicked.
    ResetRequested,
}
