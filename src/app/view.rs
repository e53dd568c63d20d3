// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::viewer::{self, view::ViewEnv};
use iced::Element;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub viewer: &'a viewer::State,
}

/// Renders the single viewer screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    viewer::view::view(ctx.viewer, ViewEnv { i18n: ctx.i18n }).map(Message::Viewer)
}
