// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! The whole window is the drop target: native file-drop events are routed
//! into the update loop here. The windowing layer delivers one event per
//! dropped file, so a multi-file drop arrives as a sequence of selections
//! and the latest one wins.

use super::Message;
use iced::{event, Subscription};

/// Creates the window event subscription.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window_id| {
        if let event::Event::Window(iced::window::Event::FileDropped(path)) = &event {
            return Some(Message::FileDropped(path.clone()));
        }
        None
    })
}
