// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct wires together the viewer state machine, localization,
//! and theming, and translates messages into side effects like opening the
//! file dialog or spawning the asynchronous metadata load. Policy decisions
//! (window sizing, locale resolution, preload behavior) stay close to the
//! update loop so user-facing behavior is easy to audit.

mod message;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config;
use crate::i18n::fluent::I18n;
use crate::ui::theming::ThemeMode;
use crate::ui::viewer;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::{Path, PathBuf};

pub const WINDOW_DEFAULT_WIDTH: u32 = 700;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 600;
pub const MIN_WINDOW_WIDTH: u32 = 480;
pub const MIN_WINDOW_HEIGHT: u32 = 420;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    viewer: viewer::State,
    theme_mode: ThemeMode,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("viewer_loading", &self.viewer.is_loading())
            .field("theme_mode", &self.theme_mode)
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state and optionally kicks off an
    /// asynchronous metadata load for a path received on the command line.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load(flags.config_dir.as_deref().map(Path::new));
        let i18n = I18n::new(flags.lang, flags.i18n_dir, &config);

        if let Some(key) = config_warning {
            eprintln!("{}", i18n.tr(key));
        }

        let app = App {
            i18n,
            viewer: viewer::State::new(),
            theme_mode: config.general.theme_mode,
        };

        // A preloaded path goes through the same selection flow as a drop,
        // validation included.
        let task = match flags.file_path {
            Some(path) => Task::done(Message::FileDropped(PathBuf::from(path))),
            None => Task::none(),
        };

        (app, task)
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        update::update(self, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            viewer: &self.viewer,
        })
    }

    fn title(&self) -> String {
        self.i18n.tr("app-title")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_event_subscription()
    }

    /// Minimal state for unit tests: embedded locales, default theme, no
    /// config file access.
    #[cfg(test)]
    pub(crate) fn bare() -> Self {
        App {
            i18n: I18n::default(),
            viewer: viewer::State::new(),
            theme_mode: ThemeMode::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_settings_enforce_minimum_size() {
        let settings = window_settings();
        let min = settings.min_size.expect("min size");
        assert!(min.width >= MIN_WINDOW_WIDTH as f32);
        assert!(min.height >= MIN_WINDOW_HEIGHT as f32);
    }

    #[test]
    fn bare_app_starts_idle() {
        let app = App::bare();
        assert!(!app.viewer.is_loading());
    }
}
