// SPDX-License-Identifier: MPL-2.0
//! Inline error banner with consistent styling.
//!
//! Displays a severity-colored banner with a short localized message and the
//! raw technical details underneath. The banner is passive; recovery actions
//! (picking another file, reset) live next to it in the caller's layout.

use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::widget::{container, Column, Text};
use iced::{Color, Element, Length};

/// Severity level determines the color scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    /// Critical error - prevents operation (red)
    #[default]
    Error,
    /// Warning - operation degraded but possible (orange)
    Warning,
    /// Informational - no action required (blue)
    Info,
}

impl Severity {
    /// Returns the primary color for this severity level.
    pub fn color(&self) -> Color {
        match self {
            Severity::Error => palette::ERROR_500,
            Severity::Warning => palette::WARNING_500,
            Severity::Info => palette::INFO_500,
        }
    }
}

/// Builder for an inline banner.
#[derive(Debug, Clone, Default)]
pub struct ErrorBanner {
    severity: Severity,
    message: String,
    details: Option<String>,
}

impl ErrorBanner {
    #[must_use]
    pub fn new(severity: Severity) -> Self {
        Self {
            severity,
            ..Self::default()
        }
    }

    /// Localized, user-facing message.
    #[must_use]
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Raw technical details shown below the message.
    #[must_use]
    pub fn details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn view<'a, Message: 'a>(self) -> Element<'a, Message> {
        let mut content = Column::new().spacing(spacing::XS).push(
            Text::new(self.message)
                .size(typography::BODY)
                .color(self.severity.color()),
        );

        if let Some(details) = self.details {
            content = content.push(
                Text::new(details)
                    .size(typography::CAPTION)
                    .color(palette::GRAY_400),
            );
        }

        container(content)
            .width(Length::Fill)
            .padding(spacing::MD)
            .style(styles::container::error_banner)
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_colors_differ() {
        assert_ne!(Severity::Error.color(), Severity::Warning.color());
        assert_ne!(Severity::Warning.color(), Severity::Info.color());
    }

    #[test]
    fn builder_accumulates_message_and_details() {
        let banner = ErrorBanner::new(Severity::Error)
            .message("Please select an image file")
            .details("declared type: application/pdf");
        assert_eq!(banner.message, "Please select an image file");
        assert!(banner.details.as_deref().unwrap().contains("pdf"));
    }
}
