// SPDX-License-Identifier: MPL-2.0
//! View rendering for the metadata viewer screen.
//!
//! The layout is a drop zone on top and, below it, whatever the current
//! phase calls for: nothing (Idle), a loading placeholder row (Loading),
//! the results table or the no-metadata placeholder (Loaded), or an error
//! banner (Failed). The phase enum guarantees these are mutually exclusive.

use super::state::{Phase, State};
use super::Message;
use crate::i18n::fluent::I18n;
use crate::media::metadata::MetadataEntry;
use crate::ui::components::error_banner::{ErrorBanner, Severity};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, rule, scrollable, Column, Container, Row, Text};
use iced::{alignment, Element, Length};

/// Contextual data needed to render the viewer.
pub struct ViewEnv<'a> {
    pub i18n: &'a I18n,
}

/// Renders the viewer screen from its state.
pub fn view<'a>(state: &'a State, env: ViewEnv<'a>) -> Element<'a, Message> {
    let i18n = env.i18n;

    let mut content = Column::new()
        .spacing(spacing::LG)
        .align_x(alignment::Horizontal::Center)
        .push(drop_zone(i18n));

    match state.phase() {
        Phase::Idle => {}
        Phase::Loading { file } => {
            content = content.push(loading_panel(i18n, &file.name));
        }
        Phase::Loaded { file, entries } => {
            content = content.push(results_panel(i18n, &file.name, entries));
            content = content.push(reset_button(i18n));
        }
        Phase::Failed { error } => {
            content = content.push(
                Container::new(
                    ErrorBanner::new(Severity::Error)
                        .message(i18n.tr(error.i18n_key()))
                        .details(error.to_string())
                        .view(),
                )
                .max_width(sizing::RESULTS_MAX_WIDTH),
            );
            content = content.push(reset_button(i18n));
        }
    }

    Container::new(scrollable(content.width(Length::Fill)))
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::XL)
        .align_x(alignment::Horizontal::Center)
        .into()
}

/// The always-visible drop target with an open button.
fn drop_zone(i18n: &I18n) -> Element<'_, Message> {
    let title = Text::new(i18n.tr("drop-zone-title"))
        .size(typography::TITLE_LG)
        .color(palette::GRAY_400);

    let subtitle = Text::new(i18n.tr("drop-zone-subtitle"))
        .size(typography::BODY)
        .color(palette::GRAY_400);

    let open_button = button(Text::new(i18n.tr("drop-zone-button")))
        .padding([spacing::SM, spacing::LG])
        .style(styles::button::primary)
        .on_press(Message::OpenFileRequested);

    let hint = Text::new(i18n.tr("drop-zone-hint")).size(typography::CAPTION).color(
        iced::Color {
            a: 0.5,
            ..palette::GRAY_400
        },
    );

    let inner = Column::new()
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .push(title)
        .push(subtitle)
        .push(open_button)
        .push(hint);

    Container::new(inner)
        .max_width(sizing::RESULTS_MAX_WIDTH)
        .width(Length::Fill)
        .padding(spacing::XL)
        .align_x(alignment::Horizontal::Center)
        .style(styles::container::drop_zone)
        .into()
}

/// Placeholder row shown while the read+decode is in flight.
fn loading_panel<'a>(i18n: &'a I18n, file_name: &'a str) -> Element<'a, Message> {
    let panel = Column::new()
        .spacing(spacing::SM)
        .push(file_label(file_name))
        .push(rule::horizontal(1))
        .push(
            Text::new(i18n.tr("loading-metadata"))
                .size(typography::BODY)
                .color(palette::GRAY_400),
        );

    Container::new(panel)
        .max_width(sizing::RESULTS_MAX_WIDTH)
        .width(Length::Fill)
        .padding(spacing::MD)
        .style(styles::container::panel)
        .into()
}

/// Results section: filename label plus either the table or the
/// no-metadata placeholder, never both.
fn results_panel<'a>(
    i18n: &'a I18n,
    file_name: &'a str,
    entries: &'a [MetadataEntry],
) -> Element<'a, Message> {
    let body: Element<'a, Message> = if entries.is_empty() {
        Text::new(i18n.tr("no-metadata"))
            .size(typography::BODY)
            .color(palette::GRAY_400)
            .into()
    } else {
        metadata_table(i18n, entries)
    };

    let panel = Column::new()
        .spacing(spacing::SM)
        .push(file_label(file_name))
        .push(rule::horizontal(1))
        .push(body);

    Container::new(panel)
        .max_width(sizing::RESULTS_MAX_WIDTH)
        .width(Length::Fill)
        .padding(spacing::MD)
        .style(styles::container::panel)
        .into()
}

/// Two-column table of tag names and formatted values.
fn metadata_table<'a>(i18n: &'a I18n, entries: &'a [MetadataEntry]) -> Element<'a, Message> {
    let header = Row::new()
        .spacing(spacing::MD)
        .push(
            Text::new(i18n.tr("column-tag"))
                .size(typography::BODY)
                .width(Length::Fixed(sizing::TAG_COLUMN_WIDTH)),
        )
        .push(Text::new(i18n.tr("column-value")).size(typography::BODY));

    let mut table = Column::new()
        .spacing(spacing::XXS)
        .push(header)
        .push(rule::horizontal(1));

    for (index, entry) in entries.iter().enumerate() {
        let row = Row::new()
            .spacing(spacing::MD)
            .push(
                Text::new(entry.tag.as_str())
                    .size(typography::BODY)
                    .width(Length::Fixed(sizing::TAG_COLUMN_WIDTH)),
            )
            .push(
                Text::new(entry.value.format())
                    .size(typography::BODY)
                    .color(palette::GRAY_400),
            );

        let row = Container::new(row)
            .width(Length::Fill)
            .padding([spacing::XXS, spacing::XS]);
        let row = if index % 2 == 0 {
            row.style(styles::container::table_row_even)
        } else {
            row
        };
        table = table.push(row);
    }

    table.into()
}

fn file_label(file_name: &str) -> Element<'_, Message> {
    Text::new(file_name).size(typography::TITLE_SM).into()
}

fn reset_button(i18n: &I18n) -> Element<'_, Message> {
    button(Text::new(i18n.tr("reset-button")))
        .padding([spacing::XS, spacing::LG])
        .style(styles::button::secondary)
        .on_press(Message::ResetRequested)
        .into()
}
