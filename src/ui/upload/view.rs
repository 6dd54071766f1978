// SPDX-License-Identifier: MPL-2.0
//! View rendering for the upload widget.

use super::{Message, State};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles::{button as button_styles, container as container_styles};
use iced::widget::{button, Column, Container, Row, Text};
use iced::{alignment, Element, Length};

/// Contextual data needed to render the upload widget.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
}

/// Format file size in human-readable format.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn format_file_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.2} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{bytes} B")
    }
}

/// Render the drop zone, or the selected file with its actions.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let state = ctx.state;
    let i18n = ctx.i18n;

    let body: Element<'a, Message> = match state.selected() {
        None => empty_prompt(i18n),
        Some(file) => {
            let details = Column::new()
                .spacing(spacing::XXS)
                .align_x(alignment::Horizontal::Center)
                .push(Text::new(file.name().to_string()).size(typography::TITLE_SM))
                .push(Text::new(format_file_size(file.size_bytes())).size(typography::BODY_SM));

            let process_label = if state.is_processing() {
                i18n.tr("upload-processing")
            } else {
                i18n.tr("upload-process-button")
            };
            let process_button = button(Text::new(process_label).size(typography::BODY))
                .height(Length::Fixed(sizing::BUTTON_HEIGHT))
                .padding([spacing::XS, spacing::MD])
                .style(button_styles::primary)
                .on_press_maybe((!state.is_processing()).then_some(Message::ProcessRequested));

            let remove_button =
                button(Text::new(i18n.tr("upload-remove-button")).size(typography::BODY))
                    .height(Length::Fixed(sizing::BUTTON_HEIGHT))
                    .padding([spacing::XS, spacing::MD])
                    .style(button_styles::danger)
                    .on_press(Message::RemoveRequested);

            Column::new()
                .spacing(spacing::LG)
                .align_x(alignment::Horizontal::Center)
                .push(details)
                .push(
                    Row::new()
                        .spacing(spacing::SM)
                        .push(process_button)
                        .push(remove_button),
                )
                .into()
        }
    };

    let mut content = Column::new()
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .push(body);

    if let Some(error) = state.error() {
        content = content.push(
            Text::new(error.resolve(i18n))
                .size(typography::BODY_SM)
                .color(palette::ERROR_500),
        );
    }

    let zone = Container::new(content)
        .width(Length::Fixed(sizing::DROP_ZONE_WIDTH))
        .height(Length::Fixed(sizing::DROP_ZONE_HEIGHT))
        .padding(spacing::LG)
        .center_x(Length::Fixed(sizing::DROP_ZONE_WIDTH))
        .center_y(Length::Fixed(sizing::DROP_ZONE_HEIGHT))
        .style(container_styles::drop_zone(
            state.is_drag_active(),
            state.error().is_some(),
        ));

    Container::new(zone)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}

fn empty_prompt<'a>(i18n: &I18n) -> Element<'a, Message> {
    let browse = button(Text::new(i18n.tr("upload-browse-button")).size(typography::BODY))
        .height(Length::Fixed(sizing::BUTTON_HEIGHT))
        .padding([spacing::XS, spacing::MD])
        .style(button_styles::primary)
        .on_press(Message::BrowseRequested);

    Column::new()
        .spacing(spacing::SM)
        .align_x(alignment::Horizontal::Center)
        .push(Text::new("♪").size(sizing::ICON_XL))
        .push(Text::new(i18n.tr("upload-drop-prompt")).size(typography::BODY_LG))
        .push(Text::new(i18n.tr("upload-supported-formats")).size(typography::CAPTION))
        .push(browse)
        .into()
}
