// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{palette, radius, shadow};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

const WHITE: Color = Color::WHITE;

/// Primary action (Process File, Browse).
pub fn primary(theme: &Theme, status: button::Status) -> button::Style {
    filled(theme, status, palette::PRIMARY_500, palette::PRIMARY_400, palette::PRIMARY_600)
}

/// Destructive action (Remove File).
pub fn danger(theme: &Theme, status: button::Status) -> button::Style {
    filled(
        theme,
        status,
        palette::ERROR_500,
        Color::from_rgb(0.95, 0.35, 0.33),
        Color::from_rgb(0.75, 0.15, 0.14),
    )
}

fn filled(
    theme: &Theme,
    status: button::Status,
    base: Color,
    hover: Color,
    edge: Color,
) -> button::Style {
    let is_light = matches!(theme, Theme::Light);

    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(base)),
            text_color: WHITE,
            border: Border {
                color: edge,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::SM,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(hover)),
            text_color: WHITE,
            border: Border {
                color: base,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::MD,
            snap: true,
        },
        button::Status::Disabled => button::Style {
            background: Some(Background::Color(if is_light {
                palette::GRAY_200
            } else {
                palette::GRAY_700
            })),
            text_color: palette::GRAY_400,
            border: Border {
                color: palette::GRAY_400,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        },
    }
}
