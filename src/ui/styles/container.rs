// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Drop zone surface. Highlighted with the brand color while files hover,
/// outlined in red while an error is shown.
pub fn drop_zone(active: bool, error: bool) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let palette_ext = theme.extended_palette();
        let base = palette_ext.background.weak.color;

        let (background, border_color) = if active {
            (
                Color {
                    a: opacity::OVERLAY_SUBTLE,
                    ..palette::PRIMARY_400
                },
                palette::PRIMARY_500,
            )
        } else if error {
            (base, palette::ERROR_500)
        } else {
            (base, palette_ext.background.strong.color)
        };

        container::Style {
            background: Some(Background::Color(background)),
            border: Border {
                color: border_color,
                width: border::WIDTH_MD,
                radius: radius::LG.into(),
            },
            text_color: Some(palette_ext.background.base.text),
            ..Default::default()
        }
    }
}

/// Tooltip bubble with inverted contrast against the current theme.
pub fn tooltip(theme: &Theme) -> container::Style {
    let bg = theme.extended_palette().background.base.color;
    let is_dark = (bg.r + bg.g + bg.b) / 3.0 < 0.5;

    let (bg_color, text_color) = if is_dark {
        (palette::GRAY_100, palette::GRAY_900)
    } else {
        (palette::GRAY_900, palette::GRAY_100)
    };

    container::Style {
        background: Some(Background::Color(bg_color)),
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::SM,
        text_color: Some(text_color),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_drop_zone_uses_brand_border() {
        let style = drop_zone(true, false)(&Theme::Light);
        assert_eq!(style.border.color, palette::PRIMARY_500);
    }

    #[test]
    fn error_drop_zone_uses_error_border() {
        let style = drop_zone(false, true)(&Theme::Dark);
        assert_eq!(style.border.color, palette::ERROR_500);
    }

    #[test]
    fn tooltip_inverts_theme() {
        let dark = tooltip(&Theme::Dark);
        let light = tooltip(&Theme::Light);
        assert_ne!(dark.background, light.background);
    }
}
