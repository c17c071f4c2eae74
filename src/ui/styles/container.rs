// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{opacity, palette, radius};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Surface behind a counter field (value + label).
pub fn counter_box(theme: &Theme) -> container::Style {
    let base = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(Background::Color(Color::from_rgba(
            base.r,
            base.g,
            base.b,
            opacity::SURFACE,
        ))),
        border: Border {
            color: Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::PRIMARY_400
            },
            width: 1.0,
            radius: radius::LG.into(),
        },
        ..Default::default()
    }
}

/// Neutral surface shown while a tile's image is still loading.
pub fn tile_loading(theme: &Theme) -> container::Style {
    let is_light = matches!(theme, Theme::Light);

    container::Style {
        background: Some(Background::Color(if is_light {
            palette::GRAY_100
        } else {
            palette::GRAY_700
        })),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Dashed-looking surface for the trailing coming-soon tile.
pub fn coming_soon(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..palette::PRIMARY_200
        })),
        text_color: Some(palette::PRIMARY_500),
        border: Border {
            color: palette::PRIMARY_400,
            width: 1.0,
            radius: radius::MD.into(),
        },
        ..Default::default()
    }
}
