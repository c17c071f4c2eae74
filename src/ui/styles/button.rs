// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{opacity, palette::BLACK, shadow};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Style for overlay buttons (lightbox navigation and close).
pub fn overlay(
    text_color: Color,
    alpha_normal: f32,
    alpha_hover: f32,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let alpha = match status {
            button::Status::Hovered => alpha_hover,
            button::Status::Pressed => opacity::OVERLAY_PRESSED,
            _ => alpha_normal,
        };

        button::Style {
            background: Some(Background::Color(Color { a: alpha, ..BLACK })),
            text_color,
            border: Border::default(),
            shadow: shadow::MD,
            snap: true,
        }
    }
}

/// Invisible button surface for gallery tiles; the tile image is the visual.
pub fn tile(_theme: &Theme, status: button::Status) -> button::Style {
    let alpha = match status {
        button::Status::Hovered | button::Status::Pressed => opacity::OVERLAY_SUBTLE,
        _ => opacity::TRANSPARENT,
    };

    button::Style {
        background: Some(Background::Color(Color { a: alpha, ..BLACK })),
        text_color: Color::WHITE,
        border: Border::default(),
        shadow: shadow::NONE,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlay_style_darkens_on_hover() {
        let style_fn = overlay(Color::WHITE, 0.5, 0.8);
        let theme = Theme::Dark;

        let normal = style_fn(&theme, button::Status::Active);
        let hovered = style_fn(&theme, button::Status::Hovered);

        let alpha = |style: &button::Style| match style.background {
            Some(Background::Color(color)) => color.a,
            _ => panic!("expected a color background"),
        };
        assert!(alpha(&hovered) > alpha(&normal));
    }

    #[test]
    fn tile_style_is_transparent_at_rest() {
        let style = tile(&Theme::Dark, button::Status::Active);
        match style.background {
            Some(Background::Color(color)) => assert_eq!(color.a, opacity::TRANSPARENT),
            _ => panic!("expected a color background"),
        }
    }
}
