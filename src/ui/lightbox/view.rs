// SPDX-License-Identifier: MPL-2.0
//! Lightbox overlay: dimmed backdrop, the image at the cursor, close and
//! navigation controls, and a position counter.
//!
//! The content is wrapped in `opaque` so presses on the image or the
//! controls never fall through to the backdrop's close handler; only a press
//! on the backdrop itself produces [`Message::BackdropPressed`].

use super::{Message, State};
use crate::gallery::Gallery;
use crate::ui::design_tokens::{opacity, palette::WHITE, radius, spacing, typography};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, center, image, mouse_area, opaque, Column, Container, Row, Space, Text};
use iced::{ContentFit, Element, Length};

/// Displayed image area inside the overlay.
const IMAGE_WIDTH: f32 = 800.0;
const IMAGE_HEIGHT: f32 = 540.0;

/// Renders the modal overlay for an open lightbox.
///
/// Callers only invoke this while the state is open; a missing cursor
/// renders an empty element rather than panicking.
pub fn view<'a>(state: &State, gallery: &'a Gallery) -> Element<'a, Message> {
    let Some(cursor_index) = state.cursor_index() else {
        return Space::new().width(Length::Shrink).height(Length::Shrink).into();
    };

    // The lightbox shows whatever the grid currently resolves for this
    // index, so a tile that fell back keeps its fallback here too.
    let picture: Element<'a, Message> = match gallery.resolved_image(cursor_index) {
        Some(data) => image(data.handle.clone())
            .width(Length::Fill)
            .height(Length::Fill)
            .content_fit(ContentFit::Contain)
            .into(),
        None => Container::new(Space::new().width(Length::Fill).height(Length::Fill))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::container::tile_loading)
            .into(),
    };

    let close_button = button(Text::new("✕").size(typography::TITLE_MD))
        .padding([spacing::XXS, spacing::SM])
        .style(styles::button_overlay(
            WHITE,
            opacity::OVERLAY_MEDIUM,
            opacity::OVERLAY_HOVER,
        ))
        .on_press(Message::Close);

    let previous_button = button(Text::new("◀").size(typography::TITLE_LG))
        .padding(spacing::SM)
        .style(styles::button_overlay(
            WHITE,
            opacity::OVERLAY_MEDIUM,
            opacity::OVERLAY_HOVER,
        ))
        .on_press(Message::Previous);

    let next_button = button(Text::new("▶").size(typography::TITLE_LG))
        .padding(spacing::SM)
        .style(styles::button_overlay(
            WHITE,
            opacity::OVERLAY_MEDIUM,
            opacity::OVERLAY_HOVER,
        ))
        .on_press(Message::Next);

    let position_counter = Container::new(
        Text::new(format!("{} / {}", cursor_index + 1, gallery.len()))
            .size(typography::BODY)
            .color(WHITE),
    )
    .padding([spacing::XXS, spacing::SM])
    .style(styles::overlay::indicator(radius::MD));

    let top_row = Row::new()
        .width(Length::Fill)
        .push(Space::new().width(Length::Fill).height(Length::Shrink))
        .push(close_button);

    let controls_row = Row::new()
        .spacing(spacing::LG)
        .align_y(Vertical::Center)
        .push(previous_button)
        .push(position_counter)
        .push(next_button);

    let content = Column::new()
        .spacing(spacing::SM)
        .align_x(Horizontal::Center)
        .push(top_row)
        .push(
            Container::new(picture)
                .width(Length::Fixed(IMAGE_WIDTH))
                .height(Length::Fixed(IMAGE_HEIGHT)),
        )
        .push(controls_row);

    opaque(
        mouse_area(
            center(opaque(Container::new(content).padding(spacing::LG)))
                .style(styles::overlay::backdrop),
        )
        .on_press(Message::BackdropPressed),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::lightbox;
    use std::path::PathBuf;

    #[test]
    fn view_renders_for_an_open_lightbox() {
        let gallery = Gallery::with_order(vec![PathBuf::from("a.jpg"), PathBuf::from("b.jpg")]);
        let mut state = State::new();
        state.handle(lightbox::Message::Open(1), gallery.len());

        let _element = view(&state, &gallery);
    }

    #[test]
    fn view_renders_without_a_cursor() {
        let gallery = Gallery::with_order(Vec::new());
        let state = State::new();
        let _element = view(&state, &gallery);
    }
}
