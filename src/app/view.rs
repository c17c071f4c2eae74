// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The base layer is a scrollable page holding the counter and the photo
//! wall. The lightbox and the toasts are stacked above it; while the
//! lightbox is open the page's scrollable sits behind a closed wheel gate,
//! so the wall underneath no longer scrolls.

use super::Message;
use crate::elapsed::Breakdown;
use crate::gallery::Gallery;
use crate::i18n::I18n;
use crate::ui::counter;
use crate::ui::design_tokens::spacing;
use crate::ui::grid;
use crate::ui::lightbox;
use crate::ui::notifications;
use crate::ui::widgets::wheel_gate;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{Column, Container, Scrollable, Stack};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    /// Present only when an anchor instant is configured.
    pub breakdown: Option<&'a Breakdown>,
    /// Present only when a pictures directory is configured.
    pub gallery: Option<&'a Gallery>,
    pub lightbox: &'a lightbox::State,
    pub notifications: &'a notifications::Manager,
}

/// Renders the page with the lightbox and toasts stacked above it.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let mut page = Column::new()
        .spacing(spacing::XL)
        .padding(spacing::XL)
        .align_x(Horizontal::Center)
        .width(Length::Fill);

    if let Some(breakdown) = ctx.breakdown {
        page = page.push(counter::view(
            &counter::ViewContext { i18n: ctx.i18n },
            breakdown,
        ));
    }

    if let Some(gallery) = ctx.gallery {
        page = page.push(
            grid::view(&grid::ViewContext { i18n: ctx.i18n }, gallery).map(Message::Grid),
        );
    }

    let scrollable_page = Scrollable::new(page).width(Length::Fill).height(Length::Fill);
    let base = wheel_gate(scrollable_page, ctx.lightbox.is_open());

    let mut stack = Stack::new().push(base);

    if ctx.lightbox.is_open() {
        if let Some(gallery) = ctx.gallery {
            stack = stack.push(lightbox::view::view(ctx.lightbox, gallery).map(Message::Lightbox));
        }
    }

    if ctx.notifications.has_notifications() {
        stack = stack.push(
            Container::new(ctx.notifications.view(ctx.i18n).map(Message::Notification))
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(Horizontal::Right)
                .align_y(Vertical::Bottom)
                .padding(spacing::MD),
        );
    }

    stack.into()
}
