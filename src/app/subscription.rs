// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Two sources: the 1-second tick that drives the counter (and toast
//! auto-dismiss), and the keyboard/touch listener that feeds the lightbox.
//! The listener is only installed while the lightbox is open, so keyboard
//! and swipe input has no effect on a closed viewer.

use super::Message;
use crate::ui::lightbox;
use iced::{event, keyboard, time, touch, Subscription};
use std::time::Duration;

/// Creates the periodic tick subscription.
///
/// Each tick recomputes the elapsed breakdown from the current instant, so
/// ticks are stateless and drift-free. The subscription only runs while
/// something needs it: a configured counter, or visible toasts.
pub fn create_tick_subscription(
    counter_enabled: bool,
    has_notifications: bool,
) -> Subscription<Message> {
    if counter_enabled || has_notifications {
        time::every(Duration::from_secs(1)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

/// Creates the keyboard/touch subscription for an open lightbox.
pub fn create_event_subscription(lightbox_open: bool) -> Subscription<Message> {
    if lightbox_open {
        event::listen_with(lightbox_event)
    } else {
        Subscription::none()
    }
}

/// Maps a native event to a lightbox message.
///
/// Keyboard events already captured by a widget are left alone.
fn lightbox_event(
    event: event::Event,
    status: event::Status,
    _window: iced::window::Id,
) -> Option<Message> {
    match event {
        event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => {
            if status == event::Status::Captured {
                return None;
            }
            match key {
                keyboard::Key::Named(keyboard::key::Named::Escape) => {
                    Some(Message::Lightbox(lightbox::Message::Close))
                }
                keyboard::Key::Named(keyboard::key::Named::ArrowRight) => {
                    Some(Message::Lightbox(lightbox::Message::Next))
                }
                keyboard::Key::Named(keyboard::key::Named::ArrowLeft) => {
                    Some(Message::Lightbox(lightbox::Message::Previous))
                }
                _ => None,
            }
        }
        event::Event::Touch(touch_event) => match touch_event {
            touch::Event::FingerPressed { position, .. } => {
                Some(Message::Lightbox(lightbox::Message::TouchStarted(position.x)))
            }
            touch::Event::FingerLifted { position, .. } => {
                Some(Message::Lightbox(lightbox::Message::TouchEnded(position.x)))
            }
            touch::Event::FingerLost { .. } => {
                Some(Message::Lightbox(lightbox::Message::TouchCancelled))
            }
            touch::Event::FingerMoved { .. } => None,
        },
        _ => None,
    }
}
