// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! `App::update` stays a thin dispatcher; each handler here owns one
//! message family. Handlers take exactly the state they touch, which keeps
//! them callable from tests without building a full application.

use crate::elapsed::Breakdown;
use crate::error::Error;
use crate::gallery::Gallery;
use crate::media::{self, ImageData};
use crate::ui::grid;
use crate::ui::lightbox;
use crate::ui::notifications;
use chrono::NaiveDateTime;

/// Handles a grid message: tile activation opens the lightbox at that tile.
pub fn handle_grid_message(
    lightbox: &mut lightbox::State,
    gallery: Option<&Gallery>,
    message: grid::Message,
) {
    let Some(gallery) = gallery else {
        return;
    };
    match message {
        grid::Message::TileActivated(index) => {
            lightbox.handle(lightbox::Message::Open(index), gallery.len());
        }
    }
}

/// Forwards a lightbox message with the current catalog length.
pub fn handle_lightbox_message(
    lightbox: &mut lightbox::State,
    gallery: Option<&Gallery>,
    message: lightbox::Message,
) {
    let catalog_len = gallery.map_or(0, Gallery::len);
    lightbox.handle(message, catalog_len);
}

/// Records a finished tile load, substituting the index-keyed fallback on
/// failure. Failures never propagate: one broken file must not disturb the
/// rest of the wall.
pub fn handle_tile_loaded(
    gallery: Option<&mut Gallery>,
    index: usize,
    result: Result<ImageData, Error>,
) {
    let Some(gallery) = gallery else {
        return;
    };
    match result {
        Ok(image) => gallery.record_loaded(index, image),
        Err(_) => gallery.record_fallback(index, media::placeholder(index)),
    }
}

/// Recomputes the counter from the current instant and ages the toasts.
pub fn handle_tick(
    anchor: Option<NaiveDateTime>,
    breakdown: &mut Breakdown,
    notifications: &mut notifications::Manager,
    now: NaiveDateTime,
) {
    if let Some(anchor) = anchor {
        *breakdown = Breakdown::between(anchor, now);
    }
    notifications.tick();
}
