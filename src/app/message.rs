// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::Error;
use crate::media::ImageData;
use crate::ui::grid;
use crate::ui::lightbox;
use crate::ui::notifications;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Grid(grid::Message),
    Lightbox(lightbox::Message),
    /// Result of one tile's asynchronous image load.
    TileLoaded {
        index: usize,
        result: Result<ImageData, Error>,
    },
    Tick(Instant), // Periodic tick for the counter and toast auto-dismiss
    Notification(notifications::Message),
}

/// Runtime flags passed in from the CLI or launcher to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `th`, `en-US`).
    pub lang: Option<String>,
    /// Optional pictures directory overriding the configured one.
    pub pictures_dir: Option<String>,
}
