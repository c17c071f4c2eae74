// SPDX-License-Identifier: MPL-2.0
//! Gallery state: the shuffled display order and per-tile image resolution.
//!
//! The `Gallery` is the single source of truth shared by the grid and the
//! lightbox. The display order is fixed at construction (one shuffle per
//! launch) and the mapping from a display index to its catalog entry is
//! explicit, never derived from widget positions. Whether a tile currently
//! shows its real image or a fallback is recorded here and exposed through
//! [`Gallery::resolved_image`], so the lightbox always agrees with the grid.

pub mod catalog;
pub mod cursor;
pub mod shuffle;

pub use cursor::Cursor;

use crate::media::ImageData;
use std::path::{Path, PathBuf};

/// How a tile's image request resolved so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileResolution {
    /// The load has not completed yet.
    Loading,
    /// The catalog image decoded successfully.
    Loaded,
    /// The catalog image failed and the generated fallback is shown instead.
    Fallback,
}

/// One entry of the display order.
#[derive(Debug, Clone)]
pub struct Tile {
    source: PathBuf,
    resolution: TileResolution,
    image: Option<ImageData>,
}

impl Tile {
    fn new(source: PathBuf) -> Self {
        Self {
            source,
            resolution: TileResolution::Loading,
            image: None,
        }
    }

    /// Path of the catalog entry behind this tile.
    #[must_use]
    pub fn source(&self) -> &Path {
        &self.source
    }

    #[must_use]
    pub fn resolution(&self) -> TileResolution {
        self.resolution
    }

    /// The image currently shown for this tile, if any has resolved.
    #[must_use]
    pub fn image(&self) -> Option<&ImageData> {
        self.image.as_ref()
    }
}

/// Shuffled catalog plus per-tile resolution state.
#[derive(Debug, Clone, Default)]
pub struct Gallery {
    tiles: Vec<Tile>,
}

impl Gallery {
    /// Builds a gallery from a catalog, shuffling it into this launch's
    /// display order.
    #[must_use]
    pub fn new(mut sources: Vec<PathBuf>) -> Self {
        shuffle::fisher_yates(&mut sources, &mut rand::thread_rng());
        Self::with_order(sources)
    }

    /// Builds a gallery with an explicit display order (no shuffle).
    #[must_use]
    pub fn with_order(display_order: Vec<PathBuf>) -> Self {
        Self {
            tiles: display_order.into_iter().map(Tile::new).collect(),
        }
    }

    /// Number of image tiles (the coming-soon tile is not counted).
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Tiles in display order, for rendering.
    #[must_use]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Source path at a display index.
    #[must_use]
    pub fn source(&self, index: usize) -> Option<&Path> {
        self.tiles.get(index).map(Tile::source)
    }

    /// The image currently resolved for a display index.
    ///
    /// This is the query the lightbox uses: once a tile fell back, both the
    /// grid and the lightbox keep showing the same fallback.
    #[must_use]
    pub fn resolved_image(&self, index: usize) -> Option<&ImageData> {
        self.tiles.get(index).and_then(Tile::image)
    }

    /// Records a successful load for a display index.
    ///
    /// A tile that already fell back keeps its fallback: the session's
    /// resolution is stable once decided.
    pub fn record_loaded(&mut self, index: usize, image: ImageData) {
        if let Some(tile) = self.tiles.get_mut(index) {
            if tile.resolution == TileResolution::Loading {
                tile.resolution = TileResolution::Loaded;
                tile.image = Some(image);
            }
        }
    }

    /// Records a failed load for a display index, substituting a fallback.
    pub fn record_fallback(&mut self, index: usize, fallback: ImageData) {
        if let Some(tile) = self.tiles.get_mut(index) {
            if tile.resolution == TileResolution::Loading {
                tile.resolution = TileResolution::Fallback;
                tile.image = Some(fallback);
            }
        }
    }
}
