// SPDX-License-Identifier: MPL-2.0
//! Image loading and decoding, plus the deterministic fallback tiles shown
//! when a catalog image cannot be read.

use crate::error::Result;
use iced::widget::image;
use std::path::Path;

/// Dimensions of generated fallback tiles, matching a portrait photo.
const PLACEHOLDER_WIDTH: u32 = 400;
const PLACEHOLDER_HEIGHT: u32 = 600;

/// Golden-angle step in degrees; keys each tile index to a distinct hue.
const HUE_STEP_DEGREES: f32 = 137.508;

#[derive(Debug, Clone)]
pub struct ImageData {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
}

impl ImageData {
    /// Creates a new `ImageData` from RGBA pixels.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        Self {
            handle: image::Handle::from_rgba(width, height, pixels),
            width,
            height,
        }
    }
}

/// Loads and decodes an image from disk.
///
/// # Errors
///
/// Returns an error if the file cannot be read or decoded.
pub fn load_image(path: &Path) -> Result<ImageData> {
    let decoded = image_rs::open(path)?;
    let rgba = decoded.to_rgba8();
    let (width, height) = rgba.dimensions();
    Ok(ImageData::from_rgba(width, height, rgba.into_raw()))
}

/// Generates the fallback tile for a display index.
///
/// The tile is a vertical gradient whose hue is derived from the index, so
/// the same index always yields the same image within and across renders.
#[must_use]
pub fn placeholder(index: usize) -> ImageData {
    let hue = (index as f32 * HUE_STEP_DEGREES) % 360.0;
    let (top_r, top_g, top_b) = hsl_to_rgb(hue, 0.45, 0.65);
    let (bottom_r, bottom_g, bottom_b) = hsl_to_rgb(hue, 0.5, 0.35);

    let mut pixels = Vec::with_capacity((PLACEHOLDER_WIDTH * PLACEHOLDER_HEIGHT * 4) as usize);
    for y in 0..PLACEHOLDER_HEIGHT {
        let t = y as f32 / (PLACEHOLDER_HEIGHT - 1) as f32;
        let r = lerp(top_r, bottom_r, t);
        let g = lerp(top_g, bottom_g, t);
        let b = lerp(top_b, bottom_b, t);
        for _ in 0..PLACEHOLDER_WIDTH {
            pixels.extend_from_slice(&[r, g, b, 255]);
        }
    }

    ImageData::from_rgba(PLACEHOLDER_WIDTH, PLACEHOLDER_HEIGHT, pixels)
}

fn lerp(a: u8, b: u8, t: f32) -> u8 {
    (f32::from(a) + (f32::from(b) - f32::from(a)) * t).round() as u8
}

/// Converts HSL (hue in degrees, saturation/lightness in [0, 1]) to RGB bytes.
fn hsl_to_rgb(hue: f32, saturation: f32, lightness: f32) -> (u8, u8, u8) {
    let chroma = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
    let hue_prime = hue / 60.0;
    let x = chroma * (1.0 - (hue_prime % 2.0 - 1.0).abs());

    let (r1, g1, b1) = match hue_prime as u32 {
        0 => (chroma, x, 0.0),
        1 => (x, chroma, 0.0),
        2 => (0.0, chroma, x),
        3 => (0.0, x, chroma),
        4 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };

    let m = lightness - chroma / 2.0;
    (
        ((r1 + m) * 255.0).round() as u8,
        ((g1 + m) * 255.0).round() as u8,
        ((b1 + m) * 255.0).round() as u8,
    )
}
