// SPDX-License-Identifier: MPL-2.0
//! Image loading and placeholder generation.

pub mod image;

pub use image::{load_image, placeholder, ImageData};
