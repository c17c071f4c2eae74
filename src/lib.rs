// SPDX-License-Identifier: MPL-2.0
//! `keepsake` is a small photo-wall application built with the Iced GUI
//! framework.
//!
//! It shows a fixed picture catalog in a fresh random order on every launch,
//! opens any picture in a modal lightbox with keyboard, pointer, and
//! touch-swipe navigation, and keeps an anniversary counter ticking above
//! the wall. Labels are internationalized with Fluent.

pub mod app;
pub mod config;
pub mod elapsed;
pub mod error;
pub mod gallery;
pub mod i18n;
pub mod media;
pub mod ui;
