// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based
//! architecture with the Elm-style "state down, messages up" pattern.
//!
//! - [`counter`] - Anniversary counter fields
//! - [`grid`] - Photo wall tile grid with the coming-soon tile
//! - [`lightbox`] - Modal viewer with keyboard, pointer, and swipe navigation
//! - [`notifications`] - Toast notification system for user feedback
//! - [`styles`] - Centralized styling (buttons, containers, overlays)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`widgets`] - Custom Iced widgets (wheel gate)

pub mod counter;
pub mod design_tokens;
pub mod grid;
pub mod lightbox;
pub mod notifications;
pub mod styles;
pub mod theming;
pub mod widgets;
