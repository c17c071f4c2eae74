// SPDX-License-Identifier: MPL-2.0
//! Lightbox state machine.
//!
//! Two states, `Closed` and `Open`. Opening resets the cursor to the
//! activated tile; navigation wraps modulo the catalog length in both
//! directions. Keyboard and touch input only reach this component while it
//! is open (the subscription gates them), and every handler re-checks the
//! open state so stray messages are inert.

pub mod view;

use crate::gallery::Cursor;

/// Horizontal distance in logical pixels a touch must travel to count as a
/// swipe. Anything shorter is ignored entirely, not treated as a tap.
pub const SWIPE_THRESHOLD: f32 = 50.0;

/// Direction resolved from a completed swipe gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Leftward swipe: advance to the next image.
    Next,
    /// Rightward swipe: go back to the previous image.
    Previous,
}

/// Classifies a horizontal gesture by its start and end coordinates.
///
/// Returns `None` for sub-threshold motion.
#[must_use]
pub fn classify_swipe(start_x: f32, end_x: f32) -> Option<SwipeDirection> {
    let delta = end_x - start_x;
    if delta <= -SWIPE_THRESHOLD {
        Some(SwipeDirection::Next)
    } else if delta >= SWIPE_THRESHOLD {
        Some(SwipeDirection::Previous)
    } else {
        None
    }
}

/// Messages for the lightbox.
#[derive(Debug, Clone)]
pub enum Message {
    /// Open at a display index (a grid tile was activated).
    Open(usize),
    /// Close via the close button or Escape.
    Close,
    /// Advance the cursor (button, ArrowRight, or leftward swipe).
    Next,
    /// Retreat the cursor (button, ArrowLeft, or rightward swipe).
    Previous,
    /// A press landed on the backdrop itself, outside the content.
    BackdropPressed,
    /// A touch gesture started at this horizontal coordinate.
    TouchStarted(f32),
    /// A touch gesture ended at this horizontal coordinate.
    TouchEnded(f32),
    /// The touch gesture was lost before completing.
    TouchCancelled,
}

/// Lightbox state.
#[derive(Debug, Default)]
pub struct State {
    open: bool,
    /// Kept across close/open; reset to the activated tile on every open.
    cursor: Option<Cursor>,
    /// Horizontal coordinate of an in-flight touch gesture.
    touch_start_x: Option<f32>,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the lightbox is currently shown.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Current position in the display order, if a cursor exists.
    #[must_use]
    pub fn cursor_index(&self) -> Option<usize> {
        self.cursor.map(Cursor::index)
    }

    /// Handles a lightbox message against a catalog of `catalog_len` entries.
    pub fn handle(&mut self, message: Message, catalog_len: usize) {
        match message {
            Message::Open(index) => {
                // An out-of-range index (or an empty catalog) cannot produce
                // a cursor, so the lightbox simply stays closed.
                if let Some(cursor) = Cursor::at(index, catalog_len) {
                    self.cursor = Some(cursor);
                    self.open = true;
                    self.touch_start_x = None;
                }
            }
            Message::Close | Message::BackdropPressed => {
                self.open = false;
                self.touch_start_x = None;
            }
            Message::Next => {
                if self.open {
                    self.cursor = self.cursor.map(Cursor::advanced);
                }
            }
            Message::Previous => {
                if self.open {
                    self.cursor = self.cursor.map(Cursor::retreated);
                }
            }
            Message::TouchStarted(x) => {
                if self.open {
                    self.touch_start_x = Some(x);
                }
            }
            Message::TouchEnded(x) => {
                if self.open {
                    if let Some(start_x) = self.touch_start_x.take() {
                        match classify_swipe(start_x, x) {
                            Some(SwipeDirection::Next) => {
                                self.cursor = self.cursor.map(Cursor::advanced);
                            }
                            Some(SwipeDirection::Previous) => {
                                self.cursor = self.cursor.map(Cursor::retreated);
                            }
                            None => {}
                        }
                    }
                }
            }
            Message::TouchCancelled => {
                self.touch_start_x = None;
            }
        }
    }
}
