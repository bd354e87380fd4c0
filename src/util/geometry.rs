// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Geometric utility functions.
//!
//! This module provides utilities for coordinate transformations between
//! pixel coordinates and page percentages.

/// Lower bound of a dragged sticker position, in percent.
pub const DRAG_MIN_PERCENT: f64 = 5.0;
/// Upper bound of a dragged sticker position, in percent.
pub const DRAG_MAX_PERCENT: f64 = 90.0;

/// A point in screen pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelPoint {
    pub x: f64,
    pub y: f64,
}

impl PixelPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<egui::Pos2> for PixelPoint {
    fn from(pos: egui::Pos2) -> Self {
        Self::new(pos.x as f64, pos.y as f64)
    }
}

/// Measured on-screen bounds of the current page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PageRect {
    /// `None` for degenerate rectangles, which cannot be used to convert
    /// pixels to percentages.
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Option<Self> {
        if width > 0.0 && height > 0.0 {
            Some(Self {
                left,
                top,
                width,
                height,
            })
        } else {
            None
        }
    }

    pub fn from_egui(rect: egui::Rect) -> Option<Self> {
        Self::new(
            rect.min.x as f64,
            rect.min.y as f64,
            rect.width() as f64,
            rect.height() as f64,
        )
    }

    /// Pixel offset of a percentage position, relative to the page origin.
    pub fn percent_to_offset(&self, x_percent: f64, y_percent: f64) -> PixelPoint {
        PixelPoint::new(
            x_percent * self.width / 100.0,
            y_percent * self.height / 100.0,
        )
    }

    /// Percentage position of an offset relative to the page origin.
    pub fn offset_to_percent(&self, offset: PixelPoint) -> (f64, f64) {
        (
            offset.x / self.width * 100.0,
            offset.y / self.height * 100.0,
        )
    }

    /// Absolute screen position of a percentage position.
    pub fn percent_to_screen(&self, x_percent: f64, y_percent: f64) -> egui::Pos2 {
        let offset = self.percent_to_offset(x_percent, y_percent);
        egui::pos2((self.left + offset.x) as f32, (self.top + offset.y) as f32)
    }

    /// Whether an absolute x coordinate lies in the left half of the page.
    pub fn is_left_half(&self, screen_x: f64) -> bool {
        screen_x - self.left < self.width / 2.0
    }
}

/// Clamp a percentage into the range a dragged sticker may occupy.
pub fn clamp_drag_percent(value: f64) -> f64 {
    value.clamp(DRAG_MIN_PERCENT, DRAG_MAX_PERCENT)
}
