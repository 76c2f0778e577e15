//! Geometry Primitives
//!
//! Pointer coordinates and measured rectangles, all in CSS pixels.

use serde::{Deserialize, Serialize};

/// Pointer position in viewport coordinates
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Measured bounding rectangle of an element
///
/// Only the edges the resolver needs are kept: a rect never needs its right
/// edge, and height is derived from `top`/`bottom`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub width: f64,
}

impl Rect {
    pub fn new(top: f64, bottom: f64, left: f64, width: f64) -> Self {
        Self { top, bottom, left, width }
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    /// Vertical midpoint, used to decide insert-before vs insert-after
    pub fn mid_y(&self) -> f64 {
        self.top + self.height() / 2.0
    }

    /// Inclusive on both edges
    pub fn contains_y(&self, y: f64) -> bool {
        y >= self.top && y <= self.bottom
    }
}
