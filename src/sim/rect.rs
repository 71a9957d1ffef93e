//! Axis-aligned rectangle geometry
//!
//! Screen convention: x grows to the right, y grows downward, so `min` is the
//! top-left corner and `max` the bottom-right one.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    pub fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            min: Vec2::new(left, top),
            max: Vec2::new(right, bottom),
        }
    }

    /// Square of side `2 * half_extent` centered on `center`
    pub fn around(center: Vec2, half_extent: f32) -> Self {
        Self {
            min: center - Vec2::splat(half_extent),
            max: center + Vec2::splat(half_extent),
        }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    /// True iff the rectangles overlap with positive area.
    ///
    /// Edges that merely touch do not count, and an empty rectangle never
    /// intersects anything.
    #[inline]
    pub fn intersects(&self, other: &Rect) -> bool {
        let lo = self.min.max(other.min);
        let hi = self.max.min(other.max);
        lo.x < hi.x && lo.y < hi.y
    }

    /// True iff the rectangle has positive width and height
    #[inline]
    pub fn is_empty(&self) -> bool {
        !(self.min.x < self.max.x && self.min.y < self.max.y)
    }
}

/// Free-function form of [`Rect::intersects`]
#[inline]
pub fn intersects(a: &Rect, b: &Rect) -> bool {
    a.intersects(b)
}
