//! The controlled body: a circle falling under constant gravity

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use super::state::Dimensions;
use crate::tuning::Tuning;

/// Which world edge the body ran into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Boundary {
    Ground,
    Ceiling,
}

/// The player body. `pos.x` never changes during a session.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub pos: Vec2,
    /// Vertical velocity in units/frame (positive = down)
    pub vel: f32,
    pub radius: f32,
}

impl Body {
    /// Place a fresh body for the given world: at rest, vertically centered
    pub fn spawn(dims: &Dimensions, tuning: &Tuning) -> Self {
        let body = Self {
            pos: Vec2::new(
                dims.width * tuning.body_x_ratio,
                dims.height * tuning.body_start_y_ratio,
            ),
            vel: 0.0,
            radius: dims.width * tuning.body_radius_ratio,
        };
        debug_assert!(body.radius > 0.0, "body radius must be positive");
        body
    }

    /// Replace the current velocity (repeated calls do not stack)
    #[inline]
    pub fn apply_impulse(&mut self, impulse: f32) {
        self.vel = impulse;
    }

    /// One explicit Euler step of a single frame
    #[inline]
    pub fn integrate(&mut self, gravity: f32) {
        self.vel += gravity;
        self.pos.y += self.vel;
    }

    /// Which boundary (if any) the body touches. Ground is checked first.
    pub fn boundary_hit(&self, dims: &Dimensions) -> Option<Boundary> {
        if self.pos.y + self.radius >= dims.ground_top() {
            Some(Boundary::Ground)
        } else if self.pos.y - self.radius <= 0.0 {
            Some(Boundary::Ceiling)
        } else {
            None
        }
    }

    #[inline]
    pub fn hits_boundary(&self, dims: &Dimensions) -> bool {
        self.boundary_hit(dims).is_some()
    }

    /// Bounding square used for obstacle collision
    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::around(self.pos, self.radius)
    }
}
