//! Fixed-size obstacle pool
//!
//! Exactly [`OBSTACLE_COUNT`] pipe pairs exist for the whole session. A pipe
//! that scrolls off the left edge is moved behind the rightmost one and given
//! a new gap; nothing is ever allocated or freed after construction.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use super::state::Dimensions;
use crate::consts::OBSTACLE_COUNT;
use crate::tuning::Tuning;

/// One pipe pair: a top pipe above the gap and a bottom pipe below it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    /// Left edge
    pub x: f32,
    /// y coordinate of the top of the gap
    pub gap_top: f32,
    /// Whether this pipe has already been scored
    pub passed: bool,
}

impl Obstacle {
    #[inline]
    pub fn right_edge(&self, pipe_width: f32) -> f32 {
        self.x + pipe_width
    }

    /// Pipe hanging from the ceiling down to the gap
    pub fn top_rect(&self, pipe_width: f32) -> Rect {
        Rect::new(self.x, 0.0, self.x + pipe_width, self.gap_top)
    }

    /// Pipe standing on the ground up to the gap
    pub fn bottom_rect(&self, pipe_width: f32, pipe_gap: f32, ground_top: f32) -> Rect {
        Rect::new(
            self.x,
            self.gap_top + pipe_gap,
            self.x + pipe_width,
            ground_top,
        )
    }
}

/// Ring of obstacle slots with spawn and recycling rules
#[derive(Debug, Clone)]
pub struct ObstaclePool {
    slots: [Obstacle; OBSTACLE_COUNT],
    pipe_width: f32,
    pipe_gap: f32,
    speed: f32,
    spacing: f32,
    first_x: f32,
    min_gap_y: f32,
    max_gap_y: f32,
    rng: Pcg32,
}

impl ObstaclePool {
    /// Build a pool for the given world and lay out the initial slots
    pub fn new(dims: &Dimensions, tuning: &Tuning, seed: u64) -> Self {
        let mut pool = Self {
            slots: [Obstacle {
                x: 0.0,
                gap_top: 0.0,
                passed: false,
            }; OBSTACLE_COUNT],
            pipe_width: 0.0,
            pipe_gap: 0.0,
            speed: 0.0,
            spacing: 0.0,
            first_x: 0.0,
            min_gap_y: 0.0,
            max_gap_y: 0.0,
            rng: Pcg32::seed_from_u64(seed),
        };
        pool.resize(dims, tuning);
        pool.initialize();
        pool
    }

    /// Recompute geometry for new dimensions. Slot positions are left alone;
    /// call [`ObstaclePool::initialize`] afterwards to lay them out again.
    pub fn resize(&mut self, dims: &Dimensions, tuning: &Tuning) {
        self.pipe_width = dims.width * tuning.pipe_width_ratio;
        self.pipe_gap = dims.height * tuning.pipe_gap_ratio;
        self.speed = tuning.scroll_speed(dims.width);
        self.spacing = dims.width * tuning.spacing_ratio;
        self.first_x = dims.width * tuning.first_pipe_x_ratio;

        self.min_gap_y = dims.height * tuning.min_gap_y_ratio;
        let max_gap_y = dims.ground_top() - self.pipe_gap - self.min_gap_y;
        self.max_gap_y = if max_gap_y < self.min_gap_y {
            log::warn!(
                "Playable height {} too small for gap {}; pinning gap top to {}",
                dims.ground_top(),
                self.pipe_gap,
                self.min_gap_y
            );
            self.min_gap_y
        } else {
            max_gap_y
        };
    }

    /// Reset every slot to the starting layout with fresh gaps. The RNG
    /// stream continues, so a retry does not replay the previous gaps.
    pub fn initialize(&mut self) {
        for i in 0..OBSTACLE_COUNT {
            let gap_top = self.sample_gap_top();
            self.slots[i] = Obstacle {
                x: self.first_x + i as f32 * self.spacing,
                gap_top,
                passed: false,
            };
        }
    }

    /// Scroll every slot left by one frame, then recycle slots that left the
    /// screen. Returns how many slots were recycled.
    pub fn advance(&mut self) -> u32 {
        for slot in &mut self.slots {
            slot.x -= self.speed;
        }

        let mut recycled = 0;
        for i in 0..OBSTACLE_COUNT {
            if self.slots[i].right_edge(self.pipe_width) < 0.0 {
                let furthest_x = self.furthest_x();
                let gap_top = self.sample_gap_top();
                let slot = &mut self.slots[i];
                slot.x = furthest_x + self.spacing;
                slot.gap_top = gap_top;
                slot.passed = false;
                recycled += 1;
                log::debug!("Recycled obstacle {} to x={} gap_top={}", i, slot.x, gap_top);
            }
        }
        recycled
    }

    /// Mark every unscored slot whose right edge is left of `body_x` as
    /// passed. Returns the number of newly passed slots.
    pub fn score_passed(&mut self, body_x: f32) -> u32 {
        let pipe_width = self.pipe_width;
        let mut scored = 0;
        for slot in self.slots.iter_mut().filter(|s| !s.passed) {
            if slot.right_edge(pipe_width) < body_x {
                slot.passed = true;
                scored += 1;
            }
        }
        scored
    }

    /// Largest x among all slots
    pub fn furthest_x(&self) -> f32 {
        self.slots
            .iter()
            .map(|s| s.x)
            .fold(f32::NEG_INFINITY, f32::max)
    }

    fn sample_gap_top(&mut self) -> f32 {
        self.rng.random_range(self.min_gap_y..=self.max_gap_y)
    }

    #[inline]
    pub fn slots(&self) -> &[Obstacle; OBSTACLE_COUNT] {
        &self.slots
    }

    /// Direct slot access for tests that stage a specific layout
    #[cfg(test)]
    pub(crate) fn slots_mut(&mut self) -> &mut [Obstacle; OBSTACLE_COUNT] {
        &mut self.slots
    }

    #[inline]
    pub fn pipe_width(&self) -> f32 {
        self.pipe_width
    }

    #[inline]
    pub fn pipe_gap(&self) -> f32 {
        self.pipe_gap
    }

    #[inline]
    pub fn speed(&self) -> f32 {
        self.speed
    }

    #[inline]
    pub fn spacing(&self) -> f32 {
        self.spacing
    }

    /// Inclusive range gap tops are drawn from (already clamped)
    #[inline]
    pub fn gap_range(&self) -> (f32, f32) {
        (self.min_gap_y, self.max_gap_y)
    }
}
