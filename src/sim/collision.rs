//! Collision detection between the body and the pipe pairs
//!
//! The body is a circle but is tested as its bounding square. Near pipe
//! corners this reports hits a true circle test would miss; the game has
//! always played this way, so the approximation is kept.

use serde::{Deserialize, Serialize};

use super::body::Body;
use super::obstacles::{Obstacle, ObstaclePool};
use super::state::Dimensions;

/// Which half of a pipe pair was hit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PipeZone {
    Top,
    Bottom,
}

/// Check the body against one pipe pair. The top pipe is tested first.
pub fn body_obstacle_collision(
    body: &Body,
    obstacle: &Obstacle,
    pipe_width: f32,
    pipe_gap: f32,
    ground_top: f32,
) -> Option<PipeZone> {
    let bounds = body.bounds();
    if bounds.intersects(&obstacle.top_rect(pipe_width)) {
        Some(PipeZone::Top)
    } else if bounds.intersects(&obstacle.bottom_rect(pipe_width, pipe_gap, ground_top)) {
        Some(PipeZone::Bottom)
    } else {
        None
    }
}

/// True iff the body overlaps either pipe of `obstacle`
pub fn collides(body: &Body, obstacle: &Obstacle, pool: &ObstaclePool, dims: &Dimensions) -> bool {
    body_obstacle_collision(
        body,
        obstacle,
        pool.pipe_width(),
        pool.pipe_gap(),
        dims.ground_top(),
    )
    .is_some()
}

/// First slot (in slot order) the body collides with
pub fn first_collision(
    body: &Body,
    pool: &ObstaclePool,
    dims: &Dimensions,
) -> Option<(usize, PipeZone)> {
    pool.slots().iter().enumerate().find_map(|(slot, obstacle)| {
        body_obstacle_collision(
            body,
            obstacle,
            pool.pipe_width(),
            pool.pipe_gap(),
            dims.ground_top(),
        )
        .map(|zone| (slot, zone))
    })
}
