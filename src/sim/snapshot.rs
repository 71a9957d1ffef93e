//! Read-only view of the world for renderers
//!
//! A [`Snapshot`] is an owned copy taken after a tick. Renderers never hold a
//! reference into [`GameState`], so drawing can never observe a half-applied
//! frame.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use super::state::{GamePhase, GameState};
use crate::consts::OBSTACLE_COUNT;

/// Body as drawn: a circle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyView {
    pub pos: Vec2,
    pub radius: f32,
    pub vel: f32,
}

/// One pipe pair as drawn
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObstacleView {
    pub top: Rect,
    pub bottom: Rect,
    pub passed: bool,
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub phase: GamePhase,
    pub frame: u64,
    pub score: u32,
    pub best_score: u32,
    pub width: f32,
    pub height: f32,
    pub body: BodyView,
    pub obstacles: [ObstacleView; OBSTACLE_COUNT],
    pub ground: Rect,
}

impl Snapshot {
    pub fn capture(state: &GameState) -> Self {
        let dims = state.dimensions();
        let pool = state.pool();
        let ground_top = dims.ground_top();
        let body = state.body();

        let obstacles = state.obstacles().map(|o| ObstacleView {
            top: o.top_rect(pool.pipe_width()),
            bottom: o.bottom_rect(pool.pipe_width(), pool.pipe_gap(), ground_top),
            passed: o.passed,
        });

        Self {
            phase: state.phase(),
            frame: state.frame(),
            score: state.score(),
            best_score: state.best_score(),
            width: dims.width,
            height: dims.height,
            body: BodyView {
                pos: body.pos,
                radius: body.radius,
                vel: body.vel,
            },
            obstacles,
            ground: Rect::new(0.0, ground_top, dims.width, dims.height),
        }
    }

    /// HUD line drawn in every phase
    pub fn score_text(&self) -> String {
        format!("Score: {}", self.score)
    }

    /// Centered overlay lines for the current phase (empty while running)
    pub fn overlay_lines(&self) -> Vec<String> {
        match self.phase {
            GamePhase::Idle => vec!["Tap to start".to_string()],
            GamePhase::Running => Vec::new(),
            GamePhase::Over => vec![
                "Game Over".to_string(),
                format!("Best: {}", self.best_score),
                "Tap to retry".to_string(),
            ],
        }
    }
}

impl GameState {
    /// Owned copy of the world for rendering
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(self)
    }
}
