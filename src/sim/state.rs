//! Game state and core simulation types
//!
//! Everything the frame update reads or writes lives in [`GameState`].

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::body::Body;
use super::obstacles::{Obstacle, ObstaclePool};
use crate::consts::OBSTACLE_COUNT;
use crate::tuning::{Tuning, TuningError};

/// Rejected world dimensions
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum DimensionsError {
    #[error("world size must be finite and positive, got {width}x{height}")]
    InvalidSize { width: f32, height: f32 },
    #[error("ground height {ground} must be finite and in [0, {height})")]
    InvalidGround { ground: f32, height: f32 },
}

/// Size of the world for one session
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: f32,
    pub height: f32,
    /// Thickness of the ground strip at the bottom
    pub ground: f32,
}

impl Dimensions {
    pub fn new(width: f32, height: f32, ground: f32) -> Result<Self, DimensionsError> {
        let size_ok = width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0;
        if !size_ok {
            return Err(DimensionsError::InvalidSize { width, height });
        }
        if !ground.is_finite() || ground < 0.0 || ground >= height {
            return Err(DimensionsError::InvalidGround { ground, height });
        }
        Ok(Self {
            width,
            height,
            ground,
        })
    }

    /// Derive the ground strip from the screen height
    pub fn from_screen(width: f32, height: f32, tuning: &Tuning) -> Result<Self, DimensionsError> {
        Self::new(width, height, height * tuning.ground_ratio)
    }

    /// y coordinate of the ground surface (bottom of the playable area)
    #[inline]
    pub fn ground_top(&self) -> f32 {
        self.height - self.ground
    }
}

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the first activate
    #[default]
    Idle,
    /// Active gameplay
    Running,
    /// Run ended; next activate starts a fresh run
    Over,
}

/// Complete game state (deterministic for a given seed and input sequence)
#[derive(Debug, Clone)]
pub struct GameState {
    pub(super) dims: Dimensions,
    pub(super) tuning: Tuning,
    pub(super) body: Body,
    pub(super) pool: ObstaclePool,
    pub(super) phase: GamePhase,
    pub(super) score: u32,
    pub(super) best_score: u32,
    /// Running ticks since the current run started
    pub(super) frame: u64,
    seed: u64,
}

impl GameState {
    /// Create a new game with default tuning
    pub fn new(dims: Dimensions, seed: u64) -> Self {
        Self::build(dims, Tuning::default(), seed)
    }

    /// Create a new game with custom balance. Rejects out-of-range tuning.
    pub fn with_tuning(dims: Dimensions, tuning: Tuning, seed: u64) -> Result<Self, TuningError> {
        tuning.validate()?;
        Ok(Self::build(dims, tuning, seed))
    }

    fn build(dims: Dimensions, tuning: Tuning, seed: u64) -> Self {
        log::info!(
            "Game initialized {}x{} (ground {}) with seed {}",
            dims.width,
            dims.height,
            dims.ground,
            seed
        );
        Self {
            body: Body::spawn(&dims, &tuning),
            pool: ObstaclePool::new(&dims, &tuning, seed),
            dims,
            tuning,
            phase: GamePhase::Idle,
            score: 0,
            best_score: 0,
            frame: 0,
            seed,
        }
    }

    /// Adopt new world dimensions (e.g. after a resize). Forces a reset;
    /// the best score is kept.
    pub fn initialize(&mut self, dims: Dimensions) {
        log::info!(
            "Resizing world {}x{} -> {}x{}",
            self.dims.width,
            self.dims.height,
            dims.width,
            dims.height
        );
        self.dims = dims;
        self.pool.resize(&self.dims, &self.tuning);
        self.reset();
    }

    /// Start over: zero score, fresh body and obstacle layout, back to Idle
    pub fn reset(&mut self) {
        self.score = 0;
        self.frame = 0;
        self.body = Body::spawn(&self.dims, &self.tuning);
        self.pool.initialize();
        self.phase = GamePhase::Idle;
    }

    /// Bring in a best score from an outside store (never lowers it)
    pub fn restore_best_score(&mut self, best: u32) {
        self.best_score = self.best_score.max(best);
    }

    #[inline]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::Over
    }

    #[inline]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[inline]
    pub fn best_score(&self) -> u32 {
        self.best_score
    }

    #[inline]
    pub fn frame(&self) -> u64 {
        self.frame
    }

    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    #[inline]
    pub fn body(&self) -> &Body {
        &self.body
    }

    #[inline]
    pub fn obstacles(&self) -> &[Obstacle; OBSTACLE_COUNT] {
        self.pool.slots()
    }

    #[inline]
    pub fn pool(&self) -> &ObstaclePool {
        &self.pool
    }

    #[inline]
    pub fn dimensions(&self) -> &Dimensions {
        &self.dims
    }

    #[inline]
    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }
}
