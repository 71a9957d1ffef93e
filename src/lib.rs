//! Flap Core - simulation core of a side-scrolling gap runner
//!
//! Core modules:
//! - `sim`: Deterministic simulation (body physics, obstacle pool, collisions, game state)
//! - `tuning`: Data-driven game balance
//! - `driver`: Reference frame loop (input channel, fixed step pacing, snapshots)
//! - `best_score`: Best score record for an external persistence collaborator

pub mod best_score;
pub mod driver;
pub mod sim;
pub mod tuning;

pub use best_score::BestScore;
pub use driver::{FrameDriver, InputSender};
pub use sim::{Dimensions, GamePhase, GameState, Snapshot, TickInput, tick};
pub use tuning::{Tuning, TuningError};

/// Game configuration constants
pub mod consts {
    use std::time::Duration;

    /// Target frame duration of the driving loop (~60 Hz)
    pub const FRAME_DURATION: Duration = Duration::from_millis(16);
    /// Maximum ticks per driver update to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Number of obstacle slots alive at once (fixed pool, never grows)
    pub const OBSTACLE_COUNT: usize = 3;

    /// Downward acceleration (units/frame²)
    pub const GRAVITY: f32 = 1.2;
    /// Velocity set by an activate event (negative = upward)
    pub const IMPULSE: f32 = -18.0;

    /// Body placement and size, relative to world width/height
    pub const BODY_X_RATIO: f32 = 0.25;
    pub const BODY_START_Y_RATIO: f32 = 0.5;
    pub const BODY_RADIUS_RATIO: f32 = 0.04;

    /// Ground strip thickness relative to height
    pub const GROUND_RATIO: f32 = 0.15;

    /// Obstacle geometry relative to world width/height
    pub const PIPE_WIDTH_RATIO: f32 = 0.18;
    pub const PIPE_GAP_RATIO: f32 = 0.28;
    pub const PIPE_SPACING_RATIO: f32 = 0.65;
    pub const FIRST_PIPE_X_RATIO: f32 = 1.1;
    /// Minimum distance from the ceiling (and floor) to the gap
    pub const MIN_GAP_Y_RATIO: f32 = 0.2;

    /// Scroll speed is max(MIN_SPEED, width * SPEED_RATIO)
    pub const MIN_SPEED: f32 = 6.0;
    pub const SPEED_RATIO: f32 = 0.005;
}
