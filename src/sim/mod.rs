//! Flap world: body, scrolling pipes, and the run state machine
//!
//! A world built from the same [`Dimensions`], tuning and seed replays
//! identically for the same activate sequence. Gap heights come from the
//! pool's own seeded generator, each [`GameState::tick`] is one frame, and
//! the three obstacle slots are always visited in slot order. Nothing here
//! draws or reads a clock; callers get a [`Snapshot`] instead.

pub mod body;
pub mod collision;
pub mod obstacles;
pub mod rect;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use body::{Body, Boundary};
pub use collision::{PipeZone, body_obstacle_collision, collides, first_collision};
pub use obstacles::{Obstacle, ObstaclePool};
pub use rect::{Rect, intersects};
pub use snapshot::{BodyView, ObstacleView, Snapshot};
pub use state::{Dimensions, DimensionsError, GamePhase, GameState};
pub use tick::{Crash, TickInput, TickReport, tick};
