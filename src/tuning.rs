//! Data-driven game balance
//!
//! Every physics constant and layout ratio lives in [`Tuning`]. Defaults come
//! from [`crate::consts`]; a JSON document may override any subset of fields.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Errors produced while loading or validating a [`Tuning`]
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("tuning JSON is malformed: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("tuning field `{field}` must be {expected}, got {value}")]
    OutOfRange {
        field: &'static str,
        expected: &'static str,
        value: f32,
    },
}

/// Game balance parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Downward acceleration per frame
    pub gravity: f32,
    /// Velocity assigned on activate (negative = up)
    pub impulse: f32,

    // === Body ===
    pub body_x_ratio: f32,
    pub body_start_y_ratio: f32,
    pub body_radius_ratio: f32,

    // === World ===
    /// Ground thickness relative to height (used by `Dimensions::from_screen`)
    pub ground_ratio: f32,

    // === Obstacles ===
    pub pipe_width_ratio: f32,
    pub pipe_gap_ratio: f32,
    pub spacing_ratio: f32,
    pub first_pipe_x_ratio: f32,
    pub min_gap_y_ratio: f32,
    pub min_speed: f32,
    pub speed_ratio: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            impulse: IMPULSE,

            body_x_ratio: BODY_X_RATIO,
            body_start_y_ratio: BODY_START_Y_RATIO,
            body_radius_ratio: BODY_RADIUS_RATIO,

            ground_ratio: GROUND_RATIO,

            pipe_width_ratio: PIPE_WIDTH_RATIO,
            pipe_gap_ratio: PIPE_GAP_RATIO,
            spacing_ratio: PIPE_SPACING_RATIO,
            first_pipe_x_ratio: FIRST_PIPE_X_RATIO,
            min_gap_y_ratio: MIN_GAP_Y_RATIO,
            min_speed: MIN_SPEED,
            speed_ratio: SPEED_RATIO,
        }
    }
}

impl Tuning {
    /// Parse a (possibly partial) JSON document and validate the result
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        log::info!("Loaded tuning overrides");
        Ok(tuning)
    }

    pub fn to_json(&self) -> Result<String, TuningError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check every field is finite and inside its usable range
    pub fn validate(&self) -> Result<(), TuningError> {
        check("gravity", self.gravity, "finite and > 0", |v| v > 0.0)?;
        check("impulse", self.impulse, "finite and < 0", |v| v < 0.0)?;
        check("body_x_ratio", self.body_x_ratio, "in (0, 1)", unit_open)?;
        check("body_start_y_ratio", self.body_start_y_ratio, "in (0, 1)", unit_open)?;
        check("body_radius_ratio", self.body_radius_ratio, "in (0, 1)", unit_open)?;
        check("ground_ratio", self.ground_ratio, "in [0, 1)", |v| (0.0..1.0).contains(&v))?;
        check("pipe_width_ratio", self.pipe_width_ratio, "in (0, 1)", unit_open)?;
        check("pipe_gap_ratio", self.pipe_gap_ratio, "in (0, 1)", unit_open)?;
        check("spacing_ratio", self.spacing_ratio, "> pipe_width_ratio", |v| {
            v > self.pipe_width_ratio
        })?;
        check("first_pipe_x_ratio", self.first_pipe_x_ratio, ">= 0", |v| v >= 0.0)?;
        check("min_gap_y_ratio", self.min_gap_y_ratio, "in [0, 1)", |v| {
            (0.0..1.0).contains(&v)
        })?;
        check("min_speed", self.min_speed, "> 0", |v| v > 0.0)?;
        check("speed_ratio", self.speed_ratio, ">= 0", |v| v >= 0.0)?;
        Ok(())
    }

    /// Horizontal obstacle speed for a world of the given width
    #[inline]
    pub fn scroll_speed(&self, width: f32) -> f32 {
        self.min_speed.max(width * self.speed_ratio)
    }
}

fn unit_open(v: f32) -> bool {
    v > 0.0 && v < 1.0
}

fn check(
    field: &'static str,
    value: f32,
    expected: &'static str,
    ok: impl Fn(f32) -> bool,
) -> Result<(), TuningError> {
    if value.is_finite() && ok(value) {
        Ok(())
    } else {
        Err(TuningError::OutOfRange {
            field,
            expected,
            value,
        })
    }
}
