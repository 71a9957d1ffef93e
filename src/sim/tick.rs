//! Fixed timestep simulation tick
//!
//! One call to [`GameState::tick`] advances the world by exactly one frame.
//! Activations are applied before integration, never halfway through a tick.

use serde::{Deserialize, Serialize};

use super::body::Boundary;
use super::collision::{PipeZone, first_collision};
use super::state::{GamePhase, GameState};

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Number of activate edges (tap/click/key-down) since the last tick
    pub activations: u32,
}

impl TickInput {
    pub fn activate() -> Self {
        Self { activations: 1 }
    }
}

/// What ended a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Crash {
    Boundary(Boundary),
    Pipe { slot: usize, zone: PipeZone },
}

/// Summary of what happened during one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    /// Obstacles newly passed this tick
    pub scored: u32,
    /// Obstacles moved back to the right this tick
    pub recycled: u32,
    /// Set on the tick that ended the run
    pub crash: Option<Crash>,
}

impl GameState {
    /// Handle one discrete activate event
    pub fn on_activate(&mut self) {
        match self.phase {
            GamePhase::Idle => {
                log::info!("Run started");
                self.phase = GamePhase::Running;
            }
            GamePhase::Running => {}
            GamePhase::Over => {
                self.reset();
                log::info!("Run restarted (best {})", self.best_score);
                self.phase = GamePhase::Running;
            }
        }
        self.body.apply_impulse(self.tuning.impulse);
    }

    /// Advance the world by one frame. Does nothing unless running.
    pub fn tick(&mut self) -> TickReport {
        let mut report = TickReport::default();
        if self.phase != GamePhase::Running {
            return report;
        }

        self.frame += 1;
        self.body.integrate(self.tuning.gravity);

        if let Some(boundary) = self.body.boundary_hit(&self.dims) {
            // World freezes on the crash frame: obstacles do not move
            report.crash = Some(Crash::Boundary(boundary));
            self.end_run(Crash::Boundary(boundary));
            return report;
        }

        report.recycled = self.pool.advance();

        // Passing is scored before collisions, so a crash into one pipe does
        // not cancel the point for another pipe cleared this same frame.
        report.scored = self.pool.score_passed(self.body.pos.x);
        if report.scored > 0 {
            self.score += report.scored;
            log::debug!("Score {}", self.score);
        }

        if let Some((slot, zone)) = first_collision(&self.body, &self.pool, &self.dims) {
            let crash = Crash::Pipe { slot, zone };
            report.crash = Some(crash);
            self.end_run(crash);
        }

        report
    }

    fn end_run(&mut self, crash: Crash) {
        self.phase = GamePhase::Over;
        self.best_score = self.best_score.max(self.score);
        log::info!(
            "Game over after {} frames: {:?}, score {}, best {}",
            self.frame,
            crash,
            self.score,
            self.best_score
        );
    }
}

/// Apply this frame's activations, then advance one tick
pub fn tick(state: &mut GameState, input: &TickInput) -> TickReport {
    for _ in 0..input.activations {
        state.on_activate();
    }
    state.tick()
}
