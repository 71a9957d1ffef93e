//! Reference frame loop
//!
//! Owns the [`GameState`] and is the only thing that mutates it. Input may be
//! produced on any thread through an [`InputSender`]; commands queue on a
//! channel and are drained as a batch at the start of a frame, before the
//! tick integrates. Each frame publishes an owned [`Snapshot`].

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::{Duration, Instant};

use crate::consts::{FRAME_DURATION, MAX_SUBSTEPS};
use crate::sim::{Dimensions, GameState, Snapshot, TickReport};

/// Largest wall-clock gap accepted by [`FrameDriver::advance`] in one call
pub const MAX_FRAME_DELTA: Duration = Duration::from_millis(100);

/// Commands delivered to the driver between frames
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DriverCommand {
    /// One discrete activate edge
    Activate,
    /// World size changed; forces a reset
    Resize(Dimensions),
}

/// Cloneable handle for feeding input to a [`FrameDriver`]
#[derive(Debug, Clone)]
pub struct InputSender {
    tx: Sender<DriverCommand>,
}

impl InputSender {
    /// Queue an activate. Returns false if the driver is gone.
    pub fn activate(&self) -> bool {
        self.tx.send(DriverCommand::Activate).is_ok()
    }

    /// Queue a resize. Returns false if the driver is gone.
    pub fn resize(&self, dims: Dimensions) -> bool {
        self.tx.send(DriverCommand::Resize(dims)).is_ok()
    }
}

/// Drives a [`GameState`] one frame at a time
pub struct FrameDriver {
    state: GameState,
    tx: Sender<DriverCommand>,
    rx: Receiver<DriverCommand>,
    accumulator: Duration,
}

impl FrameDriver {
    pub fn new(state: GameState) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            state,
            tx,
            rx,
            accumulator: Duration::ZERO,
        }
    }

    pub fn sender(&self) -> InputSender {
        InputSender {
            tx: self.tx.clone(),
        }
    }

    #[inline]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Give the state back (e.g. to hand the best score to a store)
    pub fn into_state(self) -> GameState {
        self.state
    }

    /// Apply every queued command
    fn drain_commands(&mut self) {
        for command in self.rx.try_iter() {
            match command {
                DriverCommand::Activate => self.state.on_activate(),
                DriverCommand::Resize(dims) => self.state.initialize(dims),
            }
        }
    }

    /// Run exactly one frame: drain input, tick, capture
    pub fn frame(&mut self) -> (TickReport, Snapshot) {
        self.drain_commands();
        let report = self.state.tick();
        (report, self.state.snapshot())
    }

    /// Fixed-step update from wall-clock time. Runs as many whole frames as
    /// `elapsed` covers (capped at [`MAX_SUBSTEPS`]) and returns the snapshot
    /// after the last one, or `None` if no frame was due.
    pub fn advance(&mut self, elapsed: Duration) -> Option<Snapshot> {
        self.accumulator += elapsed.min(MAX_FRAME_DELTA);

        let mut latest = None;
        let mut substeps = 0;
        while self.accumulator >= FRAME_DURATION && substeps < MAX_SUBSTEPS {
            let (_, snapshot) = self.frame();
            latest = Some(snapshot);
            self.accumulator -= FRAME_DURATION;
            substeps += 1;
        }
        latest
    }

    /// Run paced frames until `stop` is set. `on_frame` sees each snapshot
    /// after its tick has fully completed. Returns the number of frames run.
    pub fn run<F>(&mut self, stop: &AtomicBool, mut on_frame: F) -> u64
    where
        F: FnMut(&TickReport, &Snapshot),
    {
        log::info!("Frame loop started");
        let mut frames = 0;
        while !stop.load(Ordering::Acquire) {
            let started = Instant::now();
            let (report, snapshot) = self.frame();
            on_frame(&report, &snapshot);
            frames += 1;

            let spent = started.elapsed();
            if let Some(rest) = FRAME_DURATION.checked_sub(spent) {
                thread::sleep(rest);
            }
        }
        log::info!("Frame loop stopped after {} frames", frames);
        frames
    }
}
