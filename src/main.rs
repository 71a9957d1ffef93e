//! Flap Core headless runner
//!
//! Drives the simulation with a simple autopilot and logs each run. Usage:
//! `flap-core [SEED] [RUNS] [TUNING]`

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};

use clap::Parser;
use flap_core::sim::{GamePhase, Snapshot};
use flap_core::{BestScore, Dimensions, FrameDriver, GameState, InputSender, Tuning};

/// Screen size the runner simulates (portrait phone)
const SCREEN_WIDTH: f32 = 1080.0;
const SCREEN_HEIGHT: f32 = 1920.0;
/// Give up on a run the autopilot never loses (~10 minutes at 60 Hz)
const MAX_RUN_FRAMES: u64 = 36_000;

#[derive(Parser)]
#[command(name = "flap-core", about = "Run the flap simulation headless with an autopilot")]
struct Cli {
    /// World seed for obstacle gaps
    #[arg(default_value_t = 2024)]
    seed: u64,

    /// Number of runs to play before exiting
    #[arg(default_value_t = 3, value_parser = clap::value_parser!(u32).range(1..))]
    runs: u32,

    /// JSON file overriding any subset of the game balance
    tuning: Option<PathBuf>,
}

/// Flap when the body sinks below the next gap's center and is falling
fn autopilot(snapshot: &Snapshot, input: &InputSender) {
    let body = &snapshot.body;
    let next = snapshot
        .obstacles
        .iter()
        .filter(|o| o.top.max.x > body.pos.x - body.radius)
        .min_by(|a, b| a.top.min.x.total_cmp(&b.top.min.x));

    let target_y = match next {
        Some(o) => (o.top.max.y + o.bottom.min.y) / 2.0 + body.radius,
        None => snapshot.height / 2.0,
    };

    if body.pos.y > target_y && body.vel > 0.0 {
        input.activate();
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let Cli { seed, runs, tuning } = Cli::parse();

    let tuning = match tuning {
        Some(path) => match std::fs::read_to_string(&path)
            .map_err(|e| e.to_string())
            .and_then(|json| Tuning::from_json(&json).map_err(|e| e.to_string()))
        {
            Ok(tuning) => tuning,
            Err(e) => {
                log::error!("Could not load tuning from {}: {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => Tuning::default(),
    };

    let dims = match Dimensions::from_screen(SCREEN_WIDTH, SCREEN_HEIGHT, &tuning) {
        Ok(dims) => dims,
        Err(e) => {
            log::error!("Bad screen size: {}", e);
            std::process::exit(1);
        }
    };

    log::info!("Flap Core (headless) starting, seed {}, {} runs", seed, runs);

    let state = match GameState::with_tuning(dims, tuning, seed) {
        Ok(state) => state,
        Err(e) => {
            log::error!("Bad tuning: {}", e);
            std::process::exit(1);
        }
    };
    let mut driver = FrameDriver::new(state);
    let input = driver.sender();
    let stop = AtomicBool::new(false);
    let mut finished = 0;

    input.activate();
    driver.run(&stop, |report, snapshot| {
        match snapshot.phase {
            GamePhase::Running if snapshot.frame >= MAX_RUN_FRAMES => {
                log::warn!("Run still alive after {} frames, stopping", snapshot.frame);
                stop.store(true, Ordering::Release);
            }
            GamePhase::Running => autopilot(snapshot, &input),
            GamePhase::Over if report.crash.is_some() => {
                finished += 1;
                log::info!("Run {} finished: {}", finished, snapshot.score_text());
                if finished >= runs {
                    stop.store(true, Ordering::Release);
                } else {
                    input.activate();
                }
            }
            _ => {}
        }
    });

    let record = BestScore::from_state(driver.state());
    match record.to_json() {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Could not encode best score: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["flap-core"]).unwrap();
        assert_eq!(cli.seed, 2024);
        assert_eq!(cli.runs, 3);
        assert!(cli.tuning.is_none());
    }

    #[test]
    fn test_cli_positional_args() {
        let cli = Cli::try_parse_from(["flap-core", "7", "1", "balance.json"]).unwrap();
        assert_eq!(cli.seed, 7);
        assert_eq!(cli.runs, 1);
        assert_eq!(cli.tuning, Some(PathBuf::from("balance.json")));
    }

    #[test]
    fn test_cli_rejects_bad_numbers() {
        assert!(Cli::try_parse_from(["flap-core", "notanumber", "1"]).is_err());
        assert!(Cli::try_parse_from(["flap-core", "7", "-2"]).is_err());
        assert!(Cli::try_parse_from(["flap-core", "7", "0"]).is_err());
    }
}
