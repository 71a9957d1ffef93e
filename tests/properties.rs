use flap_core::sim::{GamePhase, GameState, ObstaclePool, TickInput, tick};
use flap_core::{Dimensions, Tuning};
use proptest::prelude::*;

/// Worlds narrow enough that the scroll speed sits at its 6-unit floor
fn world() -> impl Strategy<Value = Dimensions> {
    (320.0f32..1200.0, 480.0f32..2400.0, 0.0f32..0.3).prop_map(|(w, h, g)| {
        Dimensions::new(w, h, h * g).unwrap()
    })
}

fn tap_pattern(len: usize) -> impl Strategy<Value = Vec<bool>> {
    prop::collection::vec(prop::bool::weighted(0.08), 0..len)
}

fn input(tap: bool) -> TickInput {
    TickInput {
        activations: tap as u32,
    }
}

proptest! {
    #[test]
    fn gaps_always_fit(dims in world(), seed in any::<u64>(), frames in 0usize..3000) {
        let mut pool = ObstaclePool::new(&dims, &Tuning::default(), seed);
        for _ in 0..frames {
            pool.advance();
            for slot in pool.slots() {
                prop_assert!(slot.gap_top >= 0.0);
                prop_assert!(slot.gap_top + pool.pipe_gap() <= dims.ground_top());
            }
        }
    }

    #[test]
    fn spacing_survives_recycling(dims in world(), seed in any::<u64>(), frames in 0usize..3000) {
        let mut pool = ObstaclePool::new(&dims, &Tuning::default(), seed);
        for _ in 0..frames {
            pool.advance();
        }
        let mut xs: Vec<f32> = pool.slots().iter().map(|s| s.x).collect();
        xs.sort_by(|a, b| a.total_cmp(b));
        for pair in xs.windows(2) {
            prop_assert!((pair[1] - pair[0] - pool.spacing()).abs() < 1e-2,
                "gap {} vs spacing {}", pair[1] - pair[0], pool.spacing());
        }
    }

    #[test]
    fn same_inputs_same_world(seed in any::<u64>(), taps in tap_pattern(400)) {
        let dims = Dimensions::new(1000.0, 1600.0, 240.0).unwrap();
        let mut a = GameState::new(dims, seed);
        let mut b = GameState::new(dims, seed);
        for &tap in &taps {
            let ra = tick(&mut a, &input(tap));
            let rb = tick(&mut b, &input(tap));
            prop_assert_eq!(ra, rb);
            prop_assert_eq!(a.body().pos.y.to_bits(), b.body().pos.y.to_bits());
            prop_assert_eq!(a.body().vel.to_bits(), b.body().vel.to_bits());
            prop_assert_eq!(a.obstacles(), b.obstacles());
        }
    }

    #[test]
    fn activate_always_sets_impulse(seed in any::<u64>(), taps in tap_pattern(400)) {
        let dims = Dimensions::new(1000.0, 1600.0, 240.0).unwrap();
        let mut state = GameState::new(dims, seed);
        for &tap in &taps {
            if tap {
                state.on_activate();
                prop_assert_eq!(state.body().vel, -18.0);
                prop_assert_eq!(state.phase(), GamePhase::Running);
            }
            state.tick();
        }
    }

    #[test]
    fn score_and_best_are_monotonic(seed in any::<u64>(), taps in tap_pattern(1500)) {
        let dims = Dimensions::new(1000.0, 1600.0, 240.0).unwrap();
        let mut state = GameState::new(dims, seed);
        state.on_activate();
        let mut prev_phase = state.phase();
        let mut prev_score = state.score();
        let mut prev_best = state.best_score();

        for &tap in &taps {
            tick(&mut state, &input(tap));
            let restarted = prev_phase == GamePhase::Over && tap;
            if restarted {
                prop_assert!(state.score() <= 1);
            } else {
                prop_assert!(state.score() >= prev_score);
            }
            prop_assert!(state.best_score() >= prev_best);
            if state.phase() == GamePhase::Over {
                prop_assert!(state.best_score() >= state.score());
            }
            prev_phase = state.phase();
            prev_score = state.score();
            prev_best = state.best_score();
        }
    }

    #[test]
    fn each_pass_scores_once(seed in any::<u64>(), taps in tap_pattern(1500)) {
        let dims = Dimensions::new(1000.0, 1600.0, 240.0).unwrap();
        let mut state = GameState::new(dims, seed);
        state.on_activate();
        let mut passes = 0u32;
        for &tap in &taps {
            if state.is_game_over() {
                break;
            }
            let before = *state.obstacles();
            let report = tick(&mut state, &input(tap));
            let newly_passed = before
                .iter()
                .zip(state.obstacles())
                .filter(|(old, new)| !old.passed && new.passed)
                .count() as u32;
            prop_assert_eq!(report.scored, newly_passed);
            passes += newly_passed;
            prop_assert_eq!(state.score(), passes);
        }
    }

    #[test]
    fn game_over_is_terminal_until_activate(seed in any::<u64>(), idle in 1usize..200) {
        let dims = Dimensions::new(1000.0, 1600.0, 240.0).unwrap();
        let mut state = GameState::new(dims, seed);
        state.on_activate();
        while !state.is_game_over() {
            state.tick();
        }
        let frozen = state.snapshot();
        for _ in 0..idle {
            state.tick();
        }
        prop_assert_eq!(state.snapshot(), frozen);
    }
}
