//! Best score record
//!
//! The core only keeps the best score for the life of the process. This record
//! is the hand-off format for whatever outside store wants to keep it longer.

use serde::{Deserialize, Serialize};

use crate::sim::GameState;

/// Serialized best score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BestScore {
    pub best: u32,
}

impl BestScore {
    /// Storage key an outside store may file this record under
    pub const STORAGE_KEY: &'static str = "flap_core_best_score";

    pub fn from_state(state: &GameState) -> Self {
        Self {
            best: state.best_score(),
        }
    }

    /// Feed the record back into a running game (never lowers its best)
    pub fn apply(&self, state: &mut GameState) {
        state.restore_best_score(self.best);
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Parse a stored record. Anything unreadable is reported, not guessed at.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        let record: BestScore = serde_json::from_str(json)?;
        log::info!("Loaded best score {}", record.best);
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Dimensions;

    fn new_state() -> GameState {
        GameState::new(Dimensions::new(1000.0, 1600.0, 240.0).unwrap(), 1)
    }

    #[test]
    fn test_snapshot_and_restore() {
        let mut state = new_state();
        state.restore_best_score(14);
        let record = BestScore::from_state(&state);
        assert_eq!(record, BestScore { best: 14 });

        let json = record.to_json().unwrap();
        assert_eq!(json, r#"{"best":14}"#);

        let mut fresh = new_state();
        BestScore::from_json(&json).unwrap().apply(&mut fresh);
        assert_eq!(fresh.best_score(), 14);
    }

    #[test]
    fn test_apply_never_lowers() {
        let mut state = new_state();
        state.restore_best_score(20);
        BestScore { best: 3 }.apply(&mut state);
        assert_eq!(state.best_score(), 20);
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(BestScore::from_json("not json").is_err());
        assert!(BestScore::from_json(r#"{"best":-1}"#).is_err());
    }
}
