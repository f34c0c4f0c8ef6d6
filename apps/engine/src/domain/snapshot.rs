//! Public snapshot API for observing game state without exposing internals.

use serde::{Deserialize, Serialize};

use crate::domain::progression::RoundProgression;
use crate::domain::state::Phase;

/// Read-only view of the progression state, the hand-off shape for drivers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub round_no: u8,
    pub phase: Phase,
    pub hands: u8,
    pub game_complete: bool,
}

impl GameSnapshot {
    pub fn of(progression: &RoundProgression) -> Self {
        Self {
            round_no: progression.current_round(),
            phase: progression.current_phase(),
            hands: progression.hands_in_current_round(),
            game_complete: progression.is_game_complete(),
        }
    }
}

impl RoundProgression {
    /// Serializable observation of the current round, phase, and hand count.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::of(self)
    }
}
