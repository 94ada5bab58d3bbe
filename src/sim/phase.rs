//! Running / over state machine shared by every game

use serde::{Deserialize, Serialize};

/// Current phase of a game
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay: update, collision and spawn run every tick
    #[default]
    Running,
    /// Terminal condition reached; only rendering continues until reset
    Over,
}

impl GamePhase {
    #[inline]
    pub fn is_running(self) -> bool {
        self == GamePhase::Running
    }

    /// Move to `Over`. Returns `true` only for the first transition so
    /// callers can fire one-time side effects.
    pub fn enter_over(&mut self) -> bool {
        match self {
            GamePhase::Running => {
                *self = GamePhase::Over;
                true
            }
            GamePhase::Over => false,
        }
    }
}
