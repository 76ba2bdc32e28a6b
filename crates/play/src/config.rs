//! Play configuration parameters.
//!
//! These parameters control pacing and turn order of an interactive game.
//! They never influence which move the engine picks.

use std::time::Duration;
use tictactoe_core::Mark;

/// Default pause before the computer answers.
pub const DEFAULT_AI_DELAY_MS: u64 = 500;

/// Play configuration parameters.
#[derive(Clone, Debug)]
pub struct PlayConfig {
    /// Pause before the computer's move is computed and applied.
    /// Zero disables the pause.
    pub ai_delay: Duration,

    /// Whether the human (`X`) makes the first move of each game.
    pub human_starts: bool,
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            ai_delay: Duration::from_millis(DEFAULT_AI_DELAY_MS),
            human_starts: true,
        }
    }
}

impl PlayConfig {
    /// Create a config with the given computer delay in milliseconds.
    pub fn with_delay_ms(delay_ms: u64) -> Self {
        Self {
            ai_delay: Duration::from_millis(delay_ms),
            ..Default::default()
        }
    }

    /// Let the computer open each game.
    pub fn computer_first(self) -> Self {
        Self {
            human_starts: false,
            ..self
        }
    }

    /// Side that moves first.
    pub fn first_mover(&self) -> Mark {
        if self.human_starts {
            Mark::Player
        } else {
            Mark::Opponent
        }
    }
}
