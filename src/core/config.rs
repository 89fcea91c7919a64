//! Match configuration types.
//!
//! A session is configured at construction with a `MatchConfig`:
//! - `GameMode`: whether the opponent seat is a human or the computer
//! - `seed`: optional RNG seed for the deck shuffle

use serde::{Deserialize, Serialize};

use super::player::{Participant, Side};

/// Whether the second seat is human-controlled or policy-controlled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    /// Player versus player.
    #[default]
    Pvp,
    /// Player versus computer.
    Pvc,
}

impl GameMode {
    /// Role name of the participant sitting on `side`.
    #[must_use]
    pub const fn participant(self, side: Side) -> Participant {
        match (side, self) {
            (Side::Player1, _) => Participant::Player1,
            (Side::Opponent, GameMode::Pvp) => Participant::Player2,
            (Side::Opponent, GameMode::Pvc) => Participant::Computer,
        }
    }

    /// Role name of the opponent seat.
    #[must_use]
    pub const fn opponent(self) -> Participant {
        self.participant(Side::Opponent)
    }
}

/// Session configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Initial game mode (default: pvp).
    pub mode: GameMode,

    /// Seed for the shuffle RNG.
    /// `None` draws a fresh seed, so every session shuffles differently.
    pub seed: Option<u64>,
}

impl MatchConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the game mode.
    #[must_use]
    pub fn with_mode(mut self, mode: GameMode) -> Self {
        self.mode = mode;
        self
    }

    /// Fix the shuffle seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
