//! Match progression state.
//!
//! `MatchStatus` holds the observable, card-free part of a session:
//! mode, round counter, whose turn it is, the winner and the lifecycle
//! flags. Card locations live in [`crate::zones::CardTable`].

use serde::{Deserialize, Serialize};

use super::config::GameMode;
use super::player::Participant;

/// Lifecycle phase derived from the started/over flags.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchPhase {
    /// Decks are still being built.
    NotStarted,
    /// Rounds are being played.
    InProgress,
    /// A winner has been declared.
    Over,
}

/// Progression state of a match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchStatus {
    /// Current game mode.
    pub mode: GameMode,

    /// Round number (starts at 1).
    pub current_round: u32,

    /// Whose turn it is: the next picker before the start, the round
    /// initiator during play.
    pub current_turn: Participant,

    /// Overall winner once the match is over.
    pub winner: Option<Participant>,

    pub started: bool,
    pub over: bool,
}

impl MatchStatus {
    /// Create a not-started status for `mode`.
    #[must_use]
    pub fn new(mode: GameMode) -> Self {
        Self {
            mode,
            current_round: 1,
            current_turn: Participant::Player1,
            winner: None,
            started: false,
            over: false,
        }
    }

    /// Current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> MatchPhase {
        match (self.started, self.over) {
            (false, _) => MatchPhase::NotStarted,
            (true, false) => MatchPhase::InProgress,
            (true, true) => MatchPhase::Over,
        }
    }

    /// True while rounds can be drawn and resolved.
    #[must_use]
    pub fn in_progress(&self) -> bool {
        self.phase() == MatchPhase::InProgress
    }

    /// Move into play with round 1 and player1 to act.
    pub fn begin(&mut self) {
        self.started = true;
        self.over = false;
        self.winner = None;
        self.current_round = 1;
        self.current_turn = Participant::Player1;
    }

    /// Declare the overall winner.
    pub fn finish(&mut self, winner: Participant) {
        self.winner = Some(winner);
        self.over = true;
    }

    /// Advance to the next round.
    ///
    /// In pvp the initiator alternates by parity (odd rounds player1, even
    /// rounds player2); in pvc player1 always initiates.
    pub fn advance_round(&mut self) {
        self.current_round += 1;
        self.current_turn = match self.mode {
            GameMode::Pvp if self.current_round % 2 == 0 => Participant::Player2,
            _ => Participant::Player1,
        };
    }

    /// Hand the deck-building pick to the other human (pvp only).
    pub fn pass_pick(&mut self, picked_by: Participant) {
        if self.mode == GameMode::Pvp {
            self.current_turn = match picked_by {
                Participant::Player1 => Participant::Player2,
                _ => Participant::Player1,
            };
        }
    }

    /// Restore pre-start defaults, keeping the mode.
    pub fn reset(&mut self) {
        *self = Self::new(self.mode);
    }
}

impl Default for MatchStatus {
    fn default() -> Self {
        Self::new(GameMode::default())
    }
}
