//! Aggregate statistics derived from the ledger on demand.

use serde::{Deserialize, Serialize};

use crate::core::{GameMode, Participant};
use crate::rules::Verdict;

use super::ledger::GameHistory;

/// Win/draw tallies for a match.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameStats {
    /// Completed (recorded) rounds.
    pub total_rounds: usize,
    pub player1_wins: usize,
    /// Wins by player2 or the computer, whichever the mode names.
    pub player2_wins: usize,
    pub draws: usize,
}

impl GameStats {
    /// Tally a history. Opponent wins count only under the opponent name
    /// of `mode`.
    #[must_use]
    pub fn from_history(history: &GameHistory, mode: GameMode) -> Self {
        let opponent = mode.opponent();
        let mut stats = Self {
            total_rounds: history.len(),
            ..Self::default()
        };

        for round in history.rounds() {
            let verdict = round.result.winner;
            if verdict == Verdict::Draw {
                stats.draws += 1;
            } else if verdict.is_winner(Participant::Player1) {
                stats.player1_wins += 1;
            } else if verdict.is_winner(opponent) {
                stats.player2_wins += 1;
            }
        }

        stats
    }
}
