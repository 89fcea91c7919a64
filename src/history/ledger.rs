//! Round ledger.
//!
//! Every resolved battle appends one immutable `RoundRecord`. The ledger is
//! an `im::Vector`, so handing a copy to a snapshot is O(1).

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::Character;
use crate::core::Participant;
use crate::rules::BattleResult;

/// One resolved battle.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundRecord {
    /// Round number at the time of the battle.
    pub round: u32,
    pub player1_card: Character,
    pub player2_card: Character,
    pub result: BattleResult,
}

/// Append-only history of a match.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameHistory {
    rounds: Vector<RoundRecord>,

    /// Overall winner, mirrored from the match state when it ends.
    pub winner: Option<Participant>,

    /// Number of the last recorded round.
    pub total_rounds: u32,
}

impl GameHistory {
    /// Create an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a round and bump the total to its number.
    pub fn record(&mut self, record: RoundRecord) {
        self.total_rounds = record.round;
        self.rounds.push_back(record);
    }

    /// All rounds, oldest first.
    #[must_use]
    pub fn rounds(&self) -> &Vector<RoundRecord> {
        &self.rounds
    }

    /// The most recent round.
    #[must_use]
    pub fn last(&self) -> Option<&RoundRecord> {
        self.rounds.back()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rounds.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rounds.is_empty()
    }

    /// Drop everything.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
