//! Serializable session summary.

use serde::{Deserialize, Serialize};

use crate::core::MatchStatus;
use crate::history::{GameHistory, GameStats};

/// Status, scores, tallies and the full ledger at one point in time.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    pub status: MatchStatus,
    pub player1_score: usize,
    pub player2_score: usize,
    pub game_stats: GameStats,
    pub game_history: GameHistory,
}

impl SessionSnapshot {
    /// Pretty JSON for export.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Compact binary encoding.
    pub fn to_bytes(&self) -> Result<Vec<u8>, bincode::Error> {
        bincode::serialize(self)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, bincode::Error> {
        bincode::deserialize(bytes)
    }
}
