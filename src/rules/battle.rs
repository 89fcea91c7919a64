//! Stat duel between two cards.
//!
//! The outcome is decided only by the six-stat totals. The deciding
//! statistic (largest absolute per-stat difference) is reported alongside
//! for display and does not feed into the outcome.

use serde::{Deserialize, Serialize};

use crate::cards::{PowerStat, PowerStats};
use crate::core::{GameMode, Participant, Side};

/// Result of a single battle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    /// One participant won.
    Winner(Participant),
    /// Equal totals.
    Draw,
}

impl Verdict {
    /// Check if a participant won.
    #[must_use]
    pub fn is_winner(&self, participant: Participant) -> bool {
        matches!(self, Verdict::Winner(p) if *p == participant)
    }

    /// Seat of the winner, `None` on a draw.
    #[must_use]
    pub fn winning_side(&self) -> Option<Side> {
        match self {
            Verdict::Winner(p) => Some(p.side()),
            Verdict::Draw => None,
        }
    }
}

/// Everything a battle reports back to the caller.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BattleResult {
    pub winner: Verdict,

    /// Statistic with the largest absolute difference between the cards.
    pub winning_stat: PowerStat,

    /// Winner's six-stat total; player1's total on a draw.
    pub winning_value: u32,

    pub player1_stats: PowerStats,
    pub player2_stats: PowerStats,
}

/// Statistic with the largest absolute difference.
///
/// Starts from `combat` with a best difference of zero and only replaces
/// it on a strictly larger difference, walking [`PowerStat::ALL`] in order.
/// Equal cards therefore report `combat`, and ties keep the earliest stat.
#[must_use]
pub fn deciding_stat(player1: &PowerStats, player2: &PowerStats) -> PowerStat {
    let mut best = PowerStat::Combat;
    let mut max_diff = 0;

    for (stat, value) in player1.iter() {
        let diff = value.abs_diff(player2.get(stat));
        if diff > max_diff {
            max_diff = diff;
            best = stat;
        }
    }

    best
}

/// Compare two stat sets.
///
/// ```
/// use hero_duel::cards::{PowerStat, PowerStats};
/// use hero_duel::core::{GameMode, Participant};
/// use hero_duel::rules::{compare, Verdict};
///
/// let a = PowerStats::from_array([60, 60, 60, 60, 60, 50]); // 350
/// let b = PowerStats::from_array([50, 50, 50, 50, 50, 60]); // 310
///
/// let result = compare(&a, &b, GameMode::Pvp);
/// assert_eq!(result.winner, Verdict::Winner(Participant::Player1));
/// assert_eq!(result.winning_value, 350);
/// ```
#[must_use]
pub fn compare(player1: &PowerStats, player2: &PowerStats, mode: GameMode) -> BattleResult {
    let total1 = player1.total();
    let total2 = player2.total();

    let (winner, winning_value) = match total1.cmp(&total2) {
        std::cmp::Ordering::Greater => (Verdict::Winner(Participant::Player1), total1),
        std::cmp::Ordering::Less => (Verdict::Winner(mode.opponent()), total2),
        std::cmp::Ordering::Equal => (Verdict::Draw, total1),
    };

    BattleResult {
        winner,
        winning_stat: deciding_stat(player1, player2),
        winning_value,
        player1_stats: *player1,
        player2_stats: *player2,
    }
}
