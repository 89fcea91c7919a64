//! Seats, participants and per-seat data storage.
//!
//! ## Side
//!
//! A duel always has exactly two seats: `Player1` and the `Opponent` seat.
//!
//! ## Participant
//!
//! The role name a seat carries under the current game mode. The opponent
//! seat is `Player2` in pvp and `Computer` in pvc.
//!
//! ## SideMap
//!
//! Per-seat data storage backed by a fixed array, indexable by `Side`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::config::GameMode;

/// One of the two seats at the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// The first (always human) player.
    Player1,
    /// The second player or the computer, depending on the mode.
    Opponent,
}

impl Side {
    /// Both seats in table order.
    pub const ALL: [Side; 2] = [Side::Player1, Side::Opponent];

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Side::Player1 => 0,
            Side::Opponent => 1,
        }
    }

    /// The other seat.
    #[must_use]
    pub const fn other(self) -> Side {
        match self {
            Side::Player1 => Side::Opponent,
            Side::Opponent => Side::Player1,
        }
    }
}

/// Role name of a combatant.
///
/// `Player2` and `Computer` both sit in the opponent seat; which one is
/// meaningful depends on the [`GameMode`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Participant {
    Player1,
    Player2,
    Computer,
}

impl Participant {
    /// The seat this participant occupies.
    #[must_use]
    pub const fn side(self) -> Side {
        match self {
            Participant::Player1 => Side::Player1,
            Participant::Player2 | Participant::Computer => Side::Opponent,
        }
    }

    /// The participant on the other seat under `mode`.
    #[must_use]
    pub fn rival(self, mode: GameMode) -> Participant {
        mode.participant(self.side().other())
    }
}

impl std::fmt::Display for Participant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Participant::Player1 => "player1",
            Participant::Player2 => "player2",
            Participant::Computer => "computer",
        };
        f.write_str(name)
    }
}

/// Per-seat data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use hero_duel::core::{Side, SideMap};
///
/// let mut wins: SideMap<u32> = SideMap::with_default();
/// wins[Side::Opponent] += 2;
///
/// assert_eq!(wins[Side::Player1], 0);
/// assert_eq!(wins[Side::Opponent], 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SideMap<T> {
    data: [T; 2],
}

impl<T> SideMap<T> {
    /// Create a new SideMap with values from a factory function.
    pub fn new(factory: impl Fn(Side) -> T) -> Self {
        Self {
            data: [factory(Side::Player1), factory(Side::Opponent)],
        }
    }

    /// Create a new SideMap with default values.
    pub fn with_default() -> Self
    where
        T: Default,
    {
        Self::new(|_| T::default())
    }

    /// Get a reference to a seat's data.
    #[must_use]
    pub fn get(&self, side: Side) -> &T {
        &self.data[side.index()]
    }

    /// Get a mutable reference to a seat's data.
    pub fn get_mut(&mut self, side: Side) -> &mut T {
        &mut self.data[side.index()]
    }

    /// Iterate over (Side, &T) pairs in table order.
    pub fn iter(&self) -> impl Iterator<Item = (Side, &T)> {
        Side::ALL.into_iter().zip(self.data.iter())
    }

    /// Iterate over (Side, &mut T) pairs in table order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (Side, &mut T)> {
        Side::ALL.into_iter().zip(self.data.iter_mut())
    }
}

impl<T: Default> Default for SideMap<T> {
    fn default() -> Self {
        Self::with_default()
    }
}

impl<T> Index<Side> for SideMap<T> {
    type Output = T;

    fn index(&self, side: Side) -> &Self::Output {
        self.get(side)
    }
}

impl<T> IndexMut<Side> for SideMap<T> {
    fn index_mut(&mut self, side: Side) -> &mut Self::Output {
        self.get_mut(side)
    }
}
