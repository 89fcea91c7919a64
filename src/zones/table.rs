//! Card table: where every character currently is.
//!
//! The `CardTable` owns every character in a session and tracks which
//! location holds it:
//! - the shared available pool
//! - each seat's deck (ordered, drawn from the front)
//! - each seat's hand (at most one card)
//! - the discard pile
//!
//! Cards only ever move between locations; the table never creates or
//! drops one. `census()` exposes the multiset for checking that.

use std::collections::VecDeque;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::cards::{Character, CharacterId};
use crate::core::{GameRng, Side, SideMap};

/// A location on the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Location {
    /// The shared pool of unassigned characters.
    Pool,
    /// A seat's deck.
    Deck(Side),
    /// A seat's hand.
    Hand(Side),
    /// The discard pile.
    Discard,
}

/// Owner of every character in a session.
///
/// ## Usage
///
/// ```
/// use hero_duel::cards::{Character, CharacterId, PowerStats};
/// use hero_duel::core::Side;
/// use hero_duel::zones::{CardTable, Location};
///
/// let mut table = CardTable::with_pool(vec![
///     Character::new(CharacterId::new(1), "Storm", PowerStats::uniform(70)),
/// ]);
///
/// let storm = table.take_from_pool(CharacterId::new(1)).unwrap();
/// table.push_to_deck(Side::Player1, storm);
///
/// assert_eq!(table.locate(CharacterId::new(1)), Some(Location::Deck(Side::Player1)));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CardTable {
    pool: Vec<Character>,
    decks: SideMap<VecDeque<Character>>,
    hands: SideMap<Option<Character>>,
    discard: Vec<Character>,
}

impl CardTable {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a table with every character in the pool.
    #[must_use]
    pub fn with_pool(pool: Vec<Character>) -> Self {
        Self {
            pool,
            ..Self::default()
        }
    }

    // === Queries ===

    /// Characters in the available pool, in pool order.
    #[must_use]
    pub fn pool(&self) -> &[Character] {
        &self.pool
    }

    /// A seat's deck, front first.
    #[must_use]
    pub fn deck(&self, side: Side) -> &VecDeque<Character> {
        &self.decks[side]
    }

    #[must_use]
    pub fn deck_size(&self, side: Side) -> usize {
        self.decks[side].len()
    }

    /// A seat's hand.
    #[must_use]
    pub fn hand(&self, side: Side) -> Option<&Character> {
        self.hands[side].as_ref()
    }

    #[must_use]
    pub fn discard(&self) -> &[Character] {
        &self.discard
    }

    /// Check if a seat's deck holds the character.
    #[must_use]
    pub fn deck_contains(&self, side: Side, id: CharacterId) -> bool {
        self.decks[side].iter().any(|c| c.id == id)
    }

    /// Find where a character currently is.
    #[must_use]
    pub fn locate(&self, id: CharacterId) -> Option<Location> {
        if self.pool.iter().any(|c| c.id == id) {
            return Some(Location::Pool);
        }
        for side in Side::ALL {
            if self.deck_contains(side, id) {
                return Some(Location::Deck(side));
            }
            if self.hands[side].as_ref().is_some_and(|c| c.id == id) {
                return Some(Location::Hand(side));
            }
        }
        if self.discard.iter().any(|c| c.id == id) {
            return Some(Location::Discard);
        }
        None
    }

    /// Count of each character id across every location.
    #[must_use]
    pub fn census(&self) -> FxHashMap<CharacterId, usize> {
        let mut counts = FxHashMap::default();
        for card in self.iter_all() {
            *counts.entry(card.id).or_insert(0) += 1;
        }
        counts
    }

    /// Total number of cards on the table.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.iter_all().count()
    }

    fn iter_all(&self) -> impl Iterator<Item = &Character> {
        self.pool
            .iter()
            .chain(self.decks.iter().flat_map(|(_, deck)| deck.iter()))
            .chain(self.hands.iter().filter_map(|(_, hand)| hand.as_ref()))
            .chain(self.discard.iter())
    }

    // === Pool ===

    /// Remove a character from the pool.
    ///
    /// Returns `None` if it is not in the pool.
    pub fn take_from_pool(&mut self, id: CharacterId) -> Option<Character> {
        let pos = self.pool.iter().position(|c| c.id == id)?;
        Some(self.pool.remove(pos))
    }

    /// Put a character at the end of the pool.
    pub fn return_to_pool(&mut self, card: Character) {
        self.pool.push(card);
    }

    // === Decks ===

    /// Append a character to the back of a seat's deck.
    pub fn push_to_deck(&mut self, side: Side, card: Character) {
        self.decks[side].push_back(card);
    }

    /// Remove a character from a seat's deck, wherever it sits.
    pub fn remove_from_deck(&mut self, side: Side, id: CharacterId) -> Option<Character> {
        let pos = self.decks[side].iter().position(|c| c.id == id)?;
        self.decks[side].remove(pos)
    }

    /// Shuffle a seat's deck in place.
    pub fn shuffle_deck(&mut self, side: Side, rng: &mut GameRng) {
        rng.shuffle(self.decks[side].make_contiguous());
    }

    // === Hands ===

    /// Draw the front card of a seat's deck into its hand.
    ///
    /// Does nothing if the hand is already occupied or the deck is empty.
    /// Returns true if the hand holds a card afterwards.
    pub fn draw_front(&mut self, side: Side) -> bool {
        self.draw_at(side, 0)
    }

    /// Move the card at `index` of a seat's deck into its hand.
    ///
    /// Same rules as [`draw_front`](Self::draw_front); an out-of-range
    /// index leaves the hand empty.
    pub fn draw_at(&mut self, side: Side, index: usize) -> bool {
        if self.hands[side].is_none() {
            self.hands[side] = self.decks[side].remove(index);
        }
        self.hands[side].is_some()
    }

    /// Take both hands for a battle.
    ///
    /// Fails with the first empty seat and leaves both hands untouched.
    pub fn take_hands(&mut self) -> Result<(Character, Character), Side> {
        match (self.hands[Side::Player1].take(), self.hands[Side::Opponent].take()) {
            (Some(player1), Some(opponent)) => Ok((player1, opponent)),
            (player1, opponent) => {
                let missing = if player1.is_none() { Side::Player1 } else { Side::Opponent };
                self.hands[Side::Player1] = player1;
                self.hands[Side::Opponent] = opponent;
                Err(missing)
            }
        }
    }

    // === Bulk ===

    /// Move every card from decks, discard pile and hands to the end of
    /// the pool: player1 deck, opponent deck, discard pile, player1 hand,
    /// opponent hand.
    pub fn gather_into_pool(&mut self) {
        for (_, deck) in self.decks.iter_mut() {
            self.pool.extend(deck.drain(..));
        }
        self.pool.append(&mut self.discard);
        for side in Side::ALL {
            if let Some(card) = self.hands[side].take() {
                self.pool.push(card);
            }
        }
    }

    /// Throw away everything and start over with a new pool.
    pub fn replace_all(&mut self, pool: Vec<Character>) {
        *self = Self::with_pool(pool);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::PowerStats;

    fn card(id: u32) -> Character {
        Character::new(CharacterId::new(id), format!("Hero {}", id), PowerStats::uniform(id))
    }

    fn table_with(ids: &[u32]) -> CardTable {
        CardTable::with_pool(ids.iter().map(|&i| card(i)).collect())
    }

    #[test]
    fn test_take_and_return_pool() {
        let mut table = table_with(&[1, 2, 3]);

        let two = table.take_from_pool(CharacterId::new(2)).unwrap();
        assert_eq!(two.id, CharacterId::new(2));
        assert!(table.take_from_pool(CharacterId::new(2)).is_none());

        table.return_to_pool(two);
        let ids: Vec<_> = table.pool().iter().map(|c| c.id.raw()).collect();
        assert_eq!(ids, vec![1, 3, 2]);
    }

    #[test]
    fn test_deck_order_and_draw() {
        let mut table = table_with(&[1, 2]);
        for id in [1, 2] {
            let c = table.take_from_pool(CharacterId::new(id)).unwrap();
            table.push_to_deck(Side::Player1, c);
        }

        assert!(table.draw_front(Side::Player1));
        assert_eq!(table.hand(Side::Player1).unwrap().id, CharacterId::new(1));
        assert_eq!(table.deck_size(Side::Player1), 1);
    }

    #[test]
    fn test_draw_keeps_occupied_hand() {
        let mut table = table_with(&[1, 2]);
        for id in [1, 2] {
            let c = table.take_from_pool(CharacterId::new(id)).unwrap();
            table.push_to_deck(Side::Opponent, c);
        }

        table.draw_front(Side::Opponent);
        table.draw_front(Side::Opponent);

        assert_eq!(table.hand(Side::Opponent).unwrap().id, CharacterId::new(1));
        assert_eq!(table.deck_size(Side::Opponent), 1);
        assert_eq!(table.total_cards(), 2);
    }

    #[test]
    fn test_draw_from_empty_deck() {
        let mut table = CardTable::new();
        assert!(!table.draw_front(Side::Player1));
        assert!(table.hand(Side::Player1).is_none());
    }

    #[test]
    fn test_draw_at_index() {
        let mut table = table_with(&[1, 2, 3]);
        for id in [1, 2, 3] {
            let c = table.take_from_pool(CharacterId::new(id)).unwrap();
            table.push_to_deck(Side::Opponent, c);
        }

        assert!(table.draw_at(Side::Opponent, 2));
        assert_eq!(table.hand(Side::Opponent).unwrap().id, CharacterId::new(3));
        assert!(!table.draw_at(Side::Player1, 5));
    }

    #[test]
    fn test_take_hands() {
        let mut table = table_with(&[1, 2]);
        let c = table.take_from_pool(CharacterId::new(1)).unwrap();
        table.push_to_deck(Side::Player1, c);
        let c = table.take_from_pool(CharacterId::new(2)).unwrap();
        table.push_to_deck(Side::Opponent, c);

        table.draw_front(Side::Player1);
        assert_eq!(table.take_hands(), Err(Side::Opponent));
        assert!(table.hand(Side::Player1).is_some());

        table.draw_front(Side::Opponent);
        let (a, b) = table.take_hands().unwrap();
        assert_eq!((a.id.raw(), b.id.raw()), (1, 2));
        assert!(table.hand(Side::Player1).is_none());
        assert!(table.hand(Side::Opponent).is_none());
    }

    #[test]
    fn test_take_hands_reports_player1_first() {
        let mut table = CardTable::new();
        assert_eq!(table.take_hands(), Err(Side::Player1));
    }

    #[test]
    fn test_locate() {
        let mut table = table_with(&[1, 2, 3]);
        let c = table.take_from_pool(CharacterId::new(2)).unwrap();
        table.push_to_deck(Side::Opponent, c);
        let c = table.take_from_pool(CharacterId::new(3)).unwrap();
        table.push_to_deck(Side::Player1, c);
        table.draw_front(Side::Player1);

        assert_eq!(table.locate(CharacterId::new(1)), Some(Location::Pool));
        assert_eq!(table.locate(CharacterId::new(2)), Some(Location::Deck(Side::Opponent)));
        assert_eq!(table.locate(CharacterId::new(3)), Some(Location::Hand(Side::Player1)));
        assert_eq!(table.locate(CharacterId::new(9)), None);
    }

    #[test]
    fn test_remove_from_deck() {
        let mut table = table_with(&[1, 2, 3]);
        for id in [1, 2, 3] {
            let c = table.take_from_pool(CharacterId::new(id)).unwrap();
            table.push_to_deck(Side::Player1, c);
        }

        let removed = table.remove_from_deck(Side::Player1, CharacterId::new(2)).unwrap();
        assert_eq!(removed.id, CharacterId::new(2));
        assert!(table.remove_from_deck(Side::Player1, CharacterId::new(2)).is_none());
        assert!(table.remove_from_deck(Side::Opponent, CharacterId::new(1)).is_none());
        assert_eq!(table.deck_size(Side::Player1), 2);
    }

    #[test]
    fn test_gather_into_pool_order() {
        let mut table = table_with(&[1, 2, 3, 4, 5]);
        let c = table.take_from_pool(CharacterId::new(1)).unwrap();
        table.push_to_deck(Side::Opponent, c);
        let c = table.take_from_pool(CharacterId::new(2)).unwrap();
        table.push_to_deck(Side::Player1, c);
        table.draw_front(Side::Player1);
        let c = table.take_from_pool(CharacterId::new(3)).unwrap();
        table.push_to_deck(Side::Player1, c);

        table.gather_into_pool();

        let ids: Vec<_> = table.pool().iter().map(|c| c.id.raw()).collect();
        assert_eq!(ids, vec![4, 5, 3, 1, 2]);
        assert_eq!(table.deck_size(Side::Player1), 0);
        assert!(table.hand(Side::Player1).is_none());
    }

    #[test]
    fn test_census_counts_every_location() {
        let mut table = table_with(&[1, 2, 3]);
        let c = table.take_from_pool(CharacterId::new(1)).unwrap();
        table.push_to_deck(Side::Player1, c);
        let c = table.take_from_pool(CharacterId::new(2)).unwrap();
        table.push_to_deck(Side::Opponent, c);
        table.draw_front(Side::Opponent);

        let census = table.census();
        assert_eq!(census.len(), 3);
        assert!(census.values().all(|&n| n == 1));
    }

    #[test]
    fn test_shuffle_deck_is_permutation() {
        let mut table = table_with(&(1..=12).collect::<Vec<_>>());
        for id in 1..=12 {
            let c = table.take_from_pool(CharacterId::new(id)).unwrap();
            table.push_to_deck(Side::Player1, c);
        }
        let before: Vec<_> = table.deck(Side::Player1).iter().map(|c| c.id).collect();

        table.shuffle_deck(Side::Player1, &mut GameRng::new(5));

        let mut after: Vec<_> = table.deck(Side::Player1).iter().map(|c| c.id).collect();
        assert_ne!(after, before);
        after.sort();
        assert_eq!(after, before);
    }
}
