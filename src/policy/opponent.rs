//! Computer opponent decision policy.
//!
//! Policies are trait-based so a session can be built with a different
//! opponent; the default is [`CounterOrStrongest`].

use std::collections::VecDeque;

use crate::cards::Character;
use crate::history::GameHistory;

/// What the computer may look at when choosing a card.
#[derive(Clone, Copy, Debug)]
pub struct PolicyView<'a> {
    /// Rounds played so far.
    pub history: &'a GameHistory,
    /// Card the human currently holds, if drawn.
    pub rival_hand: Option<&'a Character>,
}

/// Policy for picking the computer's card each round.
pub trait OpponentPolicy {
    /// Index into `deck` of the card to play.
    ///
    /// Returns `None` only when the deck is empty. Must be deterministic
    /// given the same deck order and view.
    fn choose(&self, deck: &VecDeque<Character>, view: &PolicyView<'_>) -> Option<usize>;
}

/// Counter the last deciding stat, otherwise play the strongest card.
///
/// 1. With at least one recorded round and a drawn human card, look up the
///    deciding statistic of the latest round and play the first card in
///    deck order that beats the human card on that statistic.
/// 2. Otherwise play the card with the highest six-stat total, earliest
///    in deck order on ties.
///
/// The counter search takes the first match rather than the best one.
#[derive(Clone, Copy, Debug, Default)]
pub struct CounterOrStrongest;

impl CounterOrStrongest {
    /// First card beating the human's held card on the last deciding stat.
    #[must_use]
    pub fn counter_index(deck: &VecDeque<Character>, view: &PolicyView<'_>) -> Option<usize> {
        let last = view.history.last()?;
        let rival = view.rival_hand?;
        let stat = last.result.winning_stat;
        let target = rival.powerstats.get(stat);

        deck.iter().position(|card| card.powerstats.get(stat) > target)
    }

    /// Card with the highest total; earliest wins ties.
    #[must_use]
    pub fn strongest_index(deck: &VecDeque<Character>) -> Option<usize> {
        let mut best: Option<(usize, u32)> = None;
        for (i, card) in deck.iter().enumerate() {
            let total = card.total_power();
            match best {
                Some((_, best_total)) if total <= best_total => {}
                _ => best = Some((i, total)),
            }
        }
        best.map(|(i, _)| i)
    }
}

impl OpponentPolicy for CounterOrStrongest {
    fn choose(&self, deck: &VecDeque<Character>, view: &PolicyView<'_>) -> Option<usize> {
        Self::counter_index(deck, view).or_else(|| Self::strongest_index(deck))
    }
}

/// Always play the front card, like a human drawing blind.
#[derive(Clone, Copy, Debug, Default)]
pub struct TopOfDeck;

impl OpponentPolicy for TopOfDeck {
    fn choose(&self, deck: &VecDeque<Character>, _view: &PolicyView<'_>) -> Option<usize> {
        (!deck.is_empty()).then_some(0)
    }
}
