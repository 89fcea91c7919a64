//! Card transfer after a battle.
//!
//! - Decisive result: the winner's deck gains the loser's card, then its
//!   own card, both at the back.
//! - Draw: each card goes back to the back of its own deck.

use log::debug;

use crate::cards::Character;
use crate::core::Side;
use crate::zones::CardTable;

use super::battle::Verdict;

/// Return the two played cards to the decks according to the verdict.
pub fn settle(table: &mut CardTable, player1_card: Character, opponent_card: Character, verdict: &Verdict) {
    match verdict.winning_side() {
        Some(winner) => {
            let (own, taken) = match winner {
                Side::Player1 => (player1_card, opponent_card),
                Side::Opponent => (opponent_card, player1_card),
            };
            debug!("{:?} takes {} from {:?}", winner, taken.name, winner.other());

            for card in [taken, own] {
                table.push_to_deck(winner, card);
            }
        }
        None => {
            debug!("draw, {} and {} go home", player1_card.name, opponent_card.name);
            table.push_to_deck(Side::Player1, player1_card);
            table.push_to_deck(Side::Opponent, opponent_card);
        }
    }
}
