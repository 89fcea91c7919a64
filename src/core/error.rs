//! Engine error kinds.
//!
//! Every command on a session reports contract violations through
//! `EngineError`. Nothing is retried; the caller decides what to do.

use super::player::Participant;
use crate::cards::CharacterId;

/// A rejected engine command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Roster edits and starting are only allowed before the match starts.
    MatchAlreadyStarted,
    /// The command needs a match in progress.
    MatchNotStarted,
    /// The match already has a winner.
    MatchOver,
    /// The character is already in the target deck.
    AlreadyInDeck(CharacterId),
    /// The character is not in the available pool.
    NotAvailable(CharacterId),
    /// The character is not in the target deck.
    NotInDeck(CharacterId),
    /// A required deck has no cards.
    EmptyDeck(Participant),
    /// A hand is empty at resolution time.
    MissingHand(Participant),
}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngineError::MatchAlreadyStarted => write!(f, "Match has already started"),
            EngineError::MatchNotStarted => write!(f, "Match has not started"),
            EngineError::MatchOver => write!(f, "Match is over"),
            EngineError::AlreadyInDeck(id) => write!(f, "{} is already in that deck", id),
            EngineError::NotAvailable(id) => write!(f, "{} is not in the available pool", id),
            EngineError::NotInDeck(id) => write!(f, "{} is not in that deck", id),
            EngineError::EmptyDeck(who) => {
                write!(f, "{} needs at least one card to start", who)
            }
            EngineError::MissingHand(who) => {
                write!(f, "{} has no card in hand to battle with", who)
            }
        }
    }
}

impl std::error::Error for EngineError {}
