//! # hero-duel
//!
//! A two-sided superhero card battle engine.
//!
//! ## Rules
//!
//! 1. **Decks**: both sides build a deck from a shared pool of characters.
//!    A character lives in exactly one place at a time.
//!
//! 2. **Battles**: each round both sides play one card. The higher six-stat
//!    total wins and takes both cards to the back of its deck. A tie sends
//!    each card home.
//!
//! 3. **Game over**: a side with an empty deck loses. Surrender ends the
//!    match immediately.
//!
//! ## Modes
//!
//! - **pvp**: two humans, both drawing from the top of their decks.
//! - **pvc**: player1 against the computer, which picks its card with an
//!   [`OpponentPolicy`](crate::policy::OpponentPolicy).
//!
//! ## Modules
//!
//! - `core`: Seats, configuration, RNG, errors and match status
//! - `cards`: Characters, power statistics and the roster filter
//! - `zones`: Card locations (pool, decks, hands, discard)
//! - `rules`: Stat comparison and card settlement
//! - `history`: Round ledger and derived statistics
//! - `policy`: Computer opponent policies
//! - `session`: `BattleSession`, the state container driving a match
//! - `source`: Loading characters from JSON or memory

pub mod core;
pub mod cards;
pub mod zones;
pub mod rules;
pub mod history;
pub mod policy;
pub mod session;
pub mod source;

// Re-export commonly used types
pub use crate::core::{
    Participant, Side, SideMap,
    GameMode, MatchConfig, GameRng,
    EngineError, MatchPhase, MatchStatus,
};

pub use crate::cards::{
    Alignment, Biography, Character, CharacterId, Images,
    PowerStat, PowerStats, RosterFilter,
};

pub use crate::zones::{CardTable, Location};

pub use crate::rules::{compare, deciding_stat, settle, BattleResult, Verdict};

pub use crate::history::{GameHistory, GameStats, RoundRecord};

pub use crate::policy::{CounterOrStrongest, OpponentPolicy, PolicyView, TopOfDeck};

pub use crate::session::{BattleSession, CurrentBattle, SessionSnapshot};

pub use crate::source::{CharacterSource, JsonCharacterSource, MemorySource, SourceError};
