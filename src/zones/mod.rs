//! Card locations: pool, decks, hands and discard pile.
//!
//! `CardTable` is the single owner of every character in a session and
//! the only thing that moves them around.

pub mod table;

pub use table::{CardTable, Location};
