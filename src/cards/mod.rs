//! Character cards: identity, power statistics and roster projection.
//!
//! - `Character`: an immutable card record from the character feed
//! - `PowerStats`: the six statistics battles compare
//! - `RosterFilter`: alignment filter and stat ordering over the pool

pub mod character;
pub mod stats;
pub mod filter;

pub use character::{Alignment, Biography, Character, CharacterId, Images};
pub use stats::{PowerStat, PowerStats};
pub use filter::RosterFilter;
