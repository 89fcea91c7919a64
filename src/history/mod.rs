//! Round history and the statistics derived from it.

pub mod ledger;
pub mod stats;

pub use ledger::{GameHistory, RoundRecord};
pub use stats::GameStats;
