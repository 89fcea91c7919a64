//! Battle rules: stat comparison and card settlement.
//!
//! Both are pure with respect to the session: `compare` only reads stats
//! and `settle` only moves the two played cards on a `CardTable`.

pub mod battle;
pub mod settlement;

pub use battle::{compare, deciding_stat, BattleResult, Verdict};
pub use settlement::settle;
