//! Computer opponent policies.

pub mod opponent;

pub use opponent::{CounterOrStrongest, OpponentPolicy, PolicyView, TopOfDeck};
