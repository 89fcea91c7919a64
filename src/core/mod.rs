//! Core engine types: seats, configuration, RNG, errors and match state.
//!
//! Nothing in here knows about characters or battles; the session and the
//! rules build on these pieces.

pub mod player;
pub mod config;
pub mod rng;
pub mod error;
pub mod state;

pub use player::{Participant, Side, SideMap};
pub use config::{GameMode, MatchConfig};
pub use rng::GameRng;
pub use error::EngineError;
pub use state::{MatchPhase, MatchStatus};
