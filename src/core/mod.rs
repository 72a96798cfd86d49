//! Core building blocks: players and randomness.
//!
//! These types are independent of any particular board; the board and
//! engine modules build on them.

pub mod player;
pub mod rng;

pub use player::{PlayerId, PlayerMap, MAX_PLAYERS};
pub use rng::DiceRng;
