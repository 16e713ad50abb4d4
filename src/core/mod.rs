//! Core engine types: instance ids, RNG, configuration.
//!
//! These are the building blocks every pile and the hand depend on.

pub mod ids;
pub mod rng;
pub mod config;

pub use ids::{CardId, EffectId, IdAllocator};
pub use rng::{GameRng, GameRngState};
pub use config::{RealmsConfig, MAX_HAND_DRAW, STARTING_DECK_SIZE};
