//! # realms
//!
//! Rules engine core for a Star Realms style deck-building card game.
//!
//! ## Design Principles
//!
//! 1. **Cards Move, Never Copy**: `Card` is not `Clone`. Every pile owns its
//!    cards, so a card can never be in two places at once.
//!
//! 2. **Explicit Repository**: New cards only come from a `CardRepository`
//!    passed in by the caller. There is no global card store.
//!
//! 3. **Deterministic**: All shuffles go through a seeded `GameRng`, and
//!    effect aggregation is a pure function of card order.
//!
//! ## Architecture
//!
//! Card repository → MainDeck → TradeRow (market side), and
//! PlayerDeck → Hand (player side). A `Hand` flattens its active cards into
//! `EffectRecord`s; applying them is up to the caller.
//!
//! ## Modules
//!
//! - `core`: Instance ids, RNG, configuration
//! - `cards`: Effects, factions, prototypes, catalog, repository
//! - `decks`: Player deck, main deck, trade row
//! - `hand`: Hand assembly and effect aggregation
//! - `player`: Per-player deck, bases and counters
//! - `error`: `RealmsError` and `Result`

pub mod core;
pub mod cards;
pub mod decks;
pub mod hand;
pub mod player;
pub mod error;

// Re-export commonly used types
pub use crate::core::{CardId, EffectId, IdAllocator, GameRng, GameRngState, RealmsConfig};

pub use crate::cards::{
    Card, Faction, CardAction, CardTarget, Effect, EffectRecord, EffectSpec,
    CardPrototype, CardCatalog, CardRepository,
};

pub use crate::decks::{PlayerDeck, MainDeck, TradeRow};

pub use crate::hand::Hand;

pub use crate::player::Player;

pub use crate::error::{RealmsError, Result};
