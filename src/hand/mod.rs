//! Hand assembly and effect aggregation.
//!
//! `Hand` holds the active cards for a turn. The functions in
//! `aggregation` turn any slice of active cards into a flat list of
//! `EffectRecord`s: basic effects first, then ally effects for every card
//! whose faction is eligible. Nothing here applies effects or moves cards.

pub mod aggregation;
pub mod assembly;

pub use aggregation::{
    collect_ally_effects, collect_ally_factions, collect_basic_effects, collect_effects,
    AllyFactions,
};
pub use assembly::Hand;
