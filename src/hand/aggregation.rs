//! Effect aggregation over a set of active cards.
//!
//! Pure functions over a card slice. Output order is fully determined by
//! the input order: card order first, then effect order within each card's
//! list. Nothing is deduplicated; two copies of the same card each emit
//! their own records with their own provider and effect ids.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::cards::{Card, EffectRecord, Faction};

/// Factions with ally abilities active. At most the four ordinary factions.
pub type AllyFactions = SmallVec<[Faction; 4]>;

/// One record per basic effect of every card.
#[must_use]
pub fn collect_basic_effects(cards: &[Card]) -> Vec<EffectRecord> {
    cards
        .iter()
        .flat_map(|card| {
            card.effects_basic()
                .iter()
                .map(move |effect| EffectRecord::new(effect, card.id()))
        })
        .collect()
}

/// Factions whose ally abilities are active for `cards`.
///
/// A Faction::All card makes every ordinary faction eligible. Otherwise an
/// ordinary faction is eligible when more than one active card belongs to
/// it. `Unaligned` is never eligible. Returned in `Faction::ORDINARY` order.
#[must_use]
pub fn collect_ally_factions(cards: &[Card]) -> AllyFactions {
    let mut counts: FxHashMap<Faction, usize> = FxHashMap::default();
    for card in cards {
        *counts.entry(card.faction()).or_insert(0) += 1;
    }

    if counts.contains_key(&Faction::All) {
        return Faction::ORDINARY.into_iter().collect();
    }

    Faction::ORDINARY
        .into_iter()
        .filter(|faction| counts.get(faction).copied().unwrap_or(0) > 1)
        .collect()
}

/// One record per ally effect of every card whose faction is in `eligible`.
#[must_use]
pub fn collect_ally_effects(cards: &[Card], eligible: &[Faction]) -> Vec<EffectRecord> {
    cards
        .iter()
        .filter(|card| eligible.contains(&card.faction()))
        .flat_map(|card| {
            card.effects_ally()
                .iter()
                .map(move |effect| EffectRecord::new(effect, card.id()))
        })
        .collect()
}

/// Basic effects followed by ally effects.
#[must_use]
pub fn collect_effects(cards: &[Card]) -> Vec<EffectRecord> {
    let eligible = collect_ally_factions(cards);
    let mut effects = collect_basic_effects(cards);
    effects.extend(collect_ally_effects(cards, &eligible));
    effects
}
