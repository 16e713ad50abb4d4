//! Card instances and factions.
//!
//! A `Card` is one physical card in a game. Its attributes and effect lists
//! are fixed when the repository builds it from a prototype. `Card` is
//! deliberately not `Clone`: every pile owns its cards, and moving a card
//! between piles is a move, never a copy.

use serde::{Deserialize, Serialize};

use super::definition::CardPrototype;
use super::effect::{Effect, EffectList, EffectSpec};
use crate::core::{CardId, IdAllocator};
use crate::error::RealmsError;

/// The faction a card belongs to.
///
/// `All` is the wildcard carried by cards such as Mech World: it activates
/// ally abilities for every ordinary faction. `Unaligned` cards (Viper,
/// Scout, Explorer) never trigger or benefit from ally abilities.
///
/// Variants are declared in name order so the derived `Ord` sorts by name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Faction {
    All,
    Blob,
    Federation,
    Machine,
    Star,
    Unaligned,
}

impl Faction {
    /// Factions that can have ally abilities activated.
    pub const ORDINARY: [Faction; 4] = [
        Faction::Blob,
        Faction::Federation,
        Faction::Machine,
        Faction::Star,
    ];

    const EVERY: [Faction; 6] = [
        Faction::All,
        Faction::Blob,
        Faction::Federation,
        Faction::Machine,
        Faction::Star,
        Faction::Unaligned,
    ];

    /// Display name, e.g. "Star Empire".
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Faction::All => "All",
            Faction::Blob => "Blob",
            Faction::Federation => "Federation",
            Faction::Machine => "Machine Cult",
            Faction::Star => "Star Empire",
            Faction::Unaligned => "Unaligned",
        }
    }

    /// Is this one of the four ordinary factions?
    #[must_use]
    pub const fn is_ordinary(self) -> bool {
        match self {
            Faction::Blob | Faction::Federation | Faction::Machine | Faction::Star => true,
            Faction::All | Faction::Unaligned => false,
        }
    }
}

impl std::fmt::Display for Faction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

impl std::str::FromStr for Faction {
    type Err = RealmsError;

    /// Parse a faction from its display name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Faction::EVERY
            .into_iter()
            .find(|faction| faction.display_name() == s)
            .ok_or_else(|| RealmsError::Parse {
                kind: "faction",
                value: s.to_string(),
            })
    }
}

/// A card instance.
#[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    id: CardId,
    name: String,
    faction: Faction,
    is_base: bool,
    is_outpost: bool,
    defense: u32,
    cost: u32,
    effects_basic: EffectList,
    effects_ally: EffectList,
    effects_scrap: EffectList,
}

impl Card {
    /// Build an instance of `prototype` with the given card id.
    ///
    /// Every effect gets a fresh id from `ids`.
    #[must_use]
    pub fn from_prototype(id: CardId, prototype: &CardPrototype, ids: &IdAllocator) -> Self {
        let stamp = |specs: &[EffectSpec]| -> EffectList {
            specs.iter().map(|spec| spec.instantiate(ids)).collect()
        };

        Self {
            id,
            name: prototype.name.clone(),
            faction: prototype.faction,
            is_base: prototype.is_base,
            is_outpost: prototype.is_base && prototype.is_outpost,
            defense: if prototype.is_base { prototype.defense } else { 0 },
            cost: prototype.cost,
            effects_basic: stamp(prototype.effects_basic.as_slice()),
            effects_ally: stamp(prototype.effects_ally.as_slice()),
            effects_scrap: stamp(prototype.effects_scrap.as_slice()),
        }
    }

    #[must_use]
    pub fn id(&self) -> CardId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn faction(&self) -> Faction {
        self.faction
    }

    #[must_use]
    pub fn is_base(&self) -> bool {
        self.is_base
    }

    /// Outposts must be destroyed before the owner can be attacked.
    /// Always false for ships.
    #[must_use]
    pub fn is_outpost(&self) -> bool {
        self.is_outpost
    }

    /// Damage a base absorbs before it is destroyed. Zero for ships.
    #[must_use]
    pub fn defense(&self) -> u32 {
        self.defense
    }

    /// Trade needed to acquire the card.
    #[must_use]
    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Effects activated when the card is played.
    #[must_use]
    pub fn effects_basic(&self) -> &[Effect] {
        &self.effects_basic
    }

    /// Effects activated when another card of the same faction is in play.
    #[must_use]
    pub fn effects_ally(&self) -> &[Effect] {
        &self.effects_ally
    }

    /// Effects activated when the owner scraps the card.
    #[must_use]
    pub fn effects_scrap(&self) -> &[Effect] {
        &self.effects_scrap
    }

    /// Every effect on the card, in basic, ally, scrap order.
    pub fn all_effects(&self) -> impl Iterator<Item = &Effect> {
        self.effects_basic
            .iter()
            .chain(self.effects_ally.iter())
            .chain(self.effects_scrap.iter())
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}]", self.name, self.id)
    }
}
