//! Card prototypes - static card data.
//!
//! `CardPrototype` holds the immutable properties of a named card. For
//! example, "Blob Fighter" costs 1, deals 3 combat and draws a card when
//! allied - these are part of the prototype.
//!
//! Instance data (the card id and the ids of its effects) is stamped on
//! separately when the repository builds a `Card`.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::card::Faction;
use super::effect::EffectSpec;

/// Static card prototype.
///
/// ## Example
///
/// ```
/// use realms::cards::{CardAction, CardPrototype, EffectSpec, Faction};
///
/// let fighter = CardPrototype::ship("Blob Fighter", Faction::Blob, 1)
///     .with_basic(EffectSpec::opponent(CardAction::Attack, 3))
///     .with_ally(EffectSpec::owner(CardAction::Draw, 1))
///     .with_copies(3);
///
/// assert_eq!(fighter.copies, 3);
/// assert!(fighter.has_ally_ability());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardPrototype {
    /// Card name, unique within a catalog.
    pub name: String,

    pub faction: Faction,

    pub is_base: bool,

    /// Only meaningful for bases.
    pub is_outpost: bool,

    /// Only meaningful for bases.
    pub defense: u32,

    pub cost: u32,

    pub effects_basic: SmallVec<[EffectSpec; 2]>,

    pub effects_ally: SmallVec<[EffectSpec; 2]>,

    pub effects_scrap: SmallVec<[EffectSpec; 2]>,

    /// Copies of this card placed in the market pool.
    pub copies: u32,
}

impl CardPrototype {
    /// Create a ship prototype with no effects and a single copy.
    #[must_use]
    pub fn ship(name: impl Into<String>, faction: Faction, cost: u32) -> Self {
        Self {
            name: name.into(),
            faction,
            is_base: false,
            is_outpost: false,
            defense: 0,
            cost,
            effects_basic: SmallVec::new(),
            effects_ally: SmallVec::new(),
            effects_scrap: SmallVec::new(),
            copies: 1,
        }
    }

    /// Create a base prototype with the given defense.
    #[must_use]
    pub fn base(name: impl Into<String>, faction: Faction, cost: u32, defense: u32) -> Self {
        Self {
            is_base: true,
            defense,
            ..Self::ship(name, faction, cost)
        }
    }

    /// Mark a base as an outpost.
    #[must_use]
    pub fn outpost(mut self) -> Self {
        self.is_outpost = true;
        self
    }

    /// Add a basic effect (builder pattern).
    #[must_use]
    pub fn with_basic(mut self, effect: EffectSpec) -> Self {
        self.effects_basic.push(effect);
        self
    }

    /// Add an ally effect.
    #[must_use]
    pub fn with_ally(mut self, effect: EffectSpec) -> Self {
        self.effects_ally.push(effect);
        self
    }

    /// Add a scrap effect.
    #[must_use]
    pub fn with_scrap(mut self, effect: EffectSpec) -> Self {
        self.effects_scrap.push(effect);
        self
    }

    /// Set the number of copies in the market pool.
    #[must_use]
    pub fn with_copies(mut self, copies: u32) -> Self {
        self.copies = copies;
        self
    }

    #[must_use]
    pub fn has_ally_ability(&self) -> bool {
        !self.effects_ally.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::effect::CardAction;

    #[test]
    fn test_ship_builder() {
        let ship = CardPrototype::ship("Cutter", Faction::Federation, 2)
            .with_basic(EffectSpec::owner(CardAction::Heal, 4))
            .with_basic(EffectSpec::owner(CardAction::Money, 2))
            .with_ally(EffectSpec::opponent(CardAction::Attack, 4))
            .with_copies(3);

        assert_eq!(ship.name, "Cutter");
        assert!(!ship.is_base);
        assert_eq!(ship.effects_basic.len(), 2);
        assert_eq!(ship.effects_basic[1].action, CardAction::Money);
        assert_eq!(ship.copies, 3);
        assert!(ship.has_ally_ability());
    }

    #[test]
    fn test_base_builder() {
        let base = CardPrototype::base("Battle Station", Faction::Machine, 3, 5)
            .outpost()
            .with_scrap(EffectSpec::opponent(CardAction::Attack, 5));

        assert!(base.is_base);
        assert!(base.is_outpost);
        assert_eq!(base.defense, 5);
        assert!(base.effects_basic.is_empty());
        assert_eq!(base.effects_scrap.len(), 1);
        assert!(!base.has_ally_ability());
    }

    #[test]
    fn test_prototype_serialization() {
        let proto = CardPrototype::ship("Scout", Faction::Unaligned, 0)
            .with_basic(EffectSpec::owner(CardAction::Money, 1));

        let json = serde_json::to_string(&proto).unwrap();
        let deserialized: CardPrototype = serde_json::from_str(&json).unwrap();

        assert_eq!(proto, deserialized);
    }
}
