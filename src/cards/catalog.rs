//! Card catalog: every prototype a game can instantiate.
//!
//! The catalog is keyed by card name and backed by `im::OrdMap`, so cloning
//! it is O(1) and iteration order is stable (names sort alphabetically).
//! A stable order keeps seeded market shuffles reproducible.
//!
//! `CardCatalog::core_set()` is the built-in core set: the three unaligned
//! starter cards plus 80 market cards across the four factions. Cards whose
//! printed ability is a player choice ("gain 1 authority or 1 trade") carry
//! the first listed option, since effects are flat (target, action, value)
//! triples. Abilities with no flat equivalent (Stealth Needle copying a ship,
//! Fleet HQ's static bonus) carry no effect.

use im::OrdMap;

use super::card::Faction;
use super::definition::CardPrototype;
use super::effect::{CardAction, EffectSpec};
use crate::error::{RealmsError, Result};

pub const VIPER: &str = "Viper";
pub const SCOUT: &str = "Scout";
pub const EXPLORER: &str = "Explorer";

/// Is `name` one of the cards that never enter the market pool?
#[must_use]
pub fn is_starter_name(name: &str) -> bool {
    matches!(name, VIPER | SCOUT | EXPLORER)
}

/// Registry of card prototypes, keyed by name.
///
/// ## Example
///
/// ```
/// use realms::cards::{CardCatalog, CardPrototype, Faction};
///
/// let mut catalog = CardCatalog::new();
/// catalog.register(CardPrototype::ship("Corvette", Faction::Star, 2)).unwrap();
///
/// let found = catalog.get("Corvette").unwrap();
/// assert_eq!(found.cost, 2);
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardCatalog {
    prototypes: OrdMap<String, CardPrototype>,
}

impl CardCatalog {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a prototype.
    ///
    /// Fails with `DuplicateCard` if a prototype with the same name already
    /// exists; the catalog is left unchanged.
    pub fn register(&mut self, prototype: CardPrototype) -> Result<()> {
        if self.prototypes.contains_key(&prototype.name) {
            return Err(RealmsError::DuplicateCard(prototype.name));
        }
        self.prototypes.insert(prototype.name.clone(), prototype);
        Ok(())
    }

    /// Get a prototype by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&CardPrototype> {
        self.prototypes.get(name)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.prototypes.contains_key(name)
    }

    /// Number of distinct prototypes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.prototypes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.prototypes.is_empty()
    }

    /// Iterate over all prototypes in name order.
    pub fn iter(&self) -> impl Iterator<Item = &CardPrototype> {
        self.prototypes.values()
    }

    /// Prototypes belonging to one faction.
    pub fn find_by_faction(&self, faction: Faction) -> impl Iterator<Item = &CardPrototype> {
        self.prototypes.values().filter(move |p| p.faction == faction)
    }

    /// Prototypes that go into the market pool (no Viper, Scout, Explorer).
    pub fn market_prototypes(&self) -> impl Iterator<Item = &CardPrototype> {
        self.prototypes.values().filter(|p| !is_starter_name(&p.name))
    }

    /// Total cards in the market pool, counting copies.
    #[must_use]
    pub fn market_size(&self) -> usize {
        self.market_prototypes().map(|p| p.copies as usize).sum()
    }

    /// The built-in core set. Names in the built-in lists are distinct.
    #[must_use]
    pub fn core_set() -> Self {
        let prototypes = core_prototypes()
            .map(|prototype| (prototype.name.clone(), prototype))
            .collect();
        Self { prototypes }
    }
}

fn core_prototypes() -> impl Iterator<Item = CardPrototype> {
    starters()
        .into_iter()
        .chain(blob())
        .chain(federation())
        .chain(star_empire())
        .chain(machine_cult())
}

fn attack(n: i32) -> EffectSpec {
    EffectSpec::opponent(CardAction::Attack, n)
}

fn trade(n: i32) -> EffectSpec {
    EffectSpec::owner(CardAction::Money, n)
}

fn heal(n: i32) -> EffectSpec {
    EffectSpec::owner(CardAction::Heal, n)
}

fn draw(n: i32) -> EffectSpec {
    EffectSpec::owner(CardAction::Draw, n)
}

fn scrap(n: i32) -> EffectSpec {
    EffectSpec::owner(CardAction::Scrap, n)
}

fn opponent_discards(n: i32) -> EffectSpec {
    EffectSpec::opponent(CardAction::Discard, n)
}

fn destroy_base() -> EffectSpec {
    EffectSpec::opponent(CardAction::Destroy, 1)
}

fn acquire_free() -> EffectSpec {
    EffectSpec::owner(CardAction::Acquire, 1)
}

fn starters() -> Vec<CardPrototype> {
    use Faction::Unaligned;

    vec![
        CardPrototype::ship(VIPER, Unaligned, 0).with_basic(attack(1)),
        CardPrototype::ship(SCOUT, Unaligned, 0).with_basic(trade(1)),
        CardPrototype::ship(EXPLORER, Unaligned, 0)
            .with_basic(trade(2))
            .with_scrap(attack(2)),
    ]
}

fn blob() -> Vec<CardPrototype> {
    use Faction::Blob;

    vec![
        CardPrototype::ship("Blob Fighter", Blob, 1)
            .with_basic(attack(3))
            .with_ally(draw(1))
            .with_copies(3),
        CardPrototype::ship("Trade Pod", Blob, 2)
            .with_basic(trade(3))
            .with_ally(attack(2))
            .with_copies(3),
        CardPrototype::ship("Battle Pod", Blob, 2)
            .with_basic(attack(4))
            .with_basic(scrap(1))
            .with_ally(attack(2))
            .with_copies(2),
        CardPrototype::ship("Ram", Blob, 3)
            .with_basic(attack(5))
            .with_ally(attack(2))
            .with_scrap(trade(3))
            .with_copies(2),
        CardPrototype::ship("Blob Destroyer", Blob, 4)
            .with_basic(attack(6))
            .with_ally(destroy_base())
            .with_ally(scrap(1))
            .with_copies(2),
        CardPrototype::ship("Battle Blob", Blob, 6)
            .with_basic(attack(8))
            .with_ally(draw(1))
            .with_scrap(attack(4)),
        CardPrototype::ship("Blob Carrier", Blob, 6)
            .with_basic(attack(7))
            .with_ally(acquire_free()),
        CardPrototype::ship("Mothership", Blob, 7)
            .with_basic(attack(6))
            .with_basic(draw(1))
            .with_ally(draw(1)),
        CardPrototype::base("Blob Wheel", Blob, 3, 5)
            .with_basic(attack(1))
            .with_scrap(trade(3))
            .with_copies(3),
        CardPrototype::base("The Hive", Blob, 5, 5)
            .with_basic(attack(3))
            .with_ally(draw(1)),
        CardPrototype::base("Blob World", Blob, 8, 7).with_basic(attack(5)),
    ]
}

fn federation() -> Vec<CardPrototype> {
    use Faction::Federation;

    vec![
        CardPrototype::ship("Federation Shuttle", Federation, 1)
            .with_basic(trade(2))
            .with_ally(heal(4))
            .with_copies(3),
        CardPrototype::ship("Cutter", Federation, 2)
            .with_basic(heal(4))
            .with_basic(trade(2))
            .with_ally(attack(4))
            .with_copies(3),
        CardPrototype::ship("Embassy Yacht", Federation, 3)
            .with_basic(heal(3))
            .with_basic(trade(2))
            .with_copies(2),
        CardPrototype::ship("Freighter", Federation, 4)
            .with_basic(trade(4))
            .with_copies(2),
        CardPrototype::ship("Trade Escort", Federation, 5)
            .with_basic(heal(4))
            .with_basic(attack(4))
            .with_ally(draw(1)),
        CardPrototype::ship("Flagship", Federation, 6)
            .with_basic(attack(5))
            .with_basic(draw(1))
            .with_ally(heal(5)),
        CardPrototype::ship("Command Ship", Federation, 8)
            .with_basic(heal(4))
            .with_basic(attack(5))
            .with_basic(draw(2))
            .with_ally(destroy_base()),
        CardPrototype::base("Trading Post", Federation, 3, 4)
            .outpost()
            .with_basic(heal(1))
            .with_scrap(attack(3))
            .with_copies(2),
        CardPrototype::base("Barter World", Federation, 4, 4)
            .with_basic(heal(2))
            .with_scrap(attack(5))
            .with_copies(2),
        CardPrototype::base("Defense Center", Federation, 5, 5)
            .outpost()
            .with_basic(heal(3))
            .with_ally(attack(2)),
        CardPrototype::base("Port of Call", Federation, 6, 6)
            .outpost()
            .with_basic(trade(3))
            .with_scrap(draw(1))
            .with_scrap(destroy_base()),
        CardPrototype::base("Central Office", Federation, 7, 6)
            .with_basic(trade(2))
            .with_ally(draw(1)),
    ]
}

fn star_empire() -> Vec<CardPrototype> {
    use Faction::Star;

    vec![
        CardPrototype::ship("Imperial Fighter", Star, 1)
            .with_basic(attack(2))
            .with_basic(opponent_discards(1))
            .with_ally(attack(2))
            .with_copies(3),
        CardPrototype::ship("Corvette", Star, 2)
            .with_basic(attack(1))
            .with_basic(draw(1))
            .with_ally(attack(2))
            .with_copies(2),
        CardPrototype::ship("Imperial Frigate", Star, 3)
            .with_basic(attack(4))
            .with_basic(opponent_discards(1))
            .with_ally(attack(2))
            .with_scrap(draw(1))
            .with_copies(3),
        CardPrototype::ship("Survey Ship", Star, 3)
            .with_basic(trade(1))
            .with_basic(draw(1))
            .with_scrap(opponent_discards(1))
            .with_copies(3),
        CardPrototype::ship("Battlecruiser", Star, 6)
            .with_basic(attack(5))
            .with_basic(draw(1))
            .with_ally(opponent_discards(1))
            .with_scrap(draw(1))
            .with_scrap(destroy_base()),
        CardPrototype::ship("Dreadnaught", Star, 7)
            .with_basic(attack(7))
            .with_basic(draw(1))
            .with_scrap(attack(5)),
        CardPrototype::base("Space Station", Star, 4, 4)
            .outpost()
            .with_basic(attack(2))
            .with_ally(attack(2))
            .with_scrap(trade(4))
            .with_copies(2),
        CardPrototype::base("Recycling Station", Star, 4, 4)
            .outpost()
            .with_basic(trade(1))
            .with_copies(2),
        CardPrototype::base("War World", Star, 5, 4)
            .outpost()
            .with_basic(attack(3))
            .with_ally(attack(4)),
        CardPrototype::base("Royal Redoubt", Star, 6, 6)
            .outpost()
            .with_basic(attack(3))
            .with_ally(opponent_discards(1)),
        CardPrototype::base("Fleet HQ", Star, 8, 8),
    ]
}

fn machine_cult() -> Vec<CardPrototype> {
    use Faction::Machine;

    vec![
        CardPrototype::ship("Trade Bot", Machine, 1)
            .with_basic(trade(1))
            .with_basic(scrap(1))
            .with_ally(attack(2))
            .with_copies(3),
        CardPrototype::ship("Missile Bot", Machine, 2)
            .with_basic(attack(2))
            .with_basic(scrap(1))
            .with_ally(attack(2))
            .with_copies(3),
        CardPrototype::ship("Supply Bot", Machine, 3)
            .with_basic(trade(2))
            .with_basic(scrap(1))
            .with_ally(attack(2))
            .with_copies(3),
        CardPrototype::ship("Patrol Mech", Machine, 4)
            .with_basic(trade(3))
            .with_ally(scrap(1))
            .with_copies(2),
        CardPrototype::ship("Stealth Needle", Machine, 4),
        CardPrototype::ship("Battle Mech", Machine, 5)
            .with_basic(attack(4))
            .with_basic(scrap(1))
            .with_ally(draw(1)),
        CardPrototype::ship("Missile Mech", Machine, 6)
            .with_basic(attack(6))
            .with_basic(destroy_base())
            .with_ally(draw(1)),
        CardPrototype::base("Battle Station", Machine, 3, 5)
            .outpost()
            .with_scrap(attack(5))
            .with_copies(2),
        // Counts as every faction for ally abilities.
        CardPrototype::base("Mech World", Faction::All, 5, 6).outpost(),
        CardPrototype::base("Junkyard", Machine, 6, 5)
            .outpost()
            .with_basic(scrap(1)),
        CardPrototype::base("Machine Base", Machine, 7, 6)
            .outpost()
            .with_basic(draw(1))
            .with_basic(scrap(1)),
        CardPrototype::base("Brain World", Machine, 8, 6)
            .outpost()
            .with_basic(scrap(2)),
    ]
}
