//! Card repository: builds card instances from the catalog.
//!
//! The repository is the only place cards come from. It is an explicit
//! object handed to whatever needs new cards (the market at setup, the
//! trade row for Explorers, game setup for starting decks). There is no
//! global card store.
//!
//! Every instance gets a fresh `CardId` and every effect on it a fresh
//! `EffectId`, both from the repository's `IdAllocator`. Share one
//! repository (behind an `Arc`) across everything in a process to keep
//! ids unique process-wide.

use log::trace;

use super::card::Card;
use super::catalog::{CardCatalog, EXPLORER, SCOUT, VIPER};
use crate::core::{IdAllocator, RealmsConfig};
use crate::error::{RealmsError, Result};

/// Mass-produces card instances with unique ids.
///
/// ## Example
///
/// ```
/// use realms::cards::CardRepository;
///
/// let repo = CardRepository::core_set();
///
/// let a = repo.new_viper();
/// let b = repo.new_viper();
/// assert_eq!(a.name(), b.name());
/// assert_ne!(a.id(), b.id());
/// ```
#[derive(Debug)]
pub struct CardRepository {
    catalog: CardCatalog,
    ids: IdAllocator,
    starting_scouts: usize,
    starting_vipers: usize,
}

impl CardRepository {
    /// Create a repository over `catalog` with the default starting deck.
    ///
    /// The catalog must contain Viper, Scout and Explorer.
    pub fn new(catalog: CardCatalog) -> Result<Self> {
        Self::with_config(catalog, &RealmsConfig::default())
    }

    /// Create a repository using the starting deck composition from `config`.
    ///
    /// Fails with `InvalidConfig` if `config` does not validate.
    pub fn with_config(catalog: CardCatalog, config: &RealmsConfig) -> Result<Self> {
        config.validate()?;
        for name in [VIPER, SCOUT, EXPLORER] {
            if !catalog.contains(name) {
                return Err(RealmsError::UnknownCard(name.to_string()));
            }
        }
        Ok(Self {
            catalog,
            ids: IdAllocator::new(),
            starting_scouts: config.starting_scouts,
            starting_vipers: config.starting_vipers,
        })
    }

    /// Repository over the built-in core set.
    #[must_use]
    pub fn core_set() -> Self {
        Self {
            catalog: CardCatalog::core_set(),
            ids: IdAllocator::new(),
            starting_scouts: RealmsConfig::default().starting_scouts,
            starting_vipers: RealmsConfig::default().starting_vipers,
        }
    }

    /// The prototypes this repository builds from.
    #[must_use]
    pub fn catalog(&self) -> &CardCatalog {
        &self.catalog
    }

    /// Build a new instance of the named card.
    pub fn new_card(&self, name: &str) -> Result<Card> {
        let prototype = self
            .catalog
            .get(name)
            .ok_or_else(|| RealmsError::UnknownCard(name.to_string()))?;
        let card = Card::from_prototype(self.ids.next_card_id(), prototype, &self.ids);
        trace!("created {}", card);
        Ok(card)
    }

    /// Build a starter card whose presence was checked at construction.
    fn new_starter(&self, name: &str) -> Card {
        match self.new_card(name) {
            Ok(card) => card,
            Err(_) => unreachable!("starter card {} verified at construction", name),
        }
    }

    pub fn new_viper(&self) -> Card {
        self.new_starter(VIPER)
    }

    pub fn new_scout(&self) -> Card {
        self.new_starter(SCOUT)
    }

    pub fn new_explorer(&self) -> Card {
        self.new_starter(EXPLORER)
    }

    /// Every market card, each prototype repeated by its copy count.
    ///
    /// Never contains Vipers, Scouts or Explorers. Unshuffled, in catalog
    /// order.
    pub fn main_deck_cards(&self) -> Vec<Card> {
        let mut cards = Vec::with_capacity(self.catalog.market_size());
        for prototype in self.catalog.market_prototypes() {
            for _ in 0..prototype.copies {
                cards.push(Card::from_prototype(self.ids.next_card_id(), prototype, &self.ids));
            }
        }
        trace!(
            "created {} market cards, {} ids allocated",
            cards.len(),
            self.ids.allocated()
        );
        cards
    }

    /// A fresh starting deck: Scouts then Vipers (8 and 2 by default).
    pub fn player_deck_cards(&self) -> Vec<Card> {
        let mut cards = Vec::with_capacity(self.starting_scouts + self.starting_vipers);
        cards.extend((0..self.starting_scouts).map(|_| self.new_scout()));
        cards.extend((0..self.starting_vipers).map(|_| self.new_viper()));
        cards
    }
}
