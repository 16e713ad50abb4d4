//! The trade row: the visible market window plus the Explorer slot.
//!
//! The window is topped up from the `MainDeck` whenever it is read through
//! `cards`, `available`, `acquire` or `scrap`. Topping up is idempotent:
//! with nothing removed in between, repeated reads see the same cards. Once
//! the main deck runs dry the window simply shows fewer cards.
//!
//! The Explorer slot is always available. Taking the Explorer empties the
//! slot and the next read builds a fresh one from the repository.
//!
//! Lookups by id scan at most six cards, so there is no index.

use std::sync::Arc;

use log::{debug, trace};

use super::main_deck::MainDeck;
use crate::cards::{Card, CardRepository};
use crate::core::{CardId, RealmsConfig};
use crate::error::{RealmsError, Result};

/// Default number of visible market cards.
pub const TRADE_ROW_SIZE: usize = 5;

/// Cards currently purchasable from the market.
///
/// ## Example
///
/// ```
/// use std::sync::Arc;
/// use realms::cards::CardRepository;
/// use realms::core::GameRng;
/// use realms::decks::{MainDeck, TradeRow};
///
/// let repo = Arc::new(CardRepository::core_set());
/// let main_deck = MainDeck::new(&repo, &mut GameRng::new(1));
/// let mut row = TradeRow::new(main_deck, Arc::clone(&repo));
///
/// let first = row.cards()[0].id();
/// let card = row.acquire(first).unwrap();
/// assert_eq!(card.id(), first);
/// assert_eq!(row.cards().len(), 5);
/// ```
#[derive(Debug)]
pub struct TradeRow {
    main_deck: MainDeck,
    repo: Arc<CardRepository>,
    size: usize,
    cards: Vec<Card>,
    explorer: Option<Card>,
}

impl TradeRow {
    /// Create a five-card trade row over `main_deck`.
    #[must_use]
    pub fn new(main_deck: MainDeck, repo: Arc<CardRepository>) -> Self {
        Self::with_size(main_deck, repo, TRADE_ROW_SIZE)
    }

    /// Create a trade row using the width from `config`.
    #[must_use]
    pub fn from_config(main_deck: MainDeck, repo: Arc<CardRepository>, config: &RealmsConfig) -> Self {
        Self::with_size(main_deck, repo, config.trade_row_size)
    }

    /// Create a trade row showing `size` market cards.
    #[must_use]
    pub fn with_size(main_deck: MainDeck, repo: Arc<CardRepository>, size: usize) -> Self {
        Self {
            main_deck,
            repo,
            size,
            cards: Vec::with_capacity(size),
            explorer: None,
        }
    }

    /// Top the window up from the main deck and return it.
    pub fn cards(&mut self) -> &[Card] {
        self.fill_window();
        &self.cards
    }

    /// The current Explorer, building one if the slot is empty.
    pub fn explorer(&mut self) -> &Card {
        let repo = &self.repo;
        self.explorer.get_or_insert_with(|| {
            let explorer = repo.new_explorer();
            trace!("{} enters explorer slot", explorer);
            explorer
        })
    }

    /// Every purchasable card: the window followed by the Explorer.
    pub fn available(&mut self) -> Vec<&Card> {
        self.fill_window();
        self.explorer();
        self.cards.iter().chain(self.explorer.iter()).collect()
    }

    /// Remove and return the card with the given id.
    ///
    /// Looks in the window first, then at the Explorer. Fails with
    /// `IdentifierNotFound` if neither matches.
    pub fn acquire(&mut self, id: CardId) -> Result<Card> {
        let card = self.take(id)?;
        debug!("acquired {} from trade row", card);
        Ok(card)
    }

    /// Permanently remove the card with the given id. Same lookup as
    /// `acquire`, but the card is destroyed instead of returned.
    pub fn scrap(&mut self, id: CardId) -> Result<()> {
        let card = self.take(id)?;
        debug!("scrapped {} from trade row", card);
        Ok(())
    }

    /// Cards still in the main deck behind the window.
    #[must_use]
    pub fn market_remaining(&self) -> usize {
        self.main_deck.len()
    }

    fn take(&mut self, id: CardId) -> Result<Card> {
        self.fill_window();
        if let Some(pos) = self.cards.iter().position(|c| c.id() == id) {
            return Ok(self.cards.remove(pos));
        }

        if self.explorer().id() == id {
            return self.explorer.take().ok_or(RealmsError::IdentifierNotFound(id));
        }

        Err(RealmsError::IdentifierNotFound(id))
    }

    fn fill_window(&mut self) {
        while self.cards.len() < self.size {
            match self.main_deck.next_card() {
                Ok(card) => {
                    trace!("{} enters trade row", card);
                    self.cards.push(card);
                }
                Err(err) => {
                    trace!("trade row holds {} cards: {}", self.cards.len(), err);
                    break;
                }
            }
        }
    }
}
