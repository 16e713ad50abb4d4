//! A player's personal deck: the undrawn and discard piles.
//!
//! Cards in hand belong to the caller, not the deck. The deck only ever
//! holds the two piles and moves cards between them:
//!
//! - `draw` pops from undrawn (out of the deck)
//! - `discard` pushes onto discard (into the deck)
//! - refill moves the whole discard pile into undrawn and shuffles it
//!
//! Refill happens only when undrawn is empty and a card is needed, and it
//! always drains the discard pile completely before the next pop.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::cards::{Card, SCOUT, VIPER};
use crate::core::{CardId, GameRng, STARTING_DECK_SIZE};
use crate::error::{RealmsError, Result};

/// One player's undrawn and discard piles.
///
/// ## Example
///
/// ```
/// use realms::cards::CardRepository;
/// use realms::core::GameRng;
/// use realms::decks::PlayerDeck;
///
/// let repo = CardRepository::core_set();
/// let mut deck = PlayerDeck::new(repo.player_deck_cards(), GameRng::new(42)).unwrap();
///
/// let hand = deck.draw(5).unwrap();
/// assert_eq!(hand.len(), 5);
/// assert_eq!(deck.cards_remaining(), 5);
/// ```
#[derive(Debug, Serialize, Deserialize)]
pub struct PlayerDeck {
    /// Top of the pile is the end of the vec.
    undrawn: Vec<Card>,
    discards: Vec<Card>,
    rng: GameRng,
}

impl PlayerDeck {
    /// Cards required in a starting deck.
    pub const STARTING_SIZE: usize = STARTING_DECK_SIZE;

    /// Build a deck from a starting card set and shuffle it.
    ///
    /// Fails with `InvalidDeckSize` unless there are exactly 10 cards, then
    /// with `InvalidDeckContents` if any card is not a Viper or Scout.
    pub fn new(player_cards: Vec<Card>, mut rng: GameRng) -> Result<Self> {
        Self::validate_deck_size(&player_cards)?;
        Self::validate_deck_contents(&player_cards)?;

        let mut undrawn = player_cards;
        rng.shuffle(&mut undrawn);

        Ok(Self {
            undrawn,
            discards: Vec::new(),
            rng,
        })
    }

    fn validate_deck_size(cards: &[Card]) -> Result<()> {
        if cards.len() != Self::STARTING_SIZE {
            return Err(RealmsError::InvalidDeckSize {
                expected: Self::STARTING_SIZE,
                actual: cards.len(),
            });
        }
        Ok(())
    }

    fn validate_deck_contents(cards: &[Card]) -> Result<()> {
        match cards.iter().find(|c| c.name() != VIPER && c.name() != SCOUT) {
            Some(card) => Err(RealmsError::InvalidDeckContents(card.name().to_string())),
            None => Ok(()),
        }
    }

    /// Cards left to draw from, across both piles.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.undrawn.len() + self.discards.len()
    }

    #[must_use]
    pub fn undrawn_len(&self) -> usize {
        self.undrawn.len()
    }

    #[must_use]
    pub fn discard_len(&self) -> usize {
        self.discards.len()
    }

    /// The discard pile, oldest first. Discards are public information.
    #[must_use]
    pub fn discard_pile(&self) -> &[Card] {
        &self.discards
    }

    /// Is the card in either pile?
    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.undrawn.iter().chain(self.discards.iter()).any(|c| c.id() == id)
    }

    /// Send a card to the discard pile.
    pub fn discard(&mut self, card: Card) {
        self.discards.push(card);
    }

    /// Draw up to `num` cards.
    ///
    /// Fails with `InvalidDrawRequest` if `num` is zero or the deck is
    /// completely empty. If the deck runs out partway through, returns the
    /// cards drawn so far instead of failing.
    pub fn draw(&mut self, num: usize) -> Result<Vec<Card>> {
        if num == 0 || self.cards_remaining() == 0 {
            return Err(RealmsError::InvalidDrawRequest {
                requested: num,
                remaining: self.cards_remaining(),
            });
        }

        let mut cards = Vec::with_capacity(num);
        for _ in 0..num {
            match self.next_card() {
                Ok(card) => cards.push(card),
                Err(RealmsError::EmptyPlayerSupply) => break,
                Err(err) => return Err(err),
            }
        }
        Ok(cards)
    }

    /// Permanently remove a card from the discard pile.
    ///
    /// The card is destroyed; it never returns to any pile.
    pub fn scrap(&mut self, id: CardId) -> Result<()> {
        let pos = self
            .discards
            .iter()
            .position(|c| c.id() == id)
            .ok_or(RealmsError::IdentifierNotFound(id))?;
        let card = self.discards.remove(pos);
        debug!("scrapped {} from discard pile", card);
        Ok(())
    }

    fn next_card(&mut self) -> Result<Card> {
        if self.undrawn.is_empty() {
            if self.discards.is_empty() {
                return Err(RealmsError::EmptyPlayerSupply);
            }
            self.refill_undrawn();
        }
        self.undrawn.pop().ok_or(RealmsError::EmptyPlayerSupply)
    }

    fn refill_undrawn(&mut self) {
        debug!("reshuffling {} discarded cards into undrawn pile", self.discards.len());
        self.undrawn = std::mem::take(&mut self.discards);
        self.rng.shuffle(&mut self.undrawn);
    }

    /// Checkpoint both piles and the shuffle RNG.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    /// Restore a deck saved with `to_bytes`.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(bincode::deserialize(bytes)?)
    }
}
