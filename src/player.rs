//! A player's per-game state: deck, bases in play, authority and trade.
//!
//! `Player` only moves cards. Turn flow is:
//!
//! 1. `start_turn` draws a `Hand` and hands over the bases in play
//! 2. the caller resolves `hand.effects()` and may `add_card` mid-turn
//! 3. `end_turn` keeps bases in play and discards everything else
//!
//! Authority and trade are stored here but never changed by this crate.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::RealmsConfig;
use crate::decks::PlayerDeck;
use crate::error::{RealmsError, Result};
use crate::hand::Hand;

/// One player in a game.
///
/// ## Example
///
/// ```
/// use realms::cards::CardRepository;
/// use realms::core::{GameRng, RealmsConfig};
/// use realms::decks::PlayerDeck;
/// use realms::player::Player;
///
/// let repo = CardRepository::core_set();
/// let deck = PlayerDeck::new(repo.player_deck_cards(), GameRng::new(3)).unwrap();
/// let mut player = Player::new("alice", deck, &RealmsConfig::default());
///
/// let hand = player.start_turn(5).unwrap();
/// assert_eq!(hand.len(), 5);
/// player.end_turn(hand);
/// assert_eq!(player.deck().discard_len(), 5);
/// ```
#[derive(Debug, Serialize, Deserialize)]
pub struct Player {
    name: String,
    deck: PlayerDeck,
    bases: Vec<Card>,
    authority: i32,
    trade: i32,
    max_hand_draw: usize,
}

impl Player {
    pub fn new(name: impl Into<String>, deck: PlayerDeck, config: &RealmsConfig) -> Self {
        Self {
            name: name.into(),
            deck,
            bases: Vec::new(),
            authority: config.starting_authority,
            trade: 0,
            max_hand_draw: config.max_hand_draw.min(Hand::MAX_DRAW),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn authority(&self) -> i32 {
        self.authority
    }

    #[must_use]
    pub fn trade(&self) -> i32 {
        self.trade
    }

    #[must_use]
    pub fn deck(&self) -> &PlayerDeck {
        &self.deck
    }

    pub fn deck_mut(&mut self) -> &mut PlayerDeck {
        &mut self.deck
    }

    /// Bases currently in play between turns.
    #[must_use]
    pub fn bases(&self) -> &[Card] {
        &self.bases
    }

    /// Draw a hand of `to_draw` cards; the bases in play join it.
    ///
    /// Fails with `InvalidHandInit` if `to_draw` is over the configured
    /// limit; the bases then stay in play and the deck is untouched.
    pub fn start_turn(&mut self, to_draw: usize) -> Result<Hand> {
        if to_draw > self.max_hand_draw {
            return Err(RealmsError::InvalidHandInit {
                requested: to_draw,
                max: self.max_hand_draw,
            });
        }

        let bases = std::mem::take(&mut self.bases);
        let hand = Hand::with_max_draw(to_draw, self.max_hand_draw, bases, &mut self.deck)?;
        debug!("{} starts turn with {} cards", self.name, hand.len());
        Ok(hand)
    }

    /// Put bases back in play and discard every other card of `hand`.
    pub fn end_turn(&mut self, hand: Hand) {
        let mut discarded = 0;
        for card in hand.into_cards() {
            if card.is_base() {
                self.bases.push(card);
            } else {
                self.deck.discard(card);
                discarded += 1;
            }
        }
        self.trade = 0;
        debug!(
            "{} ends turn: {} discarded, {} bases in play",
            self.name,
            discarded,
            self.bases.len()
        );
    }

    /// A card acquired from the trade row goes to the discard pile.
    pub fn gain_card(&mut self, card: Card) {
        debug!("{} gains {}", self.name, card);
        self.deck.discard(card);
    }
}
