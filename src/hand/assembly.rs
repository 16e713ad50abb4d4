//! Turn hand assembly.

use log::debug;

use super::aggregation::{
    collect_ally_effects, collect_ally_factions, collect_basic_effects, collect_effects,
    AllyFactions,
};
use crate::cards::{Card, EffectRecord};
use crate::core::MAX_HAND_DRAW;
use crate::decks::PlayerDeck;
use crate::error::{RealmsError, Result};

/// The cards a player has active this turn: freshly drawn cards followed
/// by bases carried over from earlier turns.
///
/// ## Example
///
/// ```
/// use realms::cards::CardRepository;
/// use realms::core::GameRng;
/// use realms::decks::PlayerDeck;
/// use realms::hand::Hand;
///
/// let repo = CardRepository::core_set();
/// let mut deck = PlayerDeck::new(repo.player_deck_cards(), GameRng::new(7)).unwrap();
///
/// let hand = Hand::new(5, Vec::new(), &mut deck).unwrap();
/// assert_eq!(hand.len(), 5);
/// // Scouts and Vipers only ever provide basic effects
/// assert_eq!(hand.effects().len(), 5);
/// ```
#[derive(Debug, Default)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Upper bound on `to_draw`.
    pub const MAX_DRAW: usize = MAX_HAND_DRAW;

    /// Draw `to_draw` cards from `deck` and add `existing_bases`.
    ///
    /// Fails with `InvalidHandInit` if `to_draw` is over `MAX_DRAW`. An
    /// empty deck or a zero draw is not an error: the hand just holds
    /// fewer cards.
    pub fn new(to_draw: usize, existing_bases: Vec<Card>, deck: &mut PlayerDeck) -> Result<Self> {
        Self::with_max_draw(to_draw, Self::MAX_DRAW, existing_bases, deck)
    }

    /// Like `new`, with a tighter draw limit. `max_draw` is capped at
    /// `MAX_DRAW`.
    pub fn with_max_draw(
        to_draw: usize,
        max_draw: usize,
        existing_bases: Vec<Card>,
        deck: &mut PlayerDeck,
    ) -> Result<Self> {
        let max_draw = max_draw.min(Self::MAX_DRAW);
        if to_draw > max_draw {
            return Err(RealmsError::InvalidHandInit {
                requested: to_draw,
                max: max_draw,
            });
        }

        let mut cards = match deck.draw(to_draw) {
            Ok(drawn) => drawn,
            Err(RealmsError::InvalidDrawRequest { .. }) => Vec::new(),
            Err(err) => return Err(err),
        };
        if cards.len() < to_draw {
            debug!("hand drew {} of {} requested cards", cards.len(), to_draw);
        }

        cards.extend(existing_bases);
        Ok(Self { cards })
    }

    /// Wrap an already assembled set of active cards.
    #[must_use]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Put a card acquired mid-turn into play.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    #[must_use]
    pub fn basic_effects(&self) -> Vec<EffectRecord> {
        collect_basic_effects(&self.cards)
    }

    #[must_use]
    pub fn ally_factions(&self) -> AllyFactions {
        collect_ally_factions(&self.cards)
    }

    #[must_use]
    pub fn ally_effects(&self) -> Vec<EffectRecord> {
        collect_ally_effects(&self.cards, &self.ally_factions())
    }

    /// Every pending effect: basic effects, then ally effects.
    #[must_use]
    pub fn effects(&self) -> Vec<EffectRecord> {
        collect_effects(&self.cards)
    }

    /// Give the active cards back, e.g. to discard them at end of turn.
    #[must_use]
    pub fn into_cards(self) -> Vec<Card> {
        self.cards
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardRepository, Faction};
    use crate::core::GameRng;

    fn new_deck(repo: &CardRepository) -> PlayerDeck {
        PlayerDeck::new(repo.player_deck_cards(), GameRng::new(11)).unwrap()
    }

    #[test]
    fn test_draws_requested_cards() {
        let repo = CardRepository::core_set();
        let mut deck = new_deck(&repo);

        let hand = Hand::new(3, Vec::new(), &mut deck).unwrap();
        assert_eq!(hand.len(), 3);
        assert_eq!(deck.cards_remaining(), 7);
    }

    #[test]
    fn test_too_many_rejected() {
        let repo = CardRepository::core_set();
        let mut deck = new_deck(&repo);

        let err = Hand::new(6, Vec::new(), &mut deck).unwrap_err();
        assert_eq!(err, RealmsError::InvalidHandInit { requested: 6, max: 5 });
        assert_eq!(deck.cards_remaining(), 10);
    }

    #[test]
    fn test_custom_limit_cannot_exceed_max() {
        let repo = CardRepository::core_set();
        let mut deck = new_deck(&repo);

        let err = Hand::with_max_draw(7, 9, Vec::new(), &mut deck).unwrap_err();
        assert_eq!(err, RealmsError::InvalidHandInit { requested: 7, max: 5 });

        let err = Hand::with_max_draw(4, 3, Vec::new(), &mut deck).unwrap_err();
        assert_eq!(err, RealmsError::InvalidHandInit { requested: 4, max: 3 });
        assert_eq!(deck.cards_remaining(), 10);
    }

    #[test]
    fn test_zero_draw_keeps_bases() {
        let repo = CardRepository::core_set();
        let mut deck = new_deck(&repo);
        let base = repo.new_card("Trading Post").unwrap();
        let base_id = base.id();

        let hand = Hand::new(0, vec![base], &mut deck).unwrap();
        assert_eq!(hand.len(), 1);
        assert_eq!(hand.cards()[0].id(), base_id);
        assert_eq!(deck.cards_remaining(), 10);
    }

    #[test]
    fn test_empty_deck_gives_bases_only() {
        let repo = CardRepository::core_set();
        let mut deck = new_deck(&repo);
        let _all = deck.draw(10).unwrap();

        let hand = Hand::new(5, vec![repo.new_card("Blob Wheel").unwrap()], &mut deck).unwrap();
        assert_eq!(hand.len(), 1);
    }

    #[test]
    fn test_bases_follow_drawn_cards() {
        let repo = CardRepository::core_set();
        let mut deck = new_deck(&repo);
        let base = repo.new_card("Space Station").unwrap();
        let base_id = base.id();

        let hand = Hand::new(5, vec![base], &mut deck).unwrap();
        assert_eq!(hand.len(), 6);
        assert_eq!(hand.cards()[5].id(), base_id);
        assert!(hand.cards()[..5].iter().all(|c| !c.is_base()));
    }

    #[test]
    fn test_added_card_joins_aggregation() {
        let repo = CardRepository::core_set();
        let mut hand = Hand::from_cards(vec![repo.new_card("Trade Pod").unwrap()]);
        assert!(hand.ally_factions().is_empty());

        hand.add_card(repo.new_card("Battle Pod").unwrap());
        assert_eq!(hand.ally_factions().as_slice(), &[Faction::Blob]);
        assert_eq!(hand.ally_effects().len(), 2);
        assert_eq!(hand.effects().len(), hand.basic_effects().len() + 2);
    }

    #[test]
    fn test_into_cards_returns_everything() {
        let repo = CardRepository::core_set();
        let mut deck = new_deck(&repo);
        let hand = Hand::new(4, vec![repo.new_card("War World").unwrap()], &mut deck).unwrap();

        let cards = hand.into_cards();
        assert_eq!(cards.len(), 5);
    }
}
