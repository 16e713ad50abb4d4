//! The shared market pool.

use log::debug;

use crate::cards::{Card, CardRepository};
use crate::core::GameRng;
use crate::error::{RealmsError, Result};

/// The deck players acquire cards from through the trade row.
///
/// Never refills: once empty, `next_card` fails with `EmptySupply` for the
/// rest of the game, and callers decide what that means (typically the
/// trade row just shows fewer cards).
#[derive(Debug)]
pub struct MainDeck {
    cards: Vec<Card>,
}

impl MainDeck {
    /// Build the market pool from the repository and shuffle it.
    pub fn new(repo: &CardRepository, rng: &mut GameRng) -> Self {
        let mut cards = repo.main_deck_cards();
        rng.shuffle(&mut cards);
        debug!("shuffled {} market cards (seed {})", cards.len(), rng.seed());
        Self { cards }
    }

    /// Take ownership of an already shuffled pool.
    #[must_use]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Remove and return the top card.
    pub fn next_card(&mut self) -> Result<Card> {
        let card = self.cards.pop().ok_or(RealmsError::EmptySupply)?;
        if self.cards.is_empty() {
            debug!("main deck exhausted");
        }
        Ok(card)
    }

    /// Cards left in the pool.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_shuffled() {
        let repo = CardRepository::core_set();
        let unshuffled: Vec<String> = repo
            .main_deck_cards()
            .iter()
            .map(|c| c.name().to_string())
            .collect();

        let mut deck = MainDeck::new(&repo, &mut GameRng::new(42));
        assert_eq!(deck.len(), unshuffled.len());

        let mut drawn = Vec::new();
        while let Ok(card) = deck.next_card() {
            drawn.push(card.name().to_string());
        }
        drawn.reverse();

        assert_ne!(drawn, unshuffled);
        drawn.sort();
        let mut expected = unshuffled;
        expected.sort();
        assert_eq!(drawn, expected);
    }

    #[test]
    fn test_empty_supply() {
        let repo = CardRepository::core_set();
        let mut deck = MainDeck::from_cards(vec![repo.new_card("Ram").unwrap()]);

        assert_eq!(deck.next_card().unwrap().name(), "Ram");
        assert!(deck.is_empty());
        assert_eq!(deck.next_card().unwrap_err(), RealmsError::EmptySupply);
        assert_eq!(deck.next_card().unwrap_err(), RealmsError::EmptySupply);
    }

    #[test]
    fn test_draws_from_top() {
        let repo = CardRepository::core_set();
        let bottom = repo.new_card("Cutter").unwrap();
        let top = repo.new_card("Corvette").unwrap();
        let top_id = top.id();

        let mut deck = MainDeck::from_cards(vec![bottom, top]);
        assert_eq!(deck.next_card().unwrap().id(), top_id);
        assert_eq!(deck.len(), 1);
    }
}
