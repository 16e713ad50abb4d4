//! Player deck lifecycle tests.
//!
//! These tests verify the three-pile cycle from the outside:
//! - Cards are never lost or duplicated across draw/discard/refill
//! - Refill only happens when the undrawn pile is empty
//! - Seeded decks replay identically

use proptest::prelude::*;
use rustc_hash::FxHashSet;

use realms::cards::{Card, CardRepository};
use realms::core::{CardId, GameRng};
use realms::decks::PlayerDeck;
use realms::error::RealmsError;

fn new_deck(repo: &CardRepository, seed: u64) -> PlayerDeck {
    PlayerDeck::new(repo.player_deck_cards(), GameRng::new(seed)).unwrap()
}

fn ids(cards: &[Card]) -> Vec<CardId> {
    cards.iter().map(Card::id).collect()
}

/// Test that a full game's worth of turns keeps all ten cards.
#[test]
fn test_ten_turns_conserve_cards() {
    let repo = CardRepository::core_set();
    let cards = repo.player_deck_cards();
    let expected: FxHashSet<_> = ids(&cards).into_iter().collect();
    let mut deck = PlayerDeck::new(cards, GameRng::new(1)).unwrap();

    for _ in 0..10 {
        let hand = deck.draw(5).unwrap();
        assert_eq!(hand.len(), 5);
        for card in &hand {
            assert!(expected.contains(&card.id()));
            assert!(!deck.contains(card.id()));
        }
        for card in hand {
            deck.discard(card);
        }
        assert_eq!(deck.cards_remaining(), 10);
    }
}

/// Test that every card is drawn once before any card repeats.
#[test]
fn test_each_card_drawn_once_per_cycle() {
    let repo = CardRepository::core_set();
    let mut deck = new_deck(&repo, 77);

    let first = deck.draw(5).unwrap();
    let second = deck.draw(5).unwrap();

    let mut seen: FxHashSet<CardId> = FxHashSet::default();
    for card in first.iter().chain(second.iter()) {
        assert!(seen.insert(card.id()), "{} drawn twice", card);
    }
    assert_eq!(seen.len(), 10);
}

/// Test that two decks with the same seed deal the same sequence.
#[test]
fn test_same_seed_same_order() {
    let repo = CardRepository::core_set();
    let cards = repo.player_deck_cards();
    let names_a: Vec<String> = {
        let mut deck = PlayerDeck::new(cards, GameRng::new(5)).unwrap();
        deck.draw(10).unwrap().iter().map(|c| c.name().to_string()).collect()
    };
    let names_b: Vec<String> = {
        let mut deck = new_deck(&repo, 5);
        deck.draw(10).unwrap().iter().map(|c| c.name().to_string()).collect()
    };

    assert_eq!(names_a, names_b);
}

/// Test that scrapping shrinks the deck for good.
#[test]
fn test_scrap_is_permanent() {
    let repo = CardRepository::core_set();
    let mut deck = new_deck(&repo, 3);

    let mut hand = deck.draw(5).unwrap();
    let victim = hand.pop().unwrap();
    let victim_id = victim.id();
    for card in hand {
        deck.discard(card);
    }
    deck.discard(victim);
    deck.scrap(victim_id).unwrap();

    for _ in 0..4 {
        let drawn = deck.draw(5).unwrap();
        assert!(drawn.iter().all(|c| c.id() != victim_id));
        for card in drawn {
            deck.discard(card);
        }
    }
    assert_eq!(deck.cards_remaining(), 9);
}

/// Test that the public discard pile serializes with card names.
#[test]
fn test_discard_pile_serializes() {
    let repo = CardRepository::core_set();
    let mut deck = new_deck(&repo, 8);
    for card in deck.draw(3).unwrap() {
        deck.discard(card);
    }

    let json = serde_json::to_value(deck.discard_pile()).unwrap();
    let names: Vec<_> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names.len(), 3);
    assert!(names.iter().all(|n| n == "Scout" || n == "Viper"));
}

#[derive(Debug, Clone)]
enum Op {
    Draw(usize),
    DiscardHeld,
    ScrapDiscard,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0usize..7).prop_map(Op::Draw),
        Just(Op::DiscardHeld),
        Just(Op::ScrapDiscard),
    ]
}

proptest! {
    /// Any interleaving of draws, discards and scraps keeps every card in
    /// exactly one place: the deck, the caller's hand, or scrapped.
    #[test]
    fn prop_cards_conserved(seed in any::<u64>(), ops in prop::collection::vec(op_strategy(), 1..60)) {
        let repo = CardRepository::core_set();
        let mut deck = new_deck(&repo, seed);
        let mut held: Vec<Card> = Vec::new();
        let mut scrapped = 0usize;

        for op in ops {
            match op {
                Op::Draw(n) => match deck.draw(n) {
                    Ok(drawn) => {
                        prop_assert!(!drawn.is_empty());
                        prop_assert!(drawn.len() <= n);
                        held.extend(drawn);
                    }
                    Err(RealmsError::InvalidDrawRequest { .. }) => {
                        prop_assert!(n == 0 || deck.cards_remaining() == 0);
                    }
                    Err(err) => prop_assert!(false, "unexpected error {}", err),
                },
                Op::DiscardHeld => {
                    for card in held.drain(..) {
                        deck.discard(card);
                    }
                }
                Op::ScrapDiscard => {
                    if let Some(id) = deck.discard_pile().first().map(Card::id) {
                        deck.scrap(id).unwrap();
                        scrapped += 1;
                    }
                }
            }

            prop_assert_eq!(deck.cards_remaining() + held.len() + scrapped, 10);
            for card in &held {
                prop_assert!(!deck.contains(card.id()));
            }
        }
    }
}
