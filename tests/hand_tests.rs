//! Hand effect aggregation tests.
//!
//! These tests verify ally eligibility and effect tracing on realistic
//! hands built from the core set:
//! - A single-faction hand activates exactly that faction
//! - Mech World activates all four ordinary factions
//! - Every record traces back to a card in the hand and one of its effects

use proptest::prelude::*;
use rustc_hash::FxHashMap;

use realms::cards::{Card, CardAction, CardRepository, EffectRecord, Faction};
use realms::core::GameRng;
use realms::decks::PlayerDeck;
use realms::hand::{collect_ally_factions, Hand};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn hand_of(repo: &CardRepository, names: &[&str]) -> Hand {
    Hand::from_cards(names.iter().map(|n| repo.new_card(n).unwrap()).collect())
}

fn assert_traceable(hand: &Hand, records: &[EffectRecord]) {
    let by_id: FxHashMap<_, &Card> = hand.cards().iter().map(|c| (c.id(), c)).collect();
    for record in records {
        let card = by_id
            .get(&record.provider_card_id)
            .unwrap_or_else(|| panic!("provider {} not in hand", record.provider_card_id));
        assert!(
            card.all_effects().any(|e| e.id == record.effect_id),
            "{} does not belong to {}",
            record.effect_id,
            card
        );
    }
}

/// Test that five Blob cards activate Blob and nothing else.
#[test]
fn test_single_faction_hand() {
    init_logging();
    let repo = CardRepository::core_set();
    let hand = hand_of(
        &repo,
        &["Blob Fighter", "Trade Pod", "Battle Pod", "Ram", "Blob Destroyer"],
    );

    assert_eq!(hand.ally_factions().as_slice(), &[Faction::Blob]);

    // Blob Destroyer has two ally effects, the others one each
    assert_eq!(hand.ally_effects().len(), 6);
    assert_traceable(&hand, &hand.effects());
}

/// Test that Mech World activates every ordinary faction.
#[test]
fn test_mech_world_activates_everything() {
    init_logging();
    let repo = CardRepository::core_set();
    let hand = hand_of(
        &repo,
        &["Mech World", "Blob Fighter", "Federation Shuttle", "Corvette", "Trade Bot"],
    );

    assert_eq!(hand.ally_factions().as_slice(), &Faction::ORDINARY);

    let allies = hand.ally_effects();
    assert_eq!(allies.len(), 4);
    let providers: Vec<_> = allies.iter().map(|e| e.provider_card_id).collect();
    let expected: Vec<_> = hand.cards()[1..].iter().map(Card::id).collect();
    assert_eq!(providers, expected);
}

/// Test that a hand with no repeated faction has no allies.
#[test]
fn test_no_repeated_faction() {
    let repo = CardRepository::core_set();
    let hand = hand_of(&repo, &["Ram", "Cutter", "Corvette", "Missile Bot", "Explorer"]);

    assert!(hand.ally_factions().is_empty());
    assert!(hand.ally_effects().is_empty());
    assert_eq!(hand.effects(), hand.basic_effects());
}

/// Test the starter card effect profile end to end.
#[test]
fn test_starter_effects() {
    let repo = CardRepository::core_set();
    let hand = hand_of(&repo, &["Viper", "Scout", "Explorer"]);

    let effects = hand.effects();
    assert_eq!(effects.len(), 3);
    assert_eq!((effects[0].action, effects[0].value), (CardAction::Attack, 1));
    assert_eq!((effects[1].action, effects[1].value), (CardAction::Money, 1));
    assert_eq!((effects[2].action, effects[2].value), (CardAction::Money, 2));

    // Scrap effects are never aggregated
    assert!(effects.iter().all(|e| e.effect_id != hand.cards()[2].effects_scrap()[0].id));
}

/// Test that duplicate cards each emit their own records.
#[test]
fn test_duplicates_not_merged() {
    let repo = CardRepository::core_set();
    let hand = hand_of(&repo, &["Cutter", "Cutter"]);

    let effects = hand.effects();
    // 2 basic each, plus 1 ally each
    assert_eq!(effects.len(), 6);
    let ally_ids: Vec<_> = effects[4..].iter().map(|e| e.effect_id).collect();
    assert_ne!(ally_ids[0], ally_ids[1]);
}

/// Test a hand drawn from a deck with bases carried over.
#[test]
fn test_drawn_hand_with_bases() {
    init_logging();
    let repo = CardRepository::core_set();
    let mut deck = PlayerDeck::new(repo.player_deck_cards(), GameRng::new(21)).unwrap();
    let bases = vec![
        repo.new_card("Trading Post").unwrap(),
        repo.new_card("Port of Call").unwrap(),
    ];

    let hand = Hand::new(5, bases, &mut deck).unwrap();
    assert_eq!(hand.len(), 7);
    assert_eq!(hand.ally_factions().as_slice(), &[Faction::Federation]);
    assert_traceable(&hand, &hand.effects());

    // Basic effects come first, starting with the drawn cards
    let effects = hand.effects();
    assert_eq!(effects[0].provider_card_id, hand.cards()[0].id());
}

proptest! {
    /// Random hands from the full catalog: records are traceable, ally
    /// records only come from eligible factions, and the basic prefix is
    /// exactly the basic effects.
    #[test]
    fn prop_aggregation_invariants(picks in prop::collection::vec(any::<prop::sample::Index>(), 0..8)) {
        let repo = CardRepository::core_set();
        let names: Vec<String> = repo.catalog().iter().map(|p| p.name.clone()).collect();
        let cards: Vec<Card> = picks
            .iter()
            .map(|i| repo.new_card(&names[i.index(names.len())]).unwrap())
            .collect();
        let hand = Hand::from_cards(cards);

        let basic = hand.basic_effects();
        let ally = hand.ally_effects();
        let all = hand.effects();
        prop_assert_eq!(all.len(), basic.len() + ally.len());
        prop_assert_eq!(&all[..basic.len()], basic.as_slice());
        assert_traceable(&hand, &all);

        let eligible = collect_ally_factions(hand.cards());
        prop_assert!(eligible.iter().all(|f| f.is_ordinary()));
        for record in &ally {
            let card = hand.cards().iter().find(|c| c.id() == record.provider_card_id).unwrap();
            prop_assert!(eligible.contains(&card.faction()));
        }
    }
}
