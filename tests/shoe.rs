//! Shoe integration tests.

use std::collections::{HashMap, HashSet};

use bjround::{Card, CardId, DECK_SIZE, Rank, Shoe, ShoeError, Suit};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn stacked(ranks: &[Rank]) -> Shoe {
    Shoe::from_cards(
        ranks
            .iter()
            .enumerate()
            .map(|(index, &rank)| Card::new(CardId(index as u16), Suit::Clubs, rank))
            .collect(),
    )
}

#[test]
fn build_contains_every_card_once_per_deck() {
    for decks in 1..=6u8 {
        let mut rng = ChaCha8Rng::seed_from_u64(u64::from(decks));
        let shoe = Shoe::build(decks, &mut rng);
        assert_eq!(shoe.len(), DECK_SIZE * decks as usize);

        let mut counts: HashMap<(Suit, Rank), usize> = HashMap::new();
        for card in shoe.cards() {
            *counts.entry((card.suit, card.rank)).or_default() += 1;
        }
        assert_eq!(counts.len(), DECK_SIZE);
        assert!(counts.values().all(|&count| count == decks as usize));
    }
}

#[test]
fn build_assigns_unique_ids() {
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let shoe = Shoe::build(4, &mut rng);
    let ids: HashSet<CardId> = shoe.cards().iter().map(|card| card.id).collect();
    assert_eq!(ids.len(), shoe.len());
}

#[test]
fn build_is_deterministic_for_a_seed() {
    let first = Shoe::build(2, &mut ChaCha8Rng::seed_from_u64(11));
    let second = Shoe::build(2, &mut ChaCha8Rng::seed_from_u64(11));
    let other = Shoe::build(2, &mut ChaCha8Rng::seed_from_u64(12));

    assert_eq!(first, second);
    assert_ne!(first, other);
}

#[test]
fn build_shuffles() {
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    let shoe = Shoe::build(1, &mut rng);
    let in_build_order = shoe
        .cards()
        .iter()
        .enumerate()
        .all(|(index, card)| card.id == CardId(index as u16));
    assert!(!in_build_order);
}

#[test]
fn draw_preserves_order_and_remainder() {
    let mut rng = ChaCha8Rng::seed_from_u64(9);
    let shoe = Shoe::build(1, &mut rng);

    for count in [0, 1, 4, 51, 52] {
        let (drawn, rest) = shoe.draw(count).unwrap();
        assert_eq!(drawn.len(), count);
        assert_eq!(rest.len(), shoe.len() - count);

        let mut joined = drawn.clone();
        joined.extend_from_slice(rest.cards());
        assert_eq!(joined, shoe.cards());
    }
}

#[test]
fn draw_past_the_end_fails_without_drawing() {
    let shoe = stacked(&[Rank::Ten, Rank::Nine, Rank::Two]);

    assert_eq!(
        shoe.draw(4).unwrap_err(),
        ShoeError::Exhausted {
            requested: 4,
            remaining: 3
        }
    );
    assert_eq!(shoe.len(), 3);
}

#[test]
fn draw_one_takes_the_front_card() {
    let shoe = stacked(&[Rank::Ace, Rank::King]);

    let (card, rest) = shoe.draw_one().unwrap();
    assert_eq!(card.rank, Rank::Ace);
    assert_eq!(rest.len(), 1);

    let (card, rest) = rest.draw_one().unwrap();
    assert_eq!(card.rank, Rank::King);
    assert!(rest.is_empty());

    assert_eq!(
        rest.draw_one().unwrap_err(),
        ShoeError::Exhausted {
            requested: 1,
            remaining: 0
        }
    );
}
