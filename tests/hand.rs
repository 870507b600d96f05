//! Hand evaluator tests.

use bjround::{Card, CardId, Hand, Rank, Suit, hand};

fn cards(ranks: &[Rank]) -> Vec<Card> {
    ranks
        .iter()
        .enumerate()
        .map(|(index, &rank)| Card::new(CardId(index as u16), Suit::Hearts, rank))
        .collect()
}

#[test]
fn values_choose_the_best_ace_count() {
    assert_eq!(hand::value(&cards(&[Rank::Ace, Rank::Ace])), 12);
    assert_eq!(hand::value(&cards(&[Rank::Ace, Rank::Nine])), 20);
    assert_eq!(hand::value(&cards(&[Rank::Ace, Rank::Ace, Rank::Nine])), 21);
    assert_eq!(hand::value(&cards(&[Rank::King, Rank::Queen])), 20);
    assert_eq!(hand::value(&cards(&[Rank::Seven, Rank::Seven, Rank::Seven])), 21);
    assert_eq!(
        hand::value(&cards(&[Rank::Ace, Rank::Ace, Rank::Ace, Rank::Ace])),
        14
    );
    assert_eq!(hand::value(&cards(&[Rank::King, Rank::Six, Rank::Ace])), 17);
    assert_eq!(hand::value(&[]), 0);
}

#[test]
fn blackjack_requires_exactly_two_cards() {
    assert!(hand::is_blackjack(&cards(&[Rank::Ace, Rank::King])));
    assert!(hand::is_blackjack(&cards(&[Rank::Ten, Rank::Ace])));
    assert!(!hand::is_blackjack(&cards(&[Rank::Ace, Rank::Nine, Rank::Ace])));
    assert!(!hand::is_blackjack(&cards(&[Rank::Seven, Rank::Seven, Rank::Seven])));
    assert!(!hand::is_blackjack(&cards(&[Rank::King, Rank::Queen])));
}

#[test]
fn bust_is_over_twenty_one() {
    assert!(hand::is_bust(&cards(&[Rank::Ten, Rank::Nine, Rank::Five])));
    assert!(!hand::is_bust(&cards(&[Rank::Ten, Rank::Ace, Rank::King])));
    assert!(hand::is_bust(&cards(&[Rank::King, Rank::Queen, Rank::Two])));
}

#[test]
fn soft_hands_count_an_ace_as_eleven() {
    assert!(hand::is_soft(&cards(&[Rank::Ace, Rank::Six])));
    assert!(!hand::is_soft(&cards(&[Rank::Ace, Rank::Six, Rank::Ten])));
    assert!(!hand::is_soft(&cards(&[Rank::Ten, Rank::Seven])));
}

#[test]
fn hand_grows_by_appending() {
    let dealt = cards(&[Rank::Ace, Rank::Six, Rank::Ten]);

    let mut hand = Hand::new();
    assert!(hand.is_empty());
    hand.add_card(dealt[0]);
    hand.add_card(dealt[1]);
    assert_eq!(hand.value(), 17);
    assert!(hand.is_soft());
    assert_eq!(hand.up_card(), Some(&dealt[1]));

    let grown = hand.with_cards(&dealt[2..]);
    assert_eq!(hand.len(), 2);
    assert_eq!(grown.cards(), dealt.as_slice());
    assert_eq!(grown.value(), 17);
    assert!(!grown.is_soft());
    assert!(!grown.is_bust());
}
