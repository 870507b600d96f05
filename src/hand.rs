//! Hand scoring and the hand container.

extern crate alloc;

use alloc::vec::Vec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::card::{Card, Rank};

fn evaluate_cards(cards: &[Card]) -> (u8, bool) {
    let mut value: u8 = 0;
    let mut aces: u8 = 0;

    for card in cards {
        if card.rank == Rank::Ace {
            aces += 1;
        }
        value = value.saturating_add(card.rank.value());
    }

    // Promote aces from 1 to 11 one at a time while the total allows it.
    let mut soft = false;
    while aces > 0 && value <= 11 {
        value += 10;
        aces -= 1;
        soft = true;
    }

    (value, soft)
}

/// Best blackjack total of `cards`.
///
/// Every ace counts 1, then aces are promoted to 11 one at a time as long as
/// the total stays at or below 21.
///
/// ```
/// use bjround::{Card, CardId, Rank, Suit, hand};
///
/// let ace = Card::new(CardId(0), Suit::Spades, Rank::Ace);
/// let nine = Card::new(CardId(1), Suit::Hearts, Rank::Nine);
/// assert_eq!(hand::value(&[ace, nine]), 20);
/// assert_eq!(hand::value(&[ace, ace, nine]), 21);
/// ```
#[must_use]
pub fn value(cards: &[Card]) -> u8 {
    evaluate_cards(cards).0
}

/// Returns whether `cards` is a natural: exactly two cards totalling 21.
#[must_use]
pub fn is_blackjack(cards: &[Card]) -> bool {
    cards.len() == 2 && value(cards) == 21
}

/// Returns whether `cards` totals more than 21.
#[must_use]
pub fn is_bust(cards: &[Card]) -> bool {
    value(cards) > 21
}

/// Returns whether an ace is currently counted as 11.
#[must_use]
pub fn is_soft(cards: &[Card]) -> bool {
    evaluate_cards(cards).1
}

/// Cards held by the player or the dealer.
///
/// Cards are only ever appended; a hand is replaced rather than emptied when
/// a new round starts.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns a copy of this hand with `cards` appended.
    #[must_use]
    pub fn with_cards(&self, cards: &[Card]) -> Self {
        let mut next = self.clone();
        next.cards.extend_from_slice(cards);
        next
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the second card, which for the dealer is the up card. The
    /// first card dealt to the dealer is the hole card.
    #[must_use]
    pub fn up_card(&self) -> Option<&Card> {
        self.cards.get(1)
    }

    /// Calculates the value of the hand.
    #[must_use]
    pub fn value(&self) -> u8 {
        value(&self.cards)
    }

    /// Returns whether the hand is a blackjack.
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        is_blackjack(&self.cards)
    }

    /// Returns whether the hand is bust.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        is_bust(&self.cards)
    }

    /// Returns whether the hand is soft.
    #[must_use]
    pub fn is_soft(&self) -> bool {
        is_soft(&self.cards)
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
