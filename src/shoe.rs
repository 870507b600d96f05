//! The shoe: a shuffled multi-deck sequence of cards.

extern crate alloc;

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::card::{Card, CardId, DECK_SIZE, Rank, Suit};
use crate::error::ShoeError;

/// An ordered sequence of cards. The front of the sequence is the next card
/// to be drawn.
///
/// A shoe only ever shrinks: [`Shoe::draw`] hands back the remainder as a new
/// shoe and leaves the original untouched.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Shoe {
    cards: Vec<Card>,
}

impl Shoe {
    /// Builds and shuffles a shoe of `deck_count` standard decks.
    ///
    /// Every card is tagged with its position in the unshuffled shoe, so ids
    /// are unique even when several decks contribute the same rank and suit.
    ///
    /// # Example
    ///
    /// ```
    /// use bjround::Shoe;
    /// use rand::SeedableRng;
    /// use rand_chacha::ChaCha8Rng;
    ///
    /// let mut rng = ChaCha8Rng::seed_from_u64(7);
    /// let shoe = Shoe::build(4, &mut rng);
    /// assert_eq!(shoe.len(), 208);
    /// ```
    pub fn build<R: Rng + ?Sized>(deck_count: u8, rng: &mut R) -> Self {
        let mut cards = Vec::with_capacity(deck_count as usize * DECK_SIZE);

        for _ in 0..deck_count {
            for suit in Suit::ALL {
                for rank in Rank::ALL {
                    let id = CardId(cards.len() as u16);
                    cards.push(Card::new(id, suit, rank));
                }
            }
        }

        cards.shuffle(rng);
        Self { cards }
    }

    /// Creates a shoe that deals `cards` in the given order.
    ///
    /// Useful for replays and for stacking a shoe in tests.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Removes the first `count` cards.
    ///
    /// Returns the drawn cards in draw order together with the remaining shoe.
    ///
    /// # Errors
    ///
    /// Returns [`ShoeError::Exhausted`] if fewer than `count` cards remain.
    /// Nothing is drawn in that case.
    pub fn draw(&self, count: usize) -> Result<(Vec<Card>, Self), ShoeError> {
        if count > self.cards.len() {
            return Err(ShoeError::Exhausted {
                requested: count,
                remaining: self.cards.len(),
            });
        }

        let (drawn, rest) = self.cards.split_at(count);
        Ok((drawn.to_vec(), Self::from_cards(rest.to_vec())))
    }

    /// Draws a single card.
    ///
    /// # Errors
    ///
    /// Returns [`ShoeError::Exhausted`] if the shoe is empty.
    pub fn draw_one(&self) -> Result<(Card, Self), ShoeError> {
        match self.cards.split_first() {
            Some((card, rest)) => Ok((*card, Self::from_cards(rest.to_vec()))),
            None => Err(ShoeError::Exhausted {
                requested: 1,
                remaining: 0,
            }),
        }
    }

    /// Returns the cards in draw order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the shoe is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
