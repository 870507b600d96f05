//! Round outcomes, result messages and payout settlement.

extern crate alloc;

use alloc::format;
use alloc::string::String;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How a round was decided, from the player's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Outcome {
    /// Player has a natural and the dealer does not. Pays 3:2.
    Blackjack,
    /// Player wins (dealer busts or player has higher value). Pays 1:1.
    Win,
    /// Push (tie). The bet is returned.
    Push,
    /// Player loses (player busts, dealer natural, or dealer has higher value).
    Lose,
}

impl Outcome {
    /// Total amount returned to the player for a settled `bet`, stake included.
    ///
    /// A blackjack returns two and a half times the bet, rounded down.
    ///
    /// ```
    /// use bjround::Outcome;
    ///
    /// assert_eq!(Outcome::Blackjack.payout(100), 250);
    /// assert_eq!(Outcome::Blackjack.payout(5), 12);
    /// assert_eq!(Outcome::Win.payout(100), 200);
    /// assert_eq!(Outcome::Push.payout(100), 100);
    /// assert_eq!(Outcome::Lose.payout(100), 0);
    /// ```
    #[must_use]
    pub const fn payout(self, bet: usize) -> usize {
        match self {
            Self::Blackjack => bet.saturating_mul(2).saturating_add(bet / 2),
            Self::Win => bet.saturating_mul(2),
            Self::Push => bet,
            Self::Lose => 0,
        }
    }

    /// Returns whether the player comes out ahead.
    #[must_use]
    pub const fn is_player_win(self) -> bool {
        matches!(self, Self::Blackjack | Self::Win)
    }
}

/// Payout breakdown for a round that has reached the result phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Settlement {
    /// The outcome being settled.
    pub outcome: Outcome,
    /// The bet that was wagered.
    pub bet: usize,
    /// The payout amount (added to player money, stake included).
    pub payout: usize,
    /// Net result (positive = profit, negative = loss).
    pub net: isize,
    /// The player's hand value.
    pub player_value: u8,
    /// The dealer's hand value.
    pub dealer_value: u8,
}

impl Settlement {
    pub(crate) const fn new(outcome: Outcome, bet: usize, player_value: u8, dealer_value: u8) -> Self {
        let payout = outcome.payout(bet);
        #[expect(clippy::cast_possible_wrap, reason = "payout values fit in isize")]
        let net = payout as isize - bet as isize;
        Self {
            outcome,
            bet,
            payout,
            net,
            player_value,
            dealer_value,
        }
    }
}

/// Decides a fresh deal by naturals. Returns `None` when neither side holds
/// one and play continues.
pub(crate) fn natural(player_blackjack: bool, dealer_blackjack: bool) -> Option<(Outcome, String)> {
    match (player_blackjack, dealer_blackjack) {
        (true, false) => Some((Outcome::Blackjack, String::from("Blackjack! You win 3:2"))),
        (false, true) => Some((Outcome::Lose, String::from("Dealer has Blackjack. You lose."))),
        (true, true) => Some((Outcome::Push, String::from("Both have Blackjack. Push."))),
        (false, false) => None,
    }
}

pub(crate) fn player_bust(player_value: u8) -> (Outcome, String) {
    (Outcome::Lose, format!("Bust! You lose (value {player_value})."))
}

pub(crate) fn dealer_bust(dealer_value: u8) -> (Outcome, String) {
    (Outcome::Win, format!("Dealer busts ({dealer_value}). You win!"))
}

/// Compares standing totals once neither side has busted.
pub(crate) fn showdown(player_value: u8, dealer_value: u8) -> (Outcome, String) {
    if player_value > dealer_value {
        (
            Outcome::Win,
            format!("You win! Dealer {dealer_value} vs your {player_value}."),
        )
    } else if player_value < dealer_value {
        (
            Outcome::Lose,
            format!("Dealer {dealer_value} beats your {player_value}. You lose."),
        )
    } else {
        (Outcome::Push, format!("Push. Both {player_value}."))
    }
}
