//! Phase and event types.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Round phase.
///
/// `DealerTurn`, `DealerTurnEnd`, `BustDelay` and `BlackjackDelay` wait for an
/// advance event from the pacing driver; see
/// [`RoundState::pending_advance`](super::RoundState::pending_advance).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Phase {
    /// Accepting bets for the next round.
    Betting,
    /// Waiting for the player to hit or stand.
    PlayerTurn,
    /// Dealer draws one card per advance until reaching 17.
    DealerTurn,
    /// Dealer has stood; the result is evaluated on the next advance.
    DealerTurnEnd,
    /// A natural was dealt; the result is already decided.
    BlackjackDelay,
    /// The player busted; the result is already decided.
    BustDelay,
    /// Round is over and can be paid out.
    Result,
}

impl Phase {
    /// Returns whether the phase only changes on an advance event.
    #[must_use]
    pub const fn awaits_advance(self) -> bool {
        matches!(
            self,
            Self::DealerTurn | Self::DealerTurnEnd | Self::BlackjackDelay | Self::BustDelay
        )
    }
}

/// Inputs to the round state machine.
///
/// User intents (`PlaceBet`, `StartDeal`, `PlayerHit`, `PlayerStand`,
/// `Payout`, `NewGame`) come from the presentation layer's controls. The
/// remaining events are advance steps dispatched by the pacing driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Event {
    /// Changes the current bet by the given amount. Negative amounts reduce it.
    PlaceBet(isize),
    /// Deducts the bet and deals two cards each to player and dealer.
    StartDeal,
    /// Player draws a card.
    PlayerHit,
    /// Player keeps the current hand.
    PlayerStand,
    /// Dealer takes one step: draws a card or stands.
    AdvanceDealer,
    /// Reveals the dealer's hole card after a natural.
    RevealDealer,
    /// Evaluates the result once the dealer has stood.
    EndDealerEvaluation,
    /// Moves a busted round to the result phase.
    FinalizeBust,
    /// Moves a round decided by a natural to the result phase.
    FinalizeBlackjack,
    /// Settles the bet and returns to betting.
    Payout,
    /// Starts over with fresh money, optionally with a new deck count.
    NewGame(Option<u8>),
}
