//! The contract between the engine and whatever paces its advance events.
//!
//! Some phases do not change on user input. They wait for a single advance
//! event, which a presentation layer dispatches after its card animation has
//! finished. The engine only reports which event is awaited; choosing when to
//! send it is up to the driver, and the engine is correct whether the event
//! arrives immediately or much later.

use core::time::Duration;

use crate::game::{Event, Phase, RoundState};
use crate::options::PacingOptions;

impl RoundState {
    /// Returns the advance event the current phase is waiting for.
    ///
    /// Returns `None` in phases that wait for the player instead.
    ///
    /// ```
    /// use bjround::{Event, GameOptions, RoundState};
    /// use rand::SeedableRng;
    /// use rand_chacha::ChaCha8Rng;
    ///
    /// let mut rng = ChaCha8Rng::seed_from_u64(1);
    /// let state = RoundState::new(&GameOptions::default(), &mut rng);
    /// assert_eq!(state.pending_advance(), None);
    /// ```
    #[must_use]
    pub const fn pending_advance(&self) -> Option<Event> {
        match self.phase {
            Phase::DealerTurn => Some(Event::AdvanceDealer),
            Phase::DealerTurnEnd => Some(Event::EndDealerEvaluation),
            Phase::BustDelay => Some(Event::FinalizeBust),
            Phase::BlackjackDelay if self.dealer_hidden => Some(Event::RevealDealer),
            Phase::BlackjackDelay => Some(Event::FinalizeBlackjack),
            Phase::Betting | Phase::PlayerTurn | Phase::Result => None,
        }
    }
}

impl PacingOptions {
    /// Returns how long to wait before dispatching `event`.
    ///
    /// Events that are not advance steps are dispatched without delay.
    #[must_use]
    pub const fn delay_for(&self, event: Event) -> Duration {
        match event {
            Event::AdvanceDealer => self.dealer_step,
            Event::EndDealerEvaluation => self.dealer_end,
            Event::FinalizeBust => self.bust,
            Event::RevealDealer => self.reveal,
            Event::FinalizeBlackjack => self.blackjack,
            Event::PlaceBet(_)
            | Event::StartDeal
            | Event::PlayerHit
            | Event::PlayerStand
            | Event::Payout
            | Event::NewGame(_) => Duration::ZERO,
        }
    }
}

/// An advance event to dispatch after `delay`.
///
/// The advance belongs to the table state it was scheduled from; see
/// [`crate::Table::fire`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScheduledAdvance {
    /// The event to dispatch.
    pub event: Event,
    /// How long to wait before dispatching it.
    pub delay: Duration,
    /// Table epoch the advance was scheduled from.
    pub epoch: u64,
}
