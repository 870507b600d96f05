//! Round state and the transition function.

extern crate alloc;

use alloc::string::String;

use rand::Rng;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::EventError;
use crate::hand::{self, Hand};
use crate::options::GameOptions;
use crate::result::{Outcome, Settlement};
use crate::shoe::Shoe;

mod actions;
mod bet;
mod dealer;
mod delay;
pub mod state;

pub use dealer::DEALER_STANDS_ON;
pub use state::{Event, Phase};

/// The complete state of a blackjack session.
///
/// A `RoundState` is never mutated in place by the engine. Every event
/// produces a new state via [`RoundState::try_apply`] or
/// [`RoundState::apply`], and the caller installs it in place of the old one.
/// The fields are public so a presentation layer can render any snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RoundState {
    /// Cards left to deal this round.
    pub shoe: Shoe,
    /// The player's hand.
    pub player: Hand,
    /// The dealer's hand. The first card is the hole card, the second the up card.
    pub dealer: Hand,
    /// Current phase.
    pub phase: Phase,
    /// Whether the dealer's hole card is concealed.
    pub dealer_hidden: bool,
    /// Result text, set when the round is decided.
    pub message: Option<String>,
    /// Structured form of the decision described by `message`.
    pub outcome: Option<Outcome>,
    /// Player money not currently at stake.
    pub player_money: usize,
    /// Amount wagered on the current round.
    pub current_bet: usize,
    /// Number of decks used to build each shoe.
    pub decks: u8,
    /// Money restored by [`Event::NewGame`].
    pub starting_money: usize,
}

impl RoundState {
    /// Creates a session in the betting phase with a freshly shuffled shoe.
    ///
    /// # Example
    ///
    /// ```
    /// use bjround::{GameOptions, Phase, RoundState};
    /// use rand::SeedableRng;
    /// use rand_chacha::ChaCha8Rng;
    ///
    /// let mut rng = ChaCha8Rng::seed_from_u64(42);
    /// let state = RoundState::new(&GameOptions::default(), &mut rng);
    /// assert_eq!(state.phase, Phase::Betting);
    /// assert_eq!(state.player_money, 1000);
    /// ```
    pub fn new<R: Rng + ?Sized>(options: &GameOptions, rng: &mut R) -> Self {
        let decks = options.decks.max(1);
        Self {
            shoe: Shoe::build(decks, rng),
            player: Hand::new(),
            dealer: Hand::new(),
            phase: Phase::Betting,
            dealer_hidden: true,
            message: None,
            outcome: None,
            player_money: options.starting_money,
            current_bet: 0,
            decks,
            starting_money: options.starting_money,
        }
    }

    /// Computes the state that follows `event`.
    ///
    /// `rng` is only consumed when a fresh shoe is built (on
    /// [`Event::Payout`] and [`Event::NewGame`]).
    ///
    /// # Errors
    ///
    /// Returns an error if the event is not accepted in the current phase,
    /// the bet change is out of range, no bet has been placed before dealing,
    /// a new game is requested with zero decks, or the shoe runs out.
    pub fn try_apply<R: Rng + ?Sized>(&self, event: Event, rng: &mut R) -> Result<Self, EventError> {
        let next = match event {
            Event::PlaceBet(amount) => self.place_bet(amount)?,
            Event::StartDeal => self.start_deal()?,
            Event::PlayerHit => self.player_hit()?,
            Event::PlayerStand => self.player_stand()?,
            Event::AdvanceDealer => self.advance_dealer()?,
            Event::RevealDealer => self.reveal_dealer()?,
            Event::EndDealerEvaluation => self.end_dealer_evaluation()?,
            Event::FinalizeBust => self.finalize_bust()?,
            Event::FinalizeBlackjack => self.finalize_blackjack()?,
            Event::Payout => self.payout(rng)?,
            Event::NewGame(decks) => self.new_game(decks, rng)?,
        };

        if next.phase != self.phase {
            log::debug!("[round] {:?} -> {:?} on {:?}", self.phase, next.phase, event);
        }

        Ok(next)
    }

    /// Computes the state that follows `event`, or returns this state
    /// unchanged if the event is rejected.
    ///
    /// Use [`RoundState::try_apply`] to observe why an event was rejected.
    #[must_use]
    pub fn apply<R: Rng + ?Sized>(&self, event: Event, rng: &mut R) -> Self {
        match self.try_apply(event, rng) {
            Ok(next) => next,
            Err(err) => {
                if err.is_fatal() {
                    log::error!("[round] {event:?} failed in {:?}: {err}", self.phase);
                } else {
                    log::debug!("[round] ignoring {event:?} in {:?}: {err}", self.phase);
                }
                self.clone()
            }
        }
    }

    /// Returns the player's hand value.
    #[must_use]
    pub fn player_value(&self) -> u8 {
        self.player.value()
    }

    /// Returns the dealer's full hand value, hole card included.
    #[must_use]
    pub fn dealer_value(&self) -> u8 {
        self.dealer.value()
    }

    /// Returns the dealer value the player is allowed to see: the up card
    /// alone while the hole card is hidden.
    #[must_use]
    pub fn dealer_visible_value(&self) -> u8 {
        if self.dealer_hidden {
            self.dealer
                .up_card()
                .map_or(0, |card| hand::value(core::slice::from_ref(card)))
        } else {
            self.dealer.value()
        }
    }

    /// Status line for the current phase.
    #[must_use]
    pub const fn status_text(&self) -> &'static str {
        match self.phase {
            Phase::Betting => "Place your bet",
            Phase::PlayerTurn => "Your turn",
            Phase::DealerTurn => "Dealer's turn",
            Phase::DealerTurnEnd => "Dealer finished",
            Phase::BlackjackDelay => "Blackjack!",
            Phase::BustDelay => "Bust!",
            Phase::Result => "Round Over",
        }
    }

    /// Returns whether adding `amount` to the current bet would be accepted.
    #[must_use]
    pub fn can_bet(&self, amount: usize) -> bool {
        self.phase == Phase::Betting
            && self
                .current_bet
                .checked_add(amount)
                .is_some_and(|bet| bet <= self.player_money)
    }

    /// Returns the payout breakdown once the round has reached the result
    /// phase.
    #[must_use]
    pub fn settlement(&self) -> Option<Settlement> {
        if self.phase != Phase::Result {
            return None;
        }
        self.outcome.map(|outcome| {
            Settlement::new(
                outcome,
                self.current_bet,
                self.player_value(),
                self.dealer_value(),
            )
        })
    }

    /// Fails with [`EventError::InvalidPhase`] unless the state is in `expected`.
    fn ensure_phase(&self, expected: Phase) -> Result<(), EventError> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(EventError::InvalidPhase(self.phase))
        }
    }

    /// Records the decision for the round.
    fn decide(&mut self, (outcome, message): (Outcome, String)) {
        log::info!("[round] {outcome:?}: {message}");
        self.outcome = Some(outcome);
        self.message = Some(message);
    }

    fn new_game<R: Rng + ?Sized>(&self, decks: Option<u8>, rng: &mut R) -> Result<Self, EventError> {
        let decks = decks.unwrap_or(self.decks);
        if decks == 0 {
            return Err(EventError::ZeroDecks);
        }

        log::debug!("[round] new game with {decks} deck(s)");
        Ok(Self {
            shoe: Shoe::build(decks, rng),
            player: Hand::new(),
            dealer: Hand::new(),
            phase: Phase::Betting,
            dealer_hidden: true,
            message: None,
            outcome: None,
            player_money: self.starting_money,
            current_bet: 0,
            decks,
            starting_money: self.starting_money,
        })
    }
}
