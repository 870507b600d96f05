//! Error types for engine operations.

use thiserror::Error;

use crate::game::Phase;

/// Errors raised by the shoe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShoeError {
    /// More cards were requested than remain in the shoe.
    #[error("shoe exhausted: requested {requested} cards, {remaining} remaining")]
    Exhausted {
        /// Number of cards requested.
        requested: usize,
        /// Number of cards left in the shoe.
        remaining: usize,
    },
}

/// Reasons an event is rejected by the round state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EventError {
    /// The event is not accepted in the current phase.
    #[error("event not accepted in phase {0:?}")]
    InvalidPhase(Phase),
    /// The bet change would take the bet below zero.
    #[error("bet cannot be negative")]
    NegativeBet,
    /// The bet would exceed the player's money.
    #[error("insufficient funds")]
    InsufficientFunds,
    /// Dealing was requested without a bet.
    #[error("no bet has been placed")]
    NoBet,
    /// A new game was requested with zero decks.
    #[error("deck count must be at least one")]
    ZeroDecks,
    /// The shoe ran out of cards mid-round.
    #[error(transparent)]
    Shoe(#[from] ShoeError),
}

impl EventError {
    /// Returns whether the error indicates a broken invariant rather than an
    /// event arriving at the wrong time.
    ///
    /// Only shoe exhaustion is fatal: the rules depend on every draw
    /// succeeding.
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::Shoe(_))
    }
}

/// Errors raised when a scheduled advance is fired at a [`crate::Table`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AdvanceError {
    /// The table moved on since the advance was scheduled.
    #[error("scheduled advance is stale")]
    Stale,
    /// The state machine rejected the event.
    #[error(transparent)]
    Rejected(#[from] EventError),
}
