//! A single-player blackjack round engine with optional `no_std` support.
//!
//! The engine is a state machine: a [`RoundState`] holds the shoe, both hands,
//! the bet and the current [`Phase`], and each [`Event`] produces the next
//! state. Some phases wait for an advance event so a presentation layer can
//! finish a card animation before the round moves on; the engine reports
//! which event it is waiting for but never schedules anything itself.
//!
//! [`Table`] wraps a state together with its random source and guards timer
//! driven advances against stale or duplicate dispatch.
//!
//! # Example
//!
//! ```no_run
//! use bjround::{Event, GameOptions, Table};
//!
//! let table = Table::new(GameOptions::default(), 42);
//! table.dispatch(Event::PlaceBet(25)).unwrap();
//! table.dispatch(Event::StartDeal).unwrap();
//! let _ = table.dispatch(Event::PlayerStand);
//! let state = table.run_advances().unwrap();
//! println!("{}", state.message.unwrap_or_default());
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod pacing;
pub mod result;
pub mod shoe;
mod sync;
pub mod table;

// Re-export main types
pub use card::{Card, CardId, DECK_SIZE, Rank, Suit};
pub use error::{AdvanceError, EventError, ShoeError};
pub use game::{DEALER_STANDS_ON, Event, Phase, RoundState};
pub use hand::Hand;
pub use options::{GameOptions, PacingOptions};
pub use pacing::ScheduledAdvance;
pub use result::{Outcome, Settlement};
pub use shoe::Shoe;
pub use table::Table;
