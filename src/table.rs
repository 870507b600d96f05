//! A session that owns the current round state and its random source.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::error::{AdvanceError, EventError};
use crate::game::{Event, Phase, RoundState};
use crate::options::GameOptions;
use crate::pacing::ScheduledAdvance;
use crate::sync::Mutex;

struct Slot {
    state: RoundState,
    epoch: u64,
}

/// A blackjack table for a single player.
///
/// The table holds the installed [`RoundState`] and the random source used
/// to shuffle shoes. Each accepted event computes a complete new state and
/// installs it in one step, so readers never observe a partial update.
/// Every installed state advances the table's epoch, which lets timers
/// scheduled from an older state be recognised and dropped.
///
/// # Example
///
/// ```
/// use bjround::{Event, GameOptions, Phase, Table};
///
/// let table = Table::new(GameOptions::default(), 42);
/// table.dispatch(Event::PlaceBet(100)).unwrap();
/// let state = table.dispatch(Event::StartDeal).unwrap();
/// assert_eq!(state.player_money, 900);
/// assert_ne!(state.phase, Phase::Betting);
/// ```
pub struct Table {
    options: GameOptions,
    slot: Mutex<Slot>,
    rng: Mutex<ChaCha8Rng>,
}

impl Table {
    /// Creates a table whose shoes are shuffled from the given seed.
    ///
    /// Two tables created with the same options and seed deal identical
    /// rounds for identical events.
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        Self::with_rng(options, ChaCha8Rng::seed_from_u64(seed))
    }

    /// Creates a table seeded from the operating system's random source.
    #[cfg(feature = "std")]
    #[cfg_attr(docsrs, doc(cfg(feature = "std")))]
    #[must_use]
    pub fn from_entropy(options: GameOptions) -> Self {
        Self::with_rng(options, ChaCha8Rng::from_os_rng())
    }

    /// Creates a table with the given random source.
    #[must_use]
    pub fn with_rng(options: GameOptions, mut rng: ChaCha8Rng) -> Self {
        let state = RoundState::new(&options, &mut rng);
        Self {
            options,
            slot: Mutex::new(Slot { state, epoch: 0 }),
            rng: Mutex::new(rng),
        }
    }

    /// Returns the table options.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns a copy of the installed state.
    pub fn snapshot(&self) -> RoundState {
        self.slot.lock().state.clone()
    }

    /// Returns the current phase.
    pub fn phase(&self) -> Phase {
        self.slot.lock().state.phase
    }

    /// Returns the number of states installed since the table was created.
    pub fn epoch(&self) -> u64 {
        self.slot.lock().epoch
    }

    /// Replaces the installed state, e.g. to restore a saved snapshot or to
    /// stack the shoe.
    pub fn install(&self, state: RoundState) {
        let mut slot = self.slot.lock();
        slot.state = state;
        slot.epoch += 1;
    }

    /// Applies `event` and installs the resulting state.
    ///
    /// Returns the newly installed state.
    ///
    /// # Errors
    ///
    /// Returns the reason the event was rejected. The installed state is
    /// left unchanged in that case.
    pub fn dispatch(&self, event: Event) -> Result<RoundState, EventError> {
        let mut slot = self.slot.lock();
        self.apply_locked(&mut *slot, event)
    }

    /// Returns the advance the installed state is waiting for, with the delay
    /// the presentation layer should wait before firing it.
    pub fn schedule(&self) -> Option<ScheduledAdvance> {
        let slot = self.slot.lock();
        slot.state.pending_advance().map(|event| ScheduledAdvance {
            event,
            delay: self.options.pacing.delay_for(event),
            epoch: slot.epoch,
        })
    }

    /// Fires an advance obtained from [`Table::schedule`].
    ///
    /// The advance is dispatched only if no other state has been installed
    /// since it was scheduled, so each phase entry receives exactly one
    /// advance even if a timer fires late or twice.
    ///
    /// # Errors
    ///
    /// Returns [`AdvanceError::Stale`] if the table has moved on, or
    /// [`AdvanceError::Rejected`] if the state machine rejects the event.
    pub fn fire(&self, advance: ScheduledAdvance) -> Result<RoundState, AdvanceError> {
        let mut slot = self.slot.lock();
        if slot.epoch != advance.epoch {
            log::debug!(
                "[table] dropping stale {:?} from epoch {} (now {})",
                advance.event,
                advance.epoch,
                slot.epoch
            );
            return Err(AdvanceError::Stale);
        }
        Ok(self.apply_locked(&mut *slot, advance.event)?)
    }

    /// Dispatches every pending advance immediately until the round waits
    /// for the player again.
    ///
    /// This is the headless driver: no delays, same transitions.
    ///
    /// # Errors
    ///
    /// Returns an error if an advance is rejected, which only happens when
    /// the shoe runs out.
    pub fn run_advances(&self) -> Result<RoundState, EventError> {
        let mut slot = self.slot.lock();
        while let Some(event) = slot.state.pending_advance() {
            self.apply_locked(&mut *slot, event)?;
        }
        Ok(slot.state.clone())
    }

    fn apply_locked(&self, slot: &mut Slot, event: Event) -> Result<RoundState, EventError> {
        let mut rng = self.rng.lock();
        match slot.state.try_apply(event, &mut *rng) {
            Ok(next) => {
                slot.state = next;
                slot.epoch += 1;
                Ok(slot.state.clone())
            }
            Err(err) => {
                if err.is_fatal() {
                    log::error!("[table] {event:?} failed in {:?}: {err}", slot.state.phase);
                } else {
                    log::debug!("[table] rejected {event:?} in {:?}: {err}", slot.state.phase);
                }
                Err(err)
            }
        }
    }
}
