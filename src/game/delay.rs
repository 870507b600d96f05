use crate::error::EventError;

use super::{Phase, RoundState};

// The decision for these phases was fixed when the bust or natural was
// detected; finalizing never touches `message` or `outcome`.
impl RoundState {
    pub(super) fn reveal_dealer(&self) -> Result<Self, EventError> {
        self.ensure_phase(Phase::BlackjackDelay)?;

        let mut next = self.clone();
        next.dealer_hidden = false;
        Ok(next)
    }

    pub(super) fn finalize_bust(&self) -> Result<Self, EventError> {
        self.ensure_phase(Phase::BustDelay)?;

        let mut next = self.clone();
        next.phase = Phase::Result;
        next.dealer_hidden = false;
        Ok(next)
    }

    pub(super) fn finalize_blackjack(&self) -> Result<Self, EventError> {
        self.ensure_phase(Phase::BlackjackDelay)?;

        let mut next = self.clone();
        next.phase = Phase::Result;
        next.dealer_hidden = false;
        Ok(next)
    }
}
