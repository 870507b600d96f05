use crate::error::EventError;
use crate::result;

use super::{Phase, RoundState};

impl RoundState {
    /// Player action: Hit (draw a card).
    ///
    /// A bust is decided immediately; the dealer does not play.
    pub(super) fn player_hit(&self) -> Result<Self, EventError> {
        self.ensure_phase(Phase::PlayerTurn)?;

        let (card, shoe) = self.shoe.draw_one()?;

        let mut next = self.clone();
        next.shoe = shoe;
        next.player.add_card(card);

        if next.player.is_bust() {
            next.phase = Phase::BustDelay;
            next.dealer_hidden = false;
            next.decide(result::player_bust(next.player_value()));
        }

        Ok(next)
    }

    /// Player action: Stand (keep current hand).
    pub(super) fn player_stand(&self) -> Result<Self, EventError> {
        self.ensure_phase(Phase::PlayerTurn)?;

        let mut next = self.clone();
        next.phase = Phase::DealerTurn;
        next.dealer_hidden = false;
        Ok(next)
    }
}
