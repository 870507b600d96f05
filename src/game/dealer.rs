use rand::Rng;

use crate::error::EventError;
use crate::hand::Hand;
use crate::result::{self, Outcome};
use crate::shoe::Shoe;

use super::{Phase, RoundState};

/// Dealer stands on this total or more, soft or hard.
pub const DEALER_STANDS_ON: u8 = 17;

impl RoundState {
    /// Dealer takes one step.
    ///
    /// At 17 or more the dealer stands and the round moves to
    /// [`Phase::DealerTurnEnd`]. Otherwise exactly one card is drawn; a bust
    /// decides the round for the player at once.
    pub(super) fn advance_dealer(&self) -> Result<Self, EventError> {
        self.ensure_phase(Phase::DealerTurn)?;

        let mut next = self.clone();

        if self.dealer_value() >= DEALER_STANDS_ON {
            next.phase = Phase::DealerTurnEnd;
            return Ok(next);
        }

        let (card, shoe) = self.shoe.draw_one()?;
        next.shoe = shoe;
        next.dealer.add_card(card);
        log::debug!(
            "[round] dealer draws {}, total {}",
            card.rank.label(),
            next.dealer_value()
        );

        if next.dealer.is_bust() {
            next.phase = Phase::Result;
            next.decide(result::dealer_bust(next.dealer_value()));
        }

        Ok(next)
    }

    /// Compares totals once the dealer has stood.
    ///
    /// After a natural the decision is already made, so once the hole card is
    /// revealed this only moves the round to the result phase.
    pub(super) fn end_dealer_evaluation(&self) -> Result<Self, EventError> {
        match self.phase {
            Phase::DealerTurnEnd => {
                let mut next = self.clone();
                next.phase = Phase::Result;
                next.dealer_hidden = false;
                next.decide(result::showdown(self.player_value(), self.dealer_value()));
                Ok(next)
            }
            Phase::BlackjackDelay if !self.dealer_hidden => self.finalize_blackjack(),
            phase => Err(EventError::InvalidPhase(phase)),
        }
    }

    /// Settles the bet, clears the table and installs a fresh shoe.
    pub(super) fn payout<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Self, EventError> {
        self.ensure_phase(Phase::Result)?;

        let winnings = match self.settlement() {
            Some(settlement) => settlement.payout,
            None => {
                log::warn!("[round] result phase without an outcome, returning the stake");
                Outcome::Push.payout(self.current_bet)
            }
        };

        log::info!(
            "[round] payout {winnings} on bet {}, money {} -> {}",
            self.current_bet,
            self.player_money,
            self.player_money.saturating_add(winnings)
        );

        let mut next = self.clone();
        next.player_money = self.player_money.saturating_add(winnings);
        next.current_bet = 0;
        next.player = Hand::new();
        next.dealer = Hand::new();
        next.phase = Phase::Betting;
        next.dealer_hidden = true;
        next.message = None;
        next.outcome = None;
        next.shoe = Shoe::build(self.decks.max(1), rng);
        Ok(next)
    }
}
