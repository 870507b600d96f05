use crate::error::EventError;
use crate::hand::Hand;
use crate::result;

use super::{Phase, RoundState};

impl RoundState {
    /// Adjusts the current bet by `amount`. The money is not deducted until
    /// the deal.
    pub(super) fn place_bet(&self, amount: isize) -> Result<Self, EventError> {
        self.ensure_phase(Phase::Betting)?;

        let bet = self
            .current_bet
            .checked_add_signed(amount)
            .ok_or(EventError::NegativeBet)?;

        if bet > self.player_money {
            return Err(EventError::InsufficientFunds);
        }

        let mut next = self.clone();
        next.current_bet = bet;
        Ok(next)
    }

    /// Deducts the bet and deals two cards to the player, then two to the
    /// dealer. A natural on either side decides the round on the spot.
    pub(super) fn start_deal(&self) -> Result<Self, EventError> {
        self.ensure_phase(Phase::Betting)?;

        if self.current_bet == 0 {
            return Err(EventError::NoBet);
        }
        if self.current_bet > self.player_money {
            return Err(EventError::InsufficientFunds);
        }

        let (player_cards, shoe) = self.shoe.draw(2)?;
        let (dealer_cards, shoe) = shoe.draw(2)?;

        let mut next = self.clone();
        next.shoe = shoe;
        next.player = Hand::new().with_cards(&player_cards);
        next.dealer = Hand::new().with_cards(&dealer_cards);
        next.player_money -= self.current_bet;
        next.dealer_hidden = true;
        next.message = None;
        next.outcome = None;

        log::debug!(
            "[round] dealt player {} dealer {} for bet {}",
            next.player_value(),
            next.dealer_value(),
            self.current_bet
        );

        match result::natural(next.player.is_blackjack(), next.dealer.is_blackjack()) {
            Some(decision) => {
                next.decide(decision);
                next.phase = Phase::BlackjackDelay;
            }
            None => next.phase = Phase::PlayerTurn,
        }

        Ok(next)
    }
}
