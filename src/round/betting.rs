use crate::error::Rejection;
use crate::event::Seat;
use crate::hand::Hand;

use super::{Round, RoundState};

impl Round {
    /// Stages a bet chip: moves `amount` from the bankroll into the bet.
    ///
    /// Chips accumulate; call repeatedly to raise the bet before dealing.
    ///
    /// # Errors
    ///
    /// Returns [`Rejection::InvalidAction`] outside of betting or for a
    /// zero amount, and [`Rejection::InsufficientBankroll`] when the chip
    /// exceeds the available bankroll.
    pub fn place_bet(&mut self, amount: usize) -> Result<(), Rejection> {
        if self.state != RoundState::Betting || amount == 0 {
            return Err(Rejection::InvalidAction);
        }
        if !self.bankroll.can_afford(amount) {
            return Err(Rejection::InsufficientBankroll);
        }

        self.bankroll.debit(amount);
        self.current_bet += amount;

        Ok(())
    }

    /// Returns the full staged bet to the bankroll and zeroes it.
    ///
    /// # Errors
    ///
    /// Returns [`Rejection::InvalidAction`] outside of betting.
    pub fn clear_bet(&mut self) -> Result<(), Rejection> {
        if self.state != RoundState::Betting {
            return Err(Rejection::InvalidAction);
        }

        self.bankroll.credit(self.current_bet);
        self.current_bet = 0;

        Ok(())
    }

    /// Deals the opening cards and starts the player turn.
    ///
    /// Rebuilds the deck (unless stacked), then deals the dealer's up card,
    /// the hole card, and two cards to a single player hand staked with the
    /// full bet. Insurance becomes available when the up card is an Ace.
    ///
    /// # Errors
    ///
    /// Returns [`Rejection::InvalidAction`] outside of betting and
    /// [`Rejection::NoActiveBet`] when no bet is staged.
    pub fn deal(&mut self) -> Result<(), Rejection> {
        if self.state != RoundState::Betting {
            return Err(Rejection::InvalidAction);
        }
        if self.current_bet == 0 {
            return Err(Rejection::NoActiveBet);
        }

        self.deck.reshuffle(&mut self.rng);

        self.hands.push(Hand::new(self.current_bet));

        self.deal_card_to(Seat::Dealer);
        self.deal_card_to(Seat::Dealer);
        self.deal_card_to(Seat::Player(0));
        self.deal_card_to(Seat::Player(0));

        self.active = Some(0);
        self.insurance_available = self
            .dealer
            .up_card()
            .is_some_and(|card| card.rank.is_ace());
        self.state = RoundState::PlayerTurn;

        Ok(())
    }
}
