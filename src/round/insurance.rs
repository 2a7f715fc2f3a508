use crate::error::Rejection;
use crate::event::RoundEvent;

use super::{Round, RoundState};

impl Round {
    /// Takes the insurance side bet against a dealer natural.
    ///
    /// Available once per round, during the player turn, while the dealer
    /// shows an Ace. The side bet is half the main bet, rounded down, and
    /// resolves the moment it is placed: a concealed dealer natural pays
    /// three times the side bet, reveals the hole card, and settles the
    /// round immediately (the main hands resolve against the revealed 21);
    /// otherwise the side bet is forfeited and play continues.
    ///
    /// Returns the side-bet amount placed.
    ///
    /// # Errors
    ///
    /// Returns [`Rejection::InvalidAction`] outside the player turn or when
    /// insurance is not (or no longer) on offer, and
    /// [`Rejection::InsufficientBankroll`] when the half bet is zero or
    /// exceeds the bankroll.
    pub fn take_insurance(&mut self) -> Result<usize, Rejection> {
        if self.state != RoundState::PlayerTurn || !self.insurance_available {
            return Err(Rejection::InvalidAction);
        }

        let half = self.current_bet / 2;
        if half == 0 || !self.bankroll.can_afford(half) {
            return Err(Rejection::InsufficientBankroll);
        }

        self.bankroll.debit(half);
        self.insurance_bet = half;
        self.insurance_available = false;
        for hand in &mut self.hands {
            if !hand.is_settled() {
                hand.insure();
            }
        }

        if self.dealer.is_natural() {
            let payout = half * 3;
            self.bankroll.credit(payout);
            self.push_event(RoundEvent::InsuranceResolved { won: true, payout });

            self.dealer.reveal_hole();
            self.settle_round();
        } else {
            // No natural: the side bet is forfeited, play continues.
            self.push_event(RoundEvent::InsuranceResolved {
                won: false,
                payout: 0,
            });
        }

        Ok(half)
    }
}
