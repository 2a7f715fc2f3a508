use crate::card::Card;
use crate::error::Rejection;
use crate::event::{RoundEvent, Seat};
use crate::hand::Hand;

use super::{Round, RoundState};

impl Round {
    /// Returns the active hand index, or rejects outside the player turn.
    fn require_player_turn(&self) -> Result<usize, Rejection> {
        if self.state != RoundState::PlayerTurn {
            return Err(Rejection::InvalidAction);
        }
        self.active.ok_or(Rejection::InvalidAction)
    }

    /// Settles the active hand and moves play forward.
    ///
    /// Scans forward from the current index for the next unsettled hand;
    /// when none remains, play passes to the dealer and the hole card is
    /// revealed.
    fn settle_active_and_advance(&mut self, index: usize) {
        self.hands[index].settle();

        let next = (index + 1..self.hands.len()).find(|&i| !self.hands[i].is_settled());
        match next {
            Some(i) => self.active = Some(i),
            None => self.enter_dealer_turn(),
        }
    }

    /// Hit: draws one card into the active hand.
    ///
    /// A total over 21 busts the hand, settling it and advancing play;
    /// otherwise the same hand stays active.
    ///
    /// # Errors
    ///
    /// Returns [`Rejection::InvalidAction`] outside the player turn.
    pub fn hit(&mut self) -> Result<Card, Rejection> {
        let index = self.require_player_turn()?;

        let card = self.deal_card_to(Seat::Player(index));

        let total = self.hands[index].total();
        if total > 21 {
            self.push_event(RoundEvent::HandBusted { hand: index, total });
            self.settle_active_and_advance(index);
        }

        Ok(card)
    }

    /// Stand: settles the active hand and advances play.
    ///
    /// # Errors
    ///
    /// Returns [`Rejection::InvalidAction`] outside the player turn.
    pub fn stand(&mut self) -> Result<(), Rejection> {
        let index = self.require_player_turn()?;
        self.settle_active_and_advance(index);
        Ok(())
    }

    /// Double down: doubles the active hand's bet for exactly one card.
    ///
    /// Debits a second stake equal to the hand's bet, draws one card, and
    /// settles the hand whatever the total.
    ///
    /// # Errors
    ///
    /// Returns [`Rejection::InvalidAction`] outside the player turn and
    /// [`Rejection::InsufficientBankroll`] when the bankroll cannot cover
    /// the second stake.
    pub fn double_down(&mut self) -> Result<Card, Rejection> {
        let index = self.require_player_turn()?;

        let stake = self.hands[index].bet();
        if !self.bankroll.can_afford(stake) {
            return Err(Rejection::InsufficientBankroll);
        }

        self.bankroll.debit(stake);
        self.hands[index].double_bet();

        let card = self.deal_card_to(Seat::Player(index));

        let total = self.hands[index].total();
        if total > 21 {
            self.push_event(RoundEvent::HandBusted { hand: index, total });
        }
        self.settle_active_and_advance(index);

        Ok(card)
    }

    /// Split: turns a two-card pair into two independently staked hands.
    ///
    /// Legal only as long as the round holds a single hand of exactly two
    /// matching ranks, so at most one split per round. The removed card
    /// seeds the new hand and receives a fresh draw first; the original
    /// hand is then refilled to two cards. The new hand carries an equal
    /// bet, debited from the bankroll. The first hand stays active.
    ///
    /// # Errors
    ///
    /// Returns [`Rejection::InvalidAction`] outside the player turn or when
    /// the pair precondition fails, and [`Rejection::InsufficientBankroll`]
    /// when the bankroll cannot cover the second stake.
    pub fn split(&mut self) -> Result<(), Rejection> {
        self.require_player_turn()?;

        if self.hands.len() != 1 || !self.hands[0].is_pair() {
            return Err(Rejection::InvalidAction);
        }

        let stake = self.hands[0].bet();
        if !self.bankroll.can_afford(stake) {
            return Err(Rejection::InsufficientBankroll);
        }

        let Some(split_card) = self.hands[0].take_split_card() else {
            // is_pair() guarantees two cards.
            return Err(Rejection::InvalidAction);
        };

        self.bankroll.debit(stake);
        self.hands.push(Hand::from_split(split_card, stake));

        self.deal_card_to(Seat::Player(1));
        self.deal_card_to(Seat::Player(0));

        Ok(())
    }
}
