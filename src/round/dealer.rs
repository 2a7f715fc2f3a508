use crate::card::Card;
use crate::error::Rejection;
use crate::event::{RoundEvent, Seat};
use crate::result::{HandOutcome, HandResult, RoundSummary};

use super::{Round, RoundState};

/// The dealer stands on any total of 17 or more, soft 17 included.
const DEALER_STAND: u8 = 17;

/// One dealer draw: the card taken and the running total after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DealerStep {
    /// The card the dealer drew.
    pub card: Card,
    /// The dealer's total after the draw.
    pub total: u8,
}

/// Lazy, caller-paced sequence of dealer draws.
///
/// Each [`next`](Iterator::next) performs at most one draw, so a UI can
/// animate the dealer at its own pace. The sequence is restartable: drop it
/// mid-way and a later [`Round::dealer_draws`] resumes where it stopped.
/// Exhausting it (the `None` after the last draw) settles the round.
#[derive(Debug)]
pub struct DealerDraws<'a> {
    round: &'a mut Round,
}

impl Iterator for DealerDraws<'_> {
    type Item = DealerStep;

    fn next(&mut self) -> Option<DealerStep> {
        if self.round.state != RoundState::DealerTurn {
            return None;
        }
        if self.round.dealer.total() >= DEALER_STAND {
            self.round.settle_round();
            return None;
        }

        let card = self.round.deal_card_to(Seat::Dealer);
        Some(DealerStep {
            card,
            total: self.round.dealer.total(),
        })
    }
}

impl Round {
    /// Moves play to the dealer: reveals the hole card, ends the player
    /// turn. The dealer always plays out, even when every hand busted.
    pub(super) fn enter_dealer_turn(&mut self) {
        self.active = None;
        self.dealer.reveal_hole();
        self.state = RoundState::DealerTurn;
    }

    /// Returns the caller-paced dealer draw sequence.
    ///
    /// Yields nothing outside [`RoundState::DealerTurn`]. Exhausting the
    /// sequence settles the round; see [`Round::play_dealer`] for the
    /// one-call version.
    pub fn dealer_draws(&mut self) -> DealerDraws<'_> {
        DealerDraws { round: self }
    }

    /// Runs the dealer to completion and settles the round.
    ///
    /// Draws until the dealer's total reaches 17 (standing on soft 17),
    /// then computes payouts once and returns the settlement.
    ///
    /// # Errors
    ///
    /// Returns [`Rejection::InvalidAction`] outside the dealer turn.
    pub fn play_dealer(&mut self) -> Result<RoundSummary, Rejection> {
        if self.state != RoundState::DealerTurn {
            return Err(Rejection::InvalidAction);
        }

        while self.dealer.total() < DEALER_STAND {
            self.deal_card_to(Seat::Dealer);
        }

        Ok(self.settle_round())
    }

    /// Computes payouts exactly once and moves the round to `Settled`.
    ///
    /// Stakes were debited when bet, so losses credit nothing: a win
    /// credits twice the stake, a push returns it. Insurance was resolved
    /// when placed and is not re-applied here.
    pub(super) fn settle_round(&mut self) -> RoundSummary {
        assert!(
            self.summary.is_none(),
            "round settlement computed a second time"
        );

        let dealer_total = self.dealer.total();
        let dealer_bust = dealer_total > 21;

        let mut results = Vec::with_capacity(self.hands.len());
        for (index, hand) in self.hands.iter_mut().enumerate() {
            hand.settle();
            let total = hand.total();
            let bet = hand.bet();

            let (outcome, payout) = if total > 21 {
                (HandOutcome::Bust, 0)
            } else if dealer_bust || total > dealer_total {
                (HandOutcome::Win, bet * 2)
            } else if total < dealer_total {
                (HandOutcome::Lose, 0)
            } else {
                (HandOutcome::Push, bet)
            };

            self.bankroll.credit(payout);
            results.push(HandResult {
                hand: index,
                outcome,
                bet,
                payout,
                total,
            });
        }

        let summary = RoundSummary {
            hands: results,
            dealer_total,
            dealer_bust,
            bankroll: self.bankroll.amount(),
        };

        self.active = None;
        self.insurance_bet = 0;
        self.state = RoundState::Settled;
        self.summary = Some(summary.clone());
        self.push_event(RoundEvent::RoundSettled(summary.clone()));

        summary
    }
}
