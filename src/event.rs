//! Events emitted for the UI layer.
//!
//! Events are appended to an internal ledger as actions run and drained by
//! the embedding UI via [`Round::drain_events`](crate::Round::drain_events).
//! They exist for presentation (animation, sound, messages); correctness
//! never depends on observing them.

use crate::card::Card;
use crate::result::RoundSummary;

/// Where a dealt card landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Seat {
    /// The dealer's hand. The hole card is reported too; the snapshot is
    /// the authority on what is currently visible.
    Dealer,
    /// A player hand, by index.
    Player(usize),
}

/// A UI-facing notification produced while processing an action.
#[derive(Debug, Clone, PartialEq)]
pub enum RoundEvent {
    /// A card was dealt.
    CardDealt {
        /// Receiving seat.
        seat: Seat,
        /// The card dealt.
        card: Card,
    },
    /// A player hand went over 21 and settled.
    HandBusted {
        /// Index of the busted hand.
        hand: usize,
        /// Its final total.
        total: u8,
    },
    /// The insurance side bet resolved, immediately after being placed.
    InsuranceResolved {
        /// Whether the dealer held a natural.
        won: bool,
        /// Amount credited (three times the side bet on a win, else zero).
        payout: usize,
    },
    /// Payouts were computed and the round reached its terminal state.
    RoundSettled(RoundSummary),
}
