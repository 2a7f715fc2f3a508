//! Read-only views of the round for the UI layer.

use crate::card::Card;
use crate::round::RoundState;

/// What the table looks like from the player's seat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundSnapshot {
    /// Current round state.
    pub state: RoundState,
    /// Available bankroll.
    pub bankroll: usize,
    /// The staged main bet.
    pub current_bet: usize,
    /// The insurance side bet placed this round, cleared at settlement.
    pub insurance_bet: usize,
    /// Whether insurance can still be taken this round.
    pub insurance_available: bool,
    /// The dealer's visible state.
    pub dealer: DealerView,
    /// Player hands, in hand order.
    pub hands: Vec<HandView>,
    /// Index of the hand currently acting, if any.
    pub active_hand: Option<usize>,
}

/// The dealer's hand as currently visible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DealerView {
    /// Face-up cards. Only the up card before the hole is revealed.
    pub cards: Vec<Card>,
    /// Number of face-down cards.
    pub hidden: usize,
    /// Whether the hole card has been revealed.
    pub hole_revealed: bool,
    /// The dealer's total, once the hole card is revealed.
    pub total: Option<u8>,
}

/// A player hand as currently visible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandView {
    /// Cards in the hand.
    pub cards: Vec<Card>,
    /// The stake the hand carries.
    pub bet: usize,
    /// Whether the hand has finished acting.
    pub settled: bool,
    /// Whether the insurance side bet covers this hand.
    pub insured: bool,
    /// The hand's current total.
    pub total: u8,
}
