//! Settlement result types.

/// Outcome of a single player hand at settlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandOutcome {
    /// Hand total exceeded 21; the stake is lost.
    Bust,
    /// Dealer busted or the hand outscored the dealer; pays even money.
    Win,
    /// Dealer outscored the hand; the stake is lost.
    Lose,
    /// Tied totals; the stake is returned.
    Push,
}

/// Settlement of a single player hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandResult {
    /// Index of the hand within the round (0, or 1 after a split).
    pub hand: usize,
    /// The outcome of the hand.
    pub outcome: HandOutcome,
    /// The stake the hand carried (after any double).
    pub bet: usize,
    /// Amount credited back to the bankroll: `2 * bet` on a win, `bet` on a
    /// push, zero otherwise.
    pub payout: usize,
    /// The hand's final total.
    pub total: u8,
}

/// Settlement of a full round, computed exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundSummary {
    /// Per-hand settlements, in hand order.
    pub hands: Vec<HandResult>,
    /// The dealer's final total.
    pub dealer_total: u8,
    /// Whether the dealer busted.
    pub dealer_bust: bool,
    /// The bankroll after all credits were applied.
    pub bankroll: usize,
}
