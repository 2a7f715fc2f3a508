//! Round state.

/// The phase a round is in.
///
/// Transitions are driven entirely by [`Round`](crate::Round) actions; see
/// the crate-level docs for the full machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    /// No round in progress; waiting for [`Round::new_round`](crate::Round::new_round).
    Idle,
    /// Accepting bet chips; a deal needs a positive staged bet.
    Betting,
    /// Waiting for player actions on the active hand.
    PlayerTurn,
    /// The dealer draws to 17; driven by the caller-paced draw sequence.
    DealerTurn,
    /// Payouts applied; only a new round is accepted.
    Settled,
}
