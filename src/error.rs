//! Rejection statuses for engine actions.

use thiserror::Error;

/// A recoverable rejection returned when an action cannot be taken.
///
/// Rejections leave the round untouched: an action either completes fully
/// or returns one of these with no partial state mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Rejection {
    /// The bet, insurance, double, or split exceeds the available bankroll.
    #[error("insufficient bankroll for this action")]
    InsufficientBankroll,
    /// The action is not legal in the current round state or against the
    /// current hands.
    #[error("action is not legal in the current round state")]
    InvalidAction,
    /// The deal was requested with no bet staged.
    #[error("no bet has been placed")]
    NoActiveBet,
}
