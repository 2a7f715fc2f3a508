//! A single-player blackjack round engine.
//!
//! The crate provides a [`Round`] type that runs the full round state
//! machine against an automated dealer: bet staging, the deal, hit / stand
//! / double-down, one-level splitting, the insurance side bet, the dealer's
//! draw-to-17 policy, and even-money payouts. The UI layer is an external
//! collaborator: it issues actions, reads [`Round::snapshot`], and reacts
//! to the events drained from [`Round::drain_events`].
//!
//! States: `Idle → Betting → PlayerTurn → DealerTurn → Settled`, back to
//! `Betting` via [`Round::new_round`]. Every action either completes
//! atomically or is rejected with a [`Rejection`] that leaves the round
//! untouched.
//!
//! # Example
//!
//! ```
//! use twentyone::{Card, Rank, Round, RoundState, Suit};
//!
//! let mut table = Round::new(1_000, 42);
//! table.new_round().unwrap();
//! table.place_bet(100).unwrap();
//!
//! // Fix the draw order instead of shuffling: dealer up, hole, player x2.
//! table.stack_deck(&[
//!     Card::new(Suit::Clubs, Rank::Ten),
//!     Card::new(Suit::Spades, Rank::Seven),
//!     Card::new(Suit::Hearts, Rank::King),
//!     Card::new(Suit::Diamonds, Rank::Queen),
//! ]);
//!
//! table.deal().unwrap();
//! table.stand().unwrap();
//!
//! let summary = table.play_dealer().unwrap();
//! assert_eq!(table.state(), RoundState::Settled);
//! assert_eq!(summary.dealer_total, 17);
//! assert_eq!(table.bankroll(), 1_100); // 20 beats 17, even money
//! ```

pub mod card;
pub mod deck;
pub mod error;
pub mod event;
pub mod hand;
pub mod result;
pub mod round;
pub mod snapshot;

mod bankroll;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::Rejection;
pub use event::{RoundEvent, Seat};
pub use hand::{DealerHand, Hand};
pub use result::{HandOutcome, HandResult, RoundSummary};
pub use round::{DealerDraws, DealerStep, Round, RoundState};
pub use snapshot::{DealerView, HandView, RoundSnapshot};
