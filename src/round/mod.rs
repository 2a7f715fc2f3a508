//! The round controller: state machine and action/query surface.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::bankroll::Bankroll;
use crate::card::Card;
use crate::deck::Deck;
use crate::error::Rejection;
use crate::event::{RoundEvent, Seat};
use crate::hand::{DealerHand, Hand};
use crate::result::RoundSummary;
use crate::snapshot::{DealerView, HandView, RoundSnapshot};

mod actions;
mod betting;
mod dealer;
mod insurance;
pub mod state;

pub use dealer::{DealerDraws, DealerStep};
pub use state::RoundState;

/// A single-player blackjack table: bankroll, deck, and the current round.
///
/// One `Round` value is one table. Every operation takes `&mut self` and
/// either completes atomically or rejects with a [`Rejection`] leaving the
/// state untouched. The value is reused across rounds via
/// [`Round::new_round`]; the deck is rebuilt fresh at every deal.
#[derive(Debug)]
pub struct Round {
    /// The card source, rebuilt each round and on exhaustion.
    deck: Deck,
    /// The player's available currency.
    bankroll: Bankroll,
    /// The staged main bet; moved out of the bankroll chip by chip.
    current_bet: usize,
    /// The insurance side bet placed this round, cleared at settlement.
    insurance_bet: usize,
    /// Whether insurance can still be taken this round.
    insurance_available: bool,
    /// The dealer's hand.
    dealer: DealerHand,
    /// The player's hands: one, or two after a split.
    hands: Vec<Hand>,
    /// Index of the first unsettled hand while in `PlayerTurn`.
    active: Option<usize>,
    /// Current phase of the round.
    state: RoundState,
    /// Settlement, retained for querying until the next round.
    summary: Option<RoundSummary>,
    /// Pending UI events, drained by the caller.
    events: Vec<RoundEvent>,
    /// Deterministic generator behind shuffles and rebuilds.
    rng: ChaCha8Rng,
}

impl Round {
    /// Creates a table with the given starting bankroll and RNG seed.
    ///
    /// The table starts in [`RoundState::Idle`]; call [`Round::new_round`]
    /// to open betting.
    #[must_use]
    pub fn new(bankroll: usize, seed: u64) -> Self {
        Self {
            deck: Deck::new(),
            bankroll: Bankroll::new(bankroll),
            current_bet: 0,
            insurance_bet: 0,
            insurance_available: false,
            dealer: DealerHand::new(),
            hands: Vec::new(),
            active: None,
            state: RoundState::Idle,
            summary: None,
            events: Vec::new(),
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Discards the previous round and opens betting.
    ///
    /// Accepted from [`RoundState::Idle`] and [`RoundState::Settled`] only:
    /// abandoning a live round would forfeit staked bets silently.
    ///
    /// # Errors
    ///
    /// Returns [`Rejection::InvalidAction`] while a round is in progress.
    pub fn new_round(&mut self) -> Result<(), Rejection> {
        if self.state != RoundState::Idle && self.state != RoundState::Settled {
            return Err(Rejection::InvalidAction);
        }

        self.current_bet = 0;
        self.insurance_bet = 0;
        self.insurance_available = false;
        self.dealer.clear();
        self.hands.clear();
        self.active = None;
        self.summary = None;
        self.events.clear();
        self.state = RoundState::Betting;

        Ok(())
    }

    /// Returns the current round state.
    #[must_use]
    pub const fn state(&self) -> RoundState {
        self.state
    }

    /// Returns the available bankroll.
    #[must_use]
    pub const fn bankroll(&self) -> usize {
        self.bankroll.amount()
    }

    /// Returns the staged main bet.
    ///
    /// After the deal this stays at the dealt amount (it backs the
    /// insurance half and the table display) until the next round.
    #[must_use]
    pub const fn current_bet(&self) -> usize {
        self.current_bet
    }

    /// Returns the insurance side bet placed this round, cleared at
    /// settlement.
    #[must_use]
    pub const fn insurance_bet(&self) -> usize {
        self.insurance_bet
    }

    /// Returns whether insurance can still be taken this round.
    #[must_use]
    pub const fn insurance_available(&self) -> bool {
        self.insurance_available
    }

    /// Returns the player's hands, in hand order.
    #[must_use]
    pub fn hands(&self) -> &[Hand] {
        &self.hands
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer(&self) -> &DealerHand {
        &self.dealer
    }

    /// Returns the index of the hand currently acting, if any.
    #[must_use]
    pub const fn active_hand(&self) -> Option<usize> {
        self.active
    }

    /// Returns the settlement of the last completed round, if any.
    #[must_use]
    pub const fn summary(&self) -> Option<&RoundSummary> {
        self.summary.as_ref()
    }

    /// Returns the number of cards left before the deck rebuilds itself.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Fixes the upcoming draw order for scripted play; see [`Deck::stack`].
    pub fn stack_deck(&mut self, draws: &[Card]) {
        self.deck.stack(draws);
    }

    /// Removes and returns all pending UI events, oldest first.
    pub fn drain_events(&mut self) -> Vec<RoundEvent> {
        core::mem::take(&mut self.events)
    }

    /// Builds a read-only view of the table as the player sees it.
    #[must_use]
    pub fn snapshot(&self) -> RoundSnapshot {
        let hole_revealed = self.dealer.is_hole_revealed();
        let dealer_cards: Vec<Card> = if hole_revealed {
            self.dealer.cards().to_vec()
        } else {
            // Only the up card is face up before the reveal.
            self.dealer.cards().iter().take(1).copied().collect()
        };
        let hidden = self.dealer.len() - dealer_cards.len();

        RoundSnapshot {
            state: self.state,
            bankroll: self.bankroll.amount(),
            current_bet: self.current_bet,
            insurance_bet: self.insurance_bet,
            insurance_available: self.insurance_available,
            dealer: DealerView {
                cards: dealer_cards,
                hidden,
                hole_revealed,
                total: hole_revealed.then(|| self.dealer.total()),
            },
            hands: self
                .hands
                .iter()
                .map(|hand| HandView {
                    cards: hand.cards().to_vec(),
                    bet: hand.bet(),
                    settled: hand.is_settled(),
                    insured: hand.is_insured(),
                    total: hand.total(),
                })
                .collect(),
            active_hand: self.active,
        }
    }

    /// Draws one card from the deck, rebuilding it if exhausted.
    pub(crate) fn draw_card(&mut self) -> Card {
        self.deck.draw(&mut self.rng)
    }

    /// Draws a card into the given seat and records the deal event.
    pub(crate) fn deal_card_to(&mut self, seat: Seat) -> Card {
        let card = self.draw_card();
        match seat {
            Seat::Dealer => self.dealer.add_card(card),
            Seat::Player(index) => self.hands[index].add_card(card),
        }
        self.events.push(RoundEvent::CardDealt { seat, card });
        card
    }

    pub(crate) fn push_event(&mut self, event: RoundEvent) {
        self.events.push(event);
    }
}
