//! The card source: a single reshuffled deck.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Rank, Suit};

/// A single deck of 52 cards, drawn from the end.
///
/// The deck is rebuilt fresh (full reshuffle) at the start of every round
/// and again whenever a draw finds it empty, so a draw always succeeds.
#[derive(Debug, Clone, Default)]
pub struct Deck {
    /// Remaining cards; `draw` pops from the end.
    cards: Vec<Card>,
    /// When set, the next round-start reshuffle is skipped once.
    stacked: bool,
}

impl Deck {
    /// Creates an empty deck. The first draw or reshuffle fills it.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: Vec::new(),
            stacked: false,
        }
    }

    fn fresh<R: Rng>(rng: &mut R) -> Vec<Card> {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(suit, rank));
            }
        }

        cards.shuffle(rng);
        cards
    }

    /// Replaces the contents with a freshly shuffled 52-card deck.
    ///
    /// A stacked deck (see [`Deck::stack`]) is left untouched once; the
    /// stacked flag is consumed.
    pub fn reshuffle<R: Rng>(&mut self, rng: &mut R) {
        if self.stacked {
            self.stacked = false;
            return;
        }
        self.cards = Self::fresh(rng);
    }

    /// Removes and returns one card.
    ///
    /// An exhausted deck is silently rebuilt and reshuffled first. This
    /// treats the source as a reshuffled single deck rather than a finite
    /// shoe: cards already in play can be drawn again mid-round.
    #[expect(
        clippy::missing_panics_doc,
        reason = "the deck is rebuilt before the pop"
    )]
    pub fn draw<R: Rng>(&mut self, rng: &mut R) -> Card {
        if self.cards.is_empty() {
            self.cards = Self::fresh(rng);
        }
        self.cards.pop().expect("deck was just rebuilt")
    }

    /// Fixes the upcoming draw order: `draws[0]` is served first.
    ///
    /// The deck is marked stacked so the next round-start reshuffle leaves
    /// it in place. Used for scripted play and deterministic tests.
    pub fn stack(&mut self, draws: &[Card]) {
        let mut cards = draws.to_vec();
        cards.reverse();
        self.cards = cards;
        self.stacked = true;
    }

    /// Returns the number of cards left before the next rebuild.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is currently empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the remaining cards, next draw last.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}
