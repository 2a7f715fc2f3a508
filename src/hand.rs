//! Player and dealer hand representations.

use crate::card::Card;

/// Blackjack total with ace adjustment.
///
/// Aces count 11 first; while the total exceeds 21 and a soft ace remains,
/// one ace at a time drops to 1. The second value reports whether the final
/// total is still soft.
fn evaluate_cards(cards: &[Card]) -> (u8, bool) {
    let mut total: u8 = 0;
    let mut aces: u8 = 0;

    for card in cards {
        if card.rank.is_ace() {
            aces += 1;
        }
        total = total.saturating_add(card.rank.base_value());
    }

    while total > 21 && aces > 0 {
        total -= 10;
        aces -= 1;
    }

    let is_soft = aces > 0 && total <= 21;
    (total, is_soft)
}

/// A player's hand with its stake.
#[derive(Debug, Clone)]
pub struct Hand {
    /// Cards in the hand.
    cards: Vec<Card>,
    /// Stake backing this hand, already debited from the bankroll.
    bet: usize,
    /// Whether this hand has finished acting (stood, busted, or doubled).
    settled: bool,
    /// Whether the insurance side bet covers this hand.
    insured: bool,
}

impl Hand {
    /// Creates a new empty hand with the given bet.
    #[must_use]
    pub const fn new(bet: usize) -> Self {
        Self {
            cards: Vec::new(),
            bet,
            settled: false,
            insured: false,
        }
    }

    /// Creates the second hand of a split from the removed card.
    #[must_use]
    pub fn from_split(card: Card, bet: usize) -> Self {
        Self {
            cards: vec![card],
            bet,
            settled: false,
            insured: false,
        }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the bet amount for this hand.
    #[must_use]
    pub const fn bet(&self) -> usize {
        self.bet
    }

    /// Doubles the bet amount.
    pub const fn double_bet(&mut self) {
        self.bet *= 2;
    }

    /// Returns whether this hand has finished acting.
    #[must_use]
    pub const fn is_settled(&self) -> bool {
        self.settled
    }

    /// Marks the hand as finished.
    pub const fn settle(&mut self) {
        self.settled = true;
    }

    /// Returns whether the insurance side bet covers this hand.
    #[must_use]
    pub const fn is_insured(&self) -> bool {
        self.insured
    }

    /// Marks the hand as covered by insurance.
    pub const fn insure(&mut self) {
        self.insured = true;
    }

    /// Calculates the total of the hand with ace adjustment.
    #[must_use]
    pub fn total(&self) -> u8 {
        evaluate_cards(&self.cards).0
    }

    /// Returns whether the hand is soft (an ace still counts as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        evaluate_cards(&self.cards).1
    }

    /// Returns whether the hand total exceeds 21.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.total() > 21
    }

    /// Returns whether the hand is a splittable pair: exactly two cards of
    /// matching rank.
    #[must_use]
    pub fn is_pair(&self) -> bool {
        self.cards.len() == 2 && self.cards[0].rank == self.cards[1].rank
    }

    /// Removes and returns the second card (for splitting).
    pub fn take_split_card(&mut self) -> Option<Card> {
        if self.cards.len() == 2 {
            self.cards.pop()
        } else {
            None
        }
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// The dealer's hand. Carries no bet; the second card stays concealed until
/// the dealer's turn (or an insurance resolution reveals a natural).
#[derive(Debug, Clone, Default)]
pub struct DealerHand {
    /// Cards in the hand; `cards[0]` is the up card, `cards[1]` the hole.
    cards: Vec<Card>,
    /// Whether the hole card is revealed.
    hole_revealed: bool,
}

impl DealerHand {
    /// Creates a new empty dealer hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: Vec::new(),
            hole_revealed: false,
        }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns all cards in the hand, concealed or not.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the visible up card (first card).
    #[must_use]
    pub fn up_card(&self) -> Option<&Card> {
        self.cards.first()
    }

    /// Returns whether the hole card is revealed.
    #[must_use]
    pub const fn is_hole_revealed(&self) -> bool {
        self.hole_revealed
    }

    /// Reveals the hole card.
    pub const fn reveal_hole(&mut self) {
        self.hole_revealed = true;
    }

    /// Calculates the full total of the hand.
    #[must_use]
    pub fn total(&self) -> u8 {
        evaluate_cards(&self.cards).0
    }

    /// Returns whether the hand is a natural: two cards totaling 21.
    #[must_use]
    pub fn is_natural(&self) -> bool {
        self.cards.len() == 2 && self.total() == 21
    }

    /// Returns whether the hand total exceeds 21.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.total() > 21
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Clears the hand for a new round.
    pub fn clear(&mut self) {
        self.cards.clear();
        self.hole_revealed = false;
    }
}
