//! The bankroll ledger.

/// Available currency, kept non-negative by construction.
///
/// Callers guard every debit with [`Bankroll::can_afford`]; debiting more
/// than the ledger holds is a contract violation, not user input, and
/// panics.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Bankroll {
    amount: usize,
}

impl Bankroll {
    pub(crate) const fn new(amount: usize) -> Self {
        Self { amount }
    }

    pub(crate) const fn amount(&self) -> usize {
        self.amount
    }

    pub(crate) const fn can_afford(&self, amount: usize) -> bool {
        self.amount >= amount
    }

    pub(crate) fn debit(&mut self, amount: usize) {
        assert!(
            self.can_afford(amount),
            "debit of {amount} exceeds bankroll {}",
            self.amount
        );
        self.amount -= amount;
    }

    pub(crate) fn credit(&mut self, amount: usize) {
        self.amount = self.amount.saturating_add(amount);
    }
}
