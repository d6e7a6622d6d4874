//! Per-entity balances used under `FundsPolicy::Ledger`.

use std::collections::HashMap;

use reefkick_domain::{Credits, DomainError, EntityId};

#[derive(Debug, Clone, Default)]
pub struct Ledger {
    balances: HashMap<EntityId, Credits>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Unknown entities have a zero balance.
    pub fn balance(&self, entity_id: EntityId) -> Credits {
        self.balances
            .get(&entity_id)
            .copied()
            .unwrap_or(Credits::ZERO)
    }

    /// Add `amount` to the balance. Balances saturate at `u64::MAX` credits
    /// instead of wrapping.
    pub fn deposit(&mut self, entity_id: EntityId, amount: Credits) -> Credits {
        let balance = self.balance(entity_id) + amount;
        self.balances.insert(entity_id, balance);
        balance
    }

    /// Balance left after paying `price`, without changing anything.
    pub fn quote(&self, entity_id: EntityId, price: Credits) -> Result<Credits, DomainError> {
        let balance = self.balance(entity_id);
        balance
            .checked_sub(price)
            .ok_or_else(|| DomainError::insufficient_funds(price, balance))
    }

    /// Record a balance previously returned by `quote`.
    pub(crate) fn settle(&mut self, entity_id: EntityId, remaining: Credits) {
        self.balances.insert(entity_id, remaining);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deposits_accumulate() {
        let mut ledger = Ledger::new();
        let id = EntityId::new();
        assert_eq!(ledger.balance(id), Credits::ZERO);
        ledger.deposit(id, Credits::new(10));
        assert_eq!(ledger.deposit(id, Credits::new(5)), Credits::new(15));
    }

    #[test]
    fn deposit_saturates_at_max() {
        let mut ledger = Ledger::new();
        let id = EntityId::new();
        ledger.deposit(id, Credits::new(u64::MAX - 1));
        assert_eq!(
            ledger.deposit(id, Credits::new(10)),
            Credits::new(u64::MAX)
        );
        assert_eq!(ledger.balance(id), Credits::new(u64::MAX));
    }

    #[test]
    fn quote_does_not_debit() {
        let mut ledger = Ledger::new();
        let id = EntityId::new();
        ledger.deposit(id, Credits::new(10));

        assert_eq!(ledger.quote(id, Credits::new(4)), Ok(Credits::new(6)));
        assert_eq!(ledger.balance(id), Credits::new(10));
    }

    #[test]
    fn quote_reports_shortfall() {
        let mut ledger = Ledger::new();
        let id = EntityId::new();
        ledger.deposit(id, Credits::new(3));
        assert_eq!(
            ledger.quote(id, Credits::new(4)),
            Err(DomainError::insufficient_funds(Credits::new(4), Credits::new(3)))
        );
    }
}
