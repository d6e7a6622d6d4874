//! Purchase use case.
//!
//! Copies a catalog capability into a buyer's composition.

use std::collections::HashSet;
use std::sync::Arc;

use reefkick_domain::{Catalog, Composable, Credits, EntityId, ItemId};

use crate::infrastructure::ports::ClockPort;

use super::error::PurchaseError;
use super::ledger::Ledger;
use super::types::{FundsPolicy, PurchaseReceipt, StockPolicy};

/// The marketplace: a shared read-only catalog plus the purchase policies.
///
/// A purchase either applies the capability, charges the buyer and returns a
/// receipt, or fails and leaves the buyer, the ledger and the stock untouched.
pub struct Marketplace {
    catalog: Arc<Catalog>,
    clock: Arc<dyn ClockPort>,
    funds: FundsPolicy,
    stock: StockPolicy,
    ledger: Ledger,
    sold: HashSet<ItemId>,
}

impl Marketplace {
    pub fn new(catalog: Arc<Catalog>, clock: Arc<dyn ClockPort>) -> Self {
        Self {
            catalog,
            clock,
            funds: FundsPolicy::default(),
            stock: StockPolicy::default(),
            ledger: Ledger::new(),
            sold: HashSet::new(),
        }
    }

    pub fn with_funds_policy(mut self, funds: FundsPolicy) -> Self {
        self.funds = funds;
        self
    }

    pub fn with_stock_policy(mut self, stock: StockPolicy) -> Self {
        self.stock = stock;
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn funds_policy(&self) -> FundsPolicy {
        self.funds
    }

    pub fn stock_policy(&self) -> StockPolicy {
        self.stock
    }

    /// Current balance. Always zero under `FundsPolicy::Unlimited`, where it
    /// is never consulted.
    pub fn balance(&self, entity_id: EntityId) -> Credits {
        self.ledger.balance(entity_id)
    }

    /// Credit an entity's balance and return the new balance.
    ///
    /// The balance saturates at `u64::MAX` credits; a deposit past that is
    /// clamped, never wrapped.
    pub fn deposit(&mut self, entity_id: EntityId, amount: Credits) -> Credits {
        let balance = self.ledger.deposit(entity_id, amount);
        tracing::debug!(%entity_id, %amount, %balance, "Credits deposited");
        balance
    }

    /// Whether an item can still be bought under the stock policy.
    pub fn is_available(&self, item_id: ItemId) -> bool {
        self.catalog.contains(item_id)
            && !(self.stock == StockPolicy::SingleUse && self.sold.contains(&item_id))
    }

    /// Execute a purchase.
    ///
    /// # Arguments
    /// * `buyer` - The entity receiving the capability
    /// * `item_id` - The catalog listing to buy
    ///
    /// # Returns
    /// * `Ok(PurchaseReceipt)` - Capability applied and paid for
    /// * `Err(PurchaseError)` - Nothing changed
    pub fn purchase(
        &mut self,
        buyer: &mut dyn Composable,
        item_id: ItemId,
    ) -> Result<PurchaseReceipt, PurchaseError> {
        let entity_id = buyer.id();
        let span = tracing::info_span!("purchase", %item_id, %entity_id);
        let _guard = span.enter();

        self.try_purchase(buyer, item_id).inspect_err(|err| {
            tracing::warn!(reason = err.reason_code(), error = %err, "Purchase rejected");
        })
    }

    fn try_purchase(
        &mut self,
        buyer: &mut dyn Composable,
        item_id: ItemId,
    ) -> Result<PurchaseReceipt, PurchaseError> {
        let entity_id = buyer.id();

        // Validate everything before touching the buyer
        let item = self.catalog.require(item_id)?;
        if self.stock == StockPolicy::SingleUse && self.sold.contains(&item_id) {
            return Err(PurchaseError::SoldOut { item_id });
        }
        let balance_after = match self.funds {
            FundsPolicy::Unlimited => None,
            FundsPolicy::Ledger => Some(self.ledger.quote(entity_id, item.price())?),
        };

        // The only fallible mutation; on error the buyer is unchanged
        let change = buyer.apply(item.capability().clone())?;

        if let Some(remaining) = balance_after {
            self.ledger.settle(entity_id, remaining);
        }
        if self.stock == StockPolicy::SingleUse {
            self.sold.insert(item_id);
        }

        tracing::info!(
            item = %item.name(),
            capability = %item.capability(),
            price = %item.price(),
            change = change.event_type(),
            "Purchase completed"
        );

        Ok(PurchaseReceipt {
            item_id,
            item_name: item.name().clone(),
            entity_id,
            price: item.price(),
            change,
            balance_after,
            purchased_at: self.clock.now(),
        })
    }
}
