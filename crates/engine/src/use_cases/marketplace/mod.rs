//! Marketplace use cases.
//!
//! Handles capability purchases: catalog validation, the funds ledger, stock
//! policy, and applying the purchased capability to the buyer.

mod error;
mod ledger;
mod purchase;
mod types;

pub use error::PurchaseError;
pub use ledger::Ledger;
pub use purchase::Marketplace;
pub use types::{FundsPolicy, PurchaseReceipt, StockPolicy};
