//! Use cases - User story orchestration.
//!
//! `marketplace` moves capabilities from the catalog into entities;
//! `session` owns the entities and drives them.

pub mod marketplace;
pub mod session;

pub use marketplace::{Marketplace, PurchaseError, PurchaseReceipt};
pub use session::{Session, SessionError, SessionStatus};
