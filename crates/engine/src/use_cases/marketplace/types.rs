//! Policy and result types for the marketplace.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use reefkick_domain::{CompositionChange, Credits, EntityId, ItemId, ItemName};

/// Whether purchases are paid for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FundsPolicy {
    /// Every buyer can afford every item.
    #[default]
    Unlimited,
    /// Buyers pay from a per-entity balance.
    Ledger,
}

/// Whether an item can be sold more than once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockPolicy {
    /// Listings are templates and never run out.
    #[default]
    Unlimited,
    /// Each listing can be bought once per marketplace.
    SingleUse,
}

impl fmt::Display for FundsPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unlimited => write!(f, "unlimited"),
            Self::Ledger => write!(f, "ledger"),
        }
    }
}

impl FromStr for FundsPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "unlimited" => Ok(Self::Unlimited),
            "ledger" => Ok(Self::Ledger),
            other => Err(format!("Unknown funds policy: {}", other)),
        }
    }
}

impl fmt::Display for StockPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unlimited => write!(f, "unlimited"),
            Self::SingleUse => write!(f, "single_use"),
        }
    }
}

impl FromStr for StockPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "unlimited" => Ok(Self::Unlimited),
            "single_use" | "single-use" => Ok(Self::SingleUse),
            other => Err(format!("Unknown stock policy: {}", other)),
        }
    }
}

/// Proof of a completed purchase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseReceipt {
    pub item_id: ItemId,
    pub item_name: ItemName,
    pub entity_id: EntityId,
    pub price: Credits,
    /// What the purchase did to the buyer's composition
    pub change: CompositionChange,
    /// Remaining balance; `None` under `FundsPolicy::Unlimited`
    pub balance_after: Option<Credits>,
    pub purchased_at: DateTime<Utc>,
}
