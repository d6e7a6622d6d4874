//! Unified error types for the domain layer
//!
//! Every composition and catalog failure is a deterministic validation
//! outcome; none of them leave an entity partially modified.

use thiserror::Error;

use crate::aggregates::EntityShape;
use crate::capabilities::CapabilityFamily;
use crate::ids::ItemId;
use crate::value_objects::Credits;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Validation failed (e.g., invalid names, duplicate listings)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Entity built without its mandatory capability
    #[error("Incomplete composition: {shape} is missing its {missing} capability")]
    IncompleteComposition {
        shape: EntityShape,
        missing: CapabilityFamily,
    },

    /// Absent capability, or one that does not fit the target slot
    #[error("Invalid capability: expected {expected}, found {found}")]
    InvalidCapability {
        expected: &'static str,
        found: String,
    },

    /// Item is not listed in the catalog
    #[error("Unknown item: {item_id}")]
    UnknownItem { item_id: ItemId },

    /// Buyer cannot cover the price
    #[error("Insufficient funds: price {price}, balance {balance}")]
    InsufficientFunds { price: Credits, balance: Credits },
}

impl DomainError {
    /// Creates a validation error for business rule violations.
    ///
    /// # Example
    /// ```ignore
    /// if name.is_empty() {
    ///     return Err(DomainError::validation("Entity name cannot be empty"));
    /// }
    /// ```
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn incomplete_composition(shape: EntityShape, missing: CapabilityFamily) -> Self {
        Self::IncompleteComposition { shape, missing }
    }

    /// Create an invalid capability error.
    ///
    /// `found` is `None` when no capability was supplied at all.
    pub fn invalid_capability(expected: &'static str, found: Option<&dyn std::fmt::Display>) -> Self {
        Self::InvalidCapability {
            expected,
            found: found.map_or_else(|| "nothing".to_string(), |f| f.to_string()),
        }
    }

    pub fn unknown_item(item_id: ItemId) -> Self {
        Self::UnknownItem { item_id }
    }

    pub fn insufficient_funds(price: Credits, balance: Credits) -> Self {
        Self::InsufficientFunds { price, balance }
    }
}
