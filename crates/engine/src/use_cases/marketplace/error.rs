//! Marketplace operation errors.

use reefkick_domain::{DomainError, ItemId};

/// Errors that can occur during a purchase.
///
/// Unknown items, insufficient funds and capabilities that do not fit the
/// buyer arrive as `DomainError`s; the rest are marketplace policy.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PurchaseError {
    #[error("Item sold out: {item_id}")]
    SoldOut { item_id: ItemId },
    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl PurchaseError {
    /// Stable reason code shown to the player when a purchase is rejected.
    pub fn reason_code(&self) -> &'static str {
        match self {
            Self::SoldOut { .. } => "sold_out",
            Self::Domain(DomainError::UnknownItem { .. }) => "unknown_item",
            Self::Domain(DomainError::InsufficientFunds { .. }) => "insufficient_funds",
            Self::Domain(DomainError::InvalidCapability { .. }) => "invalid_capability",
            Self::Domain(DomainError::IncompleteComposition { .. }) => "incomplete_composition",
            Self::Domain(DomainError::Validation(_)) => "validation",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reefkick_domain::Credits;

    #[test]
    fn reason_codes() {
        let item_id = ItemId::new();
        assert_eq!(PurchaseError::SoldOut { item_id }.reason_code(), "sold_out");
        assert_eq!(
            PurchaseError::from(DomainError::unknown_item(item_id)).reason_code(),
            "unknown_item"
        );
        assert_eq!(
            PurchaseError::from(DomainError::insufficient_funds(
                Credits::new(5),
                Credits::ZERO
            ))
            .reason_code(),
            "insufficient_funds"
        );
    }

    #[test]
    fn domain_errors_display_transparently() {
        let err = PurchaseError::from(DomainError::insufficient_funds(
            Credits::new(5),
            Credits::new(1),
        ));
        assert_eq!(err.to_string(), "Insufficient funds: price 5 cr, balance 1 cr");
    }
}
