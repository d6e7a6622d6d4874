//! Session errors.

use reefkick_domain::{DomainError, EntityId};

use crate::use_cases::marketplace::PurchaseError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("Session already started")]
    AlreadyStarted,
    #[error("Session is not running")]
    NotRunning,
    #[error("Entity not found: {entity_id}")]
    EntityNotFound { entity_id: EntityId },
    #[error("Entity already in session: {entity_id}")]
    DuplicateEntity { entity_id: EntityId },
    #[error("Purchase failed: {0}")]
    Purchase(#[from] PurchaseError),
    #[error(transparent)]
    Domain(#[from] DomainError),
}
