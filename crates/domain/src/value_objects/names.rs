//! Validated name newtypes
//!
//! Every name is trimmed, non-empty and at most 200 characters.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// Maximum length for any name field
const MAX_NAME_LENGTH: usize = 200;

fn validate_name(kind: &str, name: String) -> Result<String, DomainError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(DomainError::validation(format!("{} cannot be empty", kind)));
    }
    if trimmed.chars().count() > MAX_NAME_LENGTH {
        return Err(DomainError::validation(format!(
            "{} cannot exceed {} characters",
            kind, MAX_NAME_LENGTH
        )));
    }
    Ok(trimmed.to_string())
}

macro_rules! define_name {
    ($(#[$meta:meta])* $name:ident, $kind:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Create a new validated name.
            ///
            /// # Errors
            ///
            /// Returns `DomainError::Validation` if the trimmed name is empty
            /// or longer than 200 characters.
            pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
                validate_name($kind, name.into()).map(Self)
            }

            /// Returns the name as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<String> for $name {
            type Error = DomainError;

            fn try_from(s: String) -> Result<Self, Self::Error> {
                Self::new(s)
            }
        }

        impl From<$name> for String {
            fn from(name: $name) -> String {
                name.0
            }
        }
    };
}

define_name!(
    /// Display name of a creature or player
    EntityName,
    "Entity name"
);

define_name!(
    /// Display name of a marketplace listing
    ItemName,
    "Item name"
);

define_name!(
    /// Style of a kick animation (e.g. "bicycle", "scorpion")
    AnimationName,
    "Animation name"
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_trimmed() {
        let name = EntityName::new("  Puffer  ").unwrap();
        assert_eq!(name.as_str(), "Puffer");
    }

    #[test]
    fn empty_name_is_rejected() {
        let err = ItemName::new("   ").unwrap_err();
        assert_eq!(err.to_string(), "Validation failed: Item name cannot be empty");
    }

    #[test]
    fn overlong_name_is_rejected() {
        let err = AnimationName::new("x".repeat(201)).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
        assert!(AnimationName::new("x".repeat(200)).is_ok());
    }

    #[test]
    fn deserialize_validates() {
        let ok: EntityName = serde_json::from_str("\"Crab\"").unwrap();
        assert_eq!(ok.as_str(), "Crab");
        assert!(serde_json::from_str::<EntityName>("\"\"").is_err());
    }
}
