//! Catalog - the immutable listing of purchasable capabilities
//!
//! Items are templates: buying one clones its capability into the buyer.
//! The catalog is never mutated after construction, so it can be shared
//! behind an `Arc` by every purchase.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::capabilities::Capability;
use crate::error::DomainError;
use crate::value_objects::{Credits, ItemName};
use reefkick_domain::ItemId;

/// A listed capability and its price.
///
/// Fields are private; an item cannot change once listed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketplaceItem {
    id: ItemId,
    name: ItemName,
    capability: Capability,
    price: Credits,
}

impl MarketplaceItem {
    pub fn new(name: ItemName, capability: impl Into<Capability>, price: Credits) -> Self {
        Self {
            id: ItemId::new(),
            name,
            capability: capability.into(),
            price,
        }
    }

    /// Set the item's ID (used when loading a catalog with stable ids).
    pub fn with_id(mut self, id: ItemId) -> Self {
        self.id = id;
        self
    }

    #[inline]
    pub fn id(&self) -> ItemId {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &ItemName {
        &self.name
    }

    /// The capability template a purchase copies.
    #[inline]
    pub fn capability(&self) -> &Capability {
        &self.capability
    }

    #[inline]
    pub fn price(&self) -> Credits {
        self.price
    }
}

/// Ordered listing of marketplace items.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Catalog {
    items: Vec<MarketplaceItem>,
}

impl Catalog {
    /// Create a catalog, keeping the given order.
    ///
    /// # Errors
    ///
    /// `DomainError::Validation` if two items share an id.
    pub fn new(items: Vec<MarketplaceItem>) -> Result<Self, DomainError> {
        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if !seen.insert(item.id()) {
                return Err(DomainError::validation(format!(
                    "Duplicate catalog item id: {}",
                    item.id()
                )));
            }
        }
        Ok(Self { items })
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn get(&self, item_id: ItemId) -> Option<&MarketplaceItem> {
        self.items.iter().find(|item| item.id() == item_id)
    }

    /// Like `get`, but an unlisted id is an `UnknownItem` error.
    pub fn require(&self, item_id: ItemId) -> Result<&MarketplaceItem, DomainError> {
        self.get(item_id)
            .ok_or_else(|| DomainError::unknown_item(item_id))
    }

    pub fn contains(&self, item_id: ItemId) -> bool {
        self.get(item_id).is_some()
    }

    /// First item with the given name (case-insensitive).
    pub fn find_by_name(&self, name: &str) -> Option<&MarketplaceItem> {
        self.items
            .iter()
            .find(|item| item.name().as_str().eq_ignore_ascii_case(name.trim()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &MarketplaceItem> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<'de> Deserialize<'de> for Catalog {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let items = Vec::<MarketplaceItem>::deserialize(deserializer)?;
        Catalog::new(items).map_err(serde::de::Error::custom)
    }
}
