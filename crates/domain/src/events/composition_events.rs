//! Composition-related domain events
//!
//! Returned from composition mutations so callers can see exactly which
//! capability went in and which one was discarded.

use serde::{Deserialize, Serialize};

use crate::capabilities::{Action, Locomotion, Resource};

/// Outcome of changing an entity's composition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CompositionChange {
    /// The single locomotion slot was replaced; `from` has been dropped from the entity
    LocomotionReplaced { from: Locomotion, to: Locomotion },
    /// An action was appended; `count` is the new number of held actions
    ActionAdded { action: Action, count: usize },
    /// A resource was appended; `count` is the new number of held resources
    ResourceAdded { resource: Resource, count: usize },
    /// The player's kick was swapped out
    KickUpgraded { from: Action, to: Action },
}

impl CompositionChange {
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::LocomotionReplaced { .. } => "locomotion_replaced",
            Self::ActionAdded { .. } => "action_added",
            Self::ResourceAdded { .. } => "resource_added",
            Self::KickUpgraded { .. } => "kick_upgraded",
        }
    }
}
