//! Creature aggregate - the composite entity shape
//!
//! A creature is assembled from one locomotion, any number of actions and
//! any number of harvestable resources. The locomotion slot is never empty:
//! `CreatureBuilder::build` refuses to produce a creature without one, and
//! `set_locomotion` swaps values in place.

use serde::{Deserialize, Serialize};

use crate::capabilities::{Action, Capability, CapabilityFamily, Locomotion, Resource};
use crate::effects::EffectSink;
use crate::error::DomainError;
use crate::events::CompositionChange;
use crate::value_objects::EntityName;
use reefkick_domain::EntityId;

use super::entity::{Composable, EntityShape};

/// A composite entity.
///
/// # Invariants
///
/// - `locomotion` is always present
/// - `actions` and `resources` keep insertion order and may hold duplicates
///
/// # Example
///
/// ```
/// use reefkick_domain::aggregates::Creature;
/// use reefkick_domain::capabilities::{Action, Locomotion};
/// use reefkick_domain::effects::Effect;
/// use reefkick_domain::value_objects::EntityName;
///
/// let crab = Creature::builder(EntityName::new("Crab").unwrap())
///     .locomotion(Locomotion::Crawl)
///     .action(Action::PuffUp)
///     .build()
///     .unwrap();
///
/// let mut effects: Vec<Effect> = Vec::new();
/// crab.locomote(&mut effects);
/// assert_eq!(effects, vec![Effect::Moved(Locomotion::Crawl)]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Creature {
    id: EntityId,
    name: EntityName,
    locomotion: Locomotion,
    actions: Vec<Action>,
    resources: Vec<Resource>,
}

impl Creature {
    // =========================================================================
    // Constructor
    // =========================================================================

    /// Create a creature with the mandatory locomotion and nothing else.
    pub fn new(name: EntityName, locomotion: Locomotion) -> Self {
        Self {
            id: EntityId::new(),
            name,
            locomotion,
            actions: Vec::new(),
            resources: Vec::new(),
        }
    }

    /// Start building a creature; the locomotion is checked at `build()`.
    pub fn builder(name: EntityName) -> CreatureBuilder {
        CreatureBuilder::new(name)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[inline]
    pub fn id(&self) -> EntityId {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &EntityName {
        &self.name
    }

    #[inline]
    pub fn locomotion(&self) -> &Locomotion {
        &self.locomotion
    }

    #[inline]
    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    #[inline]
    pub fn resources(&self) -> &[Resource] {
        &self.resources
    }

    // =========================================================================
    // Dispatch
    // =========================================================================

    /// Move using the held locomotion.
    pub fn locomote(&self, sink: &mut dyn EffectSink) {
        self.locomotion.locomote(sink);
    }

    /// Perform every held action, in the order they were added.
    pub fn act(&self, sink: &mut dyn EffectSink) {
        for action in &self.actions {
            action.act(sink);
        }
    }

    /// Harvest every held resource, in the order they were added.
    pub fn collect(&self, sink: &mut dyn EffectSink) {
        for resource in &self.resources {
            resource.collect(sink);
        }
    }

    // =========================================================================
    // Mutation Methods
    // =========================================================================

    /// Replace the locomotion. The previous value is handed back in the outcome.
    pub fn set_locomotion(&mut self, locomotion: Locomotion) -> CompositionChange {
        let to = locomotion.clone();
        let from = std::mem::replace(&mut self.locomotion, locomotion);
        CompositionChange::LocomotionReplaced { from, to }
    }

    pub fn add_action(&mut self, action: Action) -> CompositionChange {
        self.actions.push(action.clone());
        CompositionChange::ActionAdded {
            action,
            count: self.actions.len(),
        }
    }

    pub fn add_resource(&mut self, resource: Resource) -> CompositionChange {
        self.resources.push(resource);
        CompositionChange::ResourceAdded {
            resource,
            count: self.resources.len(),
        }
    }
}

impl Composable for Creature {
    fn id(&self) -> EntityId {
        self.id
    }

    fn shape(&self) -> EntityShape {
        EntityShape::Composite
    }

    /// Route by family: locomotion replaces, actions and resources append.
    fn apply(&mut self, capability: Capability) -> Result<CompositionChange, DomainError> {
        let change = match capability {
            Capability::Locomotion(locomotion) => self.set_locomotion(locomotion),
            Capability::Action(action) => self.add_action(action),
            Capability::Resource(resource) => self.add_resource(resource),
        };
        Ok(change)
    }
}

// ============================================================================
// Builder
// ============================================================================

/// Fallible builder enforcing the mandatory locomotion.
#[derive(Debug, Clone)]
pub struct CreatureBuilder {
    id: Option<EntityId>,
    name: EntityName,
    locomotion: Option<Locomotion>,
    actions: Vec<Action>,
    resources: Vec<Resource>,
}

impl CreatureBuilder {
    pub fn new(name: EntityName) -> Self {
        Self {
            id: None,
            name,
            locomotion: None,
            actions: Vec::new(),
            resources: Vec::new(),
        }
    }

    /// Set the creature's ID (used when rebuilding a known entity).
    pub fn with_id(mut self, id: EntityId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn locomotion(mut self, locomotion: Locomotion) -> Self {
        self.locomotion = Some(locomotion);
        self
    }

    pub fn action(mut self, action: Action) -> Self {
        self.actions.push(action);
        self
    }

    pub fn resource(mut self, resource: Resource) -> Self {
        self.resources.push(resource);
        self
    }

    /// # Errors
    ///
    /// `DomainError::IncompleteComposition` if no locomotion was supplied.
    pub fn build(self) -> Result<Creature, DomainError> {
        let locomotion = self.locomotion.ok_or_else(|| {
            DomainError::incomplete_composition(EntityShape::Composite, CapabilityFamily::Locomotion)
        })?;
        Ok(Creature {
            id: self.id.unwrap_or_default(),
            name: self.name,
            locomotion,
            actions: self.actions,
            resources: self.resources,
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
