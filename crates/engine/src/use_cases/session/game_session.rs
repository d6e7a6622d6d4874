//! The game session lifecycle: `Idle` -> `Running` -> `Ended`.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use reefkick_domain::{
    Ball, Composable, Credits, EffectSink, Entity, EntityId, ItemId, SessionId,
};

use crate::config::{EntitySpec, SessionConfig};
use crate::infrastructure::ports::ClockPort;
use crate::use_cases::marketplace::{FundsPolicy, Marketplace, PurchaseReceipt};

use super::error::SessionError;

/// Where a session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    Idle,
    Running,
    Ended,
}

/// Everything a running session owns.
struct Arena {
    entities: Vec<Entity>,
    ball: Ball,
    marketplace: Marketplace,
}

enum State {
    Idle,
    Running(Box<Arena>),
    Ended,
}

/// A single play session.
///
/// Entities, the ball and the marketplace exist only while the session is
/// running. `end()` drops them and a session cannot be restarted.
pub struct Session {
    id: SessionId,
    config: SessionConfig,
    clock: Arc<dyn ClockPort>,
    state: State,
    started_at: Option<DateTime<Utc>>,
}

impl Session {
    pub fn new(config: SessionConfig, clock: Arc<dyn ClockPort>) -> Self {
        Self {
            id: SessionId::new(),
            config,
            clock,
            state: State::Idle,
            started_at: None,
        }
    }

    #[inline]
    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn status(&self) -> SessionStatus {
        match self.state {
            State::Idle => SessionStatus::Idle,
            State::Running(_) => SessionStatus::Running,
            State::Ended => SessionStatus::Ended,
        }
    }

    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        self.started_at
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Build the roster, the marketplace and the ball, then start running.
    ///
    /// Nothing is kept if any roster entry fails to build; the session stays
    /// `Idle`.
    pub fn start(&mut self) -> Result<(), SessionError> {
        if !matches!(self.state, State::Idle) {
            return Err(SessionError::AlreadyStarted);
        }

        let entities = self
            .config
            .roster
            .iter()
            .map(EntitySpec::build)
            .collect::<Result<Vec<_>, _>>()?;

        let mut marketplace = Marketplace::new(
            Arc::new(self.config.catalog.clone()),
            Arc::clone(&self.clock),
        )
        .with_funds_policy(self.config.funds)
        .with_stock_policy(self.config.stock);

        if self.config.funds == FundsPolicy::Ledger && self.config.starting_credits > Credits::ZERO
        {
            for entity in &entities {
                marketplace.deposit(entity.id(), self.config.starting_credits);
            }
        }

        let arena = Arena {
            entities,
            ball: Ball::new(self.config.ball_color.clone()),
            marketplace,
        };

        tracing::info!(
            session_id = %self.id,
            entities = arena.entities.len(),
            items = arena.marketplace.catalog().len(),
            funds = %self.config.funds,
            stock = %self.config.stock,
            "Session started"
        );

        self.state = State::Running(Box::new(arena));
        self.started_at = Some(self.clock.now());
        Ok(())
    }

    /// Release every entity and the ball.
    pub fn end(&mut self) -> Result<(), SessionError> {
        if !matches!(self.state, State::Running(_)) {
            return Err(SessionError::NotRunning);
        }
        self.state = State::Ended;
        tracing::info!(session_id = %self.id, "Session ended");
        Ok(())
    }

    // =========================================================================
    // Running operations
    // =========================================================================

    pub fn entities(&self) -> Result<&[Entity], SessionError> {
        Ok(self.arena()?.entities.as_slice())
    }

    pub fn entity(&self, entity_id: EntityId) -> Result<&Entity, SessionError> {
        self.arena()?
            .entities
            .iter()
            .find(|entity| entity.id() == entity_id)
            .ok_or(SessionError::EntityNotFound { entity_id })
    }

    /// Add an entity mid-session. Under `FundsPolicy::Ledger` it receives the
    /// configured starting credits like the roster did.
    ///
    /// # Errors
    ///
    /// `SessionError::DuplicateEntity` if an entity with the same id is
    /// already in the session; nothing is deposited.
    pub fn add_entity(&mut self, entity: Entity) -> Result<EntityId, SessionError> {
        let starting_credits = self.config.starting_credits;
        let arena = self.arena_mut()?;
        let entity_id = entity.id();
        if arena.entities.iter().any(|held| held.id() == entity_id) {
            return Err(SessionError::DuplicateEntity { entity_id });
        }

        if arena.marketplace.funds_policy() == FundsPolicy::Ledger
            && starting_credits > Credits::ZERO
        {
            arena.marketplace.deposit(entity_id, starting_credits);
        }
        tracing::debug!(%entity_id, name = %entity.name(), shape = %entity.shape(), "Entity added");
        arena.entities.push(entity);
        Ok(entity_id)
    }

    pub fn marketplace(&self) -> Result<&Marketplace, SessionError> {
        Ok(&self.arena()?.marketplace)
    }

    pub fn ball(&self) -> Result<&Ball, SessionError> {
        Ok(&self.arena()?.ball)
    }

    /// Credit an entity's marketplace balance.
    pub fn deposit(&mut self, entity_id: EntityId, amount: Credits) -> Result<Credits, SessionError> {
        let arena = self.arena_mut()?;
        if !arena.entities.iter().any(|entity| entity.id() == entity_id) {
            return Err(SessionError::EntityNotFound { entity_id });
        }
        Ok(arena.marketplace.deposit(entity_id, amount))
    }

    /// Buy a catalog item for one of the session's entities.
    pub fn purchase(
        &mut self,
        entity_id: EntityId,
        item_id: ItemId,
    ) -> Result<PurchaseReceipt, SessionError> {
        let arena = self.arena_mut()?;
        let entity = arena
            .entities
            .iter_mut()
            .find(|entity| entity.id() == entity_id)
            .ok_or(SessionError::EntityNotFound { entity_id })?;
        Ok(arena.marketplace.purchase(entity, item_id)?)
    }

    pub fn kick_ball(&self, sink: &mut dyn EffectSink) -> Result<(), SessionError> {
        self.arena()?.ball.kick(sink);
        Ok(())
    }

    /// Run every entity's dispatch once, in roster order. Returns how many
    /// entities ran.
    pub fn tick(&self, sink: &mut dyn EffectSink) -> Result<usize, SessionError> {
        let arena = self.arena()?;
        for entity in &arena.entities {
            let span = tracing::debug_span!("entity", entity_id = %entity.id(), name = %entity.name());
            let _guard = span.enter();
            entity.run(sink);
        }
        Ok(arena.entities.len())
    }

    fn arena(&self) -> Result<&Arena, SessionError> {
        match &self.state {
            State::Running(arena) => Ok(arena.as_ref()),
            State::Idle | State::Ended => Err(SessionError::NotRunning),
        }
    }

    fn arena_mut(&mut self) -> Result<&mut Arena, SessionError> {
        match &mut self.state {
            State::Running(arena) => Ok(arena.as_mut()),
            State::Idle | State::Ended => Err(SessionError::NotRunning),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use reefkick_domain::{
        Action, Capability, Catalog, DomainError, Effect, EntityName, EntityShape, ItemName,
        Locomotion, MarketplaceItem, Player, Resource,
    };

    use crate::infrastructure::clock::FixedClock;
    use crate::infrastructure::ports::MockClockPort;
    use crate::use_cases::marketplace::{PurchaseError, StockPolicy};

    fn at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
    }

    fn item(name: &str, capability: impl Into<Capability>, price: u64) -> MarketplaceItem {
        MarketplaceItem::new(ItemName::new(name).unwrap(), capability, Credits::new(price))
    }

    fn config() -> SessionConfig {
        SessionConfig {
            funds: FundsPolicy::Unlimited,
            stock: StockPolicy::Unlimited,
            starting_credits: Credits::ZERO,
            ball_color: "purple".to_string(),
            catalog: Catalog::new(vec![
                item("SwimFast", Locomotion::swim_fast(), 10),
                item("Bicycle Kick", Action::kick("bicycle").unwrap(), 25),
                item("Pearl Bed", Resource::Pearl, 15),
            ])
            .unwrap(),
            roster: vec![
                EntitySpec::Creature {
                    name: "Hermit Crab".to_string(),
                    locomotion: Some(Locomotion::Crawl),
                    actions: vec![Action::BlowBubble],
                    resources: vec![Resource::Shell],
                },
                EntitySpec::Player {
                    name: "Striker".to_string(),
                    kick: Some(Action::kick("basic").unwrap()),
                },
            ],
        }
    }

    fn running(config: SessionConfig) -> Session {
        let mut session = Session::new(config, Arc::new(FixedClock(at())));
        session.start().unwrap();
        session
    }

    fn id_of(session: &Session, shape: EntityShape) -> EntityId {
        session
            .entities()
            .unwrap()
            .iter()
            .find(|e| e.shape() == shape)
            .unwrap()
            .id()
    }

    fn item_id(session: &Session, name: &str) -> ItemId {
        session
            .marketplace()
            .unwrap()
            .catalog()
            .find_by_name(name)
            .unwrap()
            .id()
    }

    mod lifecycle {
        use super::*;

        #[test]
        fn start_builds_roster_and_ball() {
            let mut clock = MockClockPort::new();
            clock.expect_now().times(1).return_const(at());

            let mut session = Session::new(config(), Arc::new(clock));
            assert_eq!(session.status(), SessionStatus::Idle);

            session.start().unwrap();
            assert_eq!(session.status(), SessionStatus::Running);
            assert_eq!(session.started_at(), Some(at()));
            assert_eq!(session.entities().unwrap().len(), 2);
            assert_eq!(session.ball().unwrap().color(), "purple");
        }

        #[test]
        fn start_twice_fails() {
            let mut session = running(config());
            assert_eq!(session.start().unwrap_err(), SessionError::AlreadyStarted);
        }

        #[test]
        fn ended_session_cannot_restart() {
            let mut session = running(config());
            session.end().unwrap();
            assert_eq!(session.status(), SessionStatus::Ended);
            assert_eq!(session.start().unwrap_err(), SessionError::AlreadyStarted);
            assert_eq!(session.end().unwrap_err(), SessionError::NotRunning);
        }

        #[test]
        fn operations_require_running() {
            let session = Session::new(config(), Arc::new(FixedClock(at())));
            let mut effects: Vec<Effect> = Vec::new();
            assert_eq!(session.entities().unwrap_err(), SessionError::NotRunning);
            assert_eq!(
                session.tick(&mut effects).unwrap_err(),
                SessionError::NotRunning
            );
            assert_eq!(
                session.kick_ball(&mut effects).unwrap_err(),
                SessionError::NotRunning
            );
            assert!(effects.is_empty());
        }

        #[test]
        fn incomplete_roster_keeps_session_idle() {
            let mut cfg = config();
            cfg.roster.push(EntitySpec::Player {
                name: "Sub".to_string(),
                kick: None,
            });
            let mut session = Session::new(cfg, Arc::new(FixedClock(at())));

            let err = session.start().unwrap_err();
            assert!(matches!(
                err,
                SessionError::Domain(DomainError::IncompleteComposition { .. })
            ));
            assert_eq!(session.status(), SessionStatus::Idle);
        }

        #[test]
        fn ledger_deposits_starting_credits() {
            let mut cfg = config();
            cfg.funds = FundsPolicy::Ledger;
            cfg.starting_credits = Credits::new(30);
            let session = running(cfg);

            for entity in session.entities().unwrap() {
                assert_eq!(
                    session.marketplace().unwrap().balance(entity.id()),
                    Credits::new(30)
                );
            }
        }
    }

    mod dispatch {
        use super::*;

        #[test]
        fn tick_runs_every_entity_in_order() {
            let session = running(config());
            let mut effects: Vec<Effect> = Vec::new();

            let ran = session.tick(&mut effects).unwrap();
            assert_eq!(ran, 2);
            assert_eq!(
                effects,
                vec![
                    Effect::Moved(Locomotion::Crawl),
                    Effect::Acted(Action::BlowBubble),
                    Effect::Collected(Resource::Shell),
                    Effect::Acted(Action::kick("basic").unwrap()),
                ]
            );
        }

        #[test]
        fn kick_ball_emits_once() {
            let session = running(config());
            let mut effects: Vec<Effect> = Vec::new();

            session.kick_ball(&mut effects).unwrap();
            assert_eq!(
                effects,
                vec![Effect::BallKicked {
                    color: "purple".to_string(),
                }]
            );
        }
    }

    mod purchasing {
        use super::*;

        #[test]
        fn purchase_changes_next_tick() {
            let mut session = running(config());
            let crab = id_of(&session, EntityShape::Composite);
            let swim_fast = item_id(&session, "SwimFast");

            session.purchase(crab, swim_fast).unwrap();

            let mut effects: Vec<Effect> = Vec::new();
            session.tick(&mut effects).unwrap();
            assert_eq!(effects[0], Effect::Moved(Locomotion::swim_fast()));
        }

        #[test]
        fn player_upgrades_kick() {
            let mut session = running(config());
            let striker = id_of(&session, EntityShape::Slot);
            let bicycle = item_id(&session, "Bicycle Kick");

            let receipt = session.purchase(striker, bicycle).unwrap();
            assert_eq!(receipt.entity_id, striker);
            assert_eq!(receipt.purchased_at, at());

            let player: &Player = session.entity(striker).unwrap().as_player().unwrap();
            assert_eq!(player.kick(), &Action::kick("bicycle").unwrap());
        }

        #[test]
        fn player_rejects_locomotion_item() {
            let mut session = running(config());
            let striker = id_of(&session, EntityShape::Slot);
            let swim_fast = item_id(&session, "SwimFast");
            let before = session.entity(striker).unwrap().clone();

            let err = session.purchase(striker, swim_fast).unwrap_err();
            assert!(matches!(
                err,
                SessionError::Purchase(PurchaseError::Domain(
                    DomainError::InvalidCapability { .. }
                ))
            ));
            assert_eq!(session.entity(striker).unwrap(), &before);
        }

        #[test]
        fn unknown_entity_is_reported() {
            let mut session = running(config());
            let missing = EntityId::new();
            let swim_fast = item_id(&session, "SwimFast");

            assert_eq!(
                session.purchase(missing, swim_fast).unwrap_err(),
                SessionError::EntityNotFound { entity_id: missing }
            );
            assert_eq!(
                session.deposit(missing, Credits::new(5)).unwrap_err(),
                SessionError::EntityNotFound { entity_id: missing }
            );
        }

        #[test]
        fn duplicate_entity_is_rejected_without_deposit() {
            let mut cfg = config();
            cfg.funds = FundsPolicy::Ledger;
            cfg.starting_credits = Credits::new(10);
            let mut session = running(cfg);

            let oyster: Entity = reefkick_domain::Creature::new(
                EntityName::new("Oyster").unwrap(),
                Locomotion::Crawl,
            )
            .into();
            let twin = oyster.clone();
            let oyster_id = session.add_entity(oyster).unwrap();

            assert_eq!(
                session.add_entity(twin).unwrap_err(),
                SessionError::DuplicateEntity {
                    entity_id: oyster_id
                }
            );
            assert_eq!(session.entities().unwrap().len(), 3);
            assert_eq!(
                session.marketplace().unwrap().balance(oyster_id),
                Credits::new(10)
            );
        }

        #[test]
        fn added_entity_can_buy() {
            let mut cfg = config();
            cfg.funds = FundsPolicy::Ledger;
            cfg.starting_credits = Credits::new(20);
            let mut session = running(cfg);

            let oyster: Entity = reefkick_domain::Creature::new(
                EntityName::new("Oyster").unwrap(),
                Locomotion::Stationary,
            )
            .into();
            let oyster_id = session.add_entity(oyster).unwrap();
            let pearl = item_id(&session, "Pearl Bed");

            let receipt = session.purchase(oyster_id, pearl).unwrap();
            assert_eq!(receipt.balance_after, Some(Credits::new(5)));
            assert_eq!(session.entities().unwrap().len(), 3);
        }
    }
}
