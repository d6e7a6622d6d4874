//! Reefkick Engine - Main entry point.
//!
//! Runs one scripted session: every entity acts, buys one upgrade from the
//! marketplace, acts again, and the ball is kicked.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use reefkick_domain::{Capability, Catalog, Composable, Entity, EntityShape, ItemId};
use reefkick_engine::infrastructure::{clock::SystemClock, effects::TracingEffectSink};
use reefkick_engine::{Session, SessionConfig};

fn main() -> anyhow::Result<()> {
    load_dotenv_from_repo_root();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "reefkick_engine=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Reefkick Engine");

    let config = SessionConfig::from_env()?;
    let mut session = Session::new(config, Arc::new(SystemClock::new()));
    session.start()?;

    let mut sink = TracingEffectSink::new();
    session.tick(&mut sink)?;

    // One upgrade per entity, chosen by shape
    let plan: Vec<_> = {
        let catalog = session.marketplace()?.catalog();
        session
            .entities()?
            .iter()
            .filter_map(|entity| upgrade_for(catalog, entity).map(|item| (entity.id(), item)))
            .collect()
    };
    for (entity_id, item_id) in plan {
        if let Err(e) = session.purchase(entity_id, item_id) {
            tracing::warn!(%entity_id, %item_id, error = %e, "Upgrade skipped");
        }
    }

    session.tick(&mut sink)?;
    session.kick_ball(&mut sink)?;
    session.end()?;

    tracing::info!(effects = sink.emitted(), "Reefkick Engine finished");
    Ok(())
}

/// First catalog item the entity's shape can accept.
fn upgrade_for(catalog: &Catalog, entity: &Entity) -> Option<ItemId> {
    catalog
        .iter()
        .find(|item| match (entity.shape(), item.capability()) {
            (EntityShape::Slot, Capability::Action(action)) => action.is_kick(),
            (EntityShape::Slot, _) => false,
            (EntityShape::Composite, Capability::Action(action)) => !action.is_kick(),
            (EntityShape::Composite, _) => true,
        })
        .map(|item| item.id())
}

fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}
