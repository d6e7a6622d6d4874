//! Session configuration.
//!
//! Read from the environment (after `.env` is loaded by the binary):
//!
//! | Variable                    | Default      |
//! |-----------------------------|--------------|
//! | `REEFKICK_FUNDS_POLICY`     | `unlimited`  |
//! | `REEFKICK_STOCK_POLICY`     | `unlimited`  |
//! | `REEFKICK_STARTING_CREDITS` | `0`          |
//! | `REEFKICK_BALL_COLOR`       | `purple`     |
//! | `REEFKICK_CATALOG_PATH`     | built-in     |
//! | `REEFKICK_ROSTER_PATH`      | built-in     |
//!
//! Catalog and roster files are JSON arrays in the same format as
//! `data/catalog.json` and `data/roster.json`.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use reefkick_domain::{
    Action, Capability, Catalog, Creature, Credits, DomainError, Entity, EntityName, ItemId,
    ItemName, Locomotion, MarketplaceItem, Player, Resource,
};

use crate::use_cases::marketplace::{FundsPolicy, StockPolicy};

const BUILTIN_CATALOG: &str = include_str!("../data/catalog.json");
const BUILTIN_ROSTER: &str = include_str!("../data/roster.json");

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {message}")]
    InvalidValue { key: &'static str, message: String },
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to parse {what}: {source}")]
    Json {
        what: String,
        source: serde_json::Error,
    },
    #[error("Invalid catalog entry {index}: {source}")]
    CatalogEntry { index: usize, source: DomainError },
    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// One listing as written in a catalog file.
///
/// The capability is optional on the wire so a missing payload is reported
/// as an invalid capability instead of a parse error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogEntry {
    #[serde(default)]
    pub id: Option<ItemId>,
    pub name: String,
    #[serde(default)]
    pub capability: Option<Capability>,
    pub price: Credits,
}

impl CatalogEntry {
    pub fn into_item(self) -> Result<MarketplaceItem, DomainError> {
        let capability = self
            .capability
            .ok_or_else(|| DomainError::invalid_capability("catalog capability", None))?;
        let item = MarketplaceItem::new(ItemName::new(self.name)?, capability, self.price);
        Ok(match self.id {
            Some(id) => item.with_id(id),
            None => item,
        })
    }
}

/// One entity as written in a roster file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum EntitySpec {
    Creature {
        name: String,
        #[serde(default)]
        locomotion: Option<Locomotion>,
        #[serde(default)]
        actions: Vec<Action>,
        #[serde(default)]
        resources: Vec<Resource>,
    },
    Player {
        name: String,
        #[serde(default)]
        kick: Option<Action>,
    },
}

impl EntitySpec {
    /// Construct the entity through its builder, so a missing mandatory
    /// capability fails with `IncompleteComposition`.
    pub fn build(&self) -> Result<Entity, DomainError> {
        match self {
            Self::Creature {
                name,
                locomotion,
                actions,
                resources,
            } => {
                let mut builder = Creature::builder(EntityName::new(name.as_str())?);
                if let Some(locomotion) = locomotion {
                    builder = builder.locomotion(locomotion.clone());
                }
                for action in actions {
                    builder = builder.action(action.clone());
                }
                for resource in resources {
                    builder = builder.resource(*resource);
                }
                Ok(builder.build()?.into())
            }
            Self::Player { name, kick } => Ok(Player::builder(EntityName::new(name.as_str())?)
                .maybe_kick(kick.clone().map(Capability::from))
                .build()?
                .into()),
        }
    }
}

/// Parse a catalog from JSON.
pub fn parse_catalog(json: &str) -> Result<Catalog, ConfigError> {
    let entries: Vec<CatalogEntry> =
        serde_json::from_str(json).map_err(|source| ConfigError::Json {
            what: "catalog".to_string(),
            source,
        })?;
    let items = entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| {
            entry
                .into_item()
                .map_err(|source| ConfigError::CatalogEntry { index, source })
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Catalog::new(items)?)
}

/// Parse a roster from JSON. Entities are built later, at session start.
pub fn parse_roster(json: &str) -> Result<Vec<EntitySpec>, ConfigError> {
    serde_json::from_str(json).map_err(|source| ConfigError::Json {
        what: "roster".to_string(),
        source,
    })
}

fn read_file(path: &Path) -> Result<String, ConfigError> {
    std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Everything a session needs to start.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub funds: FundsPolicy,
    pub stock: StockPolicy,
    /// Deposited for every entity under `FundsPolicy::Ledger`
    pub starting_credits: Credits,
    pub ball_color: String,
    pub catalog: Catalog,
    pub roster: Vec<EntitySpec>,
}

impl SessionConfig {
    /// Built-in catalog and roster with unlimited policies.
    pub fn builtin() -> Result<Self, ConfigError> {
        Ok(Self {
            funds: FundsPolicy::default(),
            stock: StockPolicy::default(),
            starting_credits: Credits::ZERO,
            ball_color: "purple".to_string(),
            catalog: parse_catalog(BUILTIN_CATALOG)?,
            roster: parse_roster(BUILTIN_ROSTER)?,
        })
    }

    /// Load configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from any key lookup (environment, test map).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::builtin()?;

        if let Some(value) = lookup("REEFKICK_FUNDS_POLICY") {
            config.funds = value
                .parse::<FundsPolicy>()
                .map_err(|message| ConfigError::InvalidValue {
                    key: "REEFKICK_FUNDS_POLICY",
                    message,
                })?;
        }
        if let Some(value) = lookup("REEFKICK_STOCK_POLICY") {
            config.stock = value
                .parse::<StockPolicy>()
                .map_err(|message| ConfigError::InvalidValue {
                    key: "REEFKICK_STOCK_POLICY",
                    message,
                })?;
        }
        if let Some(value) = lookup("REEFKICK_STARTING_CREDITS") {
            let amount: u64 =
                value
                    .trim()
                    .parse()
                    .map_err(|e: std::num::ParseIntError| ConfigError::InvalidValue {
                        key: "REEFKICK_STARTING_CREDITS",
                        message: e.to_string(),
                    })?;
            config.starting_credits = Credits::new(amount);
        }
        if let Some(value) = lookup("REEFKICK_BALL_COLOR") {
            let color = value.trim();
            if color.is_empty() {
                return Err(ConfigError::InvalidValue {
                    key: "REEFKICK_BALL_COLOR",
                    message: "Ball color cannot be empty".to_string(),
                });
            }
            config.ball_color = color.to_string();
        }
        if let Some(path) = lookup("REEFKICK_CATALOG_PATH") {
            config.catalog = parse_catalog(&read_file(Path::new(&path))?)?;
        }
        if let Some(path) = lookup("REEFKICK_ROSTER_PATH") {
            config.roster = parse_roster(&read_file(Path::new(&path))?)?;
        }

        Ok(config)
    }
}
