//! Reefkick Engine library.
//!
//! Runs game sessions over the `reefkick-domain` composition model.
//!
//! ## Structure
//!
//! - `use_cases/` - Marketplace purchases and the session lifecycle
//! - `infrastructure/` - Clock and effect sink implementations (ports + adapters)
//! - `config` - Environment and file based session configuration

pub mod config;
pub mod infrastructure;
pub mod use_cases;

pub use config::{ConfigError, SessionConfig};
pub use use_cases::{Session, SessionError};
