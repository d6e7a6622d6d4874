//! Session use case.
//!
//! Owns the live entities, the ball and the marketplace between `start()`
//! and `end()`.

mod error;
mod game_session;

pub use error::SessionError;
pub use game_session::{Session, SessionStatus};
