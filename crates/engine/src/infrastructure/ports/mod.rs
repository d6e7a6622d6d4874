//! Port traits for infrastructure boundaries.
//!
//! The effect sink port lives in the domain crate; the engine adds the clock
//! so purchase receipts can be timestamped deterministically in tests.

mod clock;

pub use clock::ClockPort;

#[cfg(test)]
pub use clock::MockClockPort;
