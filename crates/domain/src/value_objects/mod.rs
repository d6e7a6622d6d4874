//! Value objects - immutable, validated by construction

pub mod credits;
pub mod names;

pub use credits::Credits;
pub use names::{AnimationName, EntityName, ItemName};
