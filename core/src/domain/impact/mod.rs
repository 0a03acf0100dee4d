//! Symptom impact prediction from canonical food profiles.

pub mod engine;
pub mod entities;
pub mod quantity;
pub mod weights;

pub use engine::{ImpactEngine, predict};
pub use entities::*;
pub use quantity::QuantityModifier;
pub use weights::*;
