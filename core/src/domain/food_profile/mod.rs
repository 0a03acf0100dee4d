//! Attribute normalization: loosely-typed lookup records in, canonical food
//! profiles out.

pub mod entities;
pub mod errors;
pub mod normalizer;
pub mod value_objects;

pub use entities::*;
pub use normalizer::{normalize, normalize_with_report, try_normalize};
pub use value_objects::*;
