pub mod common;
pub mod food_profile;
pub mod impact;
pub mod prediction;
