use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    common::generate_timestamp, food_profile::CanonicalFoodProfile, impact::ImpactResult,
};

/// A stored prediction: the normalized profile and the impacts computed from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PredictionRecord {
    pub id: Uuid,
    pub food_name: String,
    pub quantity: String,
    pub profile: CanonicalFoodProfile,
    pub result: ImpactResult,
    pub user_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

impl PredictionRecord {
    pub fn new(
        food_name: String,
        quantity: String,
        profile: CanonicalFoodProfile,
        result: ImpactResult,
        user_id: Option<Uuid>,
    ) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            food_name,
            quantity,
            profile,
            result,
            user_id,
            created_at: now,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NonEdibleFood {
    pub food_name: String,
    pub quantity: String,
    pub profile: CanonicalFoodProfile,
    pub message: String,
}

impl NonEdibleFood {
    pub fn new(food_name: String, quantity: String, profile: CanonicalFoodProfile) -> Self {
        let message = format!("'{food_name}' is not a food item. Please enter a valid food name.");

        Self {
            food_name,
            quantity,
            profile,
            message,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PredictionOutcome {
    Predicted(PredictionRecord),
    NonEdible(NonEdibleFood),
    /// The lookup flagged the input; nothing was predicted.
    Alert(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_edible_message() {
        let food = NonEdibleFood::new(
            "stapler".to_string(),
            "Standard serving".to_string(),
            CanonicalFoodProfile::non_edible("Standard serving".to_string()),
        );

        assert_eq!(
            food.message,
            "'stapler' is not a food item. Please enter a valid food name."
        );
    }

    #[test]
    fn test_record_gets_v7_id() {
        let record = PredictionRecord::new(
            "apple".to_string(),
            "Standard serving".to_string(),
            CanonicalFoodProfile::default(),
            ImpactResult::neutral(1.0),
            None,
        );

        assert_eq!(record.id.get_version_num(), 7);
    }
}
