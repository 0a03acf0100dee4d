use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct PredictFoodValidator {
    #[validate(length(min = 1, max = 200, message = "food_name must be 1 to 200 characters"))]
    pub food_name: String,

    #[serde(default)]
    #[validate(length(max = 100, message = "quantity must be at most 100 characters"))]
    pub quantity: Option<String>,

    #[serde(default)]
    pub user_id: Option<Uuid>,
}

#[derive(Debug, Deserialize, Validate, IntoParams)]
pub struct GetPredictionHistoryQuery {
    pub user_id: Option<Uuid>,

    #[validate(range(min = 1, max = 100, message = "limit must be between 1 and 100"))]
    pub limit: Option<u32>,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct ClearPredictionsValidator {
    #[serde(default)]
    pub user_id: Option<Uuid>,
}
