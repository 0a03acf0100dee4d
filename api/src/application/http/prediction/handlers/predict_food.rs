use axum::extract::State;
use cyclefood_core::domain::{
    food_profile::CanonicalFoodProfile,
    impact::ImpactResult,
    prediction::{PredictFoodInput, PredictionOutcome, PredictionService},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::http::prediction::validators::PredictFoodValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct PredictFoodResponse {
    pub food_name: String,
    pub quantity: String,
    pub food_data: CanonicalFoodProfile,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prediction_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prediction_results: Option<ImpactResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub non_edible_message: Option<String>,
}

impl TryFrom<PredictionOutcome> for PredictFoodResponse {
    type Error = ApiError;

    fn try_from(outcome: PredictionOutcome) -> Result<Self, Self::Error> {
        match outcome {
            PredictionOutcome::Predicted(record) => Ok(Self {
                food_name: record.food_name,
                quantity: record.quantity,
                food_data: record.profile,
                prediction_id: record.user_id.map(|_| record.id),
                prediction_results: Some(record.result),
                non_edible_message: None,
            }),
            PredictionOutcome::NonEdible(food) => Ok(Self {
                food_name: food.food_name,
                quantity: food.quantity,
                food_data: food.profile,
                prediction_id: None,
                prediction_results: None,
                non_edible_message: Some(food.message),
            }),
            PredictionOutcome::Alert(alert) => Err(ApiError::Alert(alert)),
        }
    }
}

#[utoipa::path(
    post,
    path = "",
    tag = "prediction",
    summary = "Predict food impact",
    description = "Looks up the food's attributes and predicts its impact on each menstrual symptom. Predictions are stored only when a user id is given.",
    responses(
        (status = 200, body = PredictFoodResponse),
        (status = 400, description = "Missing food name or the lookup raised an alert"),
        (status = 422, description = "Invalid request body"),
    ),
    request_body = PredictFoodValidator
)]
pub async fn predict_food(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<PredictFoodValidator>,
) -> Result<Response<PredictFoodResponse>, ApiError> {
    let outcome = state
        .service
        .predict_food(PredictFoodInput {
            food_name: payload.food_name,
            quantity: payload.quantity,
            user_id: payload.user_id,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(PredictFoodResponse::try_from(outcome)?))
}
