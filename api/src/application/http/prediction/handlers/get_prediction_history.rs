use axum::extract::{Query, State};
use chrono::{DateTime, Utc};
use cyclefood_core::domain::{
    impact::ImpactResult,
    prediction::{GetPredictionHistoryInput, PredictionRecord, PredictionService},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::application::http::prediction::validators::GetPredictionHistoryQuery;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct PredictionHistoryEntry {
    pub id: Uuid,
    pub food_name: String,
    pub quantity: String,
    pub results: ImpactResult,
    pub timestamp: DateTime<Utc>,
}

impl From<PredictionRecord> for PredictionHistoryEntry {
    fn from(record: PredictionRecord) -> Self {
        Self {
            id: record.id,
            food_name: record.food_name,
            quantity: record.quantity,
            results: record.result,
            timestamp: record.created_at,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetPredictionHistoryResponse {
    pub history: Vec<PredictionHistoryEntry>,
}

#[utoipa::path(
    get,
    path = "/history",
    tag = "prediction",
    summary = "Get prediction history",
    description = "Most recent predictions first. Without a user id, anonymous predictions are returned.",
    params(GetPredictionHistoryQuery),
    responses(
        (status = 200, body = GetPredictionHistoryResponse)
    ),
)]
pub async fn get_prediction_history(
    Query(query): Query<GetPredictionHistoryQuery>,
    State(state): State<AppState>,
) -> Result<Response<GetPredictionHistoryResponse>, ApiError> {
    query
        .validate()
        .map_err(|e| ApiError::Validation(e.to_string()))?;

    let records = state
        .service
        .get_prediction_history(GetPredictionHistoryInput {
            user_id: query.user_id,
            limit: query.limit,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetPredictionHistoryResponse {
        history: records.into_iter().map(PredictionHistoryEntry::from).collect(),
    }))
}
