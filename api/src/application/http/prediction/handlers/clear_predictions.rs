use axum::extract::State;
use cyclefood_core::domain::prediction::{ClearPredictionsInput, PredictionService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::prediction::validators::ClearPredictionsValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ClearPredictionsResponse {
    pub deleted: u64,
}

#[utoipa::path(
    post,
    path = "/clear",
    tag = "prediction",
    summary = "Clear prediction history",
    description = "Deletes every stored prediction of the given user, or the anonymous ones when no user id is sent.",
    responses(
        (status = 200, body = ClearPredictionsResponse)
    ),
    request_body = ClearPredictionsValidator
)]
pub async fn clear_predictions(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<ClearPredictionsValidator>,
) -> Result<Response<ClearPredictionsResponse>, ApiError> {
    let deleted = state
        .service
        .clear_predictions(ClearPredictionsInput {
            user_id: payload.user_id,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(ClearPredictionsResponse { deleted }))
}
