use super::handlers::clear_predictions::{__path_clear_predictions, clear_predictions};
use super::handlers::get_prediction_history::{
    __path_get_prediction_history, get_prediction_history,
};
use super::handlers::predict_food::{__path_predict_food, predict_food};
use crate::application::http::server::app_state::AppState;

use axum::{
    Router,
    routing::{get, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(predict_food, get_prediction_history, clear_predictions))]
pub struct PredictionApiDoc;

pub fn prediction_routes(root_path: &str) -> Router<AppState> {
    Router::new()
        .route(&format!("{root_path}/predictions"), post(predict_food))
        .route(
            &format!("{root_path}/predictions/history"),
            get(get_prediction_history),
        )
        .route(
            &format!("{root_path}/predictions/clear"),
            post(clear_predictions),
        )
}
