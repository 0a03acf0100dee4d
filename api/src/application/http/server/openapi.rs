use utoipa::OpenApi;

use crate::application::http::prediction::router::PredictionApiDoc;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "cyclefood API"
    ),
    nest(
        (path = "/predictions", api = PredictionApiDoc),
    )
)]
pub struct ApiDoc;
