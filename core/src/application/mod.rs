use tracing::info;

use crate::{
    domain::{
        common::{CycleFoodConfig, services::Service},
        impact::{ImpactEngine, WeightTable},
    },
    infrastructure::{
        db::postgres::{Postgres, PostgresConfig},
        llm::chat_completions_client::ChatCompletionsClient,
        prediction::repositories::prediction_repository::PostgresPredictionRepository,
    },
};

pub type CycleFoodService = Service<ChatCompletionsClient, PostgresPredictionRepository>;

/// Wires the production adapters into a service.
pub async fn create_service(config: CycleFoodConfig) -> Result<CycleFoodService, anyhow::Error> {
    let postgres = Postgres::new(PostgresConfig {
        database_url: config.database.url(),
    })
    .await?;

    let food_lookup = ChatCompletionsClient::new(config.llm)?;
    let prediction_repository = PostgresPredictionRepository::new(postgres.get_db());

    let table = match config.engine.weights_path {
        Some(path) => {
            info!("Loading weight table from {}", path.display());
            WeightTable::from_path(path)?
        }
        None => WeightTable::default(),
    };
    let engine = ImpactEngine::new(table)?;

    Ok(Service::new(food_lookup, prediction_repository, engine))
}
