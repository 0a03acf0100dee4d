use sea_orm::ActiveValue::Set;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, QuerySelect};
use tracing::{error, warn};
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    prediction::{entities::PredictionRecord, ports::PredictionRepository},
};
use crate::entity::predictions::{
    ActiveModel as PredictionActiveModel, Column as PredictionColumn, Entity as PredictionEntity,
};

#[derive(Debug, Clone)]
pub struct PostgresPredictionRepository {
    pub db: DatabaseConnection,
}

impl PostgresPredictionRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<serde_json::Value, CoreError> {
    serde_json::to_value(value).map_err(|e| {
        error!("Failed to serialize prediction: {}", e);
        CoreError::InternalServerError
    })
}

fn user_filter(user_id: Option<Uuid>) -> sea_orm::sea_query::SimpleExpr {
    match user_id {
        Some(user_id) => PredictionColumn::UserId.eq(user_id),
        None => PredictionColumn::UserId.is_null(),
    }
}

impl PredictionRepository for PostgresPredictionRepository {
    async fn create_prediction(
        &self,
        record: PredictionRecord,
    ) -> Result<PredictionRecord, CoreError> {
        PredictionEntity::insert(PredictionActiveModel {
            id: Set(record.id),
            food_name: Set(record.food_name.clone()),
            quantity: Set(record.quantity.clone()),
            food_data: Set(to_json(&record.profile)?),
            prediction_results: Set(to_json(&record.result)?),
            user_id: Set(record.user_id),
            created_at: Set(record.created_at.naive_utc()),
        })
        .exec_without_returning(&self.db)
        .await
        .map_err(|e| {
            error!("Failed to create prediction: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(record)
    }

    async fn get_recent(
        &self,
        user_id: Option<Uuid>,
        limit: u32,
    ) -> Result<Vec<PredictionRecord>, CoreError> {
        let models = PredictionEntity::find()
            .filter(user_filter(user_id))
            .order_by_desc(PredictionColumn::CreatedAt)
            .limit(u64::from(limit))
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to fetch predictions: {}", e);
                CoreError::InternalServerError
            })?;

        let records = models
            .into_iter()
            .filter_map(|model| {
                let id = model.id;
                PredictionRecord::try_from(model)
                    .inspect_err(|e| warn!("Skipping undecodable prediction {}: {}", id, e))
                    .ok()
            })
            .collect();

        Ok(records)
    }

    async fn delete_for_user(&self, user_id: Option<Uuid>) -> Result<u64, CoreError> {
        let result = PredictionEntity::delete_many()
            .filter(user_filter(user_id))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to clear predictions: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(result.rows_affected)
    }
}
