use chrono::{TimeZone, Utc};

use crate::domain::prediction::entities::PredictionRecord;
use crate::entity::predictions::Model as PredictionModel;

/// Stored JSON may predate the current profile or result layout, so the
/// conversion can fail.
impl TryFrom<PredictionModel> for PredictionRecord {
    type Error = serde_json::Error;

    fn try_from(model: PredictionModel) -> Result<Self, Self::Error> {
        Ok(PredictionRecord {
            id: model.id,
            food_name: model.food_name,
            quantity: model.quantity,
            profile: serde_json::from_value(model.food_data)?,
            result: serde_json::from_value(model.prediction_results)?,
            user_id: model.user_id,
            created_at: Utc.from_utc_datetime(&model.created_at),
        })
    }
}
