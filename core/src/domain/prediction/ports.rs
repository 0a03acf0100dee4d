use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    food_profile::RawAttributes,
    prediction::{
        entities::{PredictionOutcome, PredictionRecord},
        value_objects::{ClearPredictionsInput, GetPredictionHistoryInput, PredictFoodInput},
    },
};

/// Source of loosely-typed food attributes, typically a language model.
#[cfg_attr(test, mockall::automock)]
pub trait FoodAttributeLookup: Send + Sync {
    fn lookup_food_attributes(
        &self,
        food_name: String,
    ) -> impl Future<Output = Result<RawAttributes, CoreError>> + Send;
}

/// Repository trait for prediction records
#[cfg_attr(test, mockall::automock)]
pub trait PredictionRepository: Send + Sync {
    fn create_prediction(
        &self,
        record: PredictionRecord,
    ) -> impl Future<Output = Result<PredictionRecord, CoreError>> + Send;

    /// Most recent first. `None` selects anonymous records.
    fn get_recent(
        &self,
        user_id: Option<Uuid>,
        limit: u32,
    ) -> impl Future<Output = Result<Vec<PredictionRecord>, CoreError>> + Send;

    fn delete_for_user(
        &self,
        user_id: Option<Uuid>,
    ) -> impl Future<Output = Result<u64, CoreError>> + Send;
}

pub trait PredictionService: Send + Sync {
    fn predict_food(
        &self,
        input: PredictFoodInput,
    ) -> impl Future<Output = Result<PredictionOutcome, CoreError>> + Send;

    fn get_prediction_history(
        &self,
        input: GetPredictionHistoryInput,
    ) -> impl Future<Output = Result<Vec<PredictionRecord>, CoreError>> + Send;

    fn clear_predictions(
        &self,
        input: ClearPredictionsInput,
    ) -> impl Future<Output = Result<u64, CoreError>> + Send;
}
