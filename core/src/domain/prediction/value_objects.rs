use uuid::Uuid;

pub const DEFAULT_HISTORY_LIMIT: u32 = 10;
pub const MAX_HISTORY_LIMIT: u32 = 100;

#[derive(Debug, Clone)]
pub struct PredictFoodInput {
    pub food_name: String,
    pub quantity: Option<String>,
    /// Predictions are only stored for identified users.
    pub user_id: Option<Uuid>,
}

#[derive(Debug, Clone)]
pub struct GetPredictionHistoryInput {
    pub user_id: Option<Uuid>,
    pub limit: Option<u32>,
}

impl GetPredictionHistoryInput {
    pub fn limit(&self) -> u32 {
        self.limit
            .unwrap_or(DEFAULT_HISTORY_LIMIT)
            .clamp(1, MAX_HISTORY_LIMIT)
    }
}

#[derive(Debug, Clone)]
pub struct ClearPredictionsInput {
    pub user_id: Option<Uuid>,
}
