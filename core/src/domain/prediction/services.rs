use tracing::{debug, error, info, instrument, warn};

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    food_profile::{RawAttributes, STANDARD_SERVING, normalize_with_report},
    prediction::{
        entities::{NonEdibleFood, PredictionOutcome, PredictionRecord},
        ports::{FoodAttributeLookup, PredictionRepository, PredictionService},
        value_objects::{ClearPredictionsInput, GetPredictionHistoryInput, PredictFoodInput},
    },
};

impl<L, P> PredictionService for Service<L, P>
where
    L: FoodAttributeLookup,
    P: PredictionRepository,
{
    #[instrument(skip(self, input), fields(food_name = %input.food_name))]
    async fn predict_food(&self, input: PredictFoodInput) -> Result<PredictionOutcome, CoreError> {
        let food_name = input.food_name.trim().to_string();
        if food_name.is_empty() {
            return Err(CoreError::Invalid);
        }

        let quantity = input
            .quantity
            .map(|q| q.trim().to_string())
            .filter(|q| !q.is_empty())
            .unwrap_or_else(|| STANDARD_SERVING.to_string());

        let mut raw = match self
            .food_lookup
            .lookup_food_attributes(food_name.clone())
            .await
        {
            Ok(raw) => raw,
            Err(e) => {
                warn!("Food attribute lookup failed, using fallback attributes: {}", e);
                RawAttributes::fallback(&food_name)
            }
        };

        if let Some(alert) = raw.alert() {
            info!("Lookup flagged input: {}", alert);
            return Ok(PredictionOutcome::Alert(alert));
        }

        raw.set_quantity(&quantity);
        let (profile, report) = normalize_with_report(&raw);

        if !report.is_clean() {
            debug!(
                recovered = ?report.recovered_fields(),
                "Defaulted malformed attribute values"
            );
        }

        if profile.is_non_edible {
            return Ok(PredictionOutcome::NonEdible(NonEdibleFood::new(
                food_name, quantity, profile,
            )));
        }

        let result = self.engine.predict(&profile, &quantity);
        let record = PredictionRecord::new(food_name, quantity, profile, result, input.user_id);

        if record.user_id.is_some()
            && let Err(e) = self
                .prediction_repository
                .create_prediction(record.clone())
                .await
        {
            error!("Failed to save prediction: {}", e);
        }

        Ok(PredictionOutcome::Predicted(record))
    }

    #[instrument(skip(self, input), fields(user_id = ?input.user_id))]
    async fn get_prediction_history(
        &self,
        input: GetPredictionHistoryInput,
    ) -> Result<Vec<PredictionRecord>, CoreError> {
        self.prediction_repository
            .get_recent(input.user_id, input.limit())
            .await
    }

    #[instrument(skip(self, input), fields(user_id = ?input.user_id))]
    async fn clear_predictions(&self, input: ClearPredictionsInput) -> Result<u64, CoreError> {
        let deleted = self
            .prediction_repository
            .delete_for_user(input.user_id)
            .await?;

        info!("Cleared {} predictions", deleted);
        Ok(deleted)
    }
}

#[cfg(test)]
mod tests {
    use mockall::predicate::eq;
    use serde_json::json;
    use uuid::Uuid;

    use super::*;
    use crate::domain::{
        food_profile::{CanonicalFoodProfile, DEFAULT_ALERT},
        impact::{ImpactClassification, ImpactEngine},
        prediction::ports::{MockFoodAttributeLookup, MockPredictionRepository},
    };

    fn service(
        lookup: MockFoodAttributeLookup,
        repository: MockPredictionRepository,
    ) -> Service<MockFoodAttributeLookup, MockPredictionRepository> {
        Service::new(lookup, repository, ImpactEngine::default())
    }

    fn lookup_returning(value: serde_json::Value) -> MockFoodAttributeLookup {
        let mut lookup = MockFoodAttributeLookup::new();
        lookup.expect_lookup_food_attributes().returning(move |_| {
            let raw = RawAttributes::from(value.clone());
            Box::pin(async move { Ok(raw) })
        });
        lookup
    }

    fn input(food_name: &str, user_id: Option<Uuid>) -> PredictFoodInput {
        PredictFoodInput {
            food_name: food_name.to_string(),
            quantity: None,
            user_id,
        }
    }

    #[tokio::test]
    async fn test_blank_food_name_is_invalid() {
        let service = service(MockFoodAttributeLookup::new(), MockPredictionRepository::new());

        let result = service.predict_food(input("   ", None)).await;

        assert_eq!(result, Err(CoreError::Invalid));
    }

    #[tokio::test]
    async fn test_anonymous_prediction_is_not_saved() {
        let lookup = lookup_returning(json!({
            "food_name": "Espresso",
            "food_category": "Beverages",
            "processing_level": "Processed",
            "caffeine_content_mg": 150,
            "glycemic_index": 70,
            "inflammatory_index": 8
        }));
        let mut repository = MockPredictionRepository::new();
        repository.expect_create_prediction().never();

        let outcome = service(lookup, repository)
            .predict_food(input("Espresso", None))
            .await
            .unwrap();

        let PredictionOutcome::Predicted(record) = outcome else {
            panic!("expected a prediction");
        };
        assert_eq!(record.quantity, "Standard serving");
        assert!(record.result.is_complete());
        assert!(record.result.count(ImpactClassification::Harmful) >= 1);
    }

    #[tokio::test]
    async fn test_prediction_is_saved_for_user() {
        let user_id = Uuid::new_v4();
        let lookup = lookup_returning(json!({ "food_category": "Fruits" }));
        let mut repository = MockPredictionRepository::new();
        repository
            .expect_create_prediction()
            .times(1)
            .withf(move |record| record.user_id == Some(user_id) && record.food_name == "apple")
            .returning(|record| Box::pin(async move { Ok(record) }));

        let outcome = service(lookup, repository)
            .predict_food(PredictFoodInput {
                food_name: " apple ".to_string(),
                quantity: Some("half".to_string()),
                user_id: Some(user_id),
            })
            .await
            .unwrap();

        let PredictionOutcome::Predicted(record) = outcome else {
            panic!("expected a prediction");
        };
        assert_eq!(record.result.quantity_multiplier, 0.5);
        assert_eq!(record.profile.quantity_modifier, "half");
    }

    #[tokio::test]
    async fn test_save_failure_does_not_fail_prediction() {
        let lookup = lookup_returning(json!({}));
        let mut repository = MockPredictionRepository::new();
        repository
            .expect_create_prediction()
            .times(1)
            .returning(|_| Box::pin(async { Err(CoreError::InternalServerError) }));

        let outcome = service(lookup, repository)
            .predict_food(input("bread", Some(Uuid::new_v4())))
            .await;

        assert!(matches!(outcome, Ok(PredictionOutcome::Predicted(_))));
    }

    #[tokio::test]
    async fn test_lookup_failure_uses_fallback_attributes() {
        let mut lookup = MockFoodAttributeLookup::new();
        lookup.expect_lookup_food_attributes().returning(|_| {
            Box::pin(async { Err(CoreError::ExternalServiceError("timeout".to_string())) })
        });

        let outcome = service(lookup, MockPredictionRepository::new())
            .predict_food(input("pizza", None))
            .await
            .unwrap();

        let PredictionOutcome::Predicted(record) = outcome else {
            panic!("expected a prediction");
        };
        assert_eq!(record.profile, CanonicalFoodProfile::default());
        assert_eq!(record.result.count(ImpactClassification::Neutral), 6);
    }

    #[tokio::test]
    async fn test_non_edible_item_is_reported_and_not_saved() {
        let lookup = lookup_returning(json!({
            "name": "stapler",
            "category": "None",
            "is_non_edible": true
        }));
        let mut repository = MockPredictionRepository::new();
        repository.expect_create_prediction().never();

        let outcome = service(lookup, repository)
            .predict_food(input("stapler", Some(Uuid::new_v4())))
            .await
            .unwrap();

        let PredictionOutcome::NonEdible(food) = outcome else {
            panic!("expected a non-edible outcome");
        };
        assert!(food.profile.is_non_edible);
        assert_eq!(
            food.message,
            "'stapler' is not a food item. Please enter a valid food name."
        );
    }

    #[tokio::test]
    async fn test_alert_is_returned() {
        let lookup = lookup_returning(json!({ "alert": "Please enter a single food" }));

        let outcome = service(lookup, MockPredictionRepository::new())
            .predict_food(input("everything", None))
            .await;

        assert_eq!(
            outcome,
            Ok(PredictionOutcome::Alert("Please enter a single food".to_string()))
        );
    }

    #[tokio::test]
    async fn test_null_alert_still_stops_prediction() {
        let lookup = lookup_returning(json!({ "alert": null, "food_category": "Fruits" }));
        let mut repository = MockPredictionRepository::new();
        repository.expect_create_prediction().never();

        let outcome = service(lookup, repository)
            .predict_food(input("apple", Some(Uuid::new_v4())))
            .await;

        assert_eq!(
            outcome,
            Ok(PredictionOutcome::Alert(DEFAULT_ALERT.to_string()))
        );
    }

    #[tokio::test]
    async fn test_history_uses_default_and_capped_limits() {
        let user_id = Uuid::new_v4();
        let mut repository = MockPredictionRepository::new();
        repository
            .expect_get_recent()
            .with(eq(Some(user_id)), eq(10))
            .times(1)
            .returning(|_, _| Box::pin(async { Ok(vec![]) }));
        repository
            .expect_get_recent()
            .with(eq(Some(user_id)), eq(100))
            .times(1)
            .returning(|_, _| Box::pin(async { Ok(vec![]) }));

        let service = service(MockFoodAttributeLookup::new(), repository);

        let history = service
            .get_prediction_history(GetPredictionHistoryInput {
                user_id: Some(user_id),
                limit: None,
            })
            .await
            .unwrap();
        assert!(history.is_empty());

        service
            .get_prediction_history(GetPredictionHistoryInput {
                user_id: Some(user_id),
                limit: Some(5000),
            })
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_clear_predictions_returns_count() {
        let mut repository = MockPredictionRepository::new();
        repository
            .expect_delete_for_user()
            .with(eq(None))
            .returning(|_| Box::pin(async { Ok(3) }));

        let deleted = service(MockFoodAttributeLookup::new(), repository)
            .clear_predictions(ClearPredictionsInput { user_id: None })
            .await;

        assert_eq!(deleted, Ok(3));
    }
}
