pub mod clear_predictions;
pub mod get_prediction_history;
pub mod predict_food;
