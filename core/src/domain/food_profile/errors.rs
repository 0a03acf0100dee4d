use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NormalizationError {
    #[error("Malformed attribute values: {}", .fields.join(", "))]
    Malformed { fields: Vec<&'static str> },
}
