use std::sync::Arc;

use crate::domain::impact::engine::ImpactEngine;

/// Application service. Business operations are implemented on it per domain
/// (see `prediction::services`), generic over the outbound ports.
#[derive(Clone)]
pub struct Service<L, P> {
    pub(crate) food_lookup: L,
    pub(crate) prediction_repository: P,
    pub(crate) engine: Arc<ImpactEngine>,
}

impl<L, P> Service<L, P> {
    pub fn new(food_lookup: L, prediction_repository: P, engine: ImpactEngine) -> Self {
        Self {
            food_lookup,
            prediction_repository,
            engine: Arc::new(engine),
        }
    }
}
