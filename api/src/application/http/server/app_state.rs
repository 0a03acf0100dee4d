use std::sync::Arc;

use cyclefood_core::application::CycleFoodService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: CycleFoodService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: CycleFoodService) -> Self {
        Self { args, service }
    }
}
