use std::sync::Arc;

use nutrimatch_core::application::NutriMatchService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: NutriMatchService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: NutriMatchService) -> Self {
        Self { args, service }
    }
}
