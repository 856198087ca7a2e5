pub mod assistant;
pub mod catalog;
pub mod content;
pub mod estimate;
pub mod health;
pub mod metrics_handler;

use crate::assistant::AssistantService;
use crate::config::EstimatorConfig;
use crate::content::SiteContent;
use crate::estimator::CostEstimator;
use std::sync::Arc;

/// Shared, read-only state behind every API route
#[derive(Clone)]
pub struct AppState {
    pub estimator: Arc<CostEstimator>,
    pub estimator_config: Arc<EstimatorConfig>,
    pub content: Arc<SiteContent>,
    pub assistant: Arc<AssistantService>,
}

impl AppState {
    pub fn new(
        estimator: CostEstimator,
        estimator_config: EstimatorConfig,
        content: SiteContent,
        assistant: AssistantService,
    ) -> Self {
        Self {
            estimator: Arc::new(estimator),
            estimator_config: Arc::new(estimator_config),
            content: Arc::new(content),
            assistant: Arc::new(assistant),
        }
    }
}
