//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::RecommendationService;
use crate::domain::repositories::RecommendationRepository;

/// Service handle used by the HTTP layer.
///
/// The repository is type-erased so the same handlers run against PostgreSQL
/// in production and any other [`RecommendationRepository`] in tests.
pub type SharedRecommendationService = Arc<RecommendationService<dyn RecommendationRepository>>;

#[derive(Clone)]
pub struct AppState {
    pub recommendation_service: SharedRecommendationService,
}

impl AppState {
    pub fn new(recommendation_service: SharedRecommendationService) -> Self {
        Self {
            recommendation_service,
        }
    }
}
