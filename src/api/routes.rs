//! API route configuration.

use crate::api::handlers::{
    create_recommendation_handler, delete_recommendation_handler, get_recommendation_handler,
    recommendation_list_handler, update_recommendation_handler,
};
use crate::state::AppState;
use axum::{Router, routing::get};

/// All API routes.
///
/// # Endpoints
///
/// - `GET    /recommendations`       - List recommendations (paginated)
/// - `POST   /recommendations`       - Create a recommendation
/// - `GET    /recommendations/{id}`  - Fetch a recommendation
/// - `PATCH  /recommendations/{id}`  - Partially update a recommendation
/// - `DELETE /recommendations/{id}`  - Delete a recommendation
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/recommendations",
            get(recommendation_list_handler).post(create_recommendation_handler),
        )
        .route(
            "/recommendations/{id}",
            get(get_recommendation_handler)
                .patch(update_recommendation_handler)
                .delete(delete_recommendation_handler),
        )
}
