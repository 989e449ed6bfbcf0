//! Handlers for recommendation endpoints.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::pagination::{PaginationMeta, PaginationParams};
use crate::api::dto::recommendation::{
    CreateRecommendationRequest, RecommendationItem, RecommendationListResponse,
    UpdateRecommendationRequest,
};
use crate::error::AppError;
use crate::state::AppState;

/// Lists recommendations, newest first.
///
/// # Endpoint
///
/// `GET /api/recommendations?page=1&page_size=25`
///
/// # Errors
///
/// Returns 400 if pagination parameters are out of range.
pub async fn recommendation_list_handler(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<RecommendationListResponse>, AppError> {
    let (offset, limit) = params
        .validate_and_get_offset_limit()
        .map_err(|e| AppError::bad_request(e, json!({})))?;

    let (items, total) = state.recommendation_service.list(offset, limit).await?;

    Ok(Json(RecommendationListResponse {
        pagination: PaginationMeta::new(params.page(), params.page_size(), total),
        items: items.into_iter().map(RecommendationItem::from).collect(),
    }))
}

/// Creates a recommendation.
///
/// # Endpoint
///
/// `POST /api/recommendations`
///
/// # Request Body
///
/// ```json
/// {
///   "quote": "A pleasure to work with.",
///   "who": "Jane Doe",
///   "who_url": "https://janedoe.example.com",
///   "where": "Acme Corp",
///   "where_url": "https://acme.example.com",
///   "position": "CTO",
///   "company": "Acme Corp",
///   "company_url": "https://acme.example.com"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 with every violated rule if the record is invalid.
/// Returns 422 if the body contains keys other than the eight attributes.
pub async fn create_recommendation_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateRecommendationRequest>,
) -> Result<(StatusCode, Json<RecommendationItem>), AppError> {
    payload.validate()?;

    let recommendation = state
        .recommendation_service
        .create(payload.into())
        .await?;

    Ok((StatusCode::CREATED, Json(recommendation.into())))
}

/// Fetches a single recommendation.
///
/// # Endpoint
///
/// `GET /api/recommendations/{id}`
///
/// # Errors
///
/// Returns 404 if the recommendation does not exist.
pub async fn get_recommendation_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<RecommendationItem>, AppError> {
    let recommendation = state.recommendation_service.get(id).await?;
    Ok(Json(recommendation.into()))
}

/// Partially updates a recommendation.
///
/// # Endpoint
///
/// `PATCH /api/recommendations/{id}`
///
/// The merged record is validated as a whole, so a patch can fail on a
/// field it did not touch only if that field was already invalid.
/// `null` clears an optional attribute; it is not accepted for `quote`,
/// `who`, `where` or `where_url`.
///
/// # Errors
///
/// Returns 400 if a field exceeds its length limit or the merged record is invalid.
/// Returns 404 if the recommendation does not exist.
/// Returns 422 if the body has unknown keys or `null` for a required attribute.
pub async fn update_recommendation_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Json(payload): Json<UpdateRecommendationRequest>,
) -> Result<Json<RecommendationItem>, AppError> {
    payload.validate()?;

    let recommendation = state
        .recommendation_service
        .update(id, payload.into())
        .await?;

    Ok(Json(recommendation.into()))
}

/// Deletes a recommendation.
///
/// # Endpoint
///
/// `DELETE /api/recommendations/{id}`
///
/// # Errors
///
/// Returns 404 if the recommendation does not exist.
pub async fn delete_recommendation_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.recommendation_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
