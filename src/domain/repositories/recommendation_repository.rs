//! Repository trait for recommendation storage.

use crate::domain::entities::{Recommendation, RecommendationAttributes};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for persisting recommendations.
///
/// Implementations store exactly what they are given. Validation happens
/// before these methods are called, in
/// [`crate::application::services::RecommendationService`].
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgRecommendationRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecommendationRepository: Send + Sync {
    /// Inserts a new recommendation and returns it with its assigned ID and timestamps.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, attributes: RecommendationAttributes)
    -> Result<Recommendation, AppError>;

    /// Finds a recommendation by its database ID.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<Recommendation>, AppError>;

    /// Lists recommendations, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list(&self, offset: i64, limit: i64) -> Result<Vec<Recommendation>, AppError>;

    /// Counts all stored recommendations.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn count(&self) -> Result<i64, AppError>;

    /// Replaces all eight attributes of an existing recommendation.
    ///
    /// Bumps `updated_at`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no recommendation has this ID.
    /// Returns [`AppError::Internal`] on database errors.
    async fn update(
        &self,
        id: i64,
        attributes: RecommendationAttributes,
    ) -> Result<Recommendation, AppError>;

    /// Deletes a recommendation.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no recommendation has this ID.
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, id: i64) -> Result<(), AppError>;

    /// Checks that the backing store is reachable.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the store cannot be queried.
    async fn ping(&self) -> Result<(), AppError>;
}
