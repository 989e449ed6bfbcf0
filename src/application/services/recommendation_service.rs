//! Recommendation management service.

use std::sync::Arc;

use crate::domain::entities::{Recommendation, RecommendationAttributes, RecommendationPatch};
use crate::domain::repositories::RecommendationRepository;
use crate::domain::validation::UrlPattern;
use crate::error::AppError;
use serde_json::json;

/// Service for creating, reading, updating, and deleting recommendations.
///
/// This is the save path: every create and update runs the record rules
/// first, and the repository is only reached when no rule is violated.
pub struct RecommendationService<R: RecommendationRepository + ?Sized> {
    repository: Arc<R>,
    url_pattern: Arc<UrlPattern>,
}

impl<R: RecommendationRepository + ?Sized> RecommendationService<R> {
    /// Creates a new recommendation service.
    ///
    /// # Arguments
    ///
    /// - `repository` - storage for recommendations
    /// - `url_pattern` - URL format rule applied to every `*_url` field
    pub fn new(repository: Arc<R>, url_pattern: Arc<UrlPattern>) -> Self {
        Self {
            repository,
            url_pattern,
        }
    }

    pub fn url_pattern(&self) -> &UrlPattern {
        &self.url_pattern
    }

    /// Runs the record rules.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] listing every violation.
    pub fn validate(&self, attributes: &RecommendationAttributes) -> Result<(), AppError> {
        let errors = attributes.validate(&self.url_pattern);
        if errors.is_empty() {
            return Ok(());
        }

        tracing::debug!(
            violations = errors.len(),
            who = %attributes.who,
            "Recommendation rejected"
        );
        Err(AppError::invalid_record(&errors))
    }

    /// Validates and stores a new recommendation.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if any record rule fails; nothing is stored.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create(
        &self,
        attributes: RecommendationAttributes,
    ) -> Result<Recommendation, AppError> {
        self.validate(&attributes)?;

        let created = self.repository.create(attributes).await?;
        tracing::info!(id = created.id, "Created {}", created);

        Ok(created)
    }

    /// Retrieves a recommendation by ID.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the recommendation does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get(&self, id: i64) -> Result<Recommendation, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Recommendation not found", json!({ "id": id })))
    }

    /// Lists a page of recommendations together with the total count.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list(
        &self,
        offset: i64,
        limit: i64,
    ) -> Result<(Vec<Recommendation>, i64), AppError> {
        let items = self.repository.list(offset, limit).await?;
        let total = self.repository.count().await?;
        Ok((items, total))
    }

    /// Applies a partial update and re-validates the merged record.
    ///
    /// An empty patch returns the stored record unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the recommendation does not exist.
    /// Returns [`AppError::Validation`] if the merged record breaks a rule.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn update(
        &self,
        id: i64,
        patch: RecommendationPatch,
    ) -> Result<Recommendation, AppError> {
        let current = self.get(id).await?;
        if patch.is_empty() {
            return Ok(current);
        }

        let mut attributes = current.attributes;
        patch.apply(&mut attributes);
        self.validate(&attributes)?;

        let updated = self.repository.update(id, attributes).await?;
        tracing::info!(id, "Updated {}", updated);

        Ok(updated)
    }

    /// Deletes a recommendation.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the recommendation does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        self.repository.delete(id).await?;
        tracing::info!(id, "Deleted recommendation");
        Ok(())
    }

    /// Checks storage connectivity.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the store is unreachable.
    pub async fn check_storage(&self) -> Result<(), AppError> {
        self.repository.ping().await
    }
}
