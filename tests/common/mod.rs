#![allow(dead_code)]

use async_trait::async_trait;
use axum::{Router, routing::get};
use chrono::Utc;
use recommendations::api;
use recommendations::api::handlers::health_handler;
use recommendations::application::services::RecommendationService;
use recommendations::domain::entities::{Recommendation, RecommendationAttributes};
use recommendations::domain::repositories::RecommendationRepository;
use recommendations::domain::validation::UrlPattern;
use recommendations::error::AppError;
use recommendations::state::AppState;
use serde_json::{Value, json};
use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};
use std::sync::{Arc, Mutex};

/// Repository backed by a vector, for handler tests that need no database.
#[derive(Default)]
pub struct InMemoryRecommendationRepository {
    rows: Mutex<Vec<Recommendation>>,
    next_id: AtomicI64,
    unavailable: AtomicBool,
}

impl InMemoryRecommendationRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent `ping` fail.
    pub fn set_unavailable(&self) {
        self.unavailable.store(true, Ordering::SeqCst);
    }

    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }
}

#[async_trait]
impl RecommendationRepository for InMemoryRecommendationRepository {
    async fn create(
        &self,
        attributes: RecommendationAttributes,
    ) -> Result<Recommendation, AppError> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let now = Utc::now();
        let recommendation = Recommendation::new(id, attributes, now, now);

        self.rows.lock().unwrap().push(recommendation.clone());
        Ok(recommendation)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Recommendation>, AppError> {
        Ok(self.rows.lock().unwrap().iter().find(|r| r.id == id).cloned())
    }

    async fn list(&self, offset: i64, limit: i64) -> Result<Vec<Recommendation>, AppError> {
        let rows = self.rows.lock().unwrap();
        Ok(rows
            .iter()
            .rev()
            .skip(offset as usize)
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn count(&self) -> Result<i64, AppError> {
        Ok(self.rows.lock().unwrap().len() as i64)
    }

    async fn update(
        &self,
        id: i64,
        attributes: RecommendationAttributes,
    ) -> Result<Recommendation, AppError> {
        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| AppError::not_found("Recommendation not found", json!({ "id": id })))?;

        row.attributes = attributes;
        row.updated_at = Utc::now();
        Ok(row.clone())
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|r| r.id != id);

        if rows.len() == before {
            return Err(AppError::not_found(
                "Recommendation not found",
                json!({ "id": id }),
            ));
        }
        Ok(())
    }

    async fn ping(&self) -> Result<(), AppError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(AppError::internal("connection refused", json!({})));
        }
        Ok(())
    }
}

pub fn create_test_state() -> (AppState, Arc<InMemoryRecommendationRepository>) {
    let repository = Arc::new(InMemoryRecommendationRepository::new());
    let service = RecommendationService::<dyn RecommendationRepository>::new(
        repository.clone(),
        Arc::new(UrlPattern::default()),
    );

    (AppState::new(Arc::new(service)), repository)
}

/// Router with the same routes as the server, without middleware.
pub fn test_app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .nest("/api", api::routes::routes())
        .with_state(state)
}

pub fn valid_payload() -> Value {
    json!({
        "quote": "One of the sharpest engineers I have worked with.",
        "who": "Jane Doe",
        "who_url": "https://janedoe.example.com",
        "where": "Acme Corp",
        "where_url": "https://acme.example.com",
        "position": "CTO",
        "company": "Acme Corp",
        "company_url": "https://acme.example.com"
    })
}

/// Field names listed under `error.details.errors`.
pub fn error_fields(body: &Value) -> Vec<String> {
    body["error"]["details"]["errors"]
        .as_array()
        .map(|errors| {
            errors
                .iter()
                .map(|e| e["field"].as_str().unwrap_or_default().to_string())
                .collect()
        })
        .unwrap_or_default()
}
