//! Application layer services implementing business logic.
//!
//! This layer orchestrates domain operations by coordinating repository calls
//! and validation. Services consume repository traits and provide a clean API
//! for HTTP handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::recommendation_service::RecommendationService`] - Validated recommendation CRUD

pub mod services;
