//! Domain layer containing business entities and logic.
//!
//! This module defines the recommendation record, its validation rules and the
//! repository interface, independent of infrastructure concerns.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`validation`] - Presence and URL format rules, and the injected [`validation::UrlPattern`]
//! - [`repositories`] - Data access trait definitions
//!
//! # Save Flow
//!
//! 1. Client code builds [`entities::RecommendationAttributes`]
//! 2. [`crate::application::services::RecommendationService`] calls `validate()` explicitly
//! 3. A non-empty error list aborts the save
//! 4. Otherwise the record is persisted via [`repositories::RecommendationRepository`]

pub mod entities;
pub mod repositories;
pub mod validation;
