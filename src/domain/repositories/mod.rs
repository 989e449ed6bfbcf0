//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; implementations live in
//! `crate::infrastructure::persistence`. Mock implementations are generated
//! via `mockall` for unit tests.
//!
//! # Testing
//!
//! See `tests/repository_recommendation.rs` for the PostgreSQL contract tests.

pub mod recommendation_repository;

pub use recommendation_repository::RecommendationRepository;

#[cfg(test)]
pub use recommendation_repository::MockRecommendationRepository;
