//! Core domain entities representing the business data model.
//!
//! # Entity Types
//!
//! - [`Recommendation`] - A stored recommendation with its timestamps
//! - [`RecommendationAttributes`] - The eight assignable fields, used for creation
//! - [`RecommendationPatch`] - Partial updates
//!
//! Entities are plain data structures. The only behavior they carry is the
//! record validation rules and the display label.

pub mod recommendation;

pub use recommendation::{Recommendation, RecommendationAttributes, RecommendationPatch};
