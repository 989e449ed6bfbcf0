//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization and validator
//! for request-level input limits.

pub mod health;
pub mod pagination;
pub mod recommendation;
