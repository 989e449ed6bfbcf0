//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod health;
pub mod recommendations;

pub use health::health_handler;
pub use recommendations::{
    create_recommendation_handler, delete_recommendation_handler, get_recommendation_handler,
    recommendation_list_handler, update_recommendation_handler,
};
