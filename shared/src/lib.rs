//! Bloglist Shared Library
//!
//! This crate contains the API request/response types and input validation
//! used by both the backend and the API client.

pub mod types;
pub mod validation;

// Re-export commonly used items
pub use types::*;
pub use validation::{validate_likes, validate_new_blog, validate_new_user, Violation};
