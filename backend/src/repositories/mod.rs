//! Database repositories
//!
//! Provides data access layer for database operations.

pub mod blog;
pub mod user;

pub use blog::{BlogRecord, BlogRefRecord, BlogRepository, BlogWithOwnerRecord};
pub use user::{UserRecord, UserRepository};
