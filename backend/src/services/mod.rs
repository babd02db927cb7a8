//! Business logic services
//!
//! Services encapsulate business logic and coordinate between
//! repositories and external systems.

pub mod blog;
pub mod user;

pub use blog::BlogService;
pub use user::UserService;
