//! Input validation functions
//!
//! Validation is kept out of the storage layer: plain request structs are
//! checked by these functions before every persistence call, and failures
//! come back as named violations rather than thrown from a save hook.

use crate::types::{NewBlog, NewUser};
use thiserror::Error;

/// A named constraint violation for a request field
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Violation {
    #[error("title and url are required")]
    MissingTitleOrUrl,

    #[error("likes must not be negative")]
    NegativeLikes,

    #[error("username is required")]
    MissingUsername,

    #[error("password must be at least 3 characters")]
    PasswordTooShort,
}

/// Validate a blog creation request: title and url must be present and
/// non-empty, likes (when given) must be non-negative.
pub fn validate_new_blog(blog: &NewBlog) -> Result<(), Violation> {
    let has_title = blog.title.as_deref().is_some_and(|t| !t.trim().is_empty());
    let has_url = blog.url.as_deref().is_some_and(|u| !u.trim().is_empty());
    if !has_title || !has_url {
        return Err(Violation::MissingTitleOrUrl);
    }
    if let Some(likes) = blog.likes {
        validate_likes(likes)?;
    }
    Ok(())
}

/// Validate a likes value: must never go negative.
pub fn validate_likes(likes: i32) -> Result<(), Violation> {
    if likes < 0 {
        return Err(Violation::NegativeLikes);
    }
    Ok(())
}

/// Validate a registration request
pub fn validate_new_user(user: &NewUser) -> Result<(), Violation> {
    if user.username.trim().is_empty() {
        return Err(Violation::MissingUsername);
    }
    if user.password.len() < 3 {
        return Err(Violation::PasswordTooShort);
    }
    Ok(())
}
