//! User service: registration, listing, and login
//!
//! Password hashing and verification run on the blocking thread pool; the
//! token service is passed by reference and uses pre-computed keys.

use crate::auth::{PasswordService, TokenService};
use crate::error::ApiError;
use crate::repositories::{BlogRepository, UserRecord, UserRepository};
use bloglist_shared::types::{LoginResponse, NewUser, UserResponse, UserWithBlogs};
use bloglist_shared::validation::validate_new_user;
use bloglist_shared::BlogRef;
use sqlx::PgPool;

/// User service for registration and authentication operations
pub struct UserService;

impl UserService {
    /// Register a new user
    ///
    /// The username must not be taken; the duplicate message matches the
    /// API contract ("... already exists").
    pub async fn register(pool: &PgPool, req: NewUser) -> Result<UserResponse, ApiError> {
        validate_new_user(&req)?;

        if UserRepository::username_exists(pool, &req.username).await? {
            return Err(ApiError::Validation(format!(
                "\"{}\" already exists",
                req.username
            )));
        }

        // Hash password on blocking thread pool (CPU-intensive)
        let password_hash = PasswordService::hash_async(req.password)
            .await
            .map_err(ApiError::Internal)?;

        let user = UserRepository::create(pool, &req.username, &req.name, &password_hash).await?;

        Ok(to_response(user))
    }

    /// List all users with their owned blogs reduced to {title, url}
    pub async fn list(pool: &PgPool) -> Result<Vec<UserWithBlogs>, ApiError> {
        let users = UserRepository::find_all(pool).await?;

        let mut result = Vec::with_capacity(users.len());
        for user in users {
            let blogs = BlogRepository::refs_by_ids(pool, &user.blog_ids)
                .await?
                .into_iter()
                .map(|b| BlogRef {
                    title: b.title,
                    url: b.url,
                })
                .collect();
            result.push(UserWithBlogs {
                id: user.id,
                username: user.username,
                name: user.name,
                blogs,
            });
        }

        Ok(result)
    }

    /// Login with username and password
    ///
    /// An unknown username and a wrong password produce the same response,
    /// so callers cannot probe for registered usernames.
    pub async fn login(
        pool: &PgPool,
        tokens: &TokenService,
        username: &str,
        password: &str,
    ) -> Result<LoginResponse, ApiError> {
        let user = UserRepository::find_by_username(pool, username)
            .await?
            .ok_or(ApiError::InvalidCredentials)?;

        // Verify password on blocking thread pool (CPU-intensive)
        let valid = PasswordService::verify_async(password.to_string(), user.password_hash.clone())
            .await
            .map_err(ApiError::Internal)?;

        if !valid {
            return Err(ApiError::InvalidCredentials);
        }

        let token = tokens.sign(user.id, &user.username)?;

        Ok(LoginResponse {
            token,
            username: user.username,
            name: user.name,
        })
    }
}

/// Outward user representation; the password hash never leaves this module
fn to_response(user: UserRecord) -> UserResponse {
    UserResponse {
        id: user.id,
        username: user.username,
        name: user.name,
        blogs: user.blog_ids,
    }
}
