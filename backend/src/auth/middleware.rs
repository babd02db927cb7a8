//! Authentication middleware
//!
//! Provides the `Identity` extractor: it pulls a bearer token out of the
//! `Authorization` header, verifies it with the pre-computed keys in
//! `AppState`, and resolves it against the user store.
//!
//! A request without a token is not an error at this layer. Routes that
//! require authentication check for a resolved identity themselves, so
//! unauthenticated routes can share the same extractor.

use crate::error::ApiError;
use crate::repositories::UserRepository;
use crate::state::AppState;
use axum::{
    extract::FromRef,
    http::{header::AUTHORIZATION, request::Parts},
};
use uuid::Uuid;

/// Authenticated user resolved from a verified token
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub id: Uuid,
    pub username: String,
}

/// The request's identity: a resolved user, or none
///
/// `None` covers both "no token presented" and "token valid but the user no
/// longer exists in the store". A token that is present but fails
/// verification rejects the request instead.
#[derive(Debug, Clone)]
pub struct Identity(pub Option<AuthUser>);

impl Identity {
    /// The resolved user, or `MissingToken` for routes that require one
    pub fn require(self) -> Result<AuthUser, ApiError> {
        self.0.ok_or(ApiError::MissingToken)
    }
}

/// Extract the bearer token from an Authorization header value.
/// The `Bearer ` prefix is matched case-insensitively.
fn bearer_token(header: &str) -> Option<&str> {
    let (scheme, token) = header.split_once(' ')?;
    if scheme.eq_ignore_ascii_case("bearer") {
        Some(token.trim())
    } else {
        None
    }
}

#[axum::async_trait]
impl<S> axum::extract::FromRequestParts<S> for Identity
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);

        let token = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(bearer_token);

        let Some(token) = token else {
            // No credential presented; unauthenticated routes proceed
            return Ok(Identity(None));
        };

        // Fails the request with 401 on an invalid or expired token
        let claims = app_state.tokens().verify(token)?;

        // A verified token without an embedded user id is unusable
        let user_id = claims.id.ok_or(ApiError::MissingToken)?;

        // A lookup miss is not a request failure: the identity is simply
        // unresolved, and auth-requiring routes reject it downstream
        let user = UserRepository::find_by_id(app_state.db(), user_id).await?;

        Ok(Identity(user.map(|u| AuthUser {
            id: u.id,
            username: u.username,
        })))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bearer_prefix_is_case_insensitive() {
        assert_eq!(bearer_token("Bearer abc"), Some("abc"));
        assert_eq!(bearer_token("bearer abc"), Some("abc"));
        assert_eq!(bearer_token("BEARER abc"), Some("abc"));
    }

    #[test]
    fn test_other_schemes_are_ignored() {
        assert_eq!(bearer_token("Basic dXNlcjpwdw=="), None);
        assert_eq!(bearer_token("token-without-scheme"), None);
    }

    #[test]
    fn test_require_rejects_missing_identity() {
        let result = Identity(None).require();
        assert!(matches!(result, Err(ApiError::MissingToken)));
    }

    #[test]
    fn test_require_passes_resolved_identity() {
        let user = AuthUser {
            id: Uuid::new_v4(),
            username: "tester".to_string(),
        };
        let resolved = Identity(Some(user.clone())).require().unwrap();
        assert_eq!(resolved.id, user.id);
    }
}
