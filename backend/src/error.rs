//! Application error handling
//!
//! Every business failure is an explicit `ApiError` value carried up through
//! the handlers and translated to an HTTP response exactly once, here.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use bloglist_shared::{types::ErrorBody, validation::Violation};
use thiserror::Error;
use tracing::error;

/// API error type that can be converted to HTTP responses
#[derive(Error, Debug)]
pub enum ApiError {
    /// Identifier in the path is not a valid UUID
    #[error("malformatted id")]
    MalformedId,

    /// A request field violated a schema constraint
    #[error("{0}")]
    Validation(String),

    /// The requested record does not exist
    #[error("not found")]
    NotFound,

    /// Bearer token failed the signature/format check
    #[error("invalid token")]
    TokenInvalid,

    /// Bearer token is past its expiry
    #[error("token expired")]
    TokenExpired,

    /// No usable identity: header absent, or token carries no user id
    #[error("token missing or invalid")]
    MissingToken,

    /// Login failed; unknown user and wrong password are indistinguishable
    #[error("invalid username or password")]
    InvalidCredentials,

    #[error("internal server error")]
    Internal(#[from] anyhow::Error),

    #[error("internal server error")]
    Database(sqlx::Error),
}

impl From<Violation> for ApiError {
    fn from(violation: Violation) -> Self {
        ApiError::Validation(violation.to_string())
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        // A concurrent registration can slip past the username pre-check and
        // trip the UNIQUE constraint instead; report it as the same 400 the
        // pre-check produces.
        if let sqlx::Error::Database(db_err) = &err {
            if db_err.is_unique_violation() {
                return ApiError::Validation("username already exists".to_string());
            }
        }
        ApiError::Database(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::MalformedId | ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::TokenInvalid
            | ApiError::TokenExpired
            | ApiError::MissingToken
            | ApiError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Internal(err) => {
                error!("Internal error: {:?}", err);
                StatusCode::INTERNAL_SERVER_ERROR
            }
            ApiError::Database(err) => {
                error!("Database error: {:?}", err);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        // Not-found responses carry no body; everything else reports a
        // uniform {"error": ...} object
        if matches!(self, ApiError::NotFound) {
            return status.into_response();
        }

        let body = Json(ErrorBody {
            error: self.to_string(),
        });

        (status, body).into_response()
    }
}

/// Result type alias for API handlers
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_malformed_id_status() {
        let response = ApiError::MalformedId.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_validation_error_status() {
        let error = ApiError::Validation("title and url are required".to_string());
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_found_status() {
        let response = ApiError::NotFound.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[rstest]
    #[case::invalid(ApiError::TokenInvalid)]
    #[case::expired(ApiError::TokenExpired)]
    #[case::missing(ApiError::MissingToken)]
    #[case::bad_credentials(ApiError::InvalidCredentials)]
    fn test_token_errors_are_unauthorized(#[case] error: ApiError) {
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[rstest]
    #[case(ApiError::MalformedId, "malformatted id")]
    #[case(ApiError::TokenInvalid, "invalid token")]
    #[case(ApiError::TokenExpired, "token expired")]
    #[case(ApiError::MissingToken, "token missing or invalid")]
    #[case(ApiError::InvalidCredentials, "invalid username or password")]
    #[tokio::test]
    async fn test_error_body_matches_contract(#[case] error: ApiError, #[case] expected: &str) {
        let response = error.into_response();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: ErrorBody = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body.error, expected);
    }

    #[tokio::test]
    async fn test_not_found_has_empty_body() {
        let response = ApiError::NotFound.into_response();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert!(bytes.is_empty());
    }

    /// Stand-in for Postgres' duplicate-key error
    #[derive(Debug)]
    struct DuplicateKey;

    impl std::fmt::Display for DuplicateKey {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(
                f,
                "duplicate key value violates unique constraint \"users_username_key\""
            )
        }
    }

    impl std::error::Error for DuplicateKey {}

    impl sqlx::error::DatabaseError for DuplicateKey {
        fn message(&self) -> &str {
            "duplicate key value violates unique constraint \"users_username_key\""
        }

        fn code(&self) -> Option<std::borrow::Cow<'_, str>> {
            Some("23505".into())
        }

        fn kind(&self) -> sqlx::error::ErrorKind {
            sqlx::error::ErrorKind::UniqueViolation
        }

        fn as_error(&self) -> &(dyn std::error::Error + Send + Sync + 'static) {
            self
        }

        fn as_error_mut(&mut self) -> &mut (dyn std::error::Error + Send + Sync + 'static) {
            self
        }

        fn into_error(self: Box<Self>) -> Box<dyn std::error::Error + Send + Sync + 'static> {
            self
        }
    }

    #[test]
    fn test_unique_violation_becomes_validation_error() {
        // An insert that loses the race with the exists pre-check must still
        // produce the 400 "already exists" response, not a 500
        let error = ApiError::from(sqlx::Error::Database(Box::new(DuplicateKey)));

        match &error {
            ApiError::Validation(msg) => assert!(msg.contains("already exists")),
            other => panic!("expected validation error, got {other:?}"),
        }
        assert_eq!(error.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_other_database_errors_stay_internal() {
        let error = ApiError::from(sqlx::Error::RowNotFound);
        assert!(matches!(error, ApiError::Database(_)));
        assert_eq!(
            error.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
