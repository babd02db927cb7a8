//! JWT token generation and validation
//!
//! The token service is a pure sign/verify pair over pre-computed keys,
//! cached in `AppState` so no key derivation happens per request.

use crate::error::ApiError;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, errors::ErrorKind, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

/// JWT claims
///
/// `id` is optional at decode time: a structurally valid token that carries
/// no user identifier must be detected explicitly rather than rejected as
/// undecodable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Username the token was issued for
    pub username: String,
    /// User identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Issued at (Unix timestamp)
    pub iat: i64,
}

/// Pre-computed JWT keys for efficient token operations
/// These are expensive to create, so we cache them in AppState
#[derive(Clone)]
pub struct JwtKeys {
    encoding: Arc<EncodingKey>,
    decoding: Arc<DecodingKey>,
}

impl JwtKeys {
    /// Create new JWT keys from secret
    /// This should be called once at startup
    pub fn new(secret: &str) -> Self {
        Self {
            encoding: Arc::new(EncodingKey::from_secret(secret.as_bytes())),
            decoding: Arc::new(DecodingKey::from_secret(secret.as_bytes())),
        }
    }

    pub fn encoding(&self) -> &EncodingKey {
        &self.encoding
    }

    pub fn decoding(&self) -> &DecodingKey {
        &self.decoding
    }
}

/// Token service: issues and verifies signed, time-limited identity tokens
///
/// Uses pre-computed keys wrapped in Arc for cheap cloning. Create once at
/// application startup and store in AppState, not per request.
#[derive(Clone)]
pub struct TokenService {
    keys: JwtKeys,
    expiry_secs: i64,
}

impl TokenService {
    /// Create a new token service with pre-computed keys
    pub fn new(secret: &str, expiry_secs: i64) -> Self {
        Self {
            keys: JwtKeys::new(secret),
            expiry_secs,
        }
    }

    /// Sign a token for a user
    pub fn sign(&self, user_id: Uuid, username: &str) -> Result<String, ApiError> {
        let now = Utc::now();
        let exp = now + Duration::seconds(self.expiry_secs);

        let claims = Claims {
            username: username.to_string(),
            id: Some(user_id),
            exp: exp.timestamp(),
            iat: now.timestamp(),
        };

        encode(&Header::default(), &claims, self.keys.encoding())
            .map_err(|e| ApiError::Internal(anyhow::anyhow!("Failed to sign token: {}", e)))
    }

    /// Verify a token and return its claims
    ///
    /// Distinguishes an expired token from any other verification failure;
    /// a missing embedded user id is left to the caller to detect via
    /// `claims.id`.
    pub fn verify(&self, token: &str) -> Result<Claims, ApiError> {
        let mut validation = Validation::default();
        validation.validate_exp = true;

        let token_data =
            decode::<Claims>(token, self.keys.decoding(), &validation).map_err(|e| {
                match e.kind() {
                    ErrorKind::ExpiredSignature => ApiError::TokenExpired,
                    _ => ApiError::TokenInvalid,
                }
            })?;

        Ok(token_data.claims)
    }

    /// Token lifetime in seconds
    #[inline]
    pub fn expiry_secs(&self) -> i64 {
        self.expiry_secs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_service() -> TokenService {
        TokenService::new("test-secret", 3600)
    }

    #[test]
    fn test_sign_and_verify() {
        let service = create_test_service();
        let user_id = Uuid::new_v4();

        let token = service.sign(user_id, "tester").unwrap();
        let claims = service.verify(&token).unwrap();

        assert_eq!(claims.id, Some(user_id));
        assert_eq!(claims.username, "tester");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_garbage_token_is_invalid() {
        let service = create_test_service();
        let result = service.verify("invalid.token.here");

        assert!(matches!(result, Err(ApiError::TokenInvalid)));
    }

    #[test]
    fn test_wrong_secret_is_invalid() {
        let service = create_test_service();
        let other = TokenService::new("other-secret", 3600);

        let token = other.sign(Uuid::new_v4(), "tester").unwrap();
        let result = service.verify(&token);

        assert!(matches!(result, Err(ApiError::TokenInvalid)));
    }

    #[test]
    fn test_expired_token_is_reported_as_expired() {
        // Expiry far enough in the past to clear the default leeway
        let service = TokenService::new("test-secret", -3600);
        let token = service.sign(Uuid::new_v4(), "tester").unwrap();

        let result = service.verify(&token);
        assert!(matches!(result, Err(ApiError::TokenExpired)));
    }

    #[test]
    fn test_token_without_id_claim_decodes_with_none() {
        let service = create_test_service();
        let now = Utc::now().timestamp();
        let claims = Claims {
            username: "tester".to_string(),
            id: None,
            exp: now + 3600,
            iat: now,
        };
        let token = encode(&Header::default(), &claims, service.keys.encoding()).unwrap();

        let decoded = service.verify(&token).unwrap();
        assert!(decoded.id.is_none());
    }

    #[test]
    fn test_service_is_clone_cheap() {
        let service = create_test_service();
        let _cloned = service.clone(); // Should be cheap due to Arc
    }
}
