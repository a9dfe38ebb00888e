//! HS256 JWT adapter for access token validation.
//!
//! Tokens are signed with a shared secret (`auth.access_token_key`) and carry
//! the user id in an `id` claim, plus an optional `username`.

use async_trait::async_trait;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{AuthError, AuthenticatedUser, Timestamp, UserId};
use crate::ports::SessionValidator;

/// Claims carried by forum access tokens.
#[derive(Debug, Serialize, Deserialize)]
struct AccessClaims {
    id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    username: Option<String>,
    exp: i64,
}

/// Validates (and, for tooling and tests, issues) HS256 access tokens.
pub struct JwtSessionValidator {
    key: SecretString,
    token_age_secs: i64,
}

impl JwtSessionValidator {
    pub fn new(key: impl Into<String>, token_age_secs: u64) -> Self {
        Self::from_secret(SecretString::new(key.into()), token_age_secs)
    }

    /// Builds a validator from a key already held as a secret.
    pub fn from_secret(key: SecretString, token_age_secs: u64) -> Self {
        Self {
            key,
            token_age_secs: i64::try_from(token_age_secs).unwrap_or(i64::MAX),
        }
    }

    /// Signs an access token for `user` expiring after the configured age.
    pub fn issue(&self, user: &AuthenticatedUser) -> Result<String, AuthError> {
        let expires_at = Timestamp::now()
            .plus_secs(self.token_age_secs)
            .ok_or_else(|| {
                tracing::error!(token_age_secs = self.token_age_secs, "token age out of range");
                AuthError::service_unavailable("token age out of range")
            })?;
        let claims = AccessClaims {
            id: user.id.as_str().to_string(),
            username: user.username.clone(),
            exp: expires_at.as_datetime().timestamp(),
        };

        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(self.key.expose_secret().as_bytes()),
        )
        .map_err(|e| {
            tracing::error!("Failed to sign access token: {}", e);
            AuthError::service_unavailable("token signing failed")
        })
    }
}

#[async_trait]
impl SessionValidator for JwtSessionValidator {
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_required_spec_claims(&["exp"]);

        let data = decode::<AccessClaims>(
            token,
            &DecodingKey::from_secret(self.key.expose_secret().as_bytes()),
            &validation,
        )
        .map_err(|e| {
            use jsonwebtoken::errors::ErrorKind;
            match e.kind() {
                ErrorKind::ExpiredSignature => {
                    tracing::debug!("Token expired");
                    AuthError::TokenExpired
                }
                _ => {
                    tracing::warn!("Token validation failed: {}", e);
                    AuthError::InvalidToken
                }
            }
        })?;

        let id = UserId::new(data.claims.id).map_err(|_| {
            tracing::warn!("Token carries an empty user id");
            AuthError::InvalidToken
        })?;

        Ok(AuthenticatedUser::new(id, data.claims.username))
    }
}

impl std::fmt::Debug for JwtSessionValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtSessionValidator")
            .field("token_age_secs", &self.token_age_secs)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> AuthenticatedUser {
        AuthenticatedUser::new(UserId::new("user-123").unwrap(), Some("dicoding".to_string()))
    }

    #[tokio::test]
    async fn issued_token_validates() {
        let validator = JwtSessionValidator::new("super-secret-key", 3000);
        let token = validator.issue(&user()).unwrap();

        let validated = validator.validate(&token).await.unwrap();

        assert_eq!(validated.id.as_str(), "user-123");
        assert_eq!(validated.username.as_deref(), Some("dicoding"));
    }

    #[tokio::test]
    async fn token_signed_with_other_key_is_rejected() {
        let issuer = JwtSessionValidator::new("key-one", 3000);
        let validator = JwtSessionValidator::new("key-two", 3000);
        let token = issuer.issue(&user()).unwrap();

        let result = validator.validate(&token).await;

        assert!(matches!(result, Err(AuthError::InvalidToken)));
    }

    #[tokio::test]
    async fn expired_token_is_reported_as_expired() {
        let key = "super-secret-key";
        let claims = AccessClaims {
            id: "user-123".to_string(),
            username: None,
            exp: Timestamp::now().plus_secs(-3600).unwrap().as_datetime().timestamp(),
        };
        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(key.as_bytes()),
        )
        .unwrap();

        let result = JwtSessionValidator::new(key, 3000).validate(&token).await;

        assert!(matches!(result, Err(AuthError::TokenExpired)));
    }

    #[tokio::test]
    async fn garbage_is_invalid() {
        let validator = JwtSessionValidator::new("super-secret-key", 3000);

        let result = validator.validate("not-a-jwt").await;

        assert!(matches!(result, Err(AuthError::InvalidToken)));
    }

    #[test]
    fn huge_token_age_fails_instead_of_panicking() {
        let validator = JwtSessionValidator::new("super-secret-key", 10_000_000_000_000);

        let result = validator.issue(&user());

        assert!(matches!(result, Err(AuthError::ServiceUnavailable(_))));
    }

    #[test]
    fn debug_output_hides_key() {
        let validator = JwtSessionValidator::new("super-secret-key", 3000);
        assert!(!format!("{:?}", validator).contains("super-secret-key"));
    }
}
