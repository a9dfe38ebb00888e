//! Authentication configuration

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use super::error::ValidationError;
use super::server::Environment;

/// Shortest signing key accepted in production (HS256 block size).
pub const MIN_PRODUCTION_KEY_LEN: usize = 32;

/// Longest accepted access token lifetime (ten years).
pub const MAX_TOKEN_AGE_SECS: u64 = 10 * 365 * 24 * 60 * 60;

/// Access token configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// HS256 key used to verify access tokens
    pub access_token_key: SecretString,

    /// Access token lifetime in seconds.
    ///
    /// Only read when issuing tokens (`JwtSessionValidator::issue`, used by
    /// tooling and tests). Verification relies on the `exp` claim alone.
    #[serde(default = "default_token_age")]
    pub access_token_age_secs: u64,
}

impl AuthConfig {
    /// Validate authentication configuration
    ///
    /// Production deployments require a key of at least
    /// [`MIN_PRODUCTION_KEY_LEN`] bytes.
    pub fn validate(&self, environment: &Environment) -> Result<(), ValidationError> {
        let key = self.access_token_key.expose_secret();
        if key.is_empty() {
            return Err(ValidationError::MissingRequired("AUTH__ACCESS_TOKEN_KEY"));
        }
        if *environment == Environment::Production && key.len() < MIN_PRODUCTION_KEY_LEN {
            return Err(ValidationError::AccessTokenKeyTooShort(MIN_PRODUCTION_KEY_LEN));
        }
        if self.access_token_age_secs == 0 || self.access_token_age_secs > MAX_TOKEN_AGE_SECS {
            return Err(ValidationError::InvalidTokenAge(MAX_TOKEN_AGE_SECS));
        }
        Ok(())
    }
}

fn default_token_age() -> u64 {
    3000
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(key: &str) -> AuthConfig {
        AuthConfig {
            access_token_key: SecretString::new(key.to_string()),
            access_token_age_secs: default_token_age(),
        }
    }

    #[test]
    fn test_validation_missing_key() {
        assert_eq!(
            config("").validate(&Environment::Development),
            Err(ValidationError::MissingRequired("AUTH__ACCESS_TOKEN_KEY"))
        );
    }

    #[test]
    fn test_short_key_only_rejected_in_production() {
        let config = config("dev-secret");
        assert!(config.validate(&Environment::Development).is_ok());
        assert_eq!(
            config.validate(&Environment::Production),
            Err(ValidationError::AccessTokenKeyTooShort(MIN_PRODUCTION_KEY_LEN))
        );
    }

    #[test]
    fn test_zero_token_age_rejected() {
        let mut config = config("dev-secret");
        config.access_token_age_secs = 0;
        assert_eq!(
            config.validate(&Environment::Development),
            Err(ValidationError::InvalidTokenAge(MAX_TOKEN_AGE_SECS))
        );
    }

    #[test]
    fn test_token_age_above_ten_years_rejected() {
        let mut config = config("dev-secret");
        config.access_token_age_secs = 10_000_000_000_000;
        assert_eq!(
            config.validate(&Environment::Development),
            Err(ValidationError::InvalidTokenAge(MAX_TOKEN_AGE_SECS))
        );

        config.access_token_age_secs = MAX_TOKEN_AGE_SECS;
        assert!(config.validate(&Environment::Development).is_ok());
    }

    #[test]
    fn test_debug_hides_key() {
        let rendered = format!("{:?}", config("super-secret-key"));
        assert!(!rendered.contains("super-secret-key"));
    }
}
